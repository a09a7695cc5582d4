//! # Domain Errors
//!
//! Error and warning types for the Fork Schedule subsystem.
//!
//! Loading is the only fallible operation. Once a [`ForkSchedule`] exists,
//! every query against it is total.
//!
//! [`ForkSchedule`]: super::ForkSchedule

use thiserror::Error;

/// Fork schedule error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A field is present but has the wrong type or shape.
    #[error("Malformed field '{field}': expected {expected}")]
    MalformedField {
        /// Field name (lower-cased, dotted path for nested fields)
        field: String,
        /// Human readable description of the accepted shape
        expected: &'static str,
    },

    /// More than one consensus engine block is present.
    #[error("Ambiguous consensus engine: found {}", engines.join(", "))]
    AmbiguousEngine {
        /// Engine keys found in the document
        engines: Vec<String>,
    },

    /// No consensus engine block is present and one is required.
    #[error("No consensus engine specified")]
    NoEngineSpecified,

    /// A required field is missing.
    #[error("Missing required field '{field}' in {context}")]
    MissingRequiredField {
        /// Missing field name
        field: String,
        /// Where the field was expected
        context: String,
    },

    /// A `validators` element is not an address.
    #[error("Invalid validator entry at transitions.ibft2[{fork_index}].validators[{entry_index}]: {value}")]
    InvalidValidatorEntry {
        /// Index of the transition within its engine array
        fork_index: usize,
        /// Index of the element within the validators array
        entry_index: usize,
        /// The offending value, rendered as JSON
        value: String,
    },

    /// A lint warning was promoted to an error by configuration.
    #[error("Configuration warning denied: {0}")]
    LintDenied(ScheduleWarning),

    /// The genesis document could not be read.
    #[error("Failed to read genesis document {path}: {message}")]
    Io {
        /// Source path
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// The genesis document is not valid JSON.
    #[error("Invalid genesis JSON: {0}")]
    InvalidJson(String),
}

impl ScheduleError {
    /// Shorthand for [`ScheduleError::MalformedField`].
    pub fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedField {
            field: field.into(),
            expected,
        }
    }
}

/// Result type for fork schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Configuration smells that do not prevent loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleWarning {
    /// Two or more transitions share an activation block; the last listed wins.
    #[error("Multiple transitions activate at block {block}; the last listed wins")]
    DuplicateActivationBlock {
        /// The shared activation block
        block: u64,
    },

    /// An address appears more than once in a validator set.
    #[error("Validator {validator} listed more than once in transition at block {fork_block}")]
    DuplicateValidator {
        /// Activation block of the transition
        fork_block: u64,
        /// The repeated address
        validator: String,
    },

    /// A transition explicitly sets an empty validator set.
    #[error("Transition at block {fork_block} sets an empty validator set")]
    EmptyValidatorSet {
        /// Activation block of the transition
        fork_block: u64,
    },

    /// BFT transitions are declared but the configured engine is different.
    #[error("ibft2 transitions declared but the configured engine is {engine}")]
    TransitionsForInactiveEngine {
        /// Name of the configured engine
        engine: String,
    },
}
