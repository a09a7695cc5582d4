//! # Engine Transitions
//!
//! Mid-chain engine parameter changes, keyed by activation block.

use super::value_objects::{ParameterOverride, ValidatorSet};

/// A single engine parameter change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkTransition {
    fork_block: u64,
    overrides: ParameterOverride,
}

impl ForkTransition {
    /// Create a transition activating at `fork_block` (inclusive).
    pub fn new(fork_block: u64, overrides: ParameterOverride) -> Self {
        Self {
            fork_block,
            overrides,
        }
    }

    /// Create a transition that optionally replaces the validator set.
    pub fn with_validators(fork_block: u64, validators: Option<ValidatorSet>) -> Self {
        Self::new(fork_block, ParameterOverride { validators })
    }

    /// Activation block.
    pub fn fork_block(&self) -> u64 {
        self.fork_block
    }

    /// Replacement validator set; `None` leaves the current set in effect.
    pub fn validators(&self) -> Option<&ValidatorSet> {
        self.overrides.validators.as_ref()
    }

    /// All parameter overrides carried by this transition.
    pub fn overrides(&self) -> &ParameterOverride {
        &self.overrides
    }
}

/// Transitions for the current BFT engine, ascending by activation block.
///
/// Entries sharing an activation block keep their document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionList {
    ibft_forks: Vec<ForkTransition>,
}

impl TransitionList {
    /// Create an empty list.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a list from transitions in document order.
    ///
    /// The list is stably sorted by activation block.
    pub fn new(mut ibft_forks: Vec<ForkTransition>) -> Self {
        ibft_forks.sort_by_key(ForkTransition::fork_block);
        Self { ibft_forks }
    }

    /// BFT transitions, ascending by activation block.
    pub fn ibft_forks(&self) -> &[ForkTransition] {
        &self.ibft_forks
    }

    /// Number of transitions.
    pub fn len(&self) -> usize {
        self.ibft_forks.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.ibft_forks.is_empty()
    }
}
