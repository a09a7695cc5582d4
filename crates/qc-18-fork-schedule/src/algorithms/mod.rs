//! # Algorithms Module
//!
//! Schedule loading, lint and transition resolution.

pub mod config_loader;
pub mod lint;
pub mod transition_resolver;

pub use config_loader::{load_genesis_config, ScheduleLoader};
pub use lint::lint;
pub use transition_resolver::{
    effective_parameters, effective_validators, next_transition_after, validators_at,
};
