//! # Domain Module
//!
//! Core domain types for the Fork Schedule subsystem.

pub mod engine;
pub mod errors;
pub mod invariants;
pub mod keys;
pub mod milestones;
pub mod schedule;
pub mod transitions;
pub mod value_objects;

pub use engine::*;
pub use errors::*;
pub use invariants::*;
pub use milestones::*;
pub use schedule::*;
pub use transitions::*;
pub use value_objects::*;
