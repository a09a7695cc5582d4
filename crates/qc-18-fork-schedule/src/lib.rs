//! # QC-18 Fork Schedule
//!
//! Protocol fork schedule and engine transition resolution.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! For any block height, answer which protocol rules are in effect:
//! - Which milestones (homestead, byzantium, istanbul, classic forks, ...) are active
//! - Which consensus engine runs the chain, with its parameters
//! - Which validators sign blocks, after applying every engine transition
//!   activated at or before that height
//!
//! ## Transition Resolution
//!
//! | Transition entry | Effect on validators |
//! |------------------|----------------------|
//! | `validators` set | Replaces the running set |
//! | `validators` absent | Carries the running set forward |
//! | `validators: []` | Replaces the running set with the empty set |
//! | Same block as an earlier entry | Applied after it; last listed wins |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-fork-schedule/
//! ├── domain/          # ForkSchedule, ConsensusEngine, TransitionList, errors
//! ├── algorithms/      # Loader, lint, transition resolver
//! ├── ports/           # ForkScheduleApi (inbound) + GenesisSource (outbound)
//! ├── adapters/        # File and in-memory genesis sources
//! ├── application/     # ScheduleRegistry (published schedule, atomic swap)
//! └── config.rs        # LoaderConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::{FileGenesisSource, StaticGenesisSource};
pub use algorithms::{
    effective_parameters, effective_validators, lint, load_genesis_config,
    next_transition_after, validators_at, ScheduleLoader,
};
pub use application::ScheduleRegistry;
pub use config::LoaderConfig;
pub use domain::{
    BftOptions, CliqueOptions, ConsensusEngine, EngineKind, EthashOptions, ForkSchedule,
    ForkScheduleBuilder, ForkTransition, Milestone, MilestoneSchedule, ParameterOverride,
    ScheduleError, ScheduleResult, ScheduleWarning, TransitionList, UnknownMilestone,
    ValidatorSet,
};
pub use ports::{ForkScheduleApi, GenesisSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
