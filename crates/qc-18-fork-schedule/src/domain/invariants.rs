//! # Domain Invariants
//!
//! Structural rules that every loaded schedule satisfies.

use super::engine::EngineKind;
use super::errors::{ScheduleError, ScheduleResult};
use super::transitions::TransitionList;

/// Invariant: at most one consensus engine block is configured.
///
/// Zero blocks selects proof-of-work unless `require_explicit` is set.
pub fn invariant_single_engine(
    present: &[EngineKind],
    require_explicit: bool,
) -> ScheduleResult<EngineKind> {
    match present {
        [] if require_explicit => Err(ScheduleError::NoEngineSpecified),
        [] => Ok(EngineKind::ProofOfWork),
        [kind] => Ok(*kind),
        _ => Err(ScheduleError::AmbiguousEngine {
            engines: present.iter().map(|kind| kind.to_string()).collect(),
        }),
    }
}

/// Invariant: transitions are ascending by activation block.
pub fn invariant_transitions_ordered(transitions: &TransitionList) -> bool {
    transitions
        .ibft_forks()
        .windows(2)
        .all(|pair| pair[0].fork_block() <= pair[1].fork_block())
}
