//! # Schedule Lint
//!
//! Detects configuration smells in a loaded schedule. Findings never make a
//! schedule invalid on their own; the loader decides whether to deny them.

use std::collections::HashSet;

use shared_types::format_address;

use crate::domain::{EngineKind, ForkSchedule, ScheduleWarning};

/// Collect every warning for `schedule`, in transition order.
pub fn lint(schedule: &ForkSchedule) -> Vec<ScheduleWarning> {
    let mut warnings = Vec::new();
    let forks = schedule.transitions().ibft_forks();

    if !forks.is_empty() && schedule.engine().kind() != EngineKind::Bft {
        warnings.push(ScheduleWarning::TransitionsForInactiveEngine {
            engine: schedule.consensus_engine_name().to_string(),
        });
    }

    // Forks are sorted, so duplicates are adjacent.
    for pair in forks.windows(2) {
        let block = pair[1].fork_block();
        if pair[0].fork_block() == block {
            let already_reported = matches!(
                warnings.last(),
                Some(ScheduleWarning::DuplicateActivationBlock { block: reported }) if *reported == block
            );
            if !already_reported {
                warnings.push(ScheduleWarning::DuplicateActivationBlock { block });
            }
        }
    }

    for fork in forks {
        let Some(validators) = fork.validators() else {
            continue;
        };
        if validators.is_empty() {
            warnings.push(ScheduleWarning::EmptyValidatorSet {
                fork_block: fork.fork_block(),
            });
            continue;
        }
        // One warning per repeated address, however often it repeats.
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for address in validators.iter() {
            if !seen.insert(address) && reported.insert(address) {
                warnings.push(ScheduleWarning::DuplicateValidator {
                    fork_block: fork.fork_block(),
                    validator: format_address(address),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BftOptions, ConsensusEngine, ForkTransition, TransitionList, ValidatorSet};

    fn bft_schedule(forks: Vec<ForkTransition>) -> ForkSchedule {
        ForkSchedule::builder()
            .engine(ConsensusEngine::Bft(BftOptions::default()))
            .transitions(TransitionList::new(forks))
            .build()
    }

    fn set(ids: &[u8]) -> Option<ValidatorSet> {
        Some(ValidatorSet::new(ids.iter().map(|&id| [id; 20]).collect()))
    }

    #[test]
    fn test_clean_schedule_has_no_warnings() {
        let schedule = bft_schedule(vec![
            ForkTransition::with_validators(20, set(&[1, 2])),
            ForkTransition::with_validators(25, set(&[1])),
        ]);
        assert!(lint(&schedule).is_empty());
    }

    #[test]
    fn test_duplicate_activation_reported_once() {
        let schedule = bft_schedule(vec![
            ForkTransition::with_validators(10, set(&[1])),
            ForkTransition::with_validators(10, set(&[2])),
            ForkTransition::with_validators(10, None),
        ]);
        assert_eq!(
            lint(&schedule),
            vec![ScheduleWarning::DuplicateActivationBlock { block: 10 }]
        );
    }

    #[test]
    fn test_duplicate_validator() {
        let schedule = bft_schedule(vec![ForkTransition::with_validators(5, set(&[1, 1]))]);
        assert_eq!(
            lint(&schedule),
            vec![ScheduleWarning::DuplicateValidator {
                fork_block: 5,
                validator: format_address(&[1; 20]),
            }]
        );
    }

    #[test]
    fn test_repeated_validator_reported_once_per_fork() {
        let schedule = bft_schedule(vec![
            ForkTransition::with_validators(5, set(&[1, 1, 1, 2, 2])),
            ForkTransition::with_validators(9, set(&[1, 1])),
        ]);
        assert_eq!(
            lint(&schedule),
            vec![
                ScheduleWarning::DuplicateValidator {
                    fork_block: 5,
                    validator: format_address(&[1; 20]),
                },
                ScheduleWarning::DuplicateValidator {
                    fork_block: 5,
                    validator: format_address(&[2; 20]),
                },
                ScheduleWarning::DuplicateValidator {
                    fork_block: 9,
                    validator: format_address(&[1; 20]),
                },
            ]
        );
    }

    #[test]
    fn test_empty_validator_set() {
        let schedule = bft_schedule(vec![ForkTransition::with_validators(
            7,
            Some(ValidatorSet::default()),
        )]);
        assert_eq!(
            lint(&schedule),
            vec![ScheduleWarning::EmptyValidatorSet { fork_block: 7 }]
        );
    }

    #[test]
    fn test_transitions_for_inactive_engine() {
        let schedule = ForkSchedule::builder()
            .engine(ConsensusEngine::Clique(Default::default()))
            .transitions(TransitionList::new(vec![ForkTransition::with_validators(
                1,
                set(&[1]),
            )]))
            .build();
        assert_eq!(
            lint(&schedule),
            vec![ScheduleWarning::TransitionsForInactiveEngine {
                engine: "clique".to_string(),
            }]
        );
    }
}
