//! # Transition Resolver
//!
//! Computes the engine parameters in effect at a block height by folding
//! every transition activated at or before that height.
//!
//! Called at least once per imported block, so the validator path does not
//! allocate: the qualifying prefix is found by binary search and the last
//! set override in it is returned by reference.

use crate::domain::{
    invariant_transitions_ordered, ForkSchedule, ForkTransition, ParameterOverride,
    TransitionList, ValidatorSet,
};

/// Transitions with `fork_block <= at_block`, in application order.
fn qualifying(transitions: &TransitionList, at_block: u64) -> &[ForkTransition] {
    debug_assert!(invariant_transitions_ordered(transitions));
    let forks = transitions.ibft_forks();
    let end = forks.partition_point(|fork| fork.fork_block() <= at_block);
    &forks[..end]
}

/// Validator set override in effect at `at_block`.
///
/// Unset entries carry the previous override forward; of entries sharing an
/// activation block, the last listed wins. `None` means no transition
/// overrides the validators yet and the engine's base set applies.
pub fn effective_validators(transitions: &TransitionList, at_block: u64) -> Option<&ValidatorSet> {
    qualifying(transitions, at_block)
        .iter()
        .rev()
        .find_map(ForkTransition::validators)
}

/// All parameter overrides in effect at `at_block`.
pub fn effective_parameters(transitions: &TransitionList, at_block: u64) -> ParameterOverride {
    qualifying(transitions, at_block)
        .iter()
        .fold(ParameterOverride::none(), |mut current, fork| {
            current.merge(fork.overrides());
            current
        })
}

/// Validator set in effect at `at_block`, falling back to the engine's base
/// validators when no transition applies.
///
/// Transitions only apply to the current BFT engine; any other engine
/// answers with its base validators alone.
pub fn validators_at(schedule: &ForkSchedule, at_block: u64) -> Option<&ValidatorSet> {
    let transitioned = if schedule.is_bft() {
        effective_validators(schedule.transitions(), at_block)
    } else {
        None
    };
    transitioned.or_else(|| schedule.base_validators())
}

/// First transition activating strictly after `at_block`.
pub fn next_transition_after(transitions: &TransitionList, at_block: u64) -> Option<&ForkTransition> {
    let forks = transitions.ibft_forks();
    let start = forks.partition_point(|fork| fork.fork_block() <= at_block);
    forks.get(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BftOptions, ConsensusEngine};
    use proptest::prelude::*;

    fn set(ids: &[u8]) -> ValidatorSet {
        ValidatorSet::new(ids.iter().map(|&id| [id; 20]).collect())
    }

    fn fold_fixture() -> TransitionList {
        TransitionList::new(vec![
            ForkTransition::with_validators(10, Some(set(&[0xA, 0xB]))),
            ForkTransition::with_validators(20, None),
            ForkTransition::with_validators(30, Some(set(&[0xC]))),
        ])
    }

    #[test]
    fn test_fold_determinism() {
        let list = fold_fixture();
        assert_eq!(effective_validators(&list, 5), None);
        assert_eq!(effective_validators(&list, 10), Some(&set(&[0xA, 0xB])));
        assert_eq!(effective_validators(&list, 15), Some(&set(&[0xA, 0xB])));
        assert_eq!(effective_validators(&list, 25), Some(&set(&[0xA, 0xB])));
        assert_eq!(effective_validators(&list, 35), Some(&set(&[0xC])));
    }

    #[test]
    fn test_empty_list_has_no_override() {
        let list = TransitionList::empty();
        assert_eq!(effective_validators(&list, 0), None);
        assert_eq!(effective_validators(&list, u64::MAX), None);
        assert!(effective_parameters(&list, u64::MAX).is_empty());
    }

    #[test]
    fn test_first_entry_unset_yields_none() {
        let list = TransitionList::new(vec![
            ForkTransition::with_validators(10, None),
            ForkTransition::with_validators(20, Some(set(&[1]))),
        ]);
        assert_eq!(effective_validators(&list, 15), None);
        assert_eq!(effective_validators(&list, 20), Some(&set(&[1])));
    }

    #[test]
    fn test_duplicate_block_last_listed_wins() {
        let list = TransitionList::new(vec![
            ForkTransition::with_validators(10, Some(set(&[1]))),
            ForkTransition::with_validators(10, Some(set(&[2]))),
            ForkTransition::with_validators(10, None),
        ]);
        assert_eq!(effective_validators(&list, 10), Some(&set(&[2])));
    }

    #[test]
    fn test_explicit_empty_set_is_an_override() {
        let list = TransitionList::new(vec![
            ForkTransition::with_validators(10, Some(set(&[1]))),
            ForkTransition::with_validators(20, Some(ValidatorSet::default())),
        ]);
        assert_eq!(effective_validators(&list, 25), Some(&ValidatorSet::default()));
    }

    #[test]
    fn test_validators_at_falls_back_to_base() {
        let schedule = ForkSchedule::builder()
            .engine(ConsensusEngine::Bft(BftOptions {
                validators: Some(set(&[9])),
                ..Default::default()
            }))
            .transitions(fold_fixture())
            .build();

        assert_eq!(validators_at(&schedule, 0), Some(&set(&[9])));
        assert_eq!(validators_at(&schedule, 12), Some(&set(&[0xA, 0xB])));
    }

    #[test]
    fn test_validators_at_ignores_transitions_for_other_engines() {
        let clique = ForkSchedule::builder()
            .engine(ConsensusEngine::Clique(Default::default()))
            .transitions(fold_fixture())
            .build();
        assert_eq!(validators_at(&clique, 35), None);

        let legacy = ForkSchedule::builder()
            .engine(ConsensusEngine::LegacyBft(BftOptions {
                validators: Some(set(&[9])),
                ..Default::default()
            }))
            .transitions(fold_fixture())
            .build();
        assert_eq!(validators_at(&legacy, 35), Some(&set(&[9])));
    }

    #[test]
    fn test_validators_at_without_base() {
        let schedule = ForkSchedule::builder().transitions(fold_fixture()).build();
        assert_eq!(validators_at(&schedule, 0), None);
    }

    #[test]
    fn test_next_transition_after() {
        let list = fold_fixture();
        assert_eq!(next_transition_after(&list, 0).map(|f| f.fork_block()), Some(10));
        assert_eq!(next_transition_after(&list, 10).map(|f| f.fork_block()), Some(20));
        assert_eq!(next_transition_after(&list, 30), None);
    }

    fn naive_fold(entries: &[(u64, Option<u8>)], at_block: u64) -> Option<u8> {
        let mut sorted: Vec<_> = entries.to_vec();
        sorted.sort_by_key(|(block, _)| *block);
        sorted
            .into_iter()
            .filter(|(block, _)| *block <= at_block)
            .fold(None, |current, (_, id)| id.or(current))
    }

    proptest! {
        #[test]
        fn prop_resolver_matches_naive_fold(
            entries in prop::collection::vec((0u64..50, prop::option::of(0u8..8)), 0..12),
            at_block in 0u64..60,
        ) {
            let list = TransitionList::new(
                entries
                    .iter()
                    .map(|(block, id)| ForkTransition::with_validators(*block, id.map(|id| set(&[id]))))
                    .collect(),
            );

            let expected = naive_fold(&entries, at_block).map(|id| set(&[id]));
            prop_assert_eq!(effective_validators(&list, at_block), expected.as_ref());
            prop_assert_eq!(effective_parameters(&list, at_block).validators, expected);
        }
    }
}
