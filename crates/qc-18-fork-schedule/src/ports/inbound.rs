//! # Inbound Ports
//!
//! Query surface consumed by block import and RPC.

use std::sync::Arc;

use shared_types::{BlockNumber, U256};

use crate::algorithms::{next_transition_after, validators_at};
use crate::domain::{ForkSchedule, ForkTransition, Milestone, ValidatorSet};

/// Fork schedule API - inbound port.
///
/// Every answer is computed from one [`snapshot`](Self::snapshot), so a
/// schedule published mid-call is never observed half-applied. Results are
/// owned because the snapshot may be released as soon as the call returns.
pub trait ForkScheduleApi: Send + Sync {
    /// The schedule currently in effect.
    fn snapshot(&self) -> Arc<ForkSchedule>;

    /// Validator set in effect at `block_number`, if the engine has one.
    fn validators_at(&self, block_number: BlockNumber) -> Option<ValidatorSet> {
        validators_at(&self.snapshot(), block_number).cloned()
    }

    /// Whether `milestone` is active at `block_number`.
    fn is_milestone_active(&self, milestone: Milestone, block_number: BlockNumber) -> bool {
        self.snapshot().is_active(milestone, block_number)
    }

    /// Every milestone active at `block_number`.
    fn active_milestones(&self, block_number: BlockNumber) -> Vec<Milestone> {
        self.snapshot().milestones().active_at(block_number).collect()
    }

    /// `ethash`, `clique`, `ibft` or `ibft2`.
    fn consensus_engine_name(&self) -> &'static str {
        self.snapshot().consensus_engine_name()
    }

    /// Configured chain id.
    fn chain_id(&self) -> Option<U256> {
        self.snapshot().chain_id()
    }

    /// First transition activating after `block_number`.
    fn next_transition_after(&self, block_number: BlockNumber) -> Option<ForkTransition> {
        next_transition_after(self.snapshot().transitions(), block_number).cloned()
    }
}
