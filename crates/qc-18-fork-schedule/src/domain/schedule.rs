//! # Fork Schedule
//!
//! The immutable per-chain schedule: chain id, consensus engine, milestone
//! activations, VM limits and engine transitions.

use serde_json::{json, Map, Value};
use shared_types::U256;

use super::engine::{BftOptions, CliqueOptions, ConsensusEngine, EthashOptions};
use super::keys;
use super::milestones::{Milestone, MilestoneSchedule};
use super::transitions::TransitionList;
use super::value_objects::ValidatorSet;

/// Fork schedule for one chain definition.
///
/// Built once by the loader (or [`ForkScheduleBuilder`]) and never mutated.
/// Share it behind an `Arc`; publish a replacement instead of editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForkSchedule {
    chain_id: Option<U256>,
    engine: ConsensusEngine,
    milestones: MilestoneSchedule,
    contract_size_limit: Option<u32>,
    evm_stack_size: Option<u32>,
    transitions: TransitionList,
}

impl ForkSchedule {
    /// Start building a schedule.
    pub fn builder() -> ForkScheduleBuilder {
        ForkScheduleBuilder::default()
    }

    /// Chain id; `None` accepts any chain id at runtime.
    pub fn chain_id(&self) -> Option<U256> {
        self.chain_id
    }

    /// Configured consensus engine.
    pub fn engine(&self) -> &ConsensusEngine {
        &self.engine
    }

    /// Whether the engine is proof-of-work.
    pub fn is_proof_of_work(&self) -> bool {
        matches!(self.engine, ConsensusEngine::ProofOfWork(_))
    }

    /// Whether the engine is clique.
    pub fn is_clique(&self) -> bool {
        matches!(self.engine, ConsensusEngine::Clique(_))
    }

    /// Whether the engine is the legacy BFT engine (`ibft`).
    pub fn is_legacy_bft(&self) -> bool {
        matches!(self.engine, ConsensusEngine::LegacyBft(_))
    }

    /// Whether the engine is the current BFT engine (`ibft2`).
    pub fn is_bft(&self) -> bool {
        matches!(self.engine, ConsensusEngine::Bft(_))
    }

    /// `ethash`, `clique`, `ibft` or `ibft2`.
    pub fn consensus_engine_name(&self) -> &'static str {
        self.engine.name()
    }

    /// Proof-of-work parameters, if that engine is configured.
    pub fn ethash_options(&self) -> Option<&EthashOptions> {
        match &self.engine {
            ConsensusEngine::ProofOfWork(options) => Some(options),
            _ => None,
        }
    }

    /// Clique parameters, if that engine is configured.
    pub fn clique_options(&self) -> Option<&CliqueOptions> {
        match &self.engine {
            ConsensusEngine::Clique(options) => Some(options),
            _ => None,
        }
    }

    /// Legacy BFT parameters, if that engine is configured.
    pub fn legacy_bft_options(&self) -> Option<&BftOptions> {
        match &self.engine {
            ConsensusEngine::LegacyBft(options) => Some(options),
            _ => None,
        }
    }

    /// Current BFT parameters, if that engine is configured.
    pub fn bft_options(&self) -> Option<&BftOptions> {
        match &self.engine {
            ConsensusEngine::Bft(options) => Some(options),
            _ => None,
        }
    }

    /// Validator set configured in the engine parameters, if any.
    pub fn base_validators(&self) -> Option<&ValidatorSet> {
        self.engine
            .bft_options()
            .and_then(|options| options.validators.as_ref())
    }

    /// All scheduled milestones.
    pub fn milestones(&self) -> &MilestoneSchedule {
        &self.milestones
    }

    /// Activation block of `milestone`; `None` means it never activates.
    pub fn milestone_block(&self, milestone: Milestone) -> Option<u64> {
        self.milestones.block(milestone)
    }

    /// Whether `milestone` is active at `block_number`.
    pub fn is_active(&self, milestone: Milestone, block_number: u64) -> bool {
        self.milestones.is_active(milestone, block_number)
    }

    /// Homestead activation block.
    pub fn homestead_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Homestead)
    }

    /// DAO fork block.
    pub fn dao_fork_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::DaoFork)
    }

    /// Tangerine Whistle (EIP-150) activation block.
    pub fn tangerine_whistle_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::TangerineWhistle)
    }

    /// Spurious Dragon (EIP-158) activation block.
    pub fn spurious_dragon_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::SpuriousDragon)
    }

    /// Byzantium activation block.
    pub fn byzantium_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Byzantium)
    }

    /// Constantinople activation block.
    pub fn constantinople_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Constantinople)
    }

    /// Constantinople fix (Petersburg) activation block.
    pub fn constantinople_fix_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::ConstantinopleFix)
    }

    /// Istanbul activation block.
    pub fn istanbul_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Istanbul)
    }

    /// ECIP-1015 activation block.
    pub fn ecip1015_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Ecip1015)
    }

    /// Die Hard activation block.
    pub fn die_hard_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::DieHard)
    }

    /// Gotham activation block.
    pub fn gotham_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Gotham)
    }

    /// ECIP-1041 (difficulty bomb removal) activation block.
    pub fn defuse_difficulty_bomb_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::DefuseDifficultyBomb)
    }

    /// Atlantis activation block.
    pub fn atlantis_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::Atlantis)
    }

    /// Block at which to follow the chain that rejected the DAO fork.
    pub fn classic_fork_block(&self) -> Option<u64> {
        self.milestone_block(Milestone::ClassicFork)
    }

    /// Maximum deployed contract size in bytes.
    pub fn contract_size_limit(&self) -> Option<u32> {
        self.contract_size_limit
    }

    /// VM stack depth limit.
    pub fn evm_stack_size(&self) -> Option<u32> {
        self.evm_stack_size
    }

    /// Engine transitions.
    pub fn transitions(&self) -> &TransitionList {
        &self.transitions
    }

    /// Render the schedule back into genesis config shape.
    ///
    /// Loading the result yields a schedule equal to `self`. Defaulted
    /// engine options are written out explicitly.
    pub fn to_document(&self) -> Value {
        let mut config = Map::new();

        if let Some(chain_id) = self.chain_id {
            config.insert(keys::CHAIN_ID.to_string(), chain_id_value(chain_id));
        }
        for (milestone, block) in self.milestones.iter() {
            config.insert(milestone.config_key().to_string(), json!(block));
        }
        if let Some(limit) = self.contract_size_limit {
            config.insert(keys::CONTRACT_SIZE_LIMIT.to_string(), json!(limit));
        }
        if let Some(size) = self.evm_stack_size {
            config.insert(keys::EVM_STACK_SIZE.to_string(), json!(size));
        }

        config.insert(
            self.engine.name().to_string(),
            engine_options_value(&self.engine),
        );

        if !self.transitions.is_empty() {
            let forks: Vec<Value> = self
                .transitions
                .ibft_forks()
                .iter()
                .map(|fork| {
                    let mut entry = Map::new();
                    entry.insert(keys::BLOCK.to_string(), json!(fork.fork_block()));
                    if let Some(validators) = fork.validators() {
                        entry.insert(keys::VALIDATORS.to_string(), json!(validators.to_strings()));
                    }
                    Value::Object(entry)
                })
                .collect();
            config.insert(keys::TRANSITIONS.to_string(), json!({ "ibft2": forks }));
        }

        Value::Object(config)
    }
}

fn chain_id_value(chain_id: U256) -> Value {
    if chain_id.bits() <= 64 {
        json!(chain_id.low_u64())
    } else {
        Value::String(chain_id.to_string())
    }
}

fn engine_options_value(engine: &ConsensusEngine) -> Value {
    let mut options = Map::new();
    match engine {
        ConsensusEngine::ProofOfWork(ethash) => {
            if let Some(difficulty) = ethash.fixed_difficulty {
                options.insert(keys::FIXED_DIFFICULTY.to_string(), json!(difficulty));
            }
        }
        ConsensusEngine::Clique(clique) => {
            options.insert(keys::EPOCH_LENGTH.to_string(), json!(clique.epoch_length));
            options.insert(
                keys::BLOCK_PERIOD_SECONDS.to_string(),
                json!(clique.block_period_seconds),
            );
        }
        ConsensusEngine::LegacyBft(bft) | ConsensusEngine::Bft(bft) => {
            let fields = [
                (keys::EPOCH_LENGTH, bft.epoch_length),
                (keys::BLOCK_PERIOD_SECONDS, bft.block_period_seconds),
                (keys::REQUEST_TIMEOUT_SECONDS, bft.request_timeout_seconds),
                (keys::GOSSIPED_HISTORY_LIMIT, bft.gossiped_history_limit),
                (keys::MESSAGE_QUEUE_LIMIT, bft.message_queue_limit),
                (keys::DUPLICATE_MESSAGE_LIMIT, bft.duplicate_message_limit),
                (keys::FUTURE_MESSAGES_LIMIT, bft.future_messages_limit),
                (keys::FUTURE_MESSAGES_MAX_DISTANCE, bft.future_messages_max_distance),
            ];
            for (key, value) in fields {
                options.insert(key.to_string(), json!(value));
            }
            if let Some(validators) = &bft.validators {
                options.insert(keys::VALIDATORS.to_string(), json!(validators.to_strings()));
            }
        }
    }
    Value::Object(options)
}

/// Builder for [`ForkSchedule`].
#[derive(Debug, Default)]
pub struct ForkScheduleBuilder {
    schedule: ForkSchedule,
}

impl ForkScheduleBuilder {
    /// Set the chain id.
    pub fn chain_id(mut self, chain_id: U256) -> Self {
        self.schedule.chain_id = Some(chain_id);
        self
    }

    /// Set the consensus engine.
    pub fn engine(mut self, engine: ConsensusEngine) -> Self {
        self.schedule.engine = engine;
        self
    }

    /// Schedule one milestone.
    pub fn milestone(mut self, milestone: Milestone, block: u64) -> Self {
        self.schedule.milestones = self.schedule.milestones.with(milestone, block);
        self
    }

    /// Replace all milestones.
    pub fn milestones(mut self, milestones: MilestoneSchedule) -> Self {
        self.schedule.milestones = milestones;
        self
    }

    /// Set the contract size limit.
    pub fn contract_size_limit(mut self, limit: u32) -> Self {
        self.schedule.contract_size_limit = Some(limit);
        self
    }

    /// Set the VM stack size.
    pub fn evm_stack_size(mut self, size: u32) -> Self {
        self.schedule.evm_stack_size = Some(size);
        self
    }

    /// Set the engine transitions.
    pub fn transitions(mut self, transitions: TransitionList) -> Self {
        self.schedule.transitions = transitions;
        self
    }

    /// Finish building.
    pub fn build(self) -> ForkSchedule {
        self.schedule
    }
}
