//! # Consensus Engine
//!
//! The configured consensus engine and its parameter bundle.
//!
//! Exactly one engine is configured per schedule. Modelling it as an enum
//! rather than a set of optional blocks makes "two engines at once"
//! unrepresentable once loading has succeeded.

use super::value_objects::ValidatorSet;
use std::fmt;

/// Default epoch length (blocks) for clique and BFT engines.
pub const DEFAULT_EPOCH_LENGTH: u64 = 30_000;

/// Default clique block period in seconds.
pub const DEFAULT_CLIQUE_BLOCK_PERIOD_SECONDS: u64 = 15;

/// Default BFT block period in seconds.
pub const DEFAULT_BFT_BLOCK_PERIOD_SECONDS: u64 = 1;

/// Default BFT round-change timeout in seconds.
pub const DEFAULT_BFT_REQUEST_TIMEOUT_SECONDS: u64 = 1;

/// Default number of gossiped messages remembered for de-duplication.
pub const DEFAULT_BFT_GOSSIPED_HISTORY_LIMIT: u64 = 1000;

/// Default BFT message queue capacity.
pub const DEFAULT_BFT_MESSAGE_QUEUE_LIMIT: u64 = 1000;

/// Default number of duplicate messages tolerated.
pub const DEFAULT_BFT_DUPLICATE_MESSAGE_LIMIT: u64 = 100;

/// Default number of buffered future-height messages.
pub const DEFAULT_BFT_FUTURE_MESSAGES_LIMIT: u64 = 1000;

/// Default maximum height distance for buffered future messages.
pub const DEFAULT_BFT_FUTURE_MESSAGES_MAX_DISTANCE: u64 = 10;

/// Proof-of-work parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EthashOptions {
    /// Fixed difficulty for development chains.
    pub fixed_difficulty: Option<u64>,
}

/// Clique (validator rotation) parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliqueOptions {
    /// Blocks between checkpoint/vote-reset blocks.
    pub epoch_length: u64,
    /// Target seconds between blocks.
    pub block_period_seconds: u64,
}

impl Default for CliqueOptions {
    fn default() -> Self {
        Self {
            epoch_length: DEFAULT_EPOCH_LENGTH,
            block_period_seconds: DEFAULT_CLIQUE_BLOCK_PERIOD_SECONDS,
        }
    }
}

/// BFT parameters, shared by the legacy and current BFT engines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BftOptions {
    /// Blocks between checkpoint/vote-reset blocks.
    pub epoch_length: u64,
    /// Target seconds between blocks.
    pub block_period_seconds: u64,
    /// Round-change timeout in seconds.
    pub request_timeout_seconds: u64,
    /// Gossiped messages remembered for de-duplication.
    pub gossiped_history_limit: u64,
    /// Message queue capacity.
    pub message_queue_limit: u64,
    /// Duplicate messages tolerated.
    pub duplicate_message_limit: u64,
    /// Buffered future-height messages.
    pub future_messages_limit: u64,
    /// Maximum height distance for buffered future messages.
    pub future_messages_max_distance: u64,
    /// Base validator set in effect before any transition applies.
    pub validators: Option<ValidatorSet>,
}

impl Default for BftOptions {
    fn default() -> Self {
        Self {
            epoch_length: DEFAULT_EPOCH_LENGTH,
            block_period_seconds: DEFAULT_BFT_BLOCK_PERIOD_SECONDS,
            request_timeout_seconds: DEFAULT_BFT_REQUEST_TIMEOUT_SECONDS,
            gossiped_history_limit: DEFAULT_BFT_GOSSIPED_HISTORY_LIMIT,
            message_queue_limit: DEFAULT_BFT_MESSAGE_QUEUE_LIMIT,
            duplicate_message_limit: DEFAULT_BFT_DUPLICATE_MESSAGE_LIMIT,
            future_messages_limit: DEFAULT_BFT_FUTURE_MESSAGES_LIMIT,
            future_messages_max_distance: DEFAULT_BFT_FUTURE_MESSAGES_MAX_DISTANCE,
            validators: None,
        }
    }
}

/// Engine kind without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// `ethash`
    ProofOfWork,
    /// `clique`
    Clique,
    /// `ibft`
    LegacyBft,
    /// `ibft2`
    Bft,
}

impl EngineKind {
    /// All engine kinds, in the order their config keys are checked.
    pub const ALL: [EngineKind; 4] = [
        EngineKind::ProofOfWork,
        EngineKind::Clique,
        EngineKind::LegacyBft,
        EngineKind::Bft,
    ];

    /// Genesis config key of this engine's parameter block.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::ProofOfWork => "ethash",
            Self::Clique => "clique",
            Self::LegacyBft => "ibft",
            Self::Bft => "ibft2",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// The configured consensus engine with its parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsensusEngine {
    /// Proof-of-work (`ethash`).
    ProofOfWork(EthashOptions),
    /// Clique proof-of-authority.
    Clique(CliqueOptions),
    /// Legacy BFT (`ibft`).
    LegacyBft(BftOptions),
    /// Current BFT (`ibft2`); the only engine with transitions.
    Bft(BftOptions),
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::ProofOfWork(EthashOptions::default())
    }
}

impl ConsensusEngine {
    /// Engine kind.
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::ProofOfWork(_) => EngineKind::ProofOfWork,
            Self::Clique(_) => EngineKind::Clique,
            Self::LegacyBft(_) => EngineKind::LegacyBft,
            Self::Bft(_) => EngineKind::Bft,
        }
    }

    /// Engine name as used in genesis config (`ethash`, `clique`, `ibft`, `ibft2`).
    pub fn name(&self) -> &'static str {
        self.kind().config_key()
    }

    /// BFT parameters for either BFT engine.
    pub fn bft_options(&self) -> Option<&BftOptions> {
        match self {
            Self::LegacyBft(options) | Self::Bft(options) => Some(options),
            _ => None,
        }
    }
}
