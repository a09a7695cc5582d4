//! Genesis config field names.
//!
//! Canonical spelling; loading matches them case-insensitively.

#![allow(missing_docs)]

pub const CONFIG: &str = "config";
pub const CHAIN_ID: &str = "chainId";
pub const CONTRACT_SIZE_LIMIT: &str = "contractSizeLimit";
pub const EVM_STACK_SIZE: &str = "evmStackSize";

pub const TRANSITIONS: &str = "transitions";
pub const BLOCK: &str = "block";
pub const VALIDATORS: &str = "validators";

// Engine options
pub const FIXED_DIFFICULTY: &str = "fixedDifficulty";
pub const EPOCH_LENGTH: &str = "epochLength";
pub const BLOCK_PERIOD_SECONDS: &str = "blockPeriodSeconds";
pub const REQUEST_TIMEOUT_SECONDS: &str = "requestTimeoutSeconds";
pub const GOSSIPED_HISTORY_LIMIT: &str = "gossipedHistoryLimit";
pub const MESSAGE_QUEUE_LIMIT: &str = "messageQueueLimit";
pub const DUPLICATE_MESSAGE_LIMIT: &str = "duplicateMessageLimit";
pub const FUTURE_MESSAGES_LIMIT: &str = "futureMessagesLimit";
pub const FUTURE_MESSAGES_MAX_DISTANCE: &str = "futureMessagesMaxDistance";
