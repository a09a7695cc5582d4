//! # Genesis Config Loader
//!
//! Validates a genesis config document and builds a [`ForkSchedule`].
//!
//! Field names are matched case-insensitively. The document may be a full
//! genesis file, in which case its top-level `config` object is used, or the
//! bare config object itself. JSON `null` is treated as an absent field.

use serde_json::{Map, Value};
use shared_types::{parse_address, U256};
use tracing::{debug, warn};

use super::lint::lint;
use crate::config::LoaderConfig;
use crate::domain::{
    invariant_single_engine, keys, BftOptions, CliqueOptions, ConsensusEngine, EngineKind,
    EthashOptions, ForkSchedule, ForkTransition, Milestone, MilestoneSchedule, ScheduleError,
    ScheduleResult, TransitionList, ValidatorSet,
};

const EXPECTED_OBJECT: &str = "an object";
const EXPECTED_ARRAY: &str = "an array";
const EXPECTED_U64: &str = "a non-negative integer";
const EXPECTED_U32: &str = "a non-negative 32-bit integer";
const EXPECTED_CHAIN_ID: &str = "an integer, decimal string or 0x-prefixed hex string within 256 bits";
const EXPECTED_ADDRESSES: &str = "an array of 0x-prefixed 20-byte hex addresses";

/// Load a schedule with the default [`LoaderConfig`].
pub fn load_genesis_config(document: &Value) -> ScheduleResult<ForkSchedule> {
    ScheduleLoader::default().load(document)
}

/// Builds fork schedules from genesis config documents.
#[derive(Clone, Debug, Default)]
pub struct ScheduleLoader {
    config: LoaderConfig,
}

impl ScheduleLoader {
    /// Create a loader with the given policy.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Loader policy.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Validate `document` and build a schedule from it.
    ///
    /// The document is only read. Lint findings are logged; with
    /// `deny_warnings` the first one fails the load.
    pub fn load(&self, document: &Value) -> ScheduleResult<ForkSchedule> {
        let config = config_object(document)?;

        let mut builder = ForkSchedule::builder()
            .engine(self.parse_engine(config)?)
            .milestones(parse_milestones(config)?)
            .transitions(parse_transitions(config)?);

        if let Some(chain_id) = field(config, keys::CHAIN_ID) {
            builder = builder.chain_id(parse_chain_id(chain_id)?);
        }
        if let Some(limit) = field(config, keys::CONTRACT_SIZE_LIMIT) {
            builder = builder.contract_size_limit(parse_u32(limit, keys::CONTRACT_SIZE_LIMIT)?);
        }
        if let Some(size) = field(config, keys::EVM_STACK_SIZE) {
            builder = builder.evm_stack_size(parse_u32(size, keys::EVM_STACK_SIZE)?);
        }

        let schedule = builder.build();
        debug!(
            engine = schedule.consensus_engine_name(),
            milestones = schedule.milestones().len(),
            transitions = schedule.transitions().len(),
            "Fork schedule loaded"
        );

        let warnings = lint(&schedule);
        for warning in &warnings {
            warn!(%warning, "Fork schedule configuration warning");
        }
        if self.config.deny_warnings {
            if let Some(first) = warnings.into_iter().next() {
                return Err(ScheduleError::LintDenied(first));
            }
        }

        Ok(schedule)
    }

    fn parse_engine(&self, config: &Map<String, Value>) -> ScheduleResult<ConsensusEngine> {
        let present: Vec<EngineKind> = EngineKind::ALL
            .into_iter()
            .filter(|kind| field(config, kind.config_key()).is_some())
            .collect();
        let kind = invariant_single_engine(&present, self.config.require_explicit_engine)?;

        let key = kind.config_key();
        let options = match field(config, key) {
            Some(Value::Object(options)) => Some(options),
            Some(_) => return Err(ScheduleError::malformed(key, EXPECTED_OBJECT)),
            None => None,
        };

        let engine = match kind {
            EngineKind::ProofOfWork => {
                ConsensusEngine::ProofOfWork(options.map_or(Ok(EthashOptions::default()), parse_ethash)?)
            }
            EngineKind::Clique => {
                ConsensusEngine::Clique(options.map_or(Ok(CliqueOptions::default()), parse_clique)?)
            }
            EngineKind::LegacyBft => ConsensusEngine::LegacyBft(
                options.map_or(Ok(BftOptions::default()), |o| parse_bft(o, key))?,
            ),
            EngineKind::Bft => ConsensusEngine::Bft(
                options.map_or(Ok(BftOptions::default()), |o| parse_bft(o, key))?,
            ),
        };
        debug!(engine = key, "Consensus engine selected");
        Ok(engine)
    }
}

/// Case-insensitive field lookup; `null` reads as absent.
fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
        .filter(|value| !value.is_null())
}

fn config_object(document: &Value) -> ScheduleResult<&Map<String, Value>> {
    let root = document
        .as_object()
        .ok_or_else(|| ScheduleError::malformed(keys::CONFIG, EXPECTED_OBJECT))?;
    match field(root, keys::CONFIG) {
        Some(Value::Object(config)) => Ok(config),
        Some(_) => Err(ScheduleError::malformed(keys::CONFIG, EXPECTED_OBJECT)),
        None => Ok(root),
    }
}

fn field_name(path: &str) -> String {
    path.to_ascii_lowercase()
}

fn parse_u64(value: &Value, path: &str) -> ScheduleResult<u64> {
    value
        .as_u64()
        .ok_or_else(|| ScheduleError::malformed(field_name(path), EXPECTED_U64))
}

fn parse_u32(value: &Value, path: &str) -> ScheduleResult<u32> {
    value
        .as_u64()
        .and_then(|raw| u32::try_from(raw).ok())
        .ok_or_else(|| ScheduleError::malformed(field_name(path), EXPECTED_U32))
}

fn parse_chain_id(value: &Value) -> ScheduleResult<U256> {
    let malformed = || ScheduleError::malformed(field_name(keys::CHAIN_ID), EXPECTED_CHAIN_ID);

    // Numbers keep their source text (`arbitrary_precision`), so values
    // wider than 64 bits arrive intact.
    let number_text;
    let (digits, radix) = match value {
        Value::Number(number) => {
            number_text = number.to_string();
            (number_text.as_str(), 10)
        }
        Value::String(text) => match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (text.as_str(), 10),
        },
        _ => return Err(malformed()),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(malformed());
    }
    U256::from_str_radix(digits, radix).map_err(|_| malformed())
}

fn parse_milestones(config: &Map<String, Value>) -> ScheduleResult<MilestoneSchedule> {
    let mut milestones = MilestoneSchedule::new();
    for milestone in Milestone::ALL {
        let found = std::iter::once(milestone.config_key())
            .chain(milestone.config_aliases().iter().copied())
            .find_map(|key| field(config, key).map(|value| (key, value)));
        if let Some((key, value)) = found {
            milestones = milestones.with(milestone, parse_u64(value, key)?);
        }
    }
    Ok(milestones)
}

fn option_u64(
    options: &Map<String, Value>,
    engine: &str,
    key: &str,
    default: u64,
) -> ScheduleResult<u64> {
    match field(options, key) {
        Some(value) => parse_u64(value, &format!("{engine}.{key}")),
        None => Ok(default),
    }
}

fn parse_ethash(options: &Map<String, Value>) -> ScheduleResult<EthashOptions> {
    let key = EngineKind::ProofOfWork.config_key();
    let fixed_difficulty = field(options, keys::FIXED_DIFFICULTY)
        .map(|value| parse_u64(value, &format!("{key}.{}", keys::FIXED_DIFFICULTY)))
        .transpose()?;
    Ok(EthashOptions { fixed_difficulty })
}

fn parse_clique(options: &Map<String, Value>) -> ScheduleResult<CliqueOptions> {
    let key = EngineKind::Clique.config_key();
    let defaults = CliqueOptions::default();
    Ok(CliqueOptions {
        epoch_length: option_u64(options, key, keys::EPOCH_LENGTH, defaults.epoch_length)?,
        block_period_seconds: option_u64(
            options,
            key,
            keys::BLOCK_PERIOD_SECONDS,
            defaults.block_period_seconds,
        )?,
    })
}

fn parse_bft(options: &Map<String, Value>, engine: &str) -> ScheduleResult<BftOptions> {
    let defaults = BftOptions::default();
    let validators = match field(options, keys::VALIDATORS) {
        Some(value) => Some(parse_base_validators(value, engine)?),
        None => None,
    };
    Ok(BftOptions {
        epoch_length: option_u64(options, engine, keys::EPOCH_LENGTH, defaults.epoch_length)?,
        block_period_seconds: option_u64(
            options,
            engine,
            keys::BLOCK_PERIOD_SECONDS,
            defaults.block_period_seconds,
        )?,
        request_timeout_seconds: option_u64(
            options,
            engine,
            keys::REQUEST_TIMEOUT_SECONDS,
            defaults.request_timeout_seconds,
        )?,
        gossiped_history_limit: option_u64(
            options,
            engine,
            keys::GOSSIPED_HISTORY_LIMIT,
            defaults.gossiped_history_limit,
        )?,
        message_queue_limit: option_u64(
            options,
            engine,
            keys::MESSAGE_QUEUE_LIMIT,
            defaults.message_queue_limit,
        )?,
        duplicate_message_limit: option_u64(
            options,
            engine,
            keys::DUPLICATE_MESSAGE_LIMIT,
            defaults.duplicate_message_limit,
        )?,
        future_messages_limit: option_u64(
            options,
            engine,
            keys::FUTURE_MESSAGES_LIMIT,
            defaults.future_messages_limit,
        )?,
        future_messages_max_distance: option_u64(
            options,
            engine,
            keys::FUTURE_MESSAGES_MAX_DISTANCE,
            defaults.future_messages_max_distance,
        )?,
        validators,
    })
}

/// Base validators in an engine block have no transition index to report.
fn parse_base_validators(value: &Value, engine: &str) -> ScheduleResult<ValidatorSet> {
    let malformed = || {
        ScheduleError::malformed(
            field_name(&format!("{engine}.{}", keys::VALIDATORS)),
            EXPECTED_ADDRESSES,
        )
    };
    value
        .as_array()
        .ok_or_else(malformed)?
        .iter()
        .map(|entry| entry.as_str().and_then(|text| parse_address(text).ok()).ok_or_else(malformed))
        .collect()
}

fn parse_transitions(config: &Map<String, Value>) -> ScheduleResult<TransitionList> {
    let transitions = match field(config, keys::TRANSITIONS) {
        None => return Ok(TransitionList::empty()),
        Some(Value::Object(transitions)) => transitions,
        Some(_) => return Err(ScheduleError::malformed(keys::TRANSITIONS, EXPECTED_OBJECT)),
    };

    let bft_key = EngineKind::Bft.config_key();
    for key in transitions.keys() {
        if !key.eq_ignore_ascii_case(bft_key) {
            debug!(engine = %key, "Ignoring transitions for unsupported engine");
        }
    }

    let path = format!("{}.{bft_key}", keys::TRANSITIONS);
    let entries = match field(transitions, bft_key) {
        None => return Ok(TransitionList::empty()),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(ScheduleError::malformed(path, EXPECTED_ARRAY)),
    };

    let forks = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_fork(entry, index, &path))
        .collect::<ScheduleResult<Vec<_>>>()?;
    Ok(TransitionList::new(forks))
}

fn parse_fork(entry: &Value, fork_index: usize, path: &str) -> ScheduleResult<ForkTransition> {
    let context = format!("{path}[{fork_index}]");
    let entry = entry
        .as_object()
        .ok_or_else(|| ScheduleError::malformed(context.clone(), EXPECTED_OBJECT))?;

    let fork_block = match field(entry, keys::BLOCK) {
        Some(value) => parse_u64(value, &format!("{context}.{}", keys::BLOCK))?,
        None => {
            return Err(ScheduleError::MissingRequiredField {
                field: keys::BLOCK.to_string(),
                context,
            })
        }
    };

    let validators = match field(entry, keys::VALIDATORS) {
        None => None,
        Some(Value::Array(values)) => Some(
            values
                .iter()
                .enumerate()
                .map(|(entry_index, value)| {
                    value
                        .as_str()
                        .and_then(|text| parse_address(text).ok())
                        .ok_or_else(|| ScheduleError::InvalidValidatorEntry {
                            fork_index,
                            entry_index,
                            value: value.to_string(),
                        })
                })
                .collect::<ScheduleResult<ValidatorSet>>()?,
        ),
        Some(_) => {
            return Err(ScheduleError::malformed(
                field_name(&format!("{context}.{}", keys::VALIDATORS)),
                EXPECTED_ARRAY,
            ))
        }
    };

    Ok(ForkTransition::with_validators(fork_block, validators))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScheduleWarning;
    use serde_json::json;

    const ADDRESS_A: &str = "0x1234567890123456789012345678901234567890";
    const ADDRESS_B: &str = "0x9876543210987654321098765432109876543210";

    fn address(text: &str) -> shared_types::Address {
        parse_address(text).unwrap()
    }

    #[test]
    fn test_empty_config_defaults() {
        let schedule = load_genesis_config(&json!({})).unwrap();
        assert_eq!(schedule, ForkSchedule::default());
    }

    #[test]
    fn test_root_must_be_object() {
        assert_eq!(
            load_genesis_config(&json!([1, 2])),
            Err(ScheduleError::malformed("config", EXPECTED_OBJECT))
        );
    }

    #[test]
    fn test_full_genesis_file_uses_config_object() {
        let document = json!({
            "config": { "chainId": 1, "homesteadBlock": 1_150_000 },
            "alloc": {},
            "gasLimit": "0x1000000"
        });
        let schedule = load_genesis_config(&document).unwrap();
        assert_eq!(schedule.chain_id(), Some(U256::from(1)));
        assert_eq!(schedule.homestead_block(), Some(1_150_000));
    }

    #[test]
    fn test_config_wrapper_must_be_object() {
        assert_eq!(
            load_genesis_config(&json!({ "config": 5 })),
            Err(ScheduleError::malformed("config", EXPECTED_OBJECT))
        );
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let document = json!({
            "CHAINID": 2018,
            "ByzantiumBlock": 4,
            "IBFT2": { "EpochLength": 10 }
        });
        let schedule = load_genesis_config(&document).unwrap();
        assert_eq!(schedule.chain_id(), Some(U256::from(2018)));
        assert_eq!(schedule.byzantium_block(), Some(4));
        assert_eq!(schedule.bft_options().map(|o| o.epoch_length), Some(10));
    }

    #[test]
    fn test_chain_id_forms() {
        let decimal = load_genesis_config(&json!({ "chainId": "2018" })).unwrap();
        let hex = load_genesis_config(&json!({ "chainId": "0x7e2" })).unwrap();
        assert_eq!(decimal.chain_id(), Some(U256::from(2018)));
        assert_eq!(hex.chain_id(), Some(U256::from(2018)));

        let big = load_genesis_config(&json!({ "chainId": "18446744073709551616" })).unwrap();
        assert_eq!(big.chain_id(), Some(U256::from(u64::MAX) + U256::from(1)));
    }

    #[test]
    fn test_chain_id_malformed() {
        let bad_values = [
            json!(-1),
            json!(1.5),
            json!(true),
            json!("abc"),
            json!("0x"),
            json!(""),
            json!("0x0x7e2"),
            json!("-5"),
            json!(" 5"),
        ];
        for bad in bad_values {
            let err = load_genesis_config(&json!({ "chainId": bad })).unwrap_err();
            assert!(matches!(err, ScheduleError::MalformedField { ref field, .. } if field == "chainid"));
        }
    }

    #[test]
    fn test_wide_numeric_chain_id() {
        let document: Value =
            serde_json::from_str(r#"{"config": {"chainId": 18446744073709551616}}"#).unwrap();
        let schedule = load_genesis_config(&document).unwrap();
        assert_eq!(schedule.chain_id(), Some(U256::from(u64::MAX) + U256::from(1)));

        let too_wide = format!(r#"{{"chainId": 1{}}}"#, "0".repeat(80));
        let document: Value = serde_json::from_str(&too_wide).unwrap();
        assert!(matches!(
            load_genesis_config(&document),
            Err(ScheduleError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_chain_id_overflow_is_malformed() {
        let too_big = format!("0x1{}", "0".repeat(64));
        let err = load_genesis_config(&json!({ "chainId": too_big })).unwrap_err();
        assert!(matches!(err, ScheduleError::MalformedField { .. }));
    }

    #[test]
    fn test_milestone_malformed_names_field() {
        let err = load_genesis_config(&json!({ "istanbulBlock": "soon" })).unwrap_err();
        assert_eq!(err, ScheduleError::malformed("istanbulblock", EXPECTED_U64));
    }

    #[test]
    fn test_petersburg_alias() {
        let schedule = load_genesis_config(&json!({ "petersburgBlock": 7 })).unwrap();
        assert_eq!(schedule.constantinople_fix_block(), Some(7));

        let both = json!({ "constantinopleFixBlock": 5, "petersburgBlock": 7 });
        let schedule = load_genesis_config(&both).unwrap();
        assert_eq!(schedule.constantinople_fix_block(), Some(5));
    }

    #[test]
    fn test_classic_milestones() {
        let document = json!({
            "ecip1015Block": 1,
            "dieHardBlock": 2,
            "gothamBlock": 3,
            "ecip1041Block": 4,
            "atlantisBlock": 5,
            "classicForkBlock": 6
        });
        let schedule = load_genesis_config(&document).unwrap();
        assert_eq!(schedule.ecip1015_block(), Some(1));
        assert_eq!(schedule.die_hard_block(), Some(2));
        assert_eq!(schedule.gotham_block(), Some(3));
        assert_eq!(schedule.defuse_difficulty_bomb_block(), Some(4));
        assert_eq!(schedule.atlantis_block(), Some(5));
        assert_eq!(schedule.classic_fork_block(), Some(6));
    }

    #[test]
    fn test_null_field_is_absent() {
        let schedule = load_genesis_config(&json!({ "homesteadBlock": null })).unwrap();
        assert_eq!(schedule.homestead_block(), None);
    }

    #[test]
    fn test_vm_limits() {
        let schedule =
            load_genesis_config(&json!({ "contractSizeLimit": 24576, "evmStackSize": 1024 }))
                .unwrap();
        assert_eq!(schedule.contract_size_limit(), Some(24576));
        assert_eq!(schedule.evm_stack_size(), Some(1024));

        let err = load_genesis_config(&json!({ "evmStackSize": 4_294_967_296u64 })).unwrap_err();
        assert_eq!(err, ScheduleError::malformed("evmstacksize", EXPECTED_U32));
    }

    #[test]
    fn test_engine_options_defaults_and_overrides() {
        let schedule =
            load_genesis_config(&json!({ "clique": { "blockPeriodSeconds": 5 } })).unwrap();
        let clique = schedule.clique_options().unwrap();
        assert_eq!(clique.block_period_seconds, 5);
        assert_eq!(clique.epoch_length, 30_000);

        let schedule =
            load_genesis_config(&json!({ "ethash": { "fixedDifficulty": 100 } })).unwrap();
        assert_eq!(schedule.ethash_options().unwrap().fixed_difficulty, Some(100));
    }

    #[test]
    fn test_engine_must_be_object() {
        assert_eq!(
            load_genesis_config(&json!({ "ibft2": 1 })),
            Err(ScheduleError::malformed("ibft2", EXPECTED_OBJECT))
        );
    }

    #[test]
    fn test_engine_option_malformed() {
        let err = load_genesis_config(&json!({ "ibft": { "requestTimeoutSeconds": "x" } }))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::malformed("ibft.requesttimeoutseconds", EXPECTED_U64)
        );
    }

    #[test]
    fn test_base_validators() {
        let document = json!({ "ibft2": { "validators": [ADDRESS_A] } });
        let schedule = load_genesis_config(&document).unwrap();
        assert_eq!(
            schedule.base_validators(),
            Some(&ValidatorSet::new(vec![address(ADDRESS_A)]))
        );

        let bad = json!({ "ibft2": { "validators": ["0x12"] } });
        assert_eq!(
            load_genesis_config(&bad),
            Err(ScheduleError::malformed("ibft2.validators", EXPECTED_ADDRESSES))
        );
    }

    #[test]
    fn test_require_explicit_engine() {
        let loader = ScheduleLoader::new(LoaderConfig {
            require_explicit_engine: true,
            ..Default::default()
        });
        assert_eq!(loader.load(&json!({})), Err(ScheduleError::NoEngineSpecified));
        assert!(loader.load(&json!({ "ethash": {} })).is_ok());
    }

    #[test]
    fn test_three_engines_ambiguous() {
        let document = json!({ "ethash": {}, "clique": {}, "ibft2": {} });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::AmbiguousEngine {
                engines: vec!["ethash".into(), "clique".into(), "ibft2".into()],
            })
        );
    }

    #[test]
    fn test_transitions_must_be_object() {
        assert_eq!(
            load_genesis_config(&json!({ "transitions": [] })),
            Err(ScheduleError::malformed("transitions", EXPECTED_OBJECT))
        );
    }

    #[test]
    fn test_ibft2_transitions_must_be_array() {
        assert_eq!(
            load_genesis_config(&json!({ "transitions": { "ibft2": {} } })),
            Err(ScheduleError::malformed("transitions.ibft2", EXPECTED_ARRAY))
        );
    }

    #[test]
    fn test_unknown_transition_engine_ignored() {
        let document = json!({ "transitions": { "clique": [{ "block": 1 }] } });
        let schedule = load_genesis_config(&document).unwrap();
        assert!(schedule.transitions().is_empty());
    }

    #[test]
    fn test_transition_entry_must_be_object() {
        let document = json!({ "ibft2": {}, "transitions": { "ibft2": [5] } });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::malformed("transitions.ibft2[0]", EXPECTED_OBJECT))
        );
    }

    #[test]
    fn test_transition_block_required() {
        let document = json!({ "ibft2": {}, "transitions": { "ibft2": [{ "validators": [] }] } });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::MissingRequiredField {
                field: "block".to_string(),
                context: "transitions.ibft2[0]".to_string(),
            })
        );
    }

    #[test]
    fn test_transition_block_malformed() {
        let document = json!({ "ibft2": {}, "transitions": { "ibft2": [{ "block": -3 }] } });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::malformed("transitions.ibft2[0].block", EXPECTED_U64))
        );
    }

    #[test]
    fn test_transition_validators_must_be_array() {
        let document = json!({
            "ibft2": {},
            "transitions": { "ibft2": [{ "block": 1, "validators": ADDRESS_A }] }
        });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::malformed(
                "transitions.ibft2[0].validators",
                EXPECTED_ARRAY
            ))
        );
    }

    #[test]
    fn test_invalid_validator_entry_reports_position() {
        let document = json!({
            "ibft2": {},
            "transitions": { "ibft2": [
                { "block": 1, "validators": [ADDRESS_A] },
                { "block": 2, "validators": [ADDRESS_B, 42] }
            ] }
        });
        assert_eq!(
            load_genesis_config(&document),
            Err(ScheduleError::InvalidValidatorEntry {
                fork_index: 1,
                entry_index: 1,
                value: "42".to_string(),
            })
        );
    }

    #[test]
    fn test_transitions_sorted_by_block() {
        let document = json!({
            "ibft2": {},
            "transitions": { "ibft2": [
                { "block": 30 },
                { "block": 10, "validators": [ADDRESS_A] }
            ] }
        });
        let schedule = load_genesis_config(&document).unwrap();
        let blocks: Vec<u64> = schedule
            .transitions()
            .ibft_forks()
            .iter()
            .map(ForkTransition::fork_block)
            .collect();
        assert_eq!(blocks, vec![10, 30]);
    }

    #[test]
    fn test_deny_warnings() {
        let document = json!({
            "ibft2": {},
            "transitions": { "ibft2": [{ "block": 5, "validators": [] }] }
        });
        assert!(load_genesis_config(&document).is_ok());

        let strict = ScheduleLoader::new(LoaderConfig {
            deny_warnings: true,
            ..Default::default()
        });
        assert_eq!(
            strict.load(&document),
            Err(ScheduleError::LintDenied(ScheduleWarning::EmptyValidatorSet {
                fork_block: 5,
            }))
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let document = json!({ "ibft2": {}, "transitions": { "ibft2": [{ "block": 30 }, { "block": 10 }] } });
        let before = document.clone();
        load_genesis_config(&document).unwrap();
        assert_eq!(document, before);
    }
}
