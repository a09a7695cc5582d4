//! Plain-text rendering of fork schedules.

use qc_18_fork_schedule::{
    effective_validators, next_transition_after, validators_at, ConsensusEngine, ForkSchedule,
    Milestone, ScheduleWarning, ValidatorSet,
};

/// Full schedule summary; with `at_block`, marks what is in effect there.
pub fn describe_schedule(schedule: &ForkSchedule, at_block: Option<u64>) -> String {
    let chain_id = schedule
        .chain_id()
        .map_or_else(|| "any".to_string(), |id| id.to_string());
    let mut lines = vec![
        format!("Chain ID:   {chain_id}"),
        format!("Engine:     {}", engine_summary(schedule.engine())),
    ];
    if let Some(limit) = schedule.contract_size_limit() {
        lines.push(format!("Code limit: {limit}"));
    }
    if let Some(size) = schedule.evm_stack_size() {
        lines.push(format!("Stack size: {size}"));
    }

    lines.push("\nMilestones:".to_string());
    if schedule.milestones().is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(
        schedule
            .milestones()
            .iter()
            .map(|(milestone, block)| format!("  {}", milestone_line(milestone, block, at_block))),
    );

    let forks = schedule.transitions().ibft_forks();
    lines.push(format!("\nTransitions ({}):", forks.len()));
    lines.extend(forks.iter().map(|fork| {
        let validators = fork
            .validators()
            .map_or_else(|| "unchanged".to_string(), validator_summary);
        format!("  block {:>10}  validators: {validators}", fork.fork_block())
    }));

    if let Some(block) = at_block {
        lines.push(format!("\nAt block {block}:"));
        let validators = validators_at(schedule, block)
            .map_or_else(|| "none configured".to_string(), validator_summary);
        lines.push(format!("  validators: {validators}"));
        if let Some(next) = next_transition_after(schedule.transitions(), block) {
            lines.push(format!("  next transition at block {}", next.fork_block()));
        }
    }

    join_lines(lines)
}

/// Validator addresses in effect at `block`, one per line.
pub fn describe_validators(schedule: &ForkSchedule, block: u64) -> String {
    let from_transition =
        schedule.is_bft() && effective_validators(schedule.transitions(), block).is_some();
    let source = if from_transition { "transition" } else { "engine" };
    match validators_at(schedule, block) {
        Some(validators) => {
            let header = format!("{} validators at block {block} (from {source}):", validators.len());
            let addresses = validators.to_strings().into_iter().map(|address| format!("  {address}"));
            join_lines(std::iter::once(header).chain(addresses).collect())
        }
        None => format!("No validators configured at block {block}\n"),
    }
}

/// One line per lint warning.
pub fn describe_warnings(warnings: &[ScheduleWarning]) -> String {
    if warnings.is_empty() {
        return "No warnings\n".to_string();
    }
    join_lines(
        warnings
            .iter()
            .map(|warning| format!("warning: {warning}"))
            .collect(),
    )
}

/// Newline-terminated text from output lines.
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn engine_summary(engine: &ConsensusEngine) -> String {
    match engine {
        ConsensusEngine::ProofOfWork(options) => match options.fixed_difficulty {
            Some(difficulty) => format!("ethash (fixed difficulty {difficulty})"),
            None => "ethash".to_string(),
        },
        ConsensusEngine::Clique(options) => format!(
            "clique (epoch {}, period {}s)",
            options.epoch_length, options.block_period_seconds
        ),
        ConsensusEngine::LegacyBft(options) | ConsensusEngine::Bft(options) => format!(
            "{} (epoch {}, period {}s, timeout {}s)",
            engine.name(),
            options.epoch_length,
            options.block_period_seconds,
            options.request_timeout_seconds
        ),
    }
}

fn milestone_line(milestone: Milestone, block: u64, at_block: Option<u64>) -> String {
    let marker = match at_block {
        Some(at) if block <= at => " [active]",
        _ => "",
    };
    format!("{:<24} {block:>10}{marker}", milestone.name())
}

fn validator_summary(validators: &ValidatorSet) -> String {
    if validators.is_empty() {
        "(empty set)".to_string()
    } else {
        validators.to_strings().join(", ")
    }
}
