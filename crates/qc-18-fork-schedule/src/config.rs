//! # Loader Configuration
//!
//! Policy knobs for turning a genesis document into a fork schedule.

use serde::{Deserialize, Serialize};
use std::env;

/// Fork schedule loader configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Reject documents without a consensus engine block instead of
    /// defaulting to proof-of-work.
    pub require_explicit_engine: bool,

    /// Fail loading on the first lint warning.
    pub deny_warnings: bool,
}

impl LoaderConfig {
    /// Create a config for testing (strictest policy).
    pub fn for_testing() -> Self {
        Self {
            require_explicit_engine: true,
            deny_warnings: true,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_SCHEDULE_REQUIRE_ENGINE`: Require an engine block (default: false)
    /// - `QC_SCHEDULE_DENY_WARNINGS`: Treat lint warnings as errors (default: false)
    pub fn from_env() -> Self {
        Self {
            require_explicit_engine: env::var("QC_SCHEDULE_REQUIRE_ENGINE")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            deny_warnings: env::var("QC_SCHEDULE_DENY_WARNINGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
