//! # Outbound Ports
//!
//! Where raw genesis documents come from.

use serde_json::Value;

use crate::domain::ScheduleResult;

/// Genesis document source - outbound port.
pub trait GenesisSource: Send + Sync {
    /// Human readable origin, for logs and error messages.
    fn describe(&self) -> String;

    /// Read and parse the genesis document.
    fn read_document(&self) -> ScheduleResult<Value>;
}
