//! Static Genesis Source Adapter
//!
//! Implements `GenesisSource` for a document already in memory.

use parking_lot::RwLock;
use serde_json::Value;

use crate::domain::ScheduleResult;
use crate::ports::outbound::GenesisSource;

/// In-memory genesis document.
///
/// The document can be swapped with [`set_document`](Self::set_document),
/// which lets embedders and tests drive a reload without touching disk.
#[derive(Debug)]
pub struct StaticGenesisSource {
    document: RwLock<Value>,
}

impl StaticGenesisSource {
    /// Create a source serving `document`.
    pub fn new(document: Value) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    /// Replace the served document.
    pub fn set_document(&self, document: Value) {
        *self.document.write() = document;
    }
}

impl GenesisSource for StaticGenesisSource {
    fn describe(&self) -> String {
        "static genesis document".to_string()
    }

    fn read_document(&self) -> ScheduleResult<Value> {
        Ok(self.document.read().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serves_document() {
        let source = StaticGenesisSource::new(json!({ "chainId": 1 }));
        assert_eq!(source.read_document().unwrap(), json!({ "chainId": 1 }));
    }

    #[test]
    fn test_set_document() {
        let source = StaticGenesisSource::new(json!({}));
        source.set_document(json!({ "clique": {} }));
        assert_eq!(source.read_document().unwrap(), json!({ "clique": {} }));
    }
}
