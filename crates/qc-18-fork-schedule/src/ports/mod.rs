//! # Ports Module
//!
//! Hexagonal architecture ports (inbound query API, outbound genesis sources).

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
