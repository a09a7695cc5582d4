//! # Adapters Module
//!
//! Genesis source implementations.

pub mod file_source;
pub mod static_source;

pub use file_source::FileGenesisSource;
pub use static_source::StaticGenesisSource;
