//! # Shared Types Crate
//!
//! Primitive types used across the workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: address and block-number representations are
//!   defined once here and reused by every crate.
//! - **Strict Parsing**: textual addresses are accepted only in their canonical
//!   `0x`-prefixed, 40-hex-digit form.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
