//! # Core Entities
//!
//! Primitive chain entities shared by every crate in the workspace.

use crate::errors::AddressParseError;

// Re-export U256 from primitive-types for chain identifiers
pub use primitive_types::U256;

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// A block height.
pub type BlockNumber = u64;

/// Number of hex digits in a textual address (without the `0x` prefix).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Parse a `0x`-prefixed, 40-hex-digit address.
///
/// Hex digits may be upper or lower case. Anything else (missing prefix,
/// wrong length, stray characters) is rejected.
pub fn parse_address(value: &str) -> Result<Address, AddressParseError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| AddressParseError::MissingPrefix(value.to_string()))?;

    if digits.len() != ADDRESS_HEX_LEN {
        return Err(AddressParseError::InvalidLength {
            value: value.to_string(),
            got: digits.len(),
        });
    }

    let mut address = [0u8; 20];
    hex::decode_to_slice(digits, &mut address)
        .map_err(|_| AddressParseError::InvalidHex(value.to_string()))?;
    Ok(address)
}

/// Format an address as lower-case `0x`-prefixed hex.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}
