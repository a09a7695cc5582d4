//! # Domain Value Objects
//!
//! Immutable value types shared by the schedule, transitions and resolver.

use shared_types::{format_address, Address};

/// Ordered set of validator addresses.
///
/// Document order is preserved. An empty set is a valid, distinct state
/// from "no validator override".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValidatorSet {
    validators: Vec<Address>,
}

impl ValidatorSet {
    /// Create a validator set from addresses in document order.
    pub fn new(validators: Vec<Address>) -> Self {
        Self { validators }
    }

    /// Number of validators (duplicates included).
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Check if an address is in the set
    pub fn contains(&self, address: &Address) -> bool {
        self.validators.contains(address)
    }

    /// Addresses in document order.
    pub fn as_slice(&self) -> &[Address] {
        &self.validators
    }

    /// Iterate over addresses in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.validators.iter()
    }

    /// Addresses rendered as `0x`-prefixed lower-case hex.
    pub fn to_strings(&self) -> Vec<String> {
        self.validators.iter().map(format_address).collect()
    }
}

impl FromIterator<Address> for ValidatorSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Engine parameters overridden by a transition.
///
/// Every field is optional: `None` means "leave the value already in effect
/// unchanged", which is different from overriding with an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterOverride {
    /// Replacement validator set.
    pub validators: Option<ValidatorSet>,
}

impl ParameterOverride {
    /// An override that changes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// An override replacing the validator set.
    pub fn with_validators(validators: ValidatorSet) -> Self {
        Self {
            validators: Some(validators),
        }
    }

    /// Whether this override changes nothing.
    pub fn is_empty(&self) -> bool {
        self.validators.is_none()
    }

    /// Apply `later` on top of `self`: set fields in `later` win, unset
    /// fields carry the current value forward.
    pub fn merge(&mut self, later: &ParameterOverride) {
        if let Some(validators) = &later.validators {
            self.validators = Some(validators.clone());
        }
    }
}
