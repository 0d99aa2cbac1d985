//! Core traits for input validation
//!
//! The inference path itself never rejects numbers. These traits are for
//! callers that want to vet or clamp readings before handing them over.

use crate::errors::FuzzyResult;

/// Implement this for each kind of input that can be checked
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Check a value against the validator's limits
    fn validate(&self, value: &Self::Value) -> FuzzyResult<()>;

    /// Pull a value into the validator's limits
    fn clamp(&self, value: Self::Value) -> Self::Value;
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
