//! Error Types for Engine Construction and Input Validation
//!
//! ## Where Errors Can Occur
//!
//! The inference path itself never fails. Every numeric corner case has a
//! defined fallback:
//!
//! - Zero-width ramp in a membership shape: treated as a step
//! - Aggregate curve with no mass: centroid is `0.0`
//! - Empty or unusable knowledge base: placeholder diagnosis with 0% confidence
//! - Unknown symbolic term in a knowledge rule: degree `0.0`, logged
//!
//! Errors are reserved for the places where a caller hands us something to
//! *build* or *check*:
//!
//! - Custom sampled domains that are not strictly increasing
//! - Custom partitions or output shapes with out-of-order breakpoints
//! - Sensor readings that are not finite or outside the operator input range
//! - Knowledge rules whose certainty factor lies outside [0, 1]
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use paddyguard_core::{FuzzyError, ReadingValidator, Rainfall, SensorReading, Validator};
//!
//! let validator = ReadingValidator::default();
//! let reading = SensorReading::new(9000.0, 7.0, 60.0, Rainfall::Clear);
//!
//! match validator.validate(&reading) {
//!     Ok(()) => {}
//!     Err(FuzzyError::OutOfRange { .. }) => {
//!         // Probe fouled or misread - saturate and carry on
//!         let _usable = validator.clamp(reading);
//!     }
//!     Err(_) => {
//!         // NaN or infinity - drop the sample
//!     }
//! }
//! ```
//!
//! Like every other value on the hot path the error is `Copy` and carries only
//! `&'static str` messages.

use thiserror_no_std::Error;

/// Result type for construction and validation operations
pub type FuzzyResult<T> = Result<T, FuzzyError>;

/// Engine errors - kept small and allocation free
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FuzzyError {
    /// Value outside its accepted range
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The offending value
        value: f32,
        /// Lowest accepted value
        min: f32,
        /// Highest accepted value
        max: f32,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Sampled domain is unusable
    #[error("Invalid domain: {reason}")]
    InvalidDomain {
        /// What is wrong with the domain
        reason: &'static str,
    },

    /// Membership shape or partition breakpoints are unusable
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// What is wrong with the shape
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for FuzzyError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
            Self::InvalidDomain { reason } =>
                defmt::write!(fmt, "Invalid domain: {}", reason),
            Self::InvalidShape { reason } =>
                defmt::write!(fmt, "Invalid shape: {}", reason),
        }
    }
}
