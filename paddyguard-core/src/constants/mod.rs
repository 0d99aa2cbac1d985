//! Constants for PaddyGuard Core
//!
//! Every hand-tuned number the engine uses lives here, expressed as
//! declarative tables rather than inline branches so the knowledge encoded
//! in them can be audited and unit tested on its own.
//!
//! ## Organization
//!
//! - **Inputs**: per-term ramp breakpoints for nutrient, acidity and soil
//!   moisture, the rainfall threshold, and operator input ranges
//! - **Outputs**: sampled domains and consequent shapes for irrigation,
//!   fertilizer and pesticide
//! - **Diagnosis**: symbolic term vocabulary of the knowledge base,
//!   confidence thresholds and the placeholder diagnosis
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include units in names (`_PPM`, `_PCT`, `_L`, `_KG`)
//! 3. Changing a breakpoint changes agronomic advice; update the tests with it

/// Input partitions, thresholds and accepted ranges.
pub mod inputs;

/// Output domains and consequent membership shapes.
pub mod outputs;

/// Knowledge-base vocabulary and diagnosis thresholds.
pub mod diagnosis;

pub use inputs::{
    ACIDITY_TERMS, HUMIDITY_TERMS, NUTRIENT_TERMS, RAINFALL_THRESHOLD,
};

pub use outputs::{
    DOSE_SAMPLES, IRRIGATION_SAMPLES, MAX_RULES_PER_BANK,
};

pub use diagnosis::{
    LOW_CONFIDENCE_PCT, PLACEHOLDER_STATUS, SYMBOLIC_TERMS,
};
