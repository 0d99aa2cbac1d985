//! Core inference engine for PaddyGuard
//!
//! Turns paddy-field sensor readings into dosing recommendations and a
//! diagnosis. Two independent branches share one fuzzification step:
//!
//! ```text
//! reading ──► Fuzzifier ──┬──► MamdaniEngine ──► centroid ×3 ──► DoseRecommendation
//!                         └──► match_rule (certainty factors) ──► Diagnosis
//! ```
//!
//! Key constraints:
//! - Pure and synchronous; nothing is carried between evaluations
//! - No heap allocation on the fuzzify/aggregate/defuzzify path
//! - Never fails on numeric input; degenerate cases fall back to sentinels
//!
//! ```no_run
//! use paddyguard_core::{Advisor, MamdaniEngine, Rainfall, SensorReading};
//!
//! let engine = MamdaniEngine::new();
//! let advisor = Advisor::new(&engine);
//!
//! let reading = SensorReading::new(800.0, 7.0, 60.0, Rainfall::Clear);
//! let advice = advisor.evaluate(&reading, &[]);
//!
//! println!("{}", advice.doses);
//! assert!(advice.diagnosis.is_placeholder());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod advisor;
pub mod constants;
pub mod defuzzify;
pub mod diagnosis;
pub mod errors;
pub mod fuzzify;
pub mod inference;
pub mod membership;
pub mod reading;
pub mod traits;

// Public API
pub use advisor::{Advice, Advisor, DoseRecommendation};
pub use defuzzify::centroid;
pub use diagnosis::{match_rule, rank_rules, Diagnosis, KnowledgeRule, RuleConditions, RuleOutcome};
pub use errors::{FuzzyError, FuzzyResult};
pub use fuzzify::{fuzzify, Fuzzifier, InputVariable, Rainfall, Term, TermDegrees};
pub use inference::{AggregatedOutputs, Aggregation, MamdaniEngine};
pub use membership::{trapezoidal, triangular, MembershipCurve, MembershipShape, SampledDomain};
pub use reading::{ReadingValidator, SensorReading};
pub use traits::Validator;

#[cfg(feature = "std")]
pub use inference::DEFAULT_ENGINE;

/// Crate version, taken from Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
