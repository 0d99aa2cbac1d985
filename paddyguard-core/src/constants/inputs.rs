//! Input Partitions and Ranges
//!
//! Each continuous input is split into three overlapping linguistic terms:
//! a falling shoulder (low), a plateau (ideal) and a rising shoulder (high).
//! Breakpoints are tuned per term for lowland rice grown in standing water.
//!
//! ```text
//! degree
//!  1.0 ┤████╲      ╱██████████████╲      ╱████
//!      │     ╲    ╱                ╲    ╱
//!  0.0 ┤──────╳──╳──────────────────╳──╳──────
//!           a  b                   c  d
//! ```

use crate::fuzzify::{Term, TermRamp};

// ===== NUTRIENT CONCENTRATION (TDS, ppm) =====

/// Nutrient concentration terms.
///
/// Below 400 ppm the water carries too little dissolved fertilizer; the
/// ideal band spans 500-1900 ppm; above 2100 ppm salinity stress begins.
pub const NUTRIENT_TERMS: [(Term, TermRamp); 3] = [
    (Term::NutrientLow, TermRamp::falling(400.0, 500.0)),
    (Term::NutrientIdeal, TermRamp::plateau(400.0, 500.0, 1900.0, 2100.0)),
    (Term::NutrientHigh, TermRamp::rising(1900.0, 2100.0)),
];

// ===== ACIDITY (pH) =====

/// Acidity terms.
///
/// Paddy soils are acidic at or below pH 6, neutral 7-8, alkaline from 9.
pub const ACIDITY_TERMS: [(Term, TermRamp); 3] = [
    (Term::AcidityAcidic, TermRamp::falling(6.0, 7.0)),
    (Term::AcidityNeutral, TermRamp::plateau(6.0, 7.0, 8.0, 9.0)),
    (Term::AcidityAlkaline, TermRamp::rising(8.0, 9.0)),
];

// ===== SOIL MOISTURE (%) =====

/// Soil moisture terms.
///
/// Dry at or below 28%, workable 38-85%, waterlogged from 95%.
pub const HUMIDITY_TERMS: [(Term, TermRamp); 3] = [
    (Term::HumidityDry, TermRamp::falling(28.0, 38.0)),
    (Term::HumidityIdeal, TermRamp::plateau(28.0, 38.0, 85.0, 95.0)),
    (Term::HumidityWet, TermRamp::rising(85.0, 95.0)),
];

// ===== RAINFALL =====

/// Rainfall amount at or above which the field counts as raining.
///
/// Works for a 0/1 flag as well as a rain gauge reading in mm.
pub const RAINFALL_THRESHOLD: f32 = 0.5;

// ===== OPERATOR INPUT RANGES =====

/// Lowest accepted nutrient concentration (ppm).
pub const NUTRIENT_INPUT_MIN_PPM: f32 = 0.0;

/// Highest accepted nutrient concentration (ppm).
///
/// Upper limit of common handheld TDS meters.
pub const NUTRIENT_INPUT_MAX_PPM: f32 = 5000.0;

/// Lowest accepted pH.
pub const PH_INPUT_MIN: f32 = 0.0;

/// Highest accepted pH.
pub const PH_INPUT_MAX: f32 = 14.0;

/// Lowest accepted soil moisture (%).
pub const MOISTURE_INPUT_MIN_PCT: f32 = 0.0;

/// Highest accepted soil moisture (%).
pub const MOISTURE_INPUT_MAX_PCT: f32 = 100.0;
