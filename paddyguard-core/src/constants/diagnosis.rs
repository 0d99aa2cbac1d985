//! Knowledge-Base Vocabulary and Diagnosis Thresholds

use crate::fuzzify::{InputVariable, Term};

/// Symbolic condition values used by knowledge-base rules, per variable.
///
/// Lookup is exact and case sensitive. Anything not listed resolves to a
/// membership degree of zero.
pub const SYMBOLIC_TERMS: [(InputVariable, &str, Term); 11] = [
    (InputVariable::Acidity, "masam", Term::AcidityAcidic),
    (InputVariable::Acidity, "netral", Term::AcidityNeutral),
    (InputVariable::Acidity, "basa", Term::AcidityAlkaline),
    (InputVariable::Nutrient, "kurang", Term::NutrientLow),
    (InputVariable::Nutrient, "ideal", Term::NutrientIdeal),
    (InputVariable::Nutrient, "berlebih", Term::NutrientHigh),
    (InputVariable::Humidity, "kering", Term::HumidityDry),
    (InputVariable::Humidity, "lembab", Term::HumidityIdeal),
    (InputVariable::Humidity, "basah", Term::HumidityWet),
    (InputVariable::Rainfall, "cerah", Term::RainClear),
    (InputVariable::Rainfall, "hujan", Term::RainFalling),
];

/// Confidence (%) below which a diagnosis should be flagged to the operator.
pub const LOW_CONFIDENCE_PCT: f32 = 70.0;

/// Identifier of the placeholder rule.
pub const PLACEHOLDER_ID: &str = "ERR";

/// Status text of the placeholder diagnosis. Callers test for this value.
pub const PLACEHOLDER_STATUS: &str = "Error";

/// Filler used for the placeholder's recommendation fields.
pub const PLACEHOLDER_TEXT: &str = "-";
