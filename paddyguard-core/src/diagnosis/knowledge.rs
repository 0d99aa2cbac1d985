//! Knowledge-Base Records
//!
//! A knowledge rule names one symbolic condition per input variable and
//! carries a bundle of remediation advice plus a static certainty factor.
//! Records are loaded elsewhere (typically from JSON) and handed to the
//! matcher as an ordered slice; the core never mutates them.
//!
//! With the `serde` feature the field names follow the deployed JSON:
//!
//! ```json
//! {
//!   "id": "R01",
//!   "description": "Tanah masam dan kering",
//!   "conditions": { "ph": "masam", "tds": "kurang", "kelembaban": "kering", "curah_hujan": "cerah" },
//!   "results": {
//!     "status_t": "Buruk",
//!     "air_r": "Irigasi segera",
//!     "pupuk_q": "Tunda pemupukan",
//!     "pestisida_s": "Dosis rendah",
//!     "action_steps": ["Tambahkan kapur dolomit"],
//!     "cf": 0.9
//!   }
//! }
//! ```

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::diagnosis::{PLACEHOLDER_ID, PLACEHOLDER_STATUS, PLACEHOLDER_TEXT},
    errors::{FuzzyError, FuzzyResult},
    fuzzify::InputVariable,
};

/// Symbolic condition per input variable
///
/// A condition that is absent makes the whole rule unusable; the matcher
/// skips such rules.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleConditions {
    /// Acidity term, e.g. `"masam"`
    #[cfg_attr(feature = "serde", serde(rename = "ph", default))]
    pub acidity: Option<String>,
    /// Nutrient term, e.g. `"kurang"`
    #[cfg_attr(feature = "serde", serde(rename = "tds", default))]
    pub nutrient: Option<String>,
    /// Soil moisture term, e.g. `"lembab"`
    #[cfg_attr(feature = "serde", serde(rename = "kelembaban", default))]
    pub humidity: Option<String>,
    /// Rainfall term, `"cerah"` or `"hujan"`
    #[cfg_attr(feature = "serde", serde(rename = "curah_hujan", default))]
    pub rainfall: Option<String>,
}

impl RuleConditions {
    /// All four conditions present
    pub fn new(acidity: &str, nutrient: &str, humidity: &str, rainfall: &str) -> Self {
        Self {
            acidity: Some(acidity.to_string()),
            nutrient: Some(nutrient.to_string()),
            humidity: Some(humidity.to_string()),
            rainfall: Some(rainfall.to_string()),
        }
    }

    /// `(variable, symbol)` pairs, or the first variable with no condition
    pub fn symbols(&self) -> Result<[(InputVariable, &str); 4], InputVariable> {
        fn pick(variable: InputVariable, symbol: &Option<String>) -> Result<(InputVariable, &str), InputVariable> {
            symbol.as_deref().map(|s| (variable, s)).ok_or(variable)
        }

        Ok([
            pick(InputVariable::Acidity, &self.acidity)?,
            pick(InputVariable::Nutrient, &self.nutrient)?,
            pick(InputVariable::Humidity, &self.humidity)?,
            pick(InputVariable::Rainfall, &self.rainfall)?,
        ])
    }
}

/// Remediation advice attached to a rule
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleOutcome {
    /// Field status, e.g. `"Buruk"`
    #[cfg_attr(feature = "serde", serde(rename = "status_t", default))]
    pub status: String,
    /// Irrigation advice
    #[cfg_attr(feature = "serde", serde(rename = "air_r", default))]
    pub irrigation: String,
    /// Fertilizer advice
    #[cfg_attr(feature = "serde", serde(rename = "pupuk_q", default))]
    pub fertilizer: String,
    /// Pesticide advice
    #[cfg_attr(feature = "serde", serde(rename = "pestisida_s", default))]
    pub pesticide: String,
    /// Ordered remediation steps
    #[cfg_attr(feature = "serde", serde(default))]
    pub action_steps: Vec<String>,
    /// Static certainty factor in [0, 1]
    #[cfg_attr(feature = "serde", serde(rename = "cf", default))]
    pub certainty_factor: f32,
}

/// One diagnostic rule of the knowledge base
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KnowledgeRule {
    /// Rule identifier
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: String,
    /// Named condition, shown to the operator
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Symbolic conditions
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: RuleConditions,
    /// Advice bundle and certainty factor
    #[cfg_attr(feature = "serde", serde(rename = "results", default))]
    pub outcome: RuleOutcome,
}

impl KnowledgeRule {
    /// Static certainty factor of the rule
    pub fn certainty_factor(&self) -> f32 {
        self.outcome.certainty_factor
    }

    /// Check that the certainty factor is a number within [0, 1]
    pub fn validate(&self) -> FuzzyResult<()> {
        let cf = self.certainty_factor();
        if !cf.is_finite() {
            return Err(FuzzyError::InvalidValue);
        }
        if !(0.0..=1.0).contains(&cf) {
            return Err(FuzzyError::OutOfRange { value: cf, min: 0.0, max: 1.0 });
        }
        Ok(())
    }

    /// Placeholder returned when no rule can be selected
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_ID.to_string(),
            description: PLACEHOLDER_STATUS.to_string(),
            conditions: RuleConditions::default(),
            outcome: RuleOutcome {
                status: PLACEHOLDER_STATUS.to_string(),
                irrigation: PLACEHOLDER_TEXT.to_string(),
                fertilizer: PLACEHOLDER_TEXT.to_string(),
                pesticide: PLACEHOLDER_TEXT.to_string(),
                action_steps: Vec::new(),
                certainty_factor: 0.0,
            },
        }
    }

    /// True for the placeholder rule
    pub fn is_placeholder(&self) -> bool {
        self.outcome.status == PLACEHOLDER_STATUS
    }
}
