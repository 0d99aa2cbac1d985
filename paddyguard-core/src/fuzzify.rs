//! Fuzzification of Crisp Sensor Readings
//!
//! ## Linguistic Terms
//!
//! Four inputs are turned into eleven degrees of membership:
//!
//! | Variable          | Terms                                  |
//! |-------------------|----------------------------------------|
//! | Nutrient (ppm)    | `tds_kurang`, `tds_ideal`, `tds_lebih` |
//! | Acidity (pH)      | `ph_masam`, `ph_netral`, `ph_basa`     |
//! | Soil moisture (%) | `hum_kering`, `hum_opt`, `hum_basah`   |
//! | Rainfall          | `hujan_cerah`, `hujan_turun`           |
//!
//! ## Partitions
//!
//! Each continuous variable is covered by a falling shoulder, a plateau and
//! a rising shoulder ([`TermRamp`]). Degrees are computed straight from the
//! breakpoints rather than by sampling generic membership shapes, so each
//! term can be tuned on its own. With the shipped tables at most two
//! adjacent terms are non-zero for any reading and exactly one term is `1.0`
//! inside its core region.
//!
//! Rainfall is crisp: exactly one of clear/raining is `1.0`.
//!
//! Out-of-range readings saturate the nearest terminal term; there are no
//! error cases on this path.
//!
//! ```rust
//! use paddyguard_core::{fuzzify, Term};
//!
//! let mu = fuzzify(450.0, 6.5, 60.0, false);
//!
//! assert_eq!(mu[Term::NutrientLow], 0.5);
//! assert_eq!(mu[Term::NutrientIdeal], 0.5);
//! assert_eq!(mu[Term::HumidityIdeal], 1.0);
//! assert_eq!(mu[Term::RainClear], 1.0);
//! ```

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::inputs::{ACIDITY_TERMS, HUMIDITY_TERMS, NUTRIENT_TERMS, RAINFALL_THRESHOLD},
    errors::{FuzzyError, FuzzyResult},
    membership::check_finite,
    reading::SensorReading,
};

/// Fuzzified input variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputVariable {
    /// Dissolved nutrient concentration (TDS, ppm)
    Nutrient,
    /// Water acidity (pH)
    Acidity,
    /// Soil moisture (%)
    Humidity,
    /// Rain state
    Rainfall,
}

/// Linguistic term of an input variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Term {
    /// Nutrient concentration too low
    NutrientLow,
    /// Nutrient concentration in the ideal band
    NutrientIdeal,
    /// Nutrient concentration too high
    NutrientHigh,
    /// Acidic water
    AcidityAcidic,
    /// Neutral water
    AcidityNeutral,
    /// Alkaline water
    AcidityAlkaline,
    /// Dry soil
    HumidityDry,
    /// Workable soil moisture
    HumidityIdeal,
    /// Waterlogged soil
    HumidityWet,
    /// No rain
    RainClear,
    /// Raining
    RainFalling,
}

impl Term {
    /// Number of terms across all variables
    pub const COUNT: usize = 11;

    /// Every term, in index order
    pub const ALL: [Term; Term::COUNT] = [
        Term::NutrientLow,
        Term::NutrientIdeal,
        Term::NutrientHigh,
        Term::AcidityAcidic,
        Term::AcidityNeutral,
        Term::AcidityAlkaline,
        Term::HumidityDry,
        Term::HumidityIdeal,
        Term::HumidityWet,
        Term::RainClear,
        Term::RainFalling,
    ];

    /// Dense index into a degree table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical key, as used by dashboards and logs
    pub const fn key(self) -> &'static str {
        match self {
            Term::NutrientLow => "tds_kurang",
            Term::NutrientIdeal => "tds_ideal",
            Term::NutrientHigh => "tds_lebih",
            Term::AcidityAcidic => "ph_masam",
            Term::AcidityNeutral => "ph_netral",
            Term::AcidityAlkaline => "ph_basa",
            Term::HumidityDry => "hum_kering",
            Term::HumidityIdeal => "hum_opt",
            Term::HumidityWet => "hum_basah",
            Term::RainClear => "hujan_cerah",
            Term::RainFalling => "hujan_turun",
        }
    }

    /// Look a term up by its canonical key
    pub fn from_key(key: &str) -> Option<Term> {
        Term::ALL.iter().copied().find(|term| term.key() == key)
    }

    /// Variable this term belongs to
    pub const fn variable(self) -> InputVariable {
        match self {
            Term::NutrientLow | Term::NutrientIdeal | Term::NutrientHigh => InputVariable::Nutrient,
            Term::AcidityAcidic | Term::AcidityNeutral | Term::AcidityAlkaline => InputVariable::Acidity,
            Term::HumidityDry | Term::HumidityIdeal | Term::HumidityWet => InputVariable::Humidity,
            Term::RainClear | Term::RainFalling => InputVariable::Rainfall,
        }
    }
}

/// Degree of membership for every linguistic term
///
/// Built fresh by each fuzzification and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TermDegrees {
    degrees: [f32; Term::COUNT],
}

impl TermDegrees {
    /// Degree of a single term
    pub fn get(&self, term: Term) -> f32 {
        self.degrees[term.index()]
    }

    /// All `(term, degree)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (Term, f32)> + '_ {
        Term::ALL.iter().map(move |term| (*term, self.get(*term)))
    }

    /// Term of `variable` with the highest degree (earliest wins ties)
    pub fn dominant(&self, variable: InputVariable) -> Term {
        let mut best = Term::ALL
            .iter()
            .copied()
            .filter(|term| term.variable() == variable);

        let first = best.next().unwrap_or(Term::RainClear);
        best.fold(first, |winner, term| {
            if self.get(term) > self.get(winner) {
                term
            } else {
                winner
            }
        })
    }

    fn set(&mut self, term: Term, degree: f32) {
        self.degrees[term.index()] = degree;
    }
}

impl Default for TermDegrees {
    fn default() -> Self {
        Self {
            degrees: [0.0; Term::COUNT],
        }
    }
}

impl Index<Term> for TermDegrees {
    type Output = f32;

    fn index(&self, term: Term) -> &f32 {
        &self.degrees[term.index()]
    }
}

/// Piecewise-linear membership ramp of one linguistic term
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TermRamp {
    /// 1 up to `full_until`, falling to 0 at `zero_from`
    Falling {
        /// Last value with full membership
        full_until: f32,
        /// First value with no membership
        zero_from: f32,
    },
    /// 0 up to `rise_from`, 1 over `full_from..=full_until`, 0 from `zero_from`
    Plateau {
        /// Last value with no membership on the left
        rise_from: f32,
        /// Start of full membership
        full_from: f32,
        /// End of full membership
        full_until: f32,
        /// First value with no membership on the right
        zero_from: f32,
    },
    /// 0 up to `zero_until`, rising to 1 at `full_from`
    Rising {
        /// Last value with no membership
        zero_until: f32,
        /// First value with full membership
        full_from: f32,
    },
}

impl TermRamp {
    /// Left shoulder ramp
    pub const fn falling(full_until: f32, zero_from: f32) -> Self {
        Self::Falling { full_until, zero_from }
    }

    /// Plateau ramp
    pub const fn plateau(rise_from: f32, full_from: f32, full_until: f32, zero_from: f32) -> Self {
        Self::Plateau { rise_from, full_from, full_until, zero_from }
    }

    /// Right shoulder ramp
    pub const fn rising(zero_until: f32, full_from: f32) -> Self {
        Self::Rising { zero_until, full_from }
    }

    /// Degree of membership of a crisp value, in [0, 1].
    ///
    /// Non-finite input gives `0.0`.
    pub fn degree(&self, x: f32) -> f32 {
        let degree = match *self {
            Self::Falling { full_until, zero_from } => {
                if x <= full_until {
                    1.0
                } else if x < zero_from {
                    (zero_from - x) / (zero_from - full_until)
                } else {
                    0.0
                }
            }
            Self::Plateau { rise_from, full_from, full_until, zero_from } => {
                if x < rise_from {
                    0.0
                } else if x <= full_from {
                    ramp_up(x, rise_from, full_from)
                } else if x <= full_until {
                    1.0
                } else if x < zero_from {
                    (zero_from - x) / (zero_from - full_until)
                } else {
                    0.0
                }
            }
            Self::Rising { zero_until, full_from } => {
                if x >= full_from {
                    1.0
                } else if x > zero_until {
                    (x - zero_until) / (full_from - zero_until)
                } else {
                    0.0
                }
            }
        };

        degree.clamp(0.0, 1.0)
    }

    /// Check that breakpoints are finite and in non-decreasing order
    pub fn validate(&self) -> FuzzyResult<()> {
        let ordered = match *self {
            Self::Falling { full_until, zero_from } => {
                check_finite(&[full_until, zero_from])?;
                full_until <= zero_from
            }
            Self::Plateau { rise_from, full_from, full_until, zero_from } => {
                check_finite(&[rise_from, full_from, full_until, zero_from])?;
                rise_from <= full_from && full_from <= full_until && full_until <= zero_from
            }
            Self::Rising { zero_until, full_from } => {
                check_finite(&[zero_until, full_from])?;
                zero_until <= full_from
            }
        };

        if ordered {
            Ok(())
        } else {
            Err(FuzzyError::InvalidShape {
                reason: "ramp breakpoints out of order",
            })
        }
    }
}

// Zero-width rise is a step straight to full membership.
fn ramp_up(x: f32, from: f32, to: f32) -> f32 {
    if to == from {
        1.0
    } else {
        (x - from) / (to - from)
    }
}

/// The three terms covering one continuous variable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    variable: InputVariable,
    terms: [(Term, TermRamp); 3],
}

impl Partition {
    /// Build a partition, checking that every term belongs to `variable`
    /// and every ramp is well formed
    pub fn new(variable: InputVariable, terms: [(Term, TermRamp); 3]) -> FuzzyResult<Self> {
        if terms.iter().any(|(term, _)| term.variable() != variable) {
            return Err(FuzzyError::InvalidShape {
                reason: "term does not belong to partition variable",
            });
        }

        for (_, ramp) in &terms {
            ramp.validate()?;
        }

        Ok(Self { variable, terms })
    }

    /// Variable this partition covers
    pub fn variable(&self) -> InputVariable {
        self.variable
    }

    /// Term table
    pub fn terms(&self) -> &[(Term, TermRamp); 3] {
        &self.terms
    }

    fn apply(&self, x: f32, degrees: &mut TermDegrees) {
        for (term, ramp) in &self.terms {
            degrees.set(*term, ramp.degree(x));
        }
    }
}

/// Rain state at the time of the reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rainfall {
    /// No rain
    #[default]
    Clear,
    /// Raining
    Raining,
}

impl Rainfall {
    /// Classify a rain amount (flag or mm) against [`RAINFALL_THRESHOLD`]
    pub fn from_amount(amount: f32) -> Self {
        if amount < RAINFALL_THRESHOLD {
            Rainfall::Clear
        } else {
            Rainfall::Raining
        }
    }

    /// True when raining
    pub fn is_raining(self) -> bool {
        self == Rainfall::Raining
    }
}

impl From<bool> for Rainfall {
    fn from(is_raining: bool) -> Self {
        if is_raining {
            Rainfall::Raining
        } else {
            Rainfall::Clear
        }
    }
}

/// Converts crisp readings into term degrees using fixed partitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuzzifier {
    nutrient: Partition,
    acidity: Partition,
    humidity: Partition,
}

impl Default for Fuzzifier {
    fn default() -> Self {
        Self {
            nutrient: Partition { variable: InputVariable::Nutrient, terms: NUTRIENT_TERMS },
            acidity: Partition { variable: InputVariable::Acidity, terms: ACIDITY_TERMS },
            humidity: Partition { variable: InputVariable::Humidity, terms: HUMIDITY_TERMS },
        }
    }
}

impl Fuzzifier {
    /// Fuzzifier with custom partitions, e.g. for upland varieties
    pub fn new_with_partitions(
        nutrient: Partition,
        acidity: Partition,
        humidity: Partition,
    ) -> FuzzyResult<Self> {
        let expected = [
            (nutrient.variable, InputVariable::Nutrient),
            (acidity.variable, InputVariable::Acidity),
            (humidity.variable, InputVariable::Humidity),
        ];

        if expected.iter().any(|(got, want)| got != want) {
            return Err(FuzzyError::InvalidShape {
                reason: "partition supplied for the wrong variable",
            });
        }

        Ok(Self { nutrient, acidity, humidity })
    }

    /// Fuzzify four crisp inputs
    pub fn fuzzify(&self, nutrient_ppm: f32, ph: f32, moisture_pct: f32, rainfall: Rainfall) -> TermDegrees {
        let mut degrees = TermDegrees::default();

        self.nutrient.apply(nutrient_ppm, &mut degrees);
        self.acidity.apply(ph, &mut degrees);
        self.humidity.apply(moisture_pct, &mut degrees);

        let raining = rainfall.is_raining();
        degrees.set(Term::RainClear, if raining { 0.0 } else { 1.0 });
        degrees.set(Term::RainFalling, if raining { 1.0 } else { 0.0 });

        degrees
    }

    /// Fuzzify a full sensor reading
    pub fn fuzzify_reading(&self, reading: &SensorReading) -> TermDegrees {
        self.fuzzify(
            reading.nutrient_ppm,
            reading.ph,
            reading.moisture_pct,
            reading.rainfall,
        )
    }
}

/// Fuzzify with the default partitions
pub fn fuzzify(nutrient_ppm: f32, ph: f32, moisture_pct: f32, is_raining: bool) -> TermDegrees {
    Fuzzifier::default().fuzzify(nutrient_ppm, ph, moisture_pct, Rainfall::from(is_raining))
}
