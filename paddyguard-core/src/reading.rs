//! Sensor Readings and Input Limits
//!
//! One [`SensorReading`] is a single snapshot of the field: dissolved
//! nutrients (TDS, ppm), water pH, soil moisture (%) and the rain state.
//!
//! ## Input Limits
//!
//! | Input     | Range      | Unit |
//! |-----------|------------|------|
//! | Nutrients | 0 - 5000   | ppm  |
//! | pH        | 0 - 14     |      |
//! | Moisture  | 0 - 100    | %    |
//!
//! The engine accepts anything, since every membership ramp saturates
//! outside its breakpoints. Front ends that read from real probes should
//! still run [`ReadingValidator`] first: a probe stuck at `-1` or reporting
//! `NaN` produces a confident but meaningless recommendation.
//!
//! ```rust
//! use paddyguard_core::{Rainfall, ReadingValidator, SensorReading, Validator};
//!
//! let validator = ReadingValidator::default();
//!
//! let reading = SensorReading::new(800.0, 7.0, 60.0, Rainfall::Clear);
//! assert!(validator.validate(&reading).is_ok());
//!
//! let drifted = SensorReading::new(5600.0, 7.0, -3.0, Rainfall::Clear);
//! assert!(validator.validate(&drifted).is_err());
//!
//! let clamped = validator.clamp(drifted);
//! assert_eq!(clamped.nutrient_ppm, 5000.0);
//! assert_eq!(clamped.moisture_pct, 0.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::inputs::{
        MOISTURE_INPUT_MAX_PCT, MOISTURE_INPUT_MIN_PCT, NUTRIENT_INPUT_MAX_PPM, NUTRIENT_INPUT_MIN_PPM,
        PH_INPUT_MAX, PH_INPUT_MIN,
    },
    errors::{FuzzyError, FuzzyResult},
    fuzzify::Rainfall,
    traits::{Validatable, Validator},
};

/// One snapshot of the field sensors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorReading {
    /// Dissolved nutrients (TDS), ppm
    #[cfg_attr(feature = "serde", serde(rename = "tds"))]
    pub nutrient_ppm: f32,
    /// Water pH
    pub ph: f32,
    /// Soil moisture, %
    #[cfg_attr(feature = "serde", serde(rename = "kelembaban"))]
    pub moisture_pct: f32,
    /// Rain state
    #[cfg_attr(feature = "serde", serde(rename = "curah_hujan", default))]
    pub rainfall: Rainfall,
}

impl SensorReading {
    /// Build a reading from raw values
    pub fn new(nutrient_ppm: f32, ph: f32, moisture_pct: f32, rainfall: Rainfall) -> Self {
        Self {
            nutrient_ppm,
            ph,
            moisture_pct,
            rainfall,
        }
    }
}

/// Closed interval an input must fall in
#[derive(Debug, Clone, Copy, PartialEq)]
struct Limits {
    min: f32,
    max: f32,
}

impl Limits {
    fn check(&self, value: f32) -> FuzzyResult<()> {
        if !value.is_valid() {
            return Err(FuzzyError::InvalidValue);
        }
        if value < self.min || value > self.max {
            return Err(FuzzyError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    // NaN has nowhere sensible to go; pin it to the lower bound
    fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Range checks for [`SensorReading`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingValidator {
    nutrient: Limits,
    acidity: Limits,
    moisture: Limits,
}

impl Default for ReadingValidator {
    fn default() -> Self {
        Self {
            nutrient: Limits {
                min: NUTRIENT_INPUT_MIN_PPM,
                max: NUTRIENT_INPUT_MAX_PPM,
            },
            acidity: Limits {
                min: PH_INPUT_MIN,
                max: PH_INPUT_MAX,
            },
            moisture: Limits {
                min: MOISTURE_INPUT_MIN_PCT,
                max: MOISTURE_INPUT_MAX_PCT,
            },
        }
    }
}

impl ReadingValidator {
    /// Create validator with custom limits, each given as `(min, max)`
    pub fn new_with_limits(nutrient_ppm: (f32, f32), ph: (f32, f32), moisture_pct: (f32, f32)) -> FuzzyResult<Self> {
        fn limits((min, max): (f32, f32)) -> FuzzyResult<Limits> {
            if !min.is_valid() || !max.is_valid() {
                return Err(FuzzyError::InvalidValue);
            }
            if min > max {
                return Err(FuzzyError::InvalidDomain {
                    reason: "lower limit above upper limit",
                });
            }
            Ok(Limits { min, max })
        }

        Ok(Self {
            nutrient: limits(nutrient_ppm)?,
            acidity: limits(ph)?,
            moisture: limits(moisture_pct)?,
        })
    }

    /// Nutrient limits, ppm
    pub fn nutrient_limits(&self) -> (f32, f32) {
        (self.nutrient.min, self.nutrient.max)
    }

    /// pH limits
    pub fn ph_limits(&self) -> (f32, f32) {
        (self.acidity.min, self.acidity.max)
    }

    /// Moisture limits, %
    pub fn moisture_limits(&self) -> (f32, f32) {
        (self.moisture.min, self.moisture.max)
    }
}

impl Validator for ReadingValidator {
    type Value = SensorReading;

    fn validate(&self, reading: &SensorReading) -> FuzzyResult<()> {
        self.nutrient.check(reading.nutrient_ppm)?;
        self.acidity.check(reading.ph)?;
        self.moisture.check(reading.moisture_pct)?;
        Ok(())
    }

    fn clamp(&self, reading: SensorReading) -> SensorReading {
        let clamped = SensorReading {
            nutrient_ppm: self.nutrient.clamp(reading.nutrient_ppm),
            ph: self.acidity.clamp(reading.ph),
            moisture_pct: self.moisture.clamp(reading.moisture_pct),
            rainfall: reading.rainfall,
        };

        if clamped != reading {
            log_debug!("reading clamped: {:?} -> {:?}", reading, clamped);
        }

        clamped
    }
}
