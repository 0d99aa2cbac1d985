//! Full Evaluation Pass
//!
//! [`Advisor`] ties the two branches together for one reading:
//!
//! 1. Fuzzify the reading into term degrees
//! 2. Aggregate the irrigation, fertilizer and pesticide banks
//! 3. Defuzzify each aggregate by centroid
//! 4. Match the same degrees against the knowledge base
//!
//! The advisor only borrows the engine, so many advisors (one per worker,
//! or one per custom fuzzifier) can share a single [`MamdaniEngine`].

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    diagnosis::{match_rule, Diagnosis, KnowledgeRule},
    fuzzify::{Fuzzifier, TermDegrees},
    inference::{AggregatedOutputs, MamdaniEngine},
    reading::SensorReading,
};

/// Crisp dosing advice
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoseRecommendation {
    /// Irrigation volume, L
    pub irrigation_l: f32,
    /// Fertilizer dose, kg
    pub fertilizer_kg: f32,
    /// Pesticide dose, ml/m²
    pub pesticide_ml_per_m2: f32,
}

impl DoseRecommendation {
    /// Centroids of the three aggregated outputs
    pub fn from_outputs(outputs: &AggregatedOutputs<'_>) -> Self {
        Self {
            irrigation_l: outputs.irrigation.centroid(),
            fertilizer_kg: outputs.fertilizer.centroid(),
            pesticide_ml_per_m2: outputs.pesticide.centroid(),
        }
    }
}

impl fmt::Display for DoseRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} L / {:.2} kg / {:.1} ml/m²",
            self.irrigation_l, self.fertilizer_kg, self.pesticide_ml_per_m2
        )
    }
}

/// Everything produced for one reading
#[derive(Debug, Clone, PartialEq)]
pub struct Advice<'kb> {
    /// Term degrees shared by both branches
    pub degrees: TermDegrees,
    /// Mamdani branch result
    pub doses: DoseRecommendation,
    /// Certainty-factor branch result
    pub diagnosis: Diagnosis<'kb>,
}

/// Runs fuzzification, inference and diagnosis for single readings
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'e> {
    fuzzifier: Fuzzifier,
    engine: &'e MamdaniEngine,
}

impl<'e> Advisor<'e> {
    /// Advisor with the default partitions
    pub fn new(engine: &'e MamdaniEngine) -> Self {
        Self::with_fuzzifier(engine, Fuzzifier::default())
    }

    /// Advisor with custom input partitions
    pub fn with_fuzzifier(engine: &'e MamdaniEngine, fuzzifier: Fuzzifier) -> Self {
        Self { fuzzifier, engine }
    }

    /// Input partitions in use
    pub fn fuzzifier(&self) -> &Fuzzifier {
        &self.fuzzifier
    }

    /// Engine in use
    pub fn engine(&self) -> &'e MamdaniEngine {
        self.engine
    }

    /// Aggregated curves for a reading, before defuzzification
    pub fn aggregate(&self, reading: &SensorReading) -> AggregatedOutputs<'e> {
        self.engine.aggregate(&self.fuzzifier.fuzzify_reading(reading))
    }

    /// Doses and diagnosis for a reading
    pub fn evaluate<'kb>(&self, reading: &SensorReading, knowledge_base: &'kb [KnowledgeRule]) -> Advice<'kb> {
        let degrees = self.fuzzifier.fuzzify_reading(reading);
        let doses = DoseRecommendation::from_outputs(&self.engine.aggregate(&degrees));
        let diagnosis = match_rule(&degrees, knowledge_base);

        log_debug!(
            "reading {:?}: {} | rule {} at {:.1}%",
            reading,
            doses,
            diagnosis.rule().id,
            diagnosis.confidence_pct()
        );

        Advice {
            degrees,
            doses,
            diagnosis,
        }
    }
}

#[cfg(feature = "std")]
impl Advisor<'static> {
    /// Advisor over [`DEFAULT_ENGINE`](crate::inference::DEFAULT_ENGINE)
    pub fn shared() -> Self {
        Self::new(&crate::inference::DEFAULT_ENGINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        diagnosis::RuleConditions,
        fuzzify::{fuzzify, Rainfall, Term},
    };
    use alloc::{string::ToString, vec};

    #[test]
    fn display_units() {
        let doses = DoseRecommendation {
            irrigation_l: 1599.6,
            fertilizer_kg: 35.004,
            pesticide_ml_per_m2: 45.04,
        };
        assert_eq!(doses.to_string(), "1600 L / 35.00 kg / 45.0 ml/m²");
    }

    #[test]
    fn branches_share_degrees() {
        let engine = MamdaniEngine::new();
        let advisor = Advisor::new(&engine);
        let reading = SensorReading::new(250.0, 5.5, 20.0, Rainfall::Clear);

        let mut rule = KnowledgeRule::default();
        rule.id = "R01".to_string();
        rule.conditions = RuleConditions::new("masam", "kurang", "kering", "cerah");
        rule.outcome.certainty_factor = 0.9;
        let kb = vec![rule];

        let advice = advisor.evaluate(&reading, &kb);
        assert_eq!(advice.degrees, fuzzify(250.0, 5.5, 20.0, false));
        assert_eq!(advice.degrees[Term::HumidityDry], 1.0);
        assert!(advice.doses.irrigation_l > 2500.0);
        assert_eq!(advice.diagnosis.rule().id, "R01");
        assert!((advice.diagnosis.confidence_pct() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn doses_match_aggregate_centroids() {
        let engine = MamdaniEngine::new();
        let advisor = Advisor::new(&engine);
        let reading = SensorReading::new(2200.0, 8.5, 90.0, Rainfall::Raining);

        let outputs = advisor.aggregate(&reading);
        let advice = advisor.evaluate(&reading, &[]);

        assert_eq!(advice.doses, DoseRecommendation::from_outputs(&outputs));
        assert!(advice.diagnosis.is_placeholder());
    }

    #[cfg(feature = "std")]
    #[test]
    fn shared_advisor() {
        let reading = SensorReading::new(800.0, 7.0, 60.0, Rainfall::Clear);
        let local_engine = MamdaniEngine::new();

        assert_eq!(
            Advisor::shared().evaluate(&reading, &[]).doses,
            Advisor::new(&local_engine).evaluate(&reading, &[]).doses
        );
    }
}
