//! Mamdani Inference Engine
//!
//! ## Overview
//!
//! For each output variable a fixed rule bank is evaluated against the
//! fuzzified inputs:
//!
//! ```text
//! strength_r  = condition_r(mu)                      (min / max over term degrees)
//! clipped_r   = min(strength_r, consequent_r(x))     pointwise over the domain
//! aggregate   = max(0, clipped_1, ..., clipped_n)    pointwise over the domain
//! ```
//!
//! The aggregate curve keeps a reference to the domain it was built on, so
//! the centroid is always taken over the same grid ([`Aggregation::centroid`]).
//!
//! ## Sharing
//!
//! A [`MamdaniEngine`] owns the sampled domains and the nine consequent
//! curves. It is built once and only read afterwards, so a single instance
//! can serve any number of threads. With the `std` feature a process-wide
//! instance is available as [`DEFAULT_ENGINE`].
//!
//! ```rust
//! use paddyguard_core::{fuzzify, MamdaniEngine};
//!
//! let engine = MamdaniEngine::new();
//! let outputs = engine.aggregate(&fuzzify(800.0, 7.0, 60.0, false));
//!
//! let litres = outputs.irrigation.centroid();
//! assert!((litres - 1600.0).abs() < 5.0);
//! ```

pub mod rules;

use core::marker::PhantomData;

use heapless::Vec;

use crate::{
    constants::outputs::{
        DOSE_SAMPLES, FERTILIZER_FULL, FERTILIZER_MAX_KG, FERTILIZER_MIN_KG, FERTILIZER_REDUCED,
        FERTILIZER_STOP, IRRIGATION_LITTLE, IRRIGATION_MAX_L, IRRIGATION_MIN_L, IRRIGATION_MODERATE,
        IRRIGATION_MUCH, IRRIGATION_SAMPLES, MAX_RULES_PER_BANK, PESTICIDE_EXCESSIVE,
        PESTICIDE_LOW, PESTICIDE_MAX_ML_PER_M2, PESTICIDE_MIN_ML_PER_M2, PESTICIDE_OPTIMAL,
    },
    defuzzify::centroid,
    fuzzify::TermDegrees,
    membership::{MembershipCurve, MembershipShape, SampledDomain},
};

use rules::{
    FertilizerTerm, IrrigationTerm, MamdaniRule, OutputTerm, PesticideTerm, FERTILIZER_RULES,
    IRRIGATION_RULES, PESTICIDE_RULES,
};

/// Firing strength of one rule during an aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleFiring {
    /// Rule identifier
    pub rule: &'static str,
    /// Consequent term key
    pub consequent: &'static str,
    /// Firing strength in [0, 1]
    pub strength: f32,
}

/// Per-rule firing strengths of one bank, in bank order
pub type FiringTrace = Vec<RuleFiring, MAX_RULES_PER_BANK>;

/// Output variable: sampled domain plus one consequent curve per term
#[derive(Debug, Clone)]
pub struct OutputVariable<T: OutputTerm, const N: usize> {
    name: &'static str,
    domain: SampledDomain<N>,
    curves: [MembershipCurve<N>; 3],
    _terms: PhantomData<T>,
}

impl<T: OutputTerm, const N: usize> OutputVariable<T, N> {
    /// Build an output variable; `shapes` are indexed by [`OutputTerm::index`]
    pub fn new(name: &'static str, domain: SampledDomain<N>, shapes: [MembershipShape; 3]) -> Self {
        let curves = shapes.map(|shape| shape.evaluate(&domain));
        Self {
            name,
            domain,
            curves,
            _terms: PhantomData,
        }
    }

    /// Variable name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Sampled domain
    pub fn domain(&self) -> &SampledDomain<N> {
        &self.domain
    }

    /// Consequent curve of a term
    pub fn curve(&self, term: T) -> &MembershipCurve<N> {
        &self.curves[term.index()]
    }

    /// Run a rule bank against the fuzzified inputs
    pub fn aggregate(&self, bank: &[MamdaniRule<T>], degrees: &TermDegrees) -> Aggregation<'_, N> {
        let mut curve = MembershipCurve::zeros();
        let mut trace = FiringTrace::new();

        for rule in bank {
            let strength = rule.condition.strength(degrees);
            curve.union_with(&self.curve(rule.consequent).clipped(strength));

            let firing = RuleFiring {
                rule: rule.name,
                consequent: rule.consequent.key(),
                strength,
            };
            if trace.push(firing).is_err() {
                log_warn!("{}: firing trace full, dropping rule {}", self.name, rule.name);
            }
        }

        Aggregation {
            domain: &self.domain,
            curve,
            trace,
        }
    }
}

/// Aggregated membership curve of one output variable
#[derive(Debug, Clone)]
pub struct Aggregation<'a, const N: usize> {
    domain: &'a SampledDomain<N>,
    curve: MembershipCurve<N>,
    trace: FiringTrace,
}

impl<'a, const N: usize> Aggregation<'a, N> {
    /// Domain the curve is sampled on
    pub fn domain(&self) -> &'a SampledDomain<N> {
        self.domain
    }

    /// Aggregated curve
    pub fn curve(&self) -> &MembershipCurve<N> {
        &self.curve
    }

    /// Firing strength of every rule in the bank
    pub fn trace(&self) -> &FiringTrace {
        &self.trace
    }

    /// Firing strength of a rule by name
    pub fn strength_of(&self, rule: &str) -> Option<f32> {
        self.trace.iter().find(|f| f.rule == rule).map(|f| f.strength)
    }

    /// Crisp value by centroid; `0.0` when no rule fired
    pub fn centroid(&self) -> f32 {
        centroid(self.domain, &self.curve)
    }
}

/// Aggregates for all three output variables
#[derive(Debug, Clone)]
pub struct AggregatedOutputs<'a> {
    /// Irrigation volume (L)
    pub irrigation: Aggregation<'a, IRRIGATION_SAMPLES>,
    /// Fertilizer dose (kg)
    pub fertilizer: Aggregation<'a, DOSE_SAMPLES>,
    /// Pesticide dose (ml/m²)
    pub pesticide: Aggregation<'a, DOSE_SAMPLES>,
}

/// Output variables and rule banks for paddy dosing
#[derive(Debug, Clone)]
pub struct MamdaniEngine {
    irrigation: OutputVariable<IrrigationTerm, IRRIGATION_SAMPLES>,
    fertilizer: OutputVariable<FertilizerTerm, DOSE_SAMPLES>,
    pesticide: OutputVariable<PesticideTerm, DOSE_SAMPLES>,
}

impl MamdaniEngine {
    /// Engine built from the shipped domain and shape tables
    pub fn new() -> Self {
        Self::with_outputs(
            OutputVariable::new(
                "irrigation",
                SampledDomain::linspace(IRRIGATION_MIN_L, IRRIGATION_MAX_L),
                [IRRIGATION_LITTLE, IRRIGATION_MODERATE, IRRIGATION_MUCH],
            ),
            OutputVariable::new(
                "fertilizer",
                SampledDomain::linspace(FERTILIZER_MIN_KG, FERTILIZER_MAX_KG),
                [FERTILIZER_STOP, FERTILIZER_REDUCED, FERTILIZER_FULL],
            ),
            OutputVariable::new(
                "pesticide",
                SampledDomain::linspace(PESTICIDE_MIN_ML_PER_M2, PESTICIDE_MAX_ML_PER_M2),
                [PESTICIDE_LOW, PESTICIDE_OPTIMAL, PESTICIDE_EXCESSIVE],
            ),
        )
    }

    /// Engine with custom output variables; rule banks stay fixed
    pub fn with_outputs(
        irrigation: OutputVariable<IrrigationTerm, IRRIGATION_SAMPLES>,
        fertilizer: OutputVariable<FertilizerTerm, DOSE_SAMPLES>,
        pesticide: OutputVariable<PesticideTerm, DOSE_SAMPLES>,
    ) -> Self {
        Self {
            irrigation,
            fertilizer,
            pesticide,
        }
    }

    /// Irrigation output variable
    pub fn irrigation(&self) -> &OutputVariable<IrrigationTerm, IRRIGATION_SAMPLES> {
        &self.irrigation
    }

    /// Fertilizer output variable
    pub fn fertilizer(&self) -> &OutputVariable<FertilizerTerm, DOSE_SAMPLES> {
        &self.fertilizer
    }

    /// Pesticide output variable
    pub fn pesticide(&self) -> &OutputVariable<PesticideTerm, DOSE_SAMPLES> {
        &self.pesticide
    }

    /// Evaluate all three rule banks
    pub fn aggregate(&self, degrees: &TermDegrees) -> AggregatedOutputs<'_> {
        AggregatedOutputs {
            irrigation: self.irrigation.aggregate(&IRRIGATION_RULES, degrees),
            fertilizer: self.fertilizer.aggregate(&FERTILIZER_RULES, degrees),
            pesticide: self.pesticide.aggregate(&PESTICIDE_RULES, degrees),
        }
    }
}

impl Default for MamdaniEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
lazy_static::lazy_static! {
    /// Process-wide engine built from the shipped tables on first use
    pub static ref DEFAULT_ENGINE: MamdaniEngine = MamdaniEngine::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzify::fuzzify;

    #[test]
    fn no_rule_fires_on_empty_degrees() {
        let engine = MamdaniEngine::new();
        let outputs = engine.aggregate(&TermDegrees::default());

        assert!(outputs.irrigation.curve().is_zero());
        assert!(outputs.fertilizer.curve().is_zero());
        assert!(outputs.pesticide.curve().is_zero());
        assert_eq!(outputs.irrigation.centroid(), 0.0);
    }

    #[test]
    fn dry_soil_irrigates_much() {
        let engine = MamdaniEngine::new();
        let outputs = engine.aggregate(&fuzzify(250.0, 5.5, 20.0, false));

        assert_eq!(outputs.irrigation.curve(), engine.irrigation().curve(IrrigationTerm::Much));
        assert_eq!(outputs.irrigation.strength_of("dry_soil"), Some(1.0));
        assert_eq!(outputs.irrigation.strength_of("excess_water"), Some(0.0));
    }

    #[test]
    fn clipping_limits_peak() {
        let engine = MamdaniEngine::new();
        // Moisture 90%: ideal 0.5, wet 0.5; clear sky
        let outputs = engine.aggregate(&fuzzify(800.0, 7.5, 90.0, false));

        assert_eq!(outputs.irrigation.strength_of("moist_and_clear"), Some(0.5));
        assert_eq!(outputs.irrigation.strength_of("excess_water"), Some(0.5));
        assert_eq!(outputs.irrigation.curve().peak(), 0.5);
    }

    #[test]
    fn trace_follows_bank_order() {
        let engine = MamdaniEngine::new();
        let outputs = engine.aggregate(&fuzzify(800.0, 7.0, 60.0, false));

        let names: alloc::vec::Vec<&str> = outputs.fertilizer.trace().iter().map(|f| f.rule).collect();
        assert_eq!(names.len(), FERTILIZER_RULES.len());
        assert_eq!(names[0], "dry_soil");
        assert_eq!(names[5], "maintenance");
        assert_eq!(outputs.fertilizer.trace()[5].consequent, "pupuk_sedikit");
    }

    #[test]
    fn aggregation_reuses_engine_domain() {
        let engine = MamdaniEngine::new();
        let outputs = engine.aggregate(&fuzzify(800.0, 7.0, 60.0, false));
        assert!(core::ptr::eq(outputs.pesticide.domain(), engine.pesticide().domain()));
    }

    #[cfg(feature = "std")]
    #[test]
    fn shared_engine_matches_fresh_one() {
        let mu = fuzzify(1200.0, 6.8, 50.0, false);
        let shared = DEFAULT_ENGINE.aggregate(&mu);
        let fresh_engine = MamdaniEngine::new();
        let fresh = fresh_engine.aggregate(&mu);
        assert_eq!(shared.pesticide.centroid(), fresh.pesticide.centroid());
    }

    #[test]
    fn shipped_shapes_are_valid() {
        for shape in [
            IRRIGATION_LITTLE, IRRIGATION_MODERATE, IRRIGATION_MUCH,
            FERTILIZER_STOP, FERTILIZER_REDUCED, FERTILIZER_FULL,
            PESTICIDE_LOW, PESTICIDE_OPTIMAL, PESTICIDE_EXCESSIVE,
        ] {
            assert!(shape.validate().is_ok());
        }
    }
}
