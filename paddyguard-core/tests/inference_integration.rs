//! Integration tests for the Mamdani branch
//!
//! Runs the reference field scenarios through fuzzification, the three rule
//! banks and centroid defuzzification, checking crisp doses against values
//! worked out by hand from the rule tables.

#![cfg(test)]

#[macro_use]
mod common;

use paddyguard_core::{
    fuzzify, Advisor, Fuzzifier, InputVariable, MamdaniEngine, Rainfall, SensorReading, Term,
};

use common::{DRY_ACIDIC, OPTIMAL, SATURATED_RAIN, SCENARIOS};

#[test]
fn test_dry_acidic_field() {
    let engine = MamdaniEngine::new();
    let outputs = Advisor::new(&engine).aggregate(&DRY_ACIDIC.reading);

    // Only "dry soil" fires in the irrigation bank, unclipped
    assert_eq!(outputs.irrigation.strength_of("dry_soil"), Some(1.0));
    assert_eq!(outputs.irrigation.strength_of("excess_water"), Some(0.0));
    assert_eq!(outputs.irrigation.strength_of("moist_and_clear"), Some(0.0));

    let litres = outputs.irrigation.centroid();
    assert!(litres > 2500.0, "dry field should irrigate much, got {litres}");
    assert_within_tolerance!(litres, 2611.9, 1.0);

    let fertilizer = outputs.fertilizer.centroid();
    assert!(fertilizer < 15.0, "fertilizer should stop, got {fertilizer}");
    assert_within_tolerance!(fertilizer, 9.23, 0.05);

    // Acidic water drives "excessive", dry and clear drives "low"
    assert_within_tolerance!(outputs.pesticide.centroid(), 61.99, 0.05);
}

#[test]
fn test_optimal_field() {
    let engine = MamdaniEngine::new();
    let outputs = Advisor::new(&engine).aggregate(&OPTIMAL.reading);

    assert_within_tolerance!(outputs.irrigation.centroid(), 1600.0, 5.0);
    assert_within_tolerance!(outputs.fertilizer.centroid(), 35.0, 0.05);
    assert_within_tolerance!(outputs.pesticide.centroid(), 45.0, 0.5);

    assert_eq!(outputs.fertilizer.strength_of("maintenance"), Some(1.0));
    assert_eq!(outputs.pesticide.strength_of("moist_soil"), Some(1.0));
}

#[test]
fn test_saturated_rain_field() {
    let engine = MamdaniEngine::new();
    let outputs = Advisor::new(&engine).aggregate(&SATURATED_RAIN.reading);

    assert_eq!(outputs.irrigation.strength_of("excess_water"), Some(1.0));
    assert_within_tolerance!(outputs.irrigation.centroid(), 550.8, 1.0);

    assert_eq!(outputs.fertilizer.strength_of("nutrient_saturated"), Some(1.0));
    assert_within_tolerance!(outputs.fertilizer.centroid(), 9.23, 0.05);

    // "excessive" at full strength, "optimal" clipped at 0.5
    assert_eq!(outputs.pesticide.strength_of("excess_water"), Some(1.0));
    assert_eq!(outputs.pesticide.strength_of("moist_soil"), Some(0.5));
    let pesticide = outputs.pesticide.centroid();
    assert!(pesticide > 65.0, "pesticide should lean excessive, got {pesticide}");
    assert_within_tolerance!(pesticide, 71.26, 0.05);
}

#[test]
fn test_scenario_degrees() {
    let fuzzifier = Fuzzifier::default();

    let dry = fuzzifier.fuzzify_reading(&DRY_ACIDIC.reading);
    assert_eq!(dry.dominant(InputVariable::Nutrient), Term::NutrientLow);
    assert_eq!(dry.dominant(InputVariable::Acidity), Term::AcidityAcidic);
    assert_eq!(dry.dominant(InputVariable::Humidity), Term::HumidityDry);
    assert_eq!(dry.dominant(InputVariable::Rainfall), Term::RainClear);

    let wet = fuzzifier.fuzzify_reading(&SATURATED_RAIN.reading);
    assert_eq!(wet[Term::AcidityNeutral], 0.5);
    assert_eq!(wet[Term::AcidityAlkaline], 0.5);
    assert_eq!(wet[Term::HumidityIdeal], 0.5);
    assert_eq!(wet[Term::HumidityWet], 0.5);
    assert_eq!(wet[Term::NutrientHigh], 1.0);
    assert_eq!(wet[Term::RainFalling], 1.0);
}

#[test]
fn test_rain_suppresses_irrigation() {
    let engine = MamdaniEngine::new();
    let advisor = Advisor::new(&engine);

    let clear = advisor.evaluate(&OPTIMAL.reading, &[]);
    let rainy = SensorReading {
        rainfall: Rainfall::Raining,
        ..OPTIMAL.reading
    };
    let rainy = advisor.evaluate(&rainy, &[]);

    assert!(rainy.doses.irrigation_l < clear.doses.irrigation_l);
    assert!(rainy.doses.irrigation_l < 1200.0);
}

#[test]
fn test_rainfall_proxy_matches_flag() {
    let engine = MamdaniEngine::new();

    for (amount, is_raining) in [(0.0, false), (0.49, false), (0.5, true), (12.0, true)] {
        let reading = SensorReading::new(800.0, 7.0, 60.0, Rainfall::from_amount(amount));
        let degrees = Fuzzifier::default().fuzzify_reading(&reading);
        assert_eq!(degrees, fuzzify(800.0, 7.0, 60.0, is_raining), "amount {amount}");
        assert_eq!(
            engine.aggregate(&degrees).irrigation.centroid(),
            engine.aggregate(&fuzzify(800.0, 7.0, 60.0, is_raining)).irrigation.centroid()
        );
    }
}

#[test]
fn test_nothing_fires_gives_zero() {
    // The shipped partitions always fire some rule, so feed all-zero degrees
    let engine = MamdaniEngine::new();
    let outputs = engine.aggregate(&Default::default());

    assert_eq!(outputs.irrigation.centroid(), 0.0);
    assert_eq!(outputs.fertilizer.centroid(), 0.0);
    assert_eq!(outputs.pesticide.centroid(), 0.0);
}

#[test]
fn test_outputs_stay_inside_domains() {
    let engine = MamdaniEngine::new();
    let advisor = Advisor::new(&engine);

    for scenario in SCENARIOS {
        let doses = advisor.evaluate(&scenario.reading, &[]).doses;
        assert!((0.0..=3000.0).contains(&doses.irrigation_l), "{}", scenario.name);
        assert!((0.0..=100.0).contains(&doses.fertilizer_kg), "{}", scenario.name);
        assert!((0.0..=100.0).contains(&doses.pesticide_ml_per_m2), "{}", scenario.name);
    }
}

#[test]
fn test_extreme_inputs_do_not_fail() {
    let engine = MamdaniEngine::new();
    let advisor = Advisor::new(&engine);

    for reading in [
        SensorReading::new(-500.0, -3.0, -10.0, Rainfall::Clear),
        SensorReading::new(1.0e6, 20.0, 250.0, Rainfall::Raining),
        SensorReading::new(f32::NAN, f32::NAN, f32::NAN, Rainfall::Clear),
    ] {
        let doses = advisor.evaluate(&reading, &[]).doses;
        assert!(doses.irrigation_l.is_finite());
        assert!(doses.fertilizer_kg.is_finite());
        assert!(doses.pesticide_ml_per_m2.is_finite());
    }
}
