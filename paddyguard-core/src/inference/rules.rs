//! Rule Banks for the Three Output Variables
//!
//! Rules are plain data: a condition tree over linguistic terms and the
//! consequent term of one output variable. The engine never branches on
//! agronomy; everything it knows is in the three tables at the bottom of
//! this file.
//!
//! ## Operators
//!
//! - `Is(term)`: degree of the term
//! - `AllOf(..)`: fuzzy AND, minimum of the children
//! - `AnyOf(..)`: fuzzy OR, maximum of the children
//!
//! [`EXCESS_WATER`] (`hum_basah OR hujan_turun`) appears in both the
//! irrigation and pesticide banks. `max` is exact, so evaluating it once per
//! rule yields bit-identical results to sharing the value.

use crate::fuzzify::{Term, TermDegrees};

/// Antecedent of a rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    /// Degree of a single term
    Is(Term),
    /// Minimum over children (AND)
    AllOf(&'static [Condition]),
    /// Maximum over children (OR)
    AnyOf(&'static [Condition]),
}

impl Condition {
    /// Firing strength of this condition
    pub fn strength(&self, degrees: &TermDegrees) -> f32 {
        match self {
            Condition::Is(term) => degrees.get(*term),
            Condition::AllOf(children) => children
                .iter()
                .map(|child| child.strength(degrees))
                .fold(1.0, f32::min),
            Condition::AnyOf(children) => children
                .iter()
                .map(|child| child.strength(degrees))
                .fold(0.0, f32::max),
        }
    }
}

/// Consequent term of an output variable
pub trait OutputTerm: Copy + core::fmt::Debug + PartialEq {
    /// Number of terms the output variable has
    const COUNT: usize;

    /// Position of the term's curve in the output variable
    fn index(self) -> usize;

    /// Canonical key
    fn key(self) -> &'static str;
}

/// Irrigation volume terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationTerm {
    /// `irigasi_sedikit`
    Little,
    /// `irigasi_cukup`
    Moderate,
    /// `irigasi_banyak`
    Much,
}

impl OutputTerm for IrrigationTerm {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            IrrigationTerm::Little => "irigasi_sedikit",
            IrrigationTerm::Moderate => "irigasi_cukup",
            IrrigationTerm::Much => "irigasi_banyak",
        }
    }
}

/// Fertilizer dose terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FertilizerTerm {
    /// `pupuk_stop`
    Stop,
    /// `pupuk_sedikit`
    Reduced,
    /// `pupuk_penuh`
    Full,
}

impl OutputTerm for FertilizerTerm {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            FertilizerTerm::Stop => "pupuk_stop",
            FertilizerTerm::Reduced => "pupuk_sedikit",
            FertilizerTerm::Full => "pupuk_penuh",
        }
    }
}

/// Pesticide dose terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PesticideTerm {
    /// `pestisida_kurang`
    Low,
    /// `pestisida_optimal`
    Optimal,
    /// `pestisida_berlebih`
    Excessive,
}

impl OutputTerm for PesticideTerm {
    const COUNT: usize = 3;

    fn index(self) -> usize {
        self as usize
    }

    fn key(self) -> &'static str {
        match self {
            PesticideTerm::Low => "pestisida_kurang",
            PesticideTerm::Optimal => "pestisida_optimal",
            PesticideTerm::Excessive => "pestisida_berlebih",
        }
    }
}

/// Implication `condition → consequent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MamdaniRule<T: OutputTerm> {
    /// Short identifier for traces
    pub name: &'static str,
    /// Antecedent
    pub condition: Condition,
    /// Consequent output term
    pub consequent: T,
}

impl<T: OutputTerm> MamdaniRule<T> {
    const fn new(name: &'static str, condition: Condition, consequent: T) -> Self {
        Self { name, condition, consequent }
    }
}

/// Standing water: soil waterlogged or rain falling
pub const EXCESS_WATER: Condition = Condition::AnyOf(&[
    Condition::Is(Term::HumidityWet),
    Condition::Is(Term::RainFalling),
]);

/// Irrigation bank
pub const IRRIGATION_RULES: [MamdaniRule<IrrigationTerm>; 3] = [
    MamdaniRule::new("dry_soil", Condition::Is(Term::HumidityDry), IrrigationTerm::Much),
    MamdaniRule::new("excess_water", EXCESS_WATER, IrrigationTerm::Little),
    MamdaniRule::new(
        "moist_and_clear",
        Condition::AllOf(&[Condition::Is(Term::HumidityIdeal), Condition::Is(Term::RainClear)]),
        IrrigationTerm::Moderate,
    ),
];

/// Fertilizer bank
pub const FERTILIZER_RULES: [MamdaniRule<FertilizerTerm>; 6] = [
    MamdaniRule::new("dry_soil", Condition::Is(Term::HumidityDry), FertilizerTerm::Stop),
    MamdaniRule::new("acidic_water", Condition::Is(Term::AcidityAcidic), FertilizerTerm::Stop),
    MamdaniRule::new("nutrient_saturated", Condition::Is(Term::NutrientHigh), FertilizerTerm::Stop),
    MamdaniRule::new(
        "rain_starved",
        Condition::AllOf(&[
            Condition::Is(Term::RainFalling),
            Condition::Is(Term::NutrientLow),
            Condition::Is(Term::AcidityNeutral),
        ]),
        FertilizerTerm::Full,
    ),
    MamdaniRule::new(
        "moist_starved",
        Condition::AllOf(&[
            Condition::Is(Term::HumidityIdeal),
            Condition::Is(Term::AcidityNeutral),
            Condition::Is(Term::NutrientLow),
        ]),
        FertilizerTerm::Full,
    ),
    MamdaniRule::new(
        "maintenance",
        Condition::AllOf(&[
            Condition::Is(Term::HumidityIdeal),
            Condition::Is(Term::AcidityNeutral),
            Condition::Is(Term::NutrientIdeal),
        ]),
        FertilizerTerm::Reduced,
    ),
];

/// Pesticide bank
pub const PESTICIDE_RULES: [MamdaniRule<PesticideTerm>; 4] = [
    MamdaniRule::new("acidic_water", Condition::Is(Term::AcidityAcidic), PesticideTerm::Excessive),
    MamdaniRule::new("excess_water", EXCESS_WATER, PesticideTerm::Excessive),
    MamdaniRule::new(
        "dry_and_clear",
        Condition::AllOf(&[Condition::Is(Term::HumidityDry), Condition::Is(Term::RainClear)]),
        PesticideTerm::Low,
    ),
    MamdaniRule::new("moist_soil", Condition::Is(Term::HumidityIdeal), PesticideTerm::Optimal),
];
