//! Output Domains and Consequent Shapes
//!
//! Each output variable is sampled on a fixed grid. The same grid is used to
//! build the consequent curves, to aggregate rule contributions and to take
//! the centroid, so it is defined exactly once here.

use crate::membership::MembershipShape;

/// Maximum number of rules in a single output rule bank.
pub const MAX_RULES_PER_BANK: usize = 8;

// ===== IRRIGATION (litres) =====

/// Sample count of the irrigation domain.
pub const IRRIGATION_SAMPLES: usize = 1000;

/// Lower end of the irrigation domain (L).
pub const IRRIGATION_MIN_L: f32 = 0.0;

/// Upper end of the irrigation domain (L).
pub const IRRIGATION_MAX_L: f32 = 3000.0;

/// Irrigate little: up to 1000 L, fading out by 1200 L.
pub const IRRIGATION_LITTLE: MembershipShape = MembershipShape::trapezoid(0.0, 0.0, 1000.0, 1200.0);

/// Irrigate moderately: centred on 1600 L.
pub const IRRIGATION_MODERATE: MembershipShape = MembershipShape::triangle(1000.0, 1600.0, 2200.0);

/// Irrigate much: from 2500 L to the top of the domain.
pub const IRRIGATION_MUCH: MembershipShape = MembershipShape::trapezoid(2000.0, 2500.0, 3000.0, 3000.0);

// ===== DOSE DOMAINS =====

/// Sample count shared by the fertilizer and pesticide domains.
pub const DOSE_SAMPLES: usize = 500;

// ===== FERTILIZER (kg) =====

/// Lower end of the fertilizer domain (kg).
pub const FERTILIZER_MIN_KG: f32 = 0.0;

/// Upper end of the fertilizer domain (kg).
pub const FERTILIZER_MAX_KG: f32 = 100.0;

/// Stop fertilizing.
pub const FERTILIZER_STOP: MembershipShape = MembershipShape::trapezoid(0.0, 0.0, 10.0, 25.0);

/// Reduced maintenance dose, centred on 35 kg.
pub const FERTILIZER_REDUCED: MembershipShape = MembershipShape::triangle(15.0, 35.0, 55.0);

/// Full dose, centred on 62.5 kg.
pub const FERTILIZER_FULL: MembershipShape = MembershipShape::triangle(45.0, 62.5, 80.0);

// ===== PESTICIDE (ml/m²) =====

/// Lower end of the pesticide domain (ml/m²).
pub const PESTICIDE_MIN_ML_PER_M2: f32 = 0.0;

/// Upper end of the pesticide domain (ml/m²).
pub const PESTICIDE_MAX_ML_PER_M2: f32 = 100.0;

/// Low pesticide dose, centred on 15 ml/m².
pub const PESTICIDE_LOW: MembershipShape = MembershipShape::triangle(0.0, 15.0, 30.0);

/// Optimal pesticide dose, centred on 45 ml/m².
pub const PESTICIDE_OPTIMAL: MembershipShape = MembershipShape::triangle(25.0, 45.0, 65.0);

/// Excessive pest pressure: from 75 ml/m² to the top of the domain.
pub const PESTICIDE_EXCESSIVE: MembershipShape = MembershipShape::trapezoid(55.0, 75.0, 100.0, 100.0);
