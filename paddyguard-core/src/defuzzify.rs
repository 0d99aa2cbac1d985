//! Centroid Defuzzification
//!
//! Collapses an aggregated membership curve to one crisp number, the
//! membership-weighted mean of the domain:
//!
//! ```text
//!            Σ xᵢ · μᵢ
//! output = ───────────
//!             Σ μᵢ
//! ```
//!
//! An all-zero curve has no centre of mass. That happens when no rule in a
//! bank fired and means "nothing to recommend"; the result is `0.0`, which
//! callers treat as a valid sentinel rather than a fault.
//!
//! Sums run in `f64`: a 1000-point irrigation grid weighted up to 3000 L
//! loses visible precision in `f32`.

use crate::membership::{MembershipCurve, SampledDomain};

/// Centre of area of `curve` over `domain`; `0.0` for an empty curve
pub fn centroid<const N: usize>(domain: &SampledDomain<N>, curve: &MembershipCurve<N>) -> f32 {
    let (moment, mass) = domain
        .points()
        .iter()
        .zip(curve.degrees().iter())
        .fold((0.0_f64, 0.0_f64), |(moment, mass), (x, mu)| {
            let mu = *mu as f64;
            (moment + *x as f64 * mu, mass + mu)
        });

    if mass == 0.0 {
        0.0
    } else {
        (moment / mass) as f32
    }
}
