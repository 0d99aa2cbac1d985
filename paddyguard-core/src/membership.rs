//! Membership Functions over Sampled Domains
//!
//! ## Overview
//!
//! Output variables are represented numerically: a fixed grid of sample
//! points (the [`SampledDomain`]) and, aligned with it, a degree of
//! membership per point (the [`MembershipCurve`]). Both are const-generic
//! arrays so an entire inference runs without touching the heap.
//!
//! ## Shapes
//!
//! ```text
//!   triangular(a, b, c)          trapezoidal(a, b, c, d)
//!
//!  1.0      ╱╲                   1.0     ┌──────┐
//!          ╱  ╲                         ╱        ╲
//!  0.0 ───╱    ╲───              0.0 ──╱          ╲──
//!        a  b   c                     a  b      c  d
//! ```
//!
//! A sample that lands exactly on an apex (or inside a trapezoid's flat top)
//! gets exactly `1.0`, never an interpolated `0.9999...`. A zero-width ramp
//! (`a == b`, `b == c`, `c == d`) is a vertical step; no division happens.
//!
//! ```rust
//! use paddyguard_core::membership::{triangular, SampledDomain};
//!
//! let domain = SampledDomain::<101>::linspace(0.0, 100.0);
//! let curve = triangular(&domain, 20.0, 50.0, 80.0);
//!
//! assert_eq!(curve.degrees()[50], 1.0);
//! assert_eq!(curve.degrees()[20], 0.0);
//! assert_eq!(curve.degrees()[35], 0.5);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{FuzzyError, FuzzyResult};

/// Ordered, strictly increasing sample grid over a variable's range
#[derive(Debug, Clone, PartialEq)]
pub struct SampledDomain<const N: usize> {
    points: [f32; N],
}

impl<const N: usize> SampledDomain<N> {
    /// Evenly spaced grid from `start` to `end`, both included.
    ///
    /// Spacing is computed in `f64` and the last point is pinned to `end`
    /// so the grid never overshoots its range.
    pub fn linspace(start: f32, end: f32) -> Self {
        let first = start as f64;
        let step = if N > 1 {
            (end as f64 - first) / (N - 1) as f64
        } else {
            0.0
        };

        let points = core::array::from_fn(|i| {
            if N > 1 && i == N - 1 {
                end
            } else {
                (first + step * i as f64) as f32
            }
        });

        Self { points }
    }

    /// Grid from explicit sample points
    pub fn from_points(points: [f32; N]) -> FuzzyResult<Self> {
        if N < 2 {
            return Err(FuzzyError::InvalidDomain {
                reason: "need at least two samples",
            });
        }

        if points.iter().any(|p| !p.is_finite()) {
            return Err(FuzzyError::InvalidValue);
        }

        if points.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(FuzzyError::InvalidDomain {
                reason: "samples must be strictly increasing",
            });
        }

        Ok(Self { points })
    }

    /// Sample points in ascending order
    pub fn points(&self) -> &[f32; N] {
        &self.points
    }

    /// First sample point
    pub fn start(&self) -> f32 {
        self.points.first().copied().unwrap_or(0.0)
    }

    /// Last sample point
    pub fn end(&self) -> f32 {
        self.points.last().copied().unwrap_or(0.0)
    }

    /// Number of samples
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-sample domain
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

/// Degrees of membership aligned one-to-one with a [`SampledDomain`]
///
/// Every degree lies in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipCurve<const N: usize> {
    degrees: [f32; N],
}

impl<const N: usize> MembershipCurve<N> {
    /// Curve with no membership anywhere
    pub const fn zeros() -> Self {
        Self { degrees: [0.0; N] }
    }

    /// Evaluate `degree` at every sample point of `domain`
    fn from_domain(domain: &SampledDomain<N>, degree: impl Fn(f32) -> f32) -> Self {
        let points = domain.points();
        Self {
            degrees: core::array::from_fn(|i| degree(points[i])),
        }
    }

    /// Membership degrees in domain order
    pub fn degrees(&self) -> &[f32; N] {
        &self.degrees
    }

    /// Pointwise minimum with a scalar firing strength (min implication)
    pub fn clipped(&self, strength: f32) -> Self {
        let level = strength.clamp(0.0, 1.0);
        Self {
            degrees: self.degrees.map(|d| d.min(level)),
        }
    }

    /// Pointwise maximum with another curve, in place (max aggregation)
    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self.degrees.iter_mut().zip(other.degrees.iter()) {
            *mine = mine.max(*theirs);
        }
    }

    /// Highest degree on the curve
    pub fn peak(&self) -> f32 {
        self.degrees.iter().fold(0.0_f32, |acc, d| acc.max(*d))
    }

    /// True when no sample has positive membership
    pub fn is_zero(&self) -> bool {
        self.degrees.iter().all(|d| *d <= 0.0)
    }
}

impl<const N: usize> Default for MembershipCurve<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Triangular membership curve with feet at `a`, `c` and apex at `b`
pub fn triangular<const N: usize>(
    domain: &SampledDomain<N>,
    a: f32,
    b: f32,
    c: f32,
) -> MembershipCurve<N> {
    MembershipCurve::from_domain(domain, |x| triangle_degree(x, a, b, c))
}

/// Trapezoidal membership curve with feet at `a`, `d` and a flat top over [`b`, `c`]
pub fn trapezoidal<const N: usize>(
    domain: &SampledDomain<N>,
    a: f32,
    b: f32,
    c: f32,
    d: f32,
) -> MembershipCurve<N> {
    MembershipCurve::from_domain(domain, |x| trapezoid_degree(x, a, b, c, d))
}

fn triangle_degree(x: f32, a: f32, b: f32, c: f32) -> f32 {
    if x == b {
        1.0
    } else if x > a && x < b && b != a {
        (x - a) / (b - a)
    } else if x > b && x < c && c != b {
        (c - x) / (c - b)
    } else {
        0.0
    }
}

fn trapezoid_degree(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    if x >= b && x <= c {
        1.0
    } else if x > a && x < b && b != a {
        (x - a) / (b - a)
    } else if x > c && x < d && d != c {
        (d - x) / (d - c)
    } else {
        0.0
    }
}

/// Parametric membership shape, evaluated onto a domain on demand
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MembershipShape {
    /// Triangle with feet `a`, `c` and apex `b`
    Triangular {
        /// Left foot
        a: f32,
        /// Apex
        b: f32,
        /// Right foot
        c: f32,
    },
    /// Trapezoid with feet `a`, `d` and flat top `b..=c`
    Trapezoidal {
        /// Left foot
        a: f32,
        /// Start of the flat top
        b: f32,
        /// End of the flat top
        c: f32,
        /// Right foot
        d: f32,
    },
}

impl MembershipShape {
    /// Triangle shape
    pub const fn triangle(a: f32, b: f32, c: f32) -> Self {
        Self::Triangular { a, b, c }
    }

    /// Trapezoid shape
    pub const fn trapezoid(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    /// Degree of membership of a single crisp value
    pub fn degree(&self, x: f32) -> f32 {
        match *self {
            Self::Triangular { a, b, c } => triangle_degree(x, a, b, c),
            Self::Trapezoidal { a, b, c, d } => trapezoid_degree(x, a, b, c, d),
        }
    }

    /// Sample the shape over a whole domain
    pub fn evaluate<const N: usize>(&self, domain: &SampledDomain<N>) -> MembershipCurve<N> {
        match *self {
            Self::Triangular { a, b, c } => triangular(domain, a, b, c),
            Self::Trapezoidal { a, b, c, d } => trapezoidal(domain, a, b, c, d),
        }
    }

    /// Interval outside of which membership is zero
    pub fn support(&self) -> (f32, f32) {
        match *self {
            Self::Triangular { a, c, .. } => (a, c),
            Self::Trapezoidal { a, d, .. } => (a, d),
        }
    }

    /// Interval on which membership is exactly one
    pub fn core(&self) -> (f32, f32) {
        match *self {
            Self::Triangular { b, .. } => (b, b),
            Self::Trapezoidal { b, c, .. } => (b, c),
        }
    }

    /// Check that breakpoints are finite and in non-decreasing order
    pub fn validate(&self) -> FuzzyResult<()> {
        let ordered = match *self {
            Self::Triangular { a, b, c } => {
                check_finite(&[a, b, c])?;
                a <= b && b <= c
            }
            Self::Trapezoidal { a, b, c, d } => {
                check_finite(&[a, b, c, d])?;
                a <= b && b <= c && c <= d
            }
        };

        if ordered {
            Ok(())
        } else {
            Err(FuzzyError::InvalidShape {
                reason: "breakpoints out of order",
            })
        }
    }
}

pub(crate) fn check_finite(values: &[f32]) -> FuzzyResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(FuzzyError::InvalidValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let domain = SampledDomain::<1000>::linspace(0.0, 3000.0);
        assert_eq!(domain.start(), 0.0);
        assert_eq!(domain.end(), 3000.0);
        assert_eq!(domain.len(), 1000);
        assert!(domain.points().windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_integer_grid_is_exact() {
        let domain = SampledDomain::<101>::linspace(0.0, 100.0);
        for (i, x) in domain.points().iter().enumerate() {
            assert_eq!(*x, i as f32);
        }
    }

    #[test]
    fn from_points_rejects_unsorted() {
        let result = SampledDomain::from_points([0.0, 2.0, 1.0]);
        assert!(matches!(result, Err(FuzzyError::InvalidDomain { .. })));

        let result = SampledDomain::from_points([0.0, f32::NAN, 1.0]);
        assert_eq!(result, Err(FuzzyError::InvalidValue));

        assert!(SampledDomain::from_points([0.0, 0.5, 1.0]).is_ok());
    }

    #[test]
    fn triangle_apex_and_feet() {
        let domain = SampledDomain::<101>::linspace(0.0, 100.0);
        let curve = triangular(&domain, 20.0, 50.0, 80.0);
        let d = curve.degrees();

        assert_eq!(d[50], 1.0);
        assert_eq!(d[20], 0.0);
        assert_eq!(d[80], 0.0);
        assert_eq!(d[10], 0.0);
        assert_eq!(d[90], 0.0);
        assert_eq!(d[65], 0.5);
    }

    #[test]
    fn trapezoid_flat_top() {
        let domain = SampledDomain::<101>::linspace(0.0, 100.0);
        let curve = trapezoidal(&domain, 10.0, 30.0, 60.0, 70.0);
        let d = curve.degrees();

        assert!(d[30..=60].iter().all(|v| *v == 1.0));
        assert_eq!(d[20], 0.5);
        assert_eq!(d[65], 0.5);
        assert_eq!(d[10], 0.0);
        assert_eq!(d[70], 0.0);
    }

    #[test]
    fn degenerate_ramps_are_steps() {
        let domain = SampledDomain::<11>::linspace(0.0, 10.0);

        // Left shoulder starting at the domain edge
        let left = trapezoidal(&domain, 0.0, 0.0, 4.0, 6.0);
        assert_eq!(left.degrees()[0], 1.0);
        assert_eq!(left.degrees()[5], 0.5);

        // Right shoulder ending at the domain edge
        let right = trapezoidal(&domain, 4.0, 6.0, 10.0, 10.0);
        assert_eq!(right.degrees()[10], 1.0);

        // Right-angled triangle
        let tri = triangular(&domain, 5.0, 5.0, 10.0);
        assert_eq!(tri.degrees()[5], 1.0);
        assert_eq!(tri.degrees()[4], 0.0);
        assert!(tri.degrees().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn clip_and_union() {
        let domain = SampledDomain::<101>::linspace(0.0, 100.0);
        let low = triangular(&domain, 0.0, 20.0, 40.0).clipped(0.25);
        let high = triangular(&domain, 60.0, 80.0, 100.0);

        assert_eq!(low.peak(), 0.25);

        let mut agg = MembershipCurve::zeros();
        assert!(agg.is_zero());
        agg.union_with(&low);
        agg.union_with(&high);

        assert_eq!(agg.degrees()[20], 0.25);
        assert_eq!(agg.degrees()[80], 1.0);
        assert_eq!(agg.degrees()[50], 0.0);
    }

    #[test]
    fn shape_validation() {
        assert!(MembershipShape::triangle(0.0, 15.0, 30.0).validate().is_ok());
        assert!(MembershipShape::trapezoid(0.0, 0.0, 10.0, 25.0).validate().is_ok());
        assert!(matches!(
            MembershipShape::triangle(30.0, 15.0, 0.0).validate(),
            Err(FuzzyError::InvalidShape { .. })
        ));
        assert_eq!(
            MembershipShape::triangle(0.0, f32::INFINITY, 30.0).validate(),
            Err(FuzzyError::InvalidValue)
        );
    }

    #[test]
    fn shape_degree_matches_curve() {
        let domain = SampledDomain::<101>::linspace(0.0, 100.0);
        let shape = MembershipShape::trapezoid(55.0, 75.0, 100.0, 100.0);
        let curve = shape.evaluate(&domain);

        for (x, d) in domain.points().iter().zip(curve.degrees().iter()) {
            assert_eq!(shape.degree(*x), *d);
        }
        assert_eq!(shape.support(), (55.0, 100.0));
        assert_eq!(shape.core(), (75.0, 100.0));
    }
}
