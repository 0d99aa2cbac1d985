//! Assertion helpers shared by the integration tests

macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual = $actual;
        let diff = (actual - $expected).abs();
        if diff > $tolerance {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, $expected, diff
            );
        }
    };
}

macro_rules! assert_degree {
    ($value:expr) => {
        let value = $value;
        if !(0.0..=1.0).contains(&value) {
            panic!("Membership degree {} outside [0, 1]", value);
        }
    };
}
