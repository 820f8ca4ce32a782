//! Assertion helpers for scroll positions.

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that two offsets show the same content on a track whose copies
/// are `period` wide.
pub fn assert_same_phase(a: f64, b: f64, period: f64, tolerance: f64, msg: &str) {
    assert!(period > 0.0, "{}: period must be positive", msg);
    let phase = |x: f64| x.rem_euclid(period);
    let diff = (phase(a) - phase(b)).abs();
    let diff = diff.min(period - diff);
    assert!(
        diff <= tolerance,
        "{}: {} and {} differ in phase by {} (period {})",
        msg,
        a,
        b,
        diff,
        period
    );
}
