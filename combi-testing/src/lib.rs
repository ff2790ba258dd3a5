//! Testing helpers.

use assert_float_eq::*;

/// Asserts that `actual` lies within a relative `epsilon` of `expected`, unless the two are
/// identical.
pub fn assert_f64_relative(expected: f64, actual: f64, epsilon: f64) {
    if actual != expected {
        assert_float_relative_eq!(expected, actual, epsilon);
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        assert_f64_relative(expected, actual[index], epsilon);
    }
}
