//! Angle and scalar comparison helpers

use std::f64::consts::{PI, TAU};

/// Normalize an angle into `[0, 2π)`
pub fn correct_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to TAU for tiny negative inputs
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Check whether two values differ by no more than `tolerance`
pub fn equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Check whether two angles describe the same line inclination
///
/// Opposite directions are the same inclination: a line from A to B
/// and from B to A lie on the same line.
pub fn is_same_inclination(a: f64, b: f64, tolerance: f64) -> bool {
    let d = correct_angle(a - b).rem_euclid(PI);
    d.min(PI - d) <= tolerance
}

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_correct_angle() {
        assert_eq!(correct_angle(0.0), 0.0);
        assert!((correct_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((correct_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert!(correct_angle(-1e-18) < TAU);
    }

    #[test]
    fn test_same_inclination() {
        assert!(is_same_inclination(0.0, PI, 1e-9));
        assert!(is_same_inclination(FRAC_PI_2, -FRAC_PI_2, 1e-9));
        assert!(is_same_inclination(0.001, PI - 0.001, 0.01));
        assert!(!is_same_inclination(0.0, FRAC_PI_2, 0.01));
    }

    #[test]
    fn test_equal_is_inclusive() {
        assert!(equal(1.0, 1.0, 0.0));
        assert!(equal(1.0, 1.5, 0.5));
        assert!(!equal(1.0, 1.5, 0.49));
    }
}
