//! Interpolation and rounding helpers shared by the noise generators.
//!
//! Rounding follows the legacy helpers exactly (truncate, then step down for
//! negative fractions) so seeded output stays reproducible.

/// Quintic fade curve: `x³(6x² − 15x + 10)`.
#[inline]
#[must_use]
pub fn smoothstep(x: f64) -> f64 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation between two values.
#[inline]
#[must_use]
pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Bilinear interpolation.
#[inline]
#[must_use]
pub fn lerp2(delta1: f64, delta2: f64, v00: f64, v10: f64, v01: f64, v11: f64) -> f64 {
    lerp(delta2, lerp(delta1, v00, v10), lerp(delta1, v01, v11))
}

/// Trilinear interpolation.
#[allow(clippy::too_many_arguments)] // Trilinear interpolation inherently needs 3 deltas + 8 corner values
#[inline]
#[must_use]
pub fn lerp3(
    delta1: f64,
    delta2: f64,
    delta3: f64,
    v000: f64,
    v100: f64,
    v010: f64,
    v110: f64,
    v001: f64,
    v101: f64,
    v011: f64,
    v111: f64,
) -> f64 {
    lerp(
        delta3,
        lerp2(delta1, delta2, v000, v100, v010, v110),
        lerp2(delta1, delta2, v001, v101, v011, v111),
    )
}

/// Linear interpolation with the delta clamped to `[0, 1]`.
///
/// The result always lies between `start` and `end`, whichever is larger.
#[inline]
#[must_use]
pub fn clamped_lerp(start: f64, end: f64, delta: f64) -> f64 {
    if delta < 0.0 {
        start
    } else if delta > 1.0 {
        end
    } else {
        lerp(delta, start, end)
    }
}

/// Floor returning `i64`.
#[inline]
#[must_use]
pub fn lfloor(value: f64) -> i64 {
    let i = value as i64;
    if value < i as f64 { i - 1 } else { i }
}

/// Floor returning `i32`.
#[inline]
#[must_use]
pub fn floor(value: f64) -> i32 {
    let i = value as i32;
    if value < f64::from(i) { i - 1 } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep() {
        assert_eq!(smoothstep(0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(smoothstep(1.0).to_bits(), 1.0_f64.to_bits());
        assert_eq!(smoothstep(0.5).to_bits(), 0.5_f64.to_bits());
        let result = smoothstep(0.25);
        assert!((result - 0.103_515_625).abs() < 1e-10);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 20.0).to_bits(), 10.0_f64.to_bits());
        assert_eq!(lerp(1.0, 10.0, 20.0).to_bits(), 20.0_f64.to_bits());
        assert_eq!(lerp(0.5, 10.0, 20.0).to_bits(), 15.0_f64.to_bits());
    }

    #[test]
    fn test_clamped_lerp_stays_between_ends() {
        assert_eq!(clamped_lerp(2.0, 8.0, -0.5).to_bits(), 2.0_f64.to_bits());
        assert_eq!(clamped_lerp(2.0, 8.0, 1.5).to_bits(), 8.0_f64.to_bits());
        assert_eq!(clamped_lerp(2.0, 8.0, 0.5).to_bits(), 5.0_f64.to_bits());

        // Reversed ends
        assert_eq!(clamped_lerp(8.0, 2.0, -3.0).to_bits(), 8.0_f64.to_bits());
        assert_eq!(clamped_lerp(8.0, 2.0, 7.0).to_bits(), 2.0_f64.to_bits());
        let mid = clamped_lerp(8.0, 2.0, 0.25);
        assert!((2.0..=8.0).contains(&mid));
    }

    #[test]
    fn test_lerp3_corners() {
        let corners = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let at = |a, b, c| {
            lerp3(
                a, b, c, corners[0], corners[1], corners[2], corners[3], corners[4], corners[5],
                corners[6], corners[7],
            )
        };
        assert_eq!(at(0.0, 0.0, 0.0).to_bits(), 1.0_f64.to_bits());
        assert_eq!(at(1.0, 0.0, 0.0).to_bits(), 2.0_f64.to_bits());
        assert_eq!(at(1.0, 1.0, 1.0).to_bits(), 8.0_f64.to_bits());
    }

    #[test]
    fn test_lfloor() {
        assert_eq!(lfloor(1.5), 1);
        assert_eq!(lfloor(-1.5), -2);
        assert_eq!(lfloor(0.0), 0);
        assert_eq!(lfloor(-0.1), -1);
    }

    #[test]
    fn test_floor() {
        assert_eq!(floor(1.5), 1);
        assert_eq!(floor(-1.5), -2);
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(-0.1), -1);
    }
}
