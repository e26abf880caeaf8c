// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" rounding policy for data bounds and tick values.
//!
//! The step is the largest power of ten strictly below the data delta, divided by ten, so a
//! delta of `437` snaps to multiples of `10` and a delta of `12` to multiples of `1`.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MIN_CURSOR: f64 = 1e-10;

/// Returns the rounding step for a data delta.
///
/// Walks powers of ten down from `1e10` and returns one tenth of the first power strictly
/// below `delta`. A zero, negative or non-finite delta returns `0.0`, meaning "do not round".
pub fn round_to_for_delta(delta: f64) -> f64 {
    if !delta.is_finite() {
        return 0.0;
    }
    let mut cursor = 1e10;
    while cursor >= MIN_CURSOR {
        if delta > cursor {
            return cursor / 10.0;
        }
        cursor /= 10.0;
    }
    0.0
}

/// Rounds `value` up to a multiple of `round_to` (no-op for a zero or tiny step).
pub fn round_up(value: f64, round_to: f64) -> f64 {
    if round_to < 1e-15 {
        return value;
    }
    (value / round_to).ceil() * round_to
}

/// Rounds `value` down to a multiple of `round_to` (no-op for a zero or tiny step).
pub fn round_down(value: f64, round_to: f64) -> f64 {
    if round_to < 1e-15 {
        return value;
    }
    (value / round_to).floor() * round_to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_tracks_magnitude() {
        assert_eq!(round_to_for_delta(437.0), 10.0);
        assert_eq!(round_to_for_delta(100.0), 1.0);
        assert_eq!(round_to_for_delta(12.0), 1.0);
        assert_eq!(round_to_for_delta(5.0), 0.1);
        assert!((round_to_for_delta(1.0) - 0.01).abs() < 1e-12);
        assert!((round_to_for_delta(0.5) - 0.01).abs() < 1e-12);
        assert_eq!(round_to_for_delta(0.0), 0.0);
        assert_eq!(round_to_for_delta(-3.0), 0.0);
        assert_eq!(round_to_for_delta(f64::NAN), 0.0);
    }

    #[test]
    fn rounding_snaps_outward() {
        assert_eq!(round_down(1234.0, 10.0), 1230.0);
        assert_eq!(round_up(1234.0, 10.0), 1240.0);
        assert_eq!(round_up(1240.0, 10.0), 1240.0);
        assert_eq!(round_down(-7.0, 5.0), -10.0);
    }

    #[test]
    fn zero_step_is_identity() {
        assert_eq!(round_up(3.3, 0.0), 3.3);
        assert_eq!(round_down(3.3, 0.0), 3.3);
    }
}
