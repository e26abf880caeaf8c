// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap-to-pixel policy.
//!
//! Label placement and drawing work in whole pixels. These helpers are the only place where
//! layout values are truncated; box algebra ([`crate::LayoutBox::grow`],
//! [`crate::LayoutBox::outer_constrain`]) stays in full `f64` precision.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Truncates `v` toward zero to a whole pixel.
pub(crate) fn px(v: f64) -> f64 {
    v.trunc()
}

/// Half of `v` in whole pixels: truncate to a pixel, then floor-divide by two.
///
/// For non-negative input this equals integer `v / 2`; negative input rounds toward
/// negative infinity, like an arithmetic shift.
pub(crate) fn half_px(v: f64) -> f64 {
    (px(v) / 2.0).floor()
}

/// Converts a pixel length to an integer domain, clamping negative and NaN to zero.
pub(crate) fn px_len(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let v = px(v).min(f64::from(u32::MAX));
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to the u32 range and already truncated"
    )]
    {
        v as u32
    }
}
