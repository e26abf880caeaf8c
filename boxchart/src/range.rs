// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-to-pixel ranges.
//!
//! A chart maps data values onto pixel offsets twice: once against the full canvas, to generate
//! ticks and measure axes, and once against the final plot rectangle, to draw. The two phases are
//! separate types. [`ProvisionalRange`] is only accepted by tick generation and axis measurement;
//! [`ProvisionalRange::resolve`] consumes it and yields the [`ResolvedRange`] that every render
//! path requires.

use crate::error::RangeError;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Span {
    min: f64,
    max: f64,
    domain: u32,
}

impl Span {
    fn new(min: f64, max: f64, domain: u32) -> Result<Self, RangeError> {
        if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
            return Err(RangeError::NonFinite { min, max });
        }
        if min == max {
            return Err(RangeError::Degenerate(min));
        }
        Ok(Self { min, max, domain })
    }

    fn translate(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min) * f64::from(self.domain)
    }
}

/// A data range whose pixel domain is still provisional.
///
/// Built from the unconstrained canvas size, used to generate ticks and to measure axis
/// decoration. It cannot be used to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProvisionalRange(Span);

impl ProvisionalRange {
    /// Creates a range mapping `[min, max]` onto `[0, domain]` pixels.
    ///
    /// Fails if `min == max` or either bound is not finite.
    pub fn new(min: f64, max: f64, domain: u32) -> Result<Self, RangeError> {
        Span::new(min, max, domain).map(Self)
    }

    /// Lower data bound.
    pub fn min(&self) -> f64 {
        self.0.min
    }

    /// Upper data bound.
    pub fn max(&self) -> f64 {
        self.0.max
    }

    /// Provisional pixel length.
    pub fn domain(&self) -> u32 {
        self.0.domain
    }

    /// `|max - min|`.
    pub fn delta(&self) -> f64 {
        (self.0.max - self.0.min).abs()
    }

    /// Maps `value` to a pixel offset: `(value - min) / (max - min) * domain`.
    pub fn translate(&self, value: f64) -> f64 {
        self.0.translate(value)
    }

    /// Fixes the pixel domain once the plot rectangle is known.
    pub fn resolve(self, domain: u32) -> ResolvedRange {
        ResolvedRange(Span { domain, ..self.0 })
    }
}

/// A data range mapped onto the final plot rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedRange(Span);

impl ResolvedRange {
    /// Lower data bound.
    pub fn min(&self) -> f64 {
        self.0.min
    }

    /// Upper data bound.
    pub fn max(&self) -> f64 {
        self.0.max
    }

    /// Final pixel length.
    pub fn domain(&self) -> u32 {
        self.0.domain
    }

    /// Maps `value` to a pixel offset: `(value - min) / (max - min) * domain`.
    pub fn translate(&self, value: f64) -> f64 {
        self.0.translate(value)
    }
}
