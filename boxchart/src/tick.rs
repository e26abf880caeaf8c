// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generation.
//!
//! Deciding *which* ticks to show is a policy, so axes consult a [`TickGenerator`]. Ticks are
//! generated against the provisional range (the unconstrained canvas) and then reused unchanged
//! for the final render; only their pixel positions are recomputed.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use boxchart_text::{TextMeasurer, TextStyle};

use crate::nice::{round_to_for_delta, round_up};
use crate::range::ProvisionalRange;

/// A tick: a data value and its formatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Data value; lies within the range the tick was generated for.
    pub value: f64,
    /// Label drawn next to the tick mark.
    pub label: String,
}

impl Tick {
    /// Creates a tick.
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Which way an axis runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left to right (the x axis).
    Horizontal,
    /// Bottom to top (the y axis).
    Vertical,
}

/// Inputs a tick generator may use besides the range itself.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    /// Direction of the axis the ticks are for.
    pub orientation: Orientation,
    /// Label formatter of that axis.
    pub formatter: &'a (dyn Fn(f64) -> String + Send + Sync),
    /// Measurer used for spacing decisions.
    pub measurer: &'a dyn TextMeasurer,
    /// Style tick labels will be drawn with.
    pub label_style: TextStyle,
}

impl core::fmt::Debug for TickContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TickContext")
            .field("orientation", &self.orientation)
            .field("label_style", &self.label_style)
            .finish_non_exhaustive()
    }
}

impl TickContext<'_> {
    fn tick(&self, value: f64) -> Tick {
        Tick::new(value, (self.formatter)(value))
    }
}

/// A tick generation policy.
pub trait TickGenerator: Send + Sync {
    /// Returns ticks for `range`, in ascending value order, each within `[min, max]`.
    fn generate(&self, range: &ProvisionalRange, cx: &TickContext<'_>) -> Vec<Tick>;
}

/// Evenly spaced ticks sized to the labels they carry.
///
/// Always emits a tick at `min` and at `max`. The gap between intermediate ticks is the width
/// (horizontal axes) or height (vertical axes) of the `min` label plus a minimum spacing, and
/// intermediate values are rounded up to a nice step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContinuousTicks {
    /// Minimum free space between horizontal tick labels, in pixels.
    pub min_horizontal_spacing: f64,
    /// Minimum free space between vertical tick labels, in pixels.
    pub min_vertical_spacing: f64,
    /// Upper bound on the number of intermediate ticks.
    pub max_ticks: usize,
}

impl Default for ContinuousTicks {
    fn default() -> Self {
        Self {
            min_horizontal_spacing: 20.0,
            min_vertical_spacing: 20.0,
            max_ticks: 1 << 10,
        }
    }
}

impl TickGenerator for ContinuousTicks {
    fn generate(&self, range: &ProvisionalRange, cx: &TickContext<'_>) -> Vec<Tick> {
        let (min, max) = (range.min(), range.max());
        let min_tick = cx.tick(min);

        let (w, h) = cx
            .measurer
            .measure(&min_tick.label, cx.label_style)
            .size();
        let tick_size = match cx.orientation {
            Orientation::Horizontal => w + self.min_horizontal_spacing,
            Orientation::Vertical => h + self.min_vertical_spacing,
        };

        let mut ticks = alloc::vec![min_tick];
        if tick_size > 0.0 {
            let remainder = f64::from(range.domain()) - 2.0 * tick_size;
            let count = intermediate_count(remainder / tick_size, self.max_ticks);
            let delta = max - min;
            let step = delta / count as f64;
            let round_to = round_to_for_delta(range.delta()) / 10.0;

            let mut last = min;
            for x in 1..count {
                let value = min + round_up(step * x as f64, round_to);
                if value >= max {
                    break;
                }
                if value > last {
                    ticks.push(cx.tick(value));
                    last = value;
                }
            }
        }
        ticks.push(cx.tick(max));
        ticks
    }
}

fn intermediate_count(n: f64, cap: usize) -> usize {
    if !n.is_finite() || n < 1.0 {
        return 0;
    }
    let n = n.floor().min(cap as f64);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "non-negative, integral and capped at `cap`"
    )]
    {
        n as usize
    }
}

/// Ticks at caller-chosen values.
///
/// Values outside the range are skipped; the remaining ones are emitted in the given order,
/// which should be ascending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedTicks(pub Vec<f64>);

impl TickGenerator for FixedTicks {
    fn generate(&self, range: &ProvisionalRange, cx: &TickContext<'_>) -> Vec<Tick> {
        let lo = range.min().min(range.max());
        let hi = range.min().max(range.max());
        self.0
            .iter()
            .copied()
            .filter(|v| (lo..=hi).contains(v))
            .map(|v| cx.tick(v))
            .collect()
    }
}
