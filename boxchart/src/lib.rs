// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box-constraint layout for two-axis SVG line charts.
//!
//! A [`Chart`] turns one `(x, y)` series into a self-contained SVG document with a background, a
//! line, a horizontal axis along the bottom of the plot and a vertical axis along its right edge.
//!
//! Layout is a single pass over [`LayoutBox`]es:
//! - **Measure**: each axis reports the box its tick labels and title need outside the canvas,
//!   using a [`TextMeasurer`] for text extents.
//! - **Grow**: the canvas is grown by both axis boxes.
//! - **Constrain**: the grown box is pulled back inside the canvas
//!   ([`LayoutBox::outer_constrain`]), leaving the plot rectangle.
//!
//! Value ranges exist in two phases. A [`ProvisionalRange`] maps data onto the unconstrained
//! canvas and drives tick generation and measurement; [`ProvisionalRange::resolve`] turns it
//! into the [`ResolvedRange`] that drawing requires.
//!
//! ```
//! use boxchart::{Chart, HeuristicTextMeasurer, XAxis, YAxis, format_plain};
//!
//! let chart = Chart::new(400, 300)
//!     .with_x_axis(XAxis::new("step").with_formatter(format_plain))
//!     .with_y_axis(YAxis::new("loss"));
//! let svg = chart
//!     .render_to_string(&[(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)][..], &HeuristicTextMeasurer)
//!     .unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! The crate is `no_std` with `alloc`; enable `std` or `libm` (the default) for float rounding.

#![no_std]

extern crate alloc;

mod axis;
mod chart;
#[cfg(test)]
mod chart_tests;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod log;
mod nice;
mod range;
mod series;
mod snap;
mod style;
mod tick;

pub use axis::{AxisStyle, DEFAULT_AXIS_FONT_SIZE, DEFAULT_AXIS_MARGIN, DEFAULT_TICK_LENGTH};
pub use axis::{XAxis, YAxis};
pub use chart::{Chart, ChartLayout, DEFAULT_PADDING};
pub use error::{ChartError, RangeError};
pub use format::{ValueFormatter, format_date, format_duration, format_int, format_plain};
pub use geometry::{BoxCorners, LayoutBox};
pub use nice::{round_down, round_to_for_delta, round_up};
pub use range::{ProvisionalRange, ResolvedRange};
pub use series::{SeriesStyle, SeriesValues, render_line};
pub use style::{DARK_STYLES, LIGHT_STYLES, MIN_STROKE_WIDTH, normalize_stroke_width, style_attr};
pub use tick::{ContinuousTicks, FixedTicks, Orientation, Tick, TickContext, TickGenerator};

pub use boxchart_svg::Element;
pub use boxchart_text::{
    FontFamily, FontWeight, HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle,
};
pub use kurbo::Point;
