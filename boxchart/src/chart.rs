// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart orchestrator.
//!
//! Layout is a single, non-iterative pass:
//! 1. shrink the canvas by the padding and build provisional ranges against it;
//! 2. generate ticks and measure both axes against that unconstrained canvas;
//! 3. grow the canvas by the axis boxes and constrain the result back into the canvas bounds,
//!    which yields the plot box;
//! 4. resolve the ranges to the plot size and draw.
//!
//! Ticks are chosen once, in step 2, and are not regenerated for the smaller plot.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use boxchart_svg::Element;
use boxchart_text::TextMeasurer;
use kurbo::Rect;
use peniko::Color;

use crate::axis::{XAxis, YAxis};
use crate::error::ChartError;
use crate::geometry::LayoutBox;
use crate::log::{debug, warn};
use crate::nice::{round_down, round_to_for_delta, round_up};
use crate::range::{ProvisionalRange, ResolvedRange};
use crate::series::{SeriesStyle, SeriesValues, render_line};
use crate::snap::px_len;
use crate::style::{css_color, stylesheet_or_default, style_attr};
use crate::tick::Tick;

/// Default padding on each side of the chart, in pixels.
pub const DEFAULT_PADDING: f64 = 20.0;

const BACKGROUND_CORNER_RADIUS: f64 = 8.0;

/// A single-series, two-axis chart.
#[derive(Clone, Debug)]
pub struct Chart {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Insets from each edge of the output; every field is a distance, not a coordinate.
    pub padding: LayoutBox,
    /// Background fill. `None` leaves it to the stylesheet.
    pub background: Option<Color>,
    /// Embedded stylesheet. Empty means [`LIGHT_STYLES`](crate::LIGHT_STYLES).
    pub styles: String,
    /// The horizontal axis.
    pub x_axis: XAxis,
    /// The vertical axis.
    pub y_axis: YAxis,
    /// How the series is drawn.
    pub series_style: SeriesStyle,
}

/// Everything the layout pass decided, in output pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    /// Output bounds shrunk by the padding.
    pub canvas: LayoutBox,
    /// Space the x axis decoration asked for, measured against `canvas`.
    pub x_axis_box: LayoutBox,
    /// Space the y axis decoration asked for, measured against `canvas`.
    pub y_axis_box: LayoutBox,
    /// `canvas` grown by both axis boxes.
    pub axes_outer: LayoutBox,
    /// The data rectangle, after constraining `axes_outer` into `canvas`.
    pub plot: LayoutBox,
    /// X range mapped onto `plot`'s width.
    pub x_range: ResolvedRange,
    /// Y range mapped onto `plot`'s height.
    pub y_range: ResolvedRange,
    /// X ticks, chosen against the provisional range.
    pub x_ticks: Vec<Tick>,
    /// Y ticks, chosen against the provisional range.
    pub y_ticks: Vec<Tick>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new(1024, 400)
    }
}

impl Chart {
    /// Creates a chart of the given size with default padding, axes and styling.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: LayoutBox::new(
                DEFAULT_PADDING,
                DEFAULT_PADDING,
                DEFAULT_PADDING,
                DEFAULT_PADDING,
            ),
            background: None,
            styles: String::new(),
            x_axis: XAxis::default(),
            y_axis: YAxis::default(),
            series_style: SeriesStyle::default(),
        }
    }

    /// Sets the padding; each edge of `padding` is an inset.
    pub fn with_padding(mut self, padding: LayoutBox) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the same padding on every side.
    pub fn with_uniform_padding(self, padding: f64) -> Self {
        self.with_padding(LayoutBox::new(padding, padding, padding, padding))
    }

    /// Sets an explicit background fill.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Sets the embedded stylesheet.
    pub fn with_styles(mut self, styles: impl Into<String>) -> Self {
        self.styles = styles.into();
        self
    }

    /// Sets the x axis.
    pub fn with_x_axis(mut self, x_axis: XAxis) -> Self {
        self.x_axis = x_axis;
        self
    }

    /// Sets the y axis.
    pub fn with_y_axis(mut self, y_axis: YAxis) -> Self {
        self.y_axis = y_axis;
        self
    }

    /// Sets the series style.
    pub fn with_series_style(mut self, series_style: SeriesStyle) -> Self {
        self.series_style = series_style;
        self
    }

    /// The output bounds `(0, 0, width, height)` shrunk by the padding.
    ///
    /// May be inverted when the padding exceeds the output size; [`Chart::layout`] normalizes
    /// it.
    pub fn canvas_box(&self) -> LayoutBox {
        LayoutBox {
            top: self.padding.top,
            left: self.padding.left,
            right: f64::from(self.width) - self.padding.right,
            bottom: f64::from(self.height) - self.padding.bottom,
        }
    }

    /// Computes the provisional x and y ranges of `series` against `canvas`.
    ///
    /// The y bounds are snapped outward to a nice step; the x bounds are used as is. A constant
    /// coordinate is widened by one unit on each side so the range is never degenerate.
    pub fn ranges<S: SeriesValues + ?Sized>(
        &self,
        series: &S,
        canvas: &LayoutBox,
    ) -> Result<(ProvisionalRange, ProvisionalRange), ChartError> {
        let bounds = DataBounds::scan(series)?;

        let (mut min_x, mut max_x) = (bounds.min_x, bounds.max_x);
        if min_x == max_x {
            debug!(value = min_x, "widening constant x range");
            min_x -= 1.0;
            max_x += 1.0;
        }

        let round_to = round_to_for_delta(bounds.max_y - bounds.min_y);
        let mut min_y = round_down(bounds.min_y, round_to);
        let mut max_y = round_up(bounds.max_y, round_to);
        if min_y == max_y {
            debug!(value = min_y, "widening constant y range");
            min_y -= 1.0;
            max_y += 1.0;
        }

        let x = ProvisionalRange::new(min_x, max_x, px_len(canvas.width()))?;
        let y = ProvisionalRange::new(min_y, max_y, px_len(canvas.height()))?;
        Ok((x, y))
    }

    /// Runs the layout pass: ticks, axis measurement, plot constraint and range resolution.
    pub fn layout<S: SeriesValues + ?Sized>(
        &self,
        series: &S,
        measurer: &dyn TextMeasurer,
    ) -> Result<ChartLayout, ChartError> {
        let canvas = self.canvas_box().normalized();
        if canvas.is_empty() {
            warn!(
                width = self.width,
                height = self.height,
                "padding leaves no room to draw; chart will be degenerate"
            );
        }

        let (x_range, y_range) = self.ranges(series, &canvas)?;
        let x_ticks = self.x_axis.generate_ticks(&x_range, measurer);
        let y_ticks = self.y_axis.generate_ticks(&y_range, measurer);

        let x_axis_box = self.x_axis.measure(&canvas, &x_range, &x_ticks, measurer);
        let y_axis_box = self.y_axis.measure(&canvas, &y_range, &y_ticks, measurer);
        let axes_outer = canvas.grow(&x_axis_box).grow(&y_axis_box);
        let plot = canvas.outer_constrain(&canvas, &axes_outer).normalized();
        debug!(?canvas, ?x_axis_box, ?y_axis_box, ?plot, "chart layout");

        let x_range = x_range.resolve(px_len(plot.width()));
        let y_range = y_range.resolve(px_len(plot.height()));

        Ok(ChartLayout {
            canvas,
            x_axis_box,
            y_axis_box,
            axes_outer,
            plot,
            x_range,
            y_range,
            x_ticks,
            y_ticks,
        })
    }

    /// Lays out the chart and builds its SVG document tree without serializing it.
    ///
    /// Children are in z-order: stylesheet, background, series, y axis, x axis.
    pub fn to_element<S: SeriesValues + ?Sized>(
        &self,
        series: &S,
        measurer: &dyn TextMeasurer,
    ) -> Result<Element, ChartError> {
        let layout = self.layout(series, measurer)?;
        let (width, height) = (f64::from(self.width), f64::from(self.height));

        let mut root = Element::svg(width, height);
        root.push(Element::style(stylesheet_or_default(&self.styles)));
        root.push(
            Element::rect(Rect::new(0.0, 0.0, width, height))
                .attr("class", "background")
                .attr("rx", BACKGROUND_CORNER_RADIUS)
                .attr_opt(
                    "style",
                    style_attr(&[("fill", css_color(self.background).as_deref())]),
                ),
        );
        render_line(
            &mut root,
            series,
            &self.series_style,
            &layout.plot,
            &layout.x_range,
            &layout.y_range,
        );
        self.y_axis.render(
            &mut root,
            &layout.plot,
            &layout.y_range,
            &layout.y_ticks,
            measurer,
        );
        self.x_axis.render(
            &mut root,
            &layout.plot,
            &layout.x_range,
            &layout.x_ticks,
            measurer,
        );
        Ok(root)
    }

    /// Renders the chart as an SVG document into `out`.
    ///
    /// Nothing is written if layout fails.
    pub fn render<S, W>(
        &self,
        series: &S,
        measurer: &dyn TextMeasurer,
        out: &mut W,
    ) -> Result<(), ChartError>
    where
        S: SeriesValues + ?Sized,
        W: Write + ?Sized,
    {
        let root = self.to_element(series, measurer)?;
        root.render(out)?;
        Ok(())
    }

    /// Renders the chart as an SVG document string.
    pub fn render_to_string<S: SeriesValues + ?Sized>(
        &self,
        series: &S,
        measurer: &dyn TextMeasurer,
    ) -> Result<String, ChartError> {
        let mut out = String::new();
        self.render(series, measurer, &mut out)?;
        Ok(out)
    }
}

/// Extremes of a series, in one scan.
#[derive(Clone, Copy, Debug)]
struct DataBounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl DataBounds {
    fn scan<S: SeriesValues + ?Sized>(series: &S) -> Result<Self, ChartError> {
        if series.is_empty() {
            return Err(ChartError::EmptySeries);
        }
        let mut bounds = Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for index in 0..series.len() {
            let (x, y) = series.values(index);
            if !x.is_finite() || !y.is_finite() {
                return Err(ChartError::NonFiniteValue { index });
            }
            bounds.min_x = bounds.min_x.min(x);
            bounds.max_x = bounds.max_x.max(x);
            bounds.min_y = bounds.min_y.min(y);
            bounds.max_y = bounds.max_y.max(y);
        }
        Ok(bounds)
    }
}
