// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis measurement and drawing.
//!
//! Both axes follow the same two-step contract:
//! - **Measure**: given the canvas, a provisional range and the ticks, return the box the axis
//!   decoration (tick labels and title) wants outside the canvas. The x axis hangs below the
//!   canvas, the y axis sits to its right.
//! - **Render**: given the final plot box and the resolved range, push the baseline, one tick
//!   mark and label per tick, and the title, in that order.
//!
//! Tick positions are recomputed from the range at render time; nothing from the measure pass is
//! cached, because the plot box (and therefore the pixel scale) changes in between.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use boxchart_svg::{Element, rotate};
use boxchart_text::{TextMeasurer, TextStyle};
use kurbo::BezPath;
use peniko::Color;

use crate::format::{ValueFormatter, format_date, format_int};
use crate::geometry::LayoutBox;
use crate::range::{ProvisionalRange, ResolvedRange};
use crate::snap::{half_px, px};
use crate::style::{css_color, normalize_stroke_width, style_attr};
use crate::tick::{ContinuousTicks, Orientation, Tick, TickContext, TickGenerator};

/// Default font size for tick labels and axis titles, in pixels.
pub const DEFAULT_AXIS_FONT_SIZE: f64 = 12.0;
/// Default gap between the axis line and its labels, and between labels and title.
pub const DEFAULT_AXIS_MARGIN: f64 = 10.0;
/// Default tick mark length, in pixels.
pub const DEFAULT_TICK_LENGTH: f64 = 5.0;

/// Axis styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Width of the axis line and tick marks; raised to
    /// [`MIN_STROKE_WIDTH`](crate::MIN_STROKE_WIDTH) when drawn.
    pub stroke_width: f64,
    /// Line and text color. `None` leaves it to the stylesheet.
    pub color: Option<Color>,
    /// Font size of tick labels and the title.
    pub font_size: f64,
    /// Gap between the axis line and the labels, and between the labels and the title.
    pub margin: f64,
    /// Length of the tick marks.
    pub tick_length: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            color: None,
            font_size: DEFAULT_AXIS_FONT_SIZE,
            margin: DEFAULT_AXIS_MARGIN,
            tick_length: DEFAULT_TICK_LENGTH,
        }
    }
}

impl AxisStyle {
    /// Sets the stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the label/title margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the tick mark length.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size)
    }

    fn stroke_style(&self) -> Option<String> {
        style_attr(&[("stroke", css_color(self.color).as_deref())])
    }

    fn text_css(&self) -> Option<String> {
        let size = alloc::format!("{}px", self.font_size);
        style_attr(&[
            ("fill", css_color(self.color).as_deref()),
            ("font-size", Some(&size)),
        ])
    }

    fn rule(&self, path: &BezPath, class: &'static str, stroke_width: f64) -> Element {
        Element::path(path)
            .attr("class", class)
            .attr("stroke-width", stroke_width)
            .attr_opt("style", self.stroke_style())
    }

    fn label(&self, text: &str, class: &'static str, x: f64, y: f64) -> Element {
        Element::text(text)
            .attr("class", class)
            .attr("x", x)
            .attr("y", y)
            .attr_opt("style", self.text_css())
    }
}

macro_rules! axis_common {
    ($axis:ident, $orientation:expr, $default_formatter:expr) => {
        impl $axis {
            /// Creates an axis with the given title and default style, formatter and ticks.
            pub fn new(title: impl Into<String>) -> Self {
                Self {
                    title: title.into(),
                    style: AxisStyle::default(),
                    formatter: Arc::new($default_formatter),
                    ticks: Arc::new(ContinuousTicks::default()),
                }
            }

            /// Sets the title.
            pub fn with_title(mut self, title: impl Into<String>) -> Self {
                self.title = title.into();
                self
            }

            /// Sets the style.
            pub fn with_style(mut self, style: AxisStyle) -> Self {
                self.style = style;
                self
            }

            /// Sets the tick label formatter.
            pub fn with_formatter(
                mut self,
                formatter: impl Fn(f64) -> String + Send + Sync + 'static,
            ) -> Self {
                self.formatter = Arc::new(formatter);
                self
            }

            /// Sets the tick generation policy.
            pub fn with_ticks(mut self, ticks: impl TickGenerator + 'static) -> Self {
                self.ticks = Arc::new(ticks);
                self
            }

            /// Generates this axis' ticks against a provisional range.
            pub fn generate_ticks(
                &self,
                range: &ProvisionalRange,
                measurer: &dyn TextMeasurer,
            ) -> Vec<Tick> {
                let cx = TickContext {
                    orientation: $orientation,
                    formatter: &*self.formatter,
                    measurer,
                    label_style: self.style.text_style(),
                };
                self.ticks.generate(range, &cx)
            }

            fn title_size(&self, measurer: &dyn TextMeasurer) -> Option<(f64, f64)> {
                if self.title.is_empty() {
                    return None;
                }
                Some(measurer.measure(&self.title, self.style.text_style()).size())
            }
        }

        impl Default for $axis {
            fn default() -> Self {
                Self::new("")
            }
        }

        impl core::fmt::Debug for $axis {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($axis))
                    .field("title", &self.title)
                    .field("style", &self.style)
                    .finish_non_exhaustive()
            }
        }
    };
}

/// The horizontal axis, drawn along the bottom edge of the plot.
///
/// Labels are centered under their tick marks; the title is centered under the labels.
/// Tick labels default to calendar dates (x values are unix seconds).
#[derive(Clone)]
pub struct XAxis {
    /// Axis title. Empty means no title and no space reserved for one.
    pub title: String,
    /// Styling.
    pub style: AxisStyle,
    /// Tick label formatter.
    pub formatter: ValueFormatter,
    /// Tick generation policy.
    pub ticks: Arc<dyn TickGenerator>,
}

axis_common!(XAxis, Orientation::Horizontal, format_date);

impl XAxis {
    /// Returns the box the axis decoration needs below `canvas`.
    ///
    /// `top` is the canvas bottom. `left`/`right` cover every tick label (and at least the
    /// canvas width); `bottom` is the lowest label plus the margin and title height. With no
    /// ticks, the box still reserves room for the title.
    pub fn measure(
        &self,
        canvas: &LayoutBox,
        range: &ProvisionalRange,
        ticks: &[Tick],
        measurer: &dyn TextMeasurer,
    ) -> LayoutBox {
        let margin = self.style.margin;
        let mut left = canvas.left;
        let mut right = canvas.right;
        let mut bottom = canvas.bottom;

        for tick in ticks {
            let (w, h) = measurer.measure(&tick.label, self.style.text_style()).size();
            let tx = px(canvas.left + range.translate(tick.value));
            left = left.min(tx - half_px(w));
            right = right.max(tx + half_px(w));
            bottom = bottom.max(canvas.bottom + margin + h);
        }

        if let Some((_, title_h)) = self.title_size(measurer) {
            bottom += margin + title_h;
        }

        LayoutBox {
            top: canvas.bottom,
            left,
            right,
            bottom,
        }
    }

    /// Draws the axis along the bottom of `plot` into `parent`, as one `<g class="x-axis">`.
    pub fn render(
        &self,
        parent: &mut Element,
        plot: &LayoutBox,
        range: &ResolvedRange,
        ticks: &[Tick],
        measurer: &dyn TextMeasurer,
    ) {
        let style = &self.style;
        let stroke_width = normalize_stroke_width(style.stroke_width);
        let y = px(plot.bottom);
        let mut group = Element::group().attr("class", "axis x-axis");

        let mut baseline = BezPath::new();
        baseline.move_to((plot.left - stroke_width / 2.0, y));
        baseline.line_to((px(plot.right), y));
        group.push(style.rule(&baseline, "axis-line", stroke_width));

        let mut max_label_h = 0.0_f64;
        for tick in ticks {
            let tx = px(plot.left + range.translate(tick.value));

            let mut mark = BezPath::new();
            mark.move_to((tx, y));
            mark.line_to((tx, px(plot.bottom + style.tick_length)));
            group.push(style.rule(&mark, "tick", stroke_width));

            let (w, h) = measurer.measure(&tick.label, style.text_style()).size();
            let label_x = tx - half_px(w);
            let label_y = px(plot.bottom + style.margin + h);
            group.push(style.label(&tick.label, "tick-label", label_x, label_y));

            max_label_h = max_label_h.max(h);
        }

        if let Some((title_w, title_h)) = self.title_size(measurer) {
            let x = px(plot.right - (half_px(plot.width()) + half_px(title_w)));
            let y = px(plot.bottom + style.margin + max_label_h + style.margin + title_h);
            group.push(style.label(&self.title, "axis-title", x, y));
        }

        parent.push(group);
    }
}

/// The vertical axis, drawn along the right edge of the plot.
///
/// Labels sit right of their tick marks, vertically centered; the title is rotated 90° and
/// placed right of the widest label. Tick labels default to whole numbers.
#[derive(Clone)]
pub struct YAxis {
    /// Axis title. Empty means no title and no space reserved for one.
    pub title: String,
    /// Styling.
    pub style: AxisStyle,
    /// Tick label formatter.
    pub formatter: ValueFormatter,
    /// Tick generation policy.
    pub ticks: Arc<dyn TickGenerator>,
}

axis_common!(YAxis, Orientation::Vertical, format_int);

/// Rotation applied to the y axis title, clockwise.
const Y_TITLE_ANGLE: f64 = 90.0;

impl YAxis {
    /// Returns the box the axis decoration needs right of `canvas`.
    ///
    /// `left` is the canvas right edge. `right` covers the widest label plus the margin and the
    /// rotated title; `top`/`bottom` cover labels hanging over the canvas' vertical extent.
    /// With no ticks, the box still reserves room for the title.
    pub fn measure(
        &self,
        canvas: &LayoutBox,
        range: &ProvisionalRange,
        ticks: &[Tick],
        measurer: &dyn TextMeasurer,
    ) -> LayoutBox {
        let margin = self.style.margin;
        let label_x = canvas.right + margin;
        let mut top = canvas.top;
        let mut bottom = canvas.bottom;
        let mut right = label_x;

        for tick in ticks {
            let (w, h) = measurer.measure(&tick.label, self.style.text_style()).size();
            let ly = canvas.bottom - range.translate(tick.value);
            let half_h = half_px(h);
            right = right.max(label_x + w);
            top = top.min(ly - half_h);
            bottom = bottom.max(ly + half_h);
        }

        if let Some((title_w, title_h)) = self.title_size(measurer) {
            let rotated = LayoutBox::new(0.0, 0.0, title_w, title_h)
                .corners()
                .rotate(Y_TITLE_ANGLE)
                .bounds();
            right += margin + rotated.width();
        }

        LayoutBox {
            top,
            left: canvas.right,
            right,
            bottom,
        }
    }

    /// Draws the axis along the right of `plot` into `parent`, as one `<g class="y-axis">`.
    pub fn render(
        &self,
        parent: &mut Element,
        plot: &LayoutBox,
        range: &ResolvedRange,
        ticks: &[Tick],
        measurer: &dyn TextMeasurer,
    ) {
        let style = &self.style;
        let stroke_width = normalize_stroke_width(style.stroke_width);
        let x = px(plot.right);
        let label_x = px(plot.right + style.margin);
        let mut group = Element::group().attr("class", "axis y-axis");

        let mut baseline = BezPath::new();
        baseline.move_to((x, px(plot.bottom)));
        baseline.line_to((x, plot.top - stroke_width / 2.0));
        group.push(style.rule(&baseline, "axis-line", stroke_width));

        let mut max_label_w = 0.0_f64;
        for tick in ticks {
            let ly = px(plot.bottom - range.translate(tick.value));

            let mut mark = BezPath::new();
            mark.move_to((x, ly));
            mark.line_to((px(plot.right + style.tick_length), ly));
            group.push(style.rule(&mark, "tick", stroke_width));

            let (w, h) = measurer.measure(&tick.label, style.text_style()).size();
            group.push(style.label(&tick.label, "tick-label", label_x, ly + half_px(h)));

            max_label_w = max_label_w.max(w);
        }

        if let Some((title_w, _)) = self.title_size(measurer) {
            let tx = px(plot.right + style.margin + max_label_w + style.margin);
            let ty = px(plot.top) + half_px(plot.height()) - half_px(title_w);
            group.push(
                style
                    .label(&self.title, "axis-title", tx, ty)
                    .attr("transform", rotate(Y_TITLE_ANGLE, tx, ty)),
            );
        }

        parent.push(group);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::tick::FixedTicks;
    use boxchart_text::HeuristicTextMeasurer;

    const M: HeuristicTextMeasurer = HeuristicTextMeasurer;

    fn canvas() -> LayoutBox {
        LayoutBox::new(10.0, 10.0, 390.0, 290.0)
    }

    fn fixed(values: &[(f64, &str)]) -> Vec<Tick> {
        values.iter().map(|(v, l)| Tick::new(*v, *l)).collect()
    }

    fn count_class(el: &Element, class: &str) -> usize {
        el.descendants().filter(|e| e.has_class(class)).count()
    }

    #[test]
    fn x_measure_hangs_below_canvas() {
        let axis = XAxis::new("when").with_formatter(crate::format::format_plain);
        let range = ProvisionalRange::new(0.0, 10.0, 380).unwrap();
        let ticks = fixed(&[(0.0, "0"), (5.0, "5"), (10.0, "10")]);
        let b = axis.measure(&canvas(), &range, &ticks, &M);

        // Label height 12, title height 12, margin 10.
        assert_eq!(b.top, 290.0);
        assert_eq!(b.bottom, 290.0 + 10.0 + 12.0 + 10.0 + 12.0);
        // "0" is 6.6px wide: centered on x = 10 it overhangs the canvas by 3px.
        assert_eq!(b.left, 7.0);
        // "10" is 13.2px wide: centered on x = 390 it overhangs by 6px.
        assert_eq!(b.right, 396.0);
    }

    #[test]
    fn x_measure_without_ticks_reserves_title() {
        let axis = XAxis::new("when");
        let range = ProvisionalRange::new(0.0, 10.0, 380).unwrap();
        let b = axis.measure(&canvas(), &range, &[], &M);
        assert_eq!(b.top, 290.0);
        assert_eq!(b.bottom, 290.0 + 10.0 + 12.0);
        assert_eq!((b.left, b.right), (10.0, 390.0));
    }

    #[test]
    fn x_measure_without_title_reserves_labels_only() {
        let axis = XAxis::new("");
        let range = ProvisionalRange::new(0.0, 10.0, 380).unwrap();
        let ticks = fixed(&[(5.0, "5")]);
        let b = axis.measure(&canvas(), &range, &ticks, &M);
        assert_eq!(b.bottom, 290.0 + 10.0 + 12.0);
    }

    #[test]
    fn y_measure_sits_right_of_canvas() {
        let axis = YAxis::new("stars");
        let range = ProvisionalRange::new(10.0, 20.0, 280).unwrap();
        let ticks = fixed(&[(10.0, "10"), (15.0, "15"), (20.0, "20")]);
        let b = axis.measure(&canvas(), &range, &ticks, &M);

        assert_eq!(b.left, 390.0);
        // Labels start at 400 and are 13.2px wide; the rotated title adds 10 + 12.
        assert!((b.right - (400.0 + 13.2 + 10.0 + 12.0)).abs() < 1e-9);
        // Half label height (6) hangs over the top and bottom tick.
        assert_eq!(b.top, 4.0);
        assert_eq!(b.bottom, 296.0);
    }

    #[test]
    fn y_measure_without_ticks_reserves_title() {
        let axis = YAxis::new("stars");
        let range = ProvisionalRange::new(0.0, 1.0, 280).unwrap();
        let b = axis.measure(&canvas(), &range, &[], &M);
        assert!((b.right - (390.0 + 10.0 + 10.0 + 12.0)).abs() < 1e-9);
        assert_eq!((b.top, b.bottom), (10.0, 290.0));
    }

    #[test]
    fn x_render_emits_baseline_ticks_labels_then_title() {
        let axis = XAxis::new("when").with_formatter(crate::format::format_plain);
        let range = ProvisionalRange::new(0.0, 10.0, 380).unwrap().resolve(200);
        let plot = LayoutBox::new(10.0, 10.0, 210.0, 250.0);
        let ticks = fixed(&[(0.0, "0"), (5.0, "5"), (10.0, "10")]);

        let mut root = Element::group();
        axis.render(&mut root, &plot, &range, &ticks, &M);
        let group = &root.children()[0];
        assert!(group.has_class("x-axis"));

        let classes: Vec<&str> = group
            .children()
            .iter()
            .filter_map(|c| c.get_attr("class"))
            .collect();
        assert_eq!(
            classes,
            [
                "axis-line",
                "tick",
                "tick-label",
                "tick",
                "tick-label",
                "tick",
                "tick-label",
                "axis-title"
            ]
        );

        // Middle tick at 10 + 100 = 110, drawn down from the plot bottom.
        assert_eq!(group.children()[3].get_attr("d"), Some("M110 250L110 255"));
        // Title centered under the plot.
        let title = group.children().last().unwrap();
        assert_eq!(title.text_content(), Some("when"));
        assert_eq!(title.get_attr("y"), Some("294"));
    }

    #[test]
    fn render_is_idempotent() {
        let axis = YAxis::new("stars");
        let range = ProvisionalRange::new(0.0, 10.0, 100).unwrap().resolve(100);
        let plot = LayoutBox::new(0.0, 0.0, 100.0, 100.0);
        let ticks = fixed(&[(0.0, "0"), (10.0, "10")]);

        let mut once = Element::group();
        axis.render(&mut once, &plot, &range, &ticks, &M);
        let mut twice = Element::group();
        axis.render(&mut twice, &plot, &range, &ticks, &M);
        axis.render(&mut twice, &plot, &range, &ticks, &M);

        assert_eq!(twice.children().len(), 2);
        assert_eq!(twice.children()[0], once.children()[0]);
        assert_eq!(twice.children()[1], once.children()[0]);
        assert_eq!(count_class(&twice, "tick"), 4);
    }

    #[test]
    fn y_render_places_ticks_from_bottom_and_rotates_title() {
        let axis = YAxis::new("stars");
        let range = ProvisionalRange::new(0.0, 10.0, 100).unwrap().resolve(80);
        let plot = LayoutBox::new(20.0, 0.0, 100.0, 100.0);
        let ticks = fixed(&[(0.0, "0"), (5.0, "5"), (10.0, "10")]);

        let mut root = Element::group();
        axis.render(&mut root, &plot, &range, &ticks, &M);
        let group = &root.children()[0];

        let marks: Vec<&str> = group
            .children()
            .iter()
            .filter(|c| c.has_class("tick"))
            .filter_map(|c| c.get_attr("d"))
            .collect();
        assert_eq!(marks, ["M100 100L105 100", "M100 60L105 60", "M100 20L105 20"]);

        let title = group.children().last().unwrap();
        assert!(title.has_class("axis-title"));
        // x = 100 + 10 + 13.2 + 10, truncated; y = 20 + 40 - half of the 33px title width.
        assert_eq!(title.get_attr("x"), Some("133"));
        assert_eq!(title.get_attr("y"), Some("44"));
        assert_eq!(title.get_attr("transform"), Some("rotate(90 133 44)"));
    }

    #[test]
    fn explicit_colors_become_inline_styles() {
        let axis = XAxis::new("t").with_style(
            AxisStyle::default()
                .with_color(peniko::color::palette::css::RED)
                .with_stroke_width(0.1),
        );
        let range = ProvisionalRange::new(0.0, 1.0, 10).unwrap().resolve(10);
        let mut root = Element::group();
        axis.render(&mut root, &LayoutBox::new(0.0, 0.0, 10.0, 10.0), &range, &[], &M);
        let line = &root.children()[0].children()[0];
        assert_eq!(line.get_attr("style"), Some("stroke:#ff0000;"));
        assert_eq!(line.get_attr("stroke-width"), Some("1"));
        let title = &root.children()[0].children()[1];
        assert_eq!(title.get_attr("style"), Some("fill:#ff0000;font-size:12px;"));
    }

    #[test]
    fn theme_colors_leave_rules_unstyled() {
        let axis = XAxis::new("t");
        let range = ProvisionalRange::new(0.0, 1.0, 10).unwrap().resolve(10);
        let mut root = Element::group();
        axis.render(&mut root, &LayoutBox::new(0.0, 0.0, 10.0, 10.0), &range, &[], &M);
        let line = &root.children()[0].children()[0];
        assert_eq!(line.get_attr("style"), None);
        let title = &root.children()[0].children()[1];
        assert_eq!(title.get_attr("style"), Some("font-size:12px;"));
    }

    #[test]
    fn generate_ticks_uses_axis_formatter() {
        let axis = YAxis::new("").with_ticks(FixedTicks(std::vec![10.0, 15.0, 20.0]));
        let range = ProvisionalRange::new(10.0, 20.0, 280).unwrap();
        let ticks = axis.generate_ticks(&range, &M);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["10", "15", "20"]);
    }
}
