// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data series and their line drawing.

extern crate alloc;

use alloc::vec::Vec;

use boxchart_svg::Element;
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::geometry::LayoutBox;
use crate::range::ResolvedRange;
use crate::style::{css_color, normalize_stroke_width, style_attr};

/// An indexed sequence of `(x, y)` data points.
pub trait SeriesValues {
    /// Number of points.
    fn len(&self) -> usize;

    /// The point at `index`; `index` is always below [`len`](Self::len).
    fn values(&self, index: usize) -> (f64, f64);

    /// Returns `true` if there are no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SeriesValues for [(f64, f64)] {
    fn len(&self) -> usize {
        <[(f64, f64)]>::len(self)
    }

    fn values(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

impl SeriesValues for Vec<(f64, f64)> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn values(&self, index: usize) -> (f64, f64) {
        self[index]
    }
}

impl SeriesValues for [Point] {
    fn len(&self) -> usize {
        <[Point]>::len(self)
    }

    fn values(&self, index: usize) -> (f64, f64) {
        let p = self[index];
        (p.x, p.y)
    }
}

impl<T: SeriesValues + ?Sized> SeriesValues for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn values(&self, index: usize) -> (f64, f64) {
        (**self).values(index)
    }
}

/// How the series line is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesStyle {
    /// Line width; raised to [`MIN_STROKE_WIDTH`](crate::MIN_STROKE_WIDTH) when drawn.
    pub stroke_width: f64,
    /// Line (and area) color. `None` leaves it to the stylesheet.
    pub color: Option<Color>,
    /// Fill the area between the line and the bottom of the plot.
    pub fill_area: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            color: None,
            fill_area: false,
        }
    }
}

impl SeriesStyle {
    /// Sets the line width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets an explicit color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Enables or disables the area fill.
    pub fn with_fill_area(mut self, fill_area: bool) -> Self {
        self.fill_area = fill_area;
        self
    }
}

/// Draws `series` as a polyline inside `plot` into `parent`.
///
/// Data x grows rightward from `plot.left`; data y grows upward from `plot.bottom`. With
/// [`SeriesStyle::fill_area`] set, a closed `series-area` path is drawn under the line first.
/// An empty series draws nothing.
pub fn render_line<S: SeriesValues + ?Sized>(
    parent: &mut Element,
    series: &S,
    style: &SeriesStyle,
    plot: &LayoutBox,
    x: &ResolvedRange,
    y: &ResolvedRange,
) {
    if series.is_empty() {
        return;
    }
    let to_screen = |i: usize| {
        let (vx, vy) = series.values(i);
        Point::new(plot.left + x.translate(vx), plot.bottom - y.translate(vy))
    };
    let color = css_color(style.color);
    let color = color.as_deref();
    let mut group = Element::group().attr("class", "series-group");

    if style.fill_area {
        let mut area = BezPath::new();
        let first = to_screen(0);
        area.move_to((first.x, plot.bottom));
        for i in 0..series.len() {
            area.line_to(to_screen(i));
        }
        area.line_to((to_screen(series.len() - 1).x, plot.bottom));
        area.close_path();
        group.push(
            Element::path(&area)
                .attr("class", "series-area")
                .attr_opt("style", style_attr(&[("fill", color)])),
        );
    }

    let mut line = BezPath::new();
    line.move_to(to_screen(0));
    for i in 1..series.len() {
        line.line_to(to_screen(i));
    }
    group.push(
        Element::path(&line)
            .attr("class", "series")
            .attr("stroke-width", normalize_stroke_width(style.stroke_width))
            .attr_opt("style", style_attr(&[("stroke", color)])),
    );

    parent.push(group);
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::range::ProvisionalRange;
    use std::vec;

    fn ranges() -> (ResolvedRange, ResolvedRange) {
        let x = ProvisionalRange::new(0.0, 10.0, 1).unwrap().resolve(100);
        let y = ProvisionalRange::new(0.0, 10.0, 1).unwrap().resolve(50);
        (x, y)
    }

    #[test]
    fn line_maps_data_into_plot() {
        let (x, y) = ranges();
        let plot = LayoutBox::new(10.0, 20.0, 120.0, 60.0);
        let series = vec![(0.0, 0.0), (5.0, 10.0), (10.0, 5.0)];

        let mut root = Element::group();
        render_line(&mut root, &series, &SeriesStyle::default(), &plot, &x, &y);

        let group = &root.children()[0];
        assert_eq!(group.children().len(), 1);
        let line = &group.children()[0];
        assert!(line.has_class("series"));
        assert_eq!(line.get_attr("d"), Some("M20 60L70 10L120 35"));
        assert_eq!(line.get_attr("stroke-width"), Some("2"));
        assert_eq!(line.get_attr("style"), None);
    }

    #[test]
    fn area_is_drawn_under_the_line() {
        let (x, y) = ranges();
        let plot = LayoutBox::new(10.0, 20.0, 120.0, 60.0);
        let series = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
        let style = SeriesStyle::default()
            .with_fill_area(true)
            .with_color(peniko::color::palette::css::BLUE);

        let mut root = Element::group();
        render_line(&mut root, &series[..], &style, &plot, &x, &y);

        let children = root.children()[0].children();
        assert!(children[0].has_class("series-area"));
        assert_eq!(children[0].get_attr("d"), Some("M20 60L20 60L120 10L120 60Z"));
        assert_eq!(children[0].get_attr("style"), Some("fill:#0000ff;"));
        assert!(children[1].has_class("series"));
        assert_eq!(children[1].get_attr("style"), Some("stroke:#0000ff;"));
    }

    #[test]
    fn empty_series_draws_nothing() {
        let (x, y) = ranges();
        let mut root = Element::group();
        let series: Vec<(f64, f64)> = Vec::new();
        render_line(
            &mut root,
            &series,
            &SeriesStyle::default(),
            &LayoutBox::default(),
            &x,
            &y,
        );
        assert!(root.children().is_empty());
    }
}
