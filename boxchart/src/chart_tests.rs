// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use std::string::String;
use std::vec;
use std::vec::Vec;

use boxchart_svg::Element;
use boxchart_text::HeuristicTextMeasurer;

use crate::{
    Chart, ChartError, DARK_STYLES, FixedTicks, LIGHT_STYLES, LayoutBox, RangeError, XAxis,
    YAxis, format_plain,
};

const SERIES: [(f64, f64); 3] = [(1.0, 10.0), (2.0, 20.0), (3.0, 15.0)];

fn small_chart() -> Chart {
    Chart::new(400, 300)
        .with_uniform_padding(10.0)
        .with_x_axis(XAxis::new("day").with_formatter(format_plain))
        .with_y_axis(YAxis::new("value").with_ticks(FixedTicks(vec![10.0, 15.0, 20.0])))
}

fn group<'a>(root: &'a Element, class: &str) -> &'a Element {
    root.children()
        .iter()
        .find(|c| c.has_class(class))
        .unwrap_or_else(|| panic!("no `{class}` group"))
}

fn count(root: &Element, class: &str) -> usize {
    root.descendants().filter(|e| e.has_class(class)).count()
}

#[test]
fn small_chart_layout_shrinks_plot_for_axes() {
    let layout = small_chart()
        .layout(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();

    assert_eq!(layout.canvas, LayoutBox::new(10.0, 10.0, 390.0, 290.0));
    assert!(layout.plot.width() < 380.0, "{:?}", layout.plot);
    assert!(layout.canvas.contains_box(&layout.plot), "{layout:?}");

    // Top y label hangs 6px above the canvas; first x label 3px left of it.
    assert_eq!(layout.plot.top, 16.0);
    assert_eq!(layout.plot.left, 13.0);
    // Labels, margin and title: 10 + 12 + 10 + 12 below the canvas.
    assert_eq!(layout.plot.bottom, 246.0);
    // Y labels at 400, 13.2px wide, then margin and the rotated 12px title.
    assert!((layout.plot.right - 344.8).abs() < 1e-6, "{:?}", layout.plot);

    assert_eq!(layout.y_ticks.len(), 3);
    assert_eq!(layout.x_ticks.first().map(|t| t.label.as_str()), Some("1"));
    assert_eq!(layout.x_ticks.last().map(|t| t.label.as_str()), Some("3"));
}

#[test]
fn small_chart_renders_one_of_each_decoration() {
    let root = small_chart()
        .to_element(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();

    assert_eq!(count(&root, "background"), 1);
    assert_eq!(count(group(&root, "x-axis"), "axis-title"), 1);
    assert_eq!(count(group(&root, "y-axis"), "axis-title"), 1);
    assert_eq!(count(group(&root, "y-axis"), "tick"), 3);
    assert_eq!(count(&root, "series"), 1);
}

#[test]
fn children_follow_z_order() {
    let root = small_chart()
        .to_element(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();
    let order: Vec<&str> = root
        .children()
        .iter()
        .map(|c| c.get_attr("class").unwrap_or(c.tag()))
        .collect();
    assert_eq!(
        order,
        ["style", "background", "series-group", "axis y-axis", "axis x-axis"]
    );
}

#[test]
fn y_ticks_land_inside_plot() {
    let chart = small_chart();
    let layout = chart.layout(&SERIES[..], &HeuristicTextMeasurer).unwrap();
    let root = chart
        .to_element(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();
    let labels: Vec<f64> = group(&root, "y-axis")
        .children()
        .iter()
        .filter(|c| c.has_class("tick-label"))
        .filter_map(|c| c.get_attr("y"))
        .map(|y| y.parse().unwrap())
        .collect();
    assert_eq!(labels.len(), 3);
    // Baselines sit half a label below the tick, so allow that much past the plot.
    for y in labels {
        assert!(
            y >= layout.plot.top && y <= layout.plot.bottom + 6.0,
            "{y} outside {:?}",
            layout.plot
        );
    }
}

#[test]
fn single_point_series_renders() {
    let chart = Chart::new(200, 100);
    let series = [(5.0, 7.0)];
    let layout = chart.layout(&series[..], &HeuristicTextMeasurer).unwrap();
    assert_eq!((layout.x_range.min(), layout.x_range.max()), (4.0, 6.0));
    assert_eq!((layout.y_range.min(), layout.y_range.max()), (6.0, 8.0));
    assert!(
        chart
            .render_to_string(&series[..], &HeuristicTextMeasurer)
            .is_ok()
    );
}

#[test]
fn y_bounds_snap_outward_and_x_bounds_do_not() {
    let chart = Chart::new(400, 300);
    let series = vec![(0.5, 3.0), (9.5, 1234.0)];
    let (x, y) = chart.ranges(&series, &chart.canvas_box()).unwrap();
    assert_eq!((x.min(), x.max()), (0.5, 9.5));
    assert_eq!((y.min(), y.max()), (0.0, 1300.0));
    assert_eq!(x.domain(), 360);
    assert_eq!(y.domain(), 260);
}

#[test]
fn bad_series_are_rejected() {
    let chart = Chart::new(400, 300);
    let empty: Vec<(f64, f64)> = Vec::new();
    assert_eq!(
        chart.render_to_string(&empty, &HeuristicTextMeasurer),
        Err(ChartError::EmptySeries)
    );
    let nan = vec![(0.0, 1.0), (1.0, f64::NAN)];
    assert_eq!(
        chart.render_to_string(&nan, &HeuristicTextMeasurer),
        Err(ChartError::NonFiniteValue { index: 1 })
    );
}

#[test]
fn overflowing_x_span_is_an_error_not_nan() {
    let chart = Chart::new(400, 300);
    let wide = vec![(-1e308, 1.0), (1e308, 2.0)];
    assert_eq!(
        chart.render_to_string(&wide, &HeuristicTextMeasurer),
        Err(ChartError::Range(RangeError::NonFinite {
            min: -1e308,
            max: 1e308
        }))
    );
    assert!(matches!(
        chart.layout(&wide, &HeuristicTextMeasurer),
        Err(ChartError::Range(_))
    ));
}

#[test]
fn oversized_padding_degrades_without_failing() {
    let chart = Chart::new(30, 30);
    let layout = chart.layout(&SERIES[..], &HeuristicTextMeasurer).unwrap();
    assert!(layout.canvas.is_empty(), "{:?}", layout.canvas);
    assert!(layout.plot.is_empty(), "{:?}", layout.plot);
    assert_eq!(layout.x_range.domain(), 0);
    assert!(
        chart
            .render_to_string(&SERIES[..], &HeuristicTextMeasurer)
            .is_ok()
    );
}

#[test]
fn document_is_a_single_closed_svg() {
    let out = small_chart()
        .render_to_string(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();
    assert!(out.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="400px" height="300px">"#));
    assert!(out.ends_with("</svg>"));
    assert_eq!(out.matches("<svg").count(), 1);
    assert!(out.contains(LIGHT_STYLES), "default theme not embedded");
}

#[test]
fn custom_stylesheet_replaces_default() {
    let out = small_chart()
        .with_styles(DARK_STYLES)
        .render_to_string(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();
    assert!(out.contains(DARK_STYLES));
    assert!(!out.contains(LIGHT_STYLES));
}

#[test]
fn explicit_background_overrides_theme() {
    let out = small_chart()
        .with_background(peniko::color::palette::css::BLACK)
        .render_to_string(&SERIES[..], &HeuristicTextMeasurer)
        .unwrap();
    assert!(out.contains(r#"class="background" rx="8" style="fill:#000000;""#));
}

#[test]
fn write_errors_surface() {
    struct Refuse;
    impl core::fmt::Write for Refuse {
        fn write_str(&mut self, _: &str) -> core::fmt::Result {
            Err(core::fmt::Error)
        }
    }
    let result = small_chart().render(&SERIES[..], &HeuristicTextMeasurer, &mut Refuse);
    assert_eq!(result, Err(ChartError::Write(core::fmt::Error)));
}

#[test]
fn render_matches_render_to_string() {
    let chart = small_chart();
    let mut out = String::new();
    chart
        .render(&SERIES[..], &HeuristicTextMeasurer, &mut out)
        .unwrap();
    assert_eq!(
        out,
        chart
            .render_to_string(&SERIES[..], &HeuristicTextMeasurer)
            .unwrap()
    );
}
