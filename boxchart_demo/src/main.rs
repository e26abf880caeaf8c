// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a small daily time series with the light and dark themes.
//!
//! Writes `boxchart_light.svg` and `boxchart_dark.svg` into the directory given as the first
//! argument (default: the current directory). Set `RUST_LOG=boxchart=debug` to see the layout
//! decisions.

use std::error::Error;
use std::path::PathBuf;

use boxchart::{
    AxisStyle, Chart, DARK_STYLES, HeuristicTextMeasurer, LIGHT_STYLES, SeriesStyle, XAxis, YAxis,
    format_duration,
};
use peniko::color::palette::css;

const DAY: f64 = 86_400.0;
/// 2024-03-01T00:00:00Z.
const START: f64 = 1_709_251_200.0;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let series = build_times();

    let light = base_chart().with_styles(LIGHT_STYLES);
    let dark = base_chart().with_styles(DARK_STYLES).with_series_style(
        SeriesStyle::default()
            .with_fill_area(true)
            .with_color(css::ORANGE),
    );

    for (name, chart) in [("boxchart_light.svg", light), ("boxchart_dark.svg", dark)] {
        let svg = chart.render_to_string(&series, &HeuristicTextMeasurer)?;
        let path = out_dir.join(name);
        std::fs::write(&path, svg)?;
        tracing::info!(path = %path.display(), "wrote chart");
    }
    Ok(())
}

fn base_chart() -> Chart {
    Chart::new(800, 320)
        .with_x_axis(XAxis::new("day"))
        .with_y_axis(
            YAxis::new("build time")
                .with_formatter(format_duration)
                .with_style(AxisStyle::default().with_font_size(11.0)),
        )
}

const WEEKLY: [f64; 7] = [0.0, 35.0, 50.0, 20.0, -15.0, -40.0, -10.0];

/// A month of nightly build durations, in seconds: a slow upward drift plus a weekly wobble.
fn build_times() -> Vec<(f64, f64)> {
    (0..31_u32)
        .zip(WEEKLY.iter().cycle())
        .map(|(day, wobble)| {
            let d = f64::from(day);
            (START + d * DAY, 540.0 + 6.5 * d + wobble)
        })
        .collect()
}
