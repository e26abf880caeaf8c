// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling: theme stylesheets, inline `style` attributes and stroke normalization.
//!
//! Every generated element carries a CSS class, so the embedded stylesheet decides colors by
//! default. Explicit colors on the chart configuration are written as inline `style`
//! attributes, which take precedence over the stylesheet.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// Stroke widths below this are raised to it, so lines never vanish.
pub const MIN_STROKE_WIDTH: f64 = 1.0;

/// Built-in stylesheet for light backgrounds.
pub const LIGHT_STYLES: &str = "\
.background{fill:#ffffff;}\
.series{stroke:#6b63ff;fill:none;}\
.series-area{fill:#6b63ff;fill-opacity:0.15;stroke:none;}\
.axis-line,.tick{stroke:#333333;}\
text{fill:#333333;font-family:sans-serif;}";

/// Built-in stylesheet for dark backgrounds.
pub const DARK_STYLES: &str = "\
.background{fill:#0d1117;}\
.series{stroke:#a371f7;fill:none;}\
.series-area{fill:#a371f7;fill-opacity:0.2;stroke:none;}\
.axis-line,.tick{stroke:#c9d1d9;}\
text{fill:#c9d1d9;font-family:sans-serif;}";

/// Builds an inline `style` attribute value from `(property, value)` pairs.
///
/// Pairs without a value are skipped. Returns `None` when no pair has one, so the element
/// gets no `style` attribute and the stylesheet stays in charge.
pub fn style_attr(props: &[(&str, Option<&str>)]) -> Option<String> {
    let mut out = String::new();
    for (name, value) in props {
        let Some(value) = value else {
            continue;
        };
        out.push_str(name);
        out.push(':');
        out.push_str(value);
        out.push(';');
    }
    (!out.is_empty()).then_some(out)
}

/// CSS paint for an explicit color; `None` means the theme decides.
pub(crate) fn css_color(color: Option<Color>) -> Option<String> {
    color.map(boxchart_svg::paint)
}

/// Raises `width` to [`MIN_STROKE_WIDTH`] when it is smaller or not finite.
pub fn normalize_stroke_width(width: f64) -> f64 {
    if width.is_finite() && width >= MIN_STROKE_WIDTH {
        width
    } else {
        MIN_STROKE_WIDTH
    }
}

/// Returns `styles`, or [`LIGHT_STYLES`] when it is empty.
pub(crate) fn stylesheet_or_default(styles: &str) -> &str {
    if styles.trim().is_empty() {
        LIGHT_STYLES
    } else {
        styles
    }
}
