// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! `boxchart` reserves room for tick labels and axis titles before it draws anything, so it
//! needs pixel extents for strings it never renders itself. Glyph shaping lives downstream (in
//! whatever displays the SVG), so the layout code depends only on the tiny [`TextMeasurer`]
//! interface defined here.
//!
//! This crate is intentionally:
//! - `no_std` and dependency-free, and
//! - renderer-agnostic: a shaping engine, a browser canvas or the bundled
//!   [`HeuristicTextMeasurer`] can all implement the same trait.

#![no_std]

/// A minimal text measurement interface used by axis layout.
///
/// Implementations must be deterministic: the same `(text, style)` pair always produces the
/// same metrics, otherwise the measure and render passes of a chart disagree.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The generic font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Generic font family selection for measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &'static str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width (horizontal extent of the line).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }

    /// Returns `(width, height)`, the pair axis layout works with.
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.advance_width, self.line_height())
    }
}

/// A tiny heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph advance of ~0.6em for monospace, ~0.55em for the
/// proportional families (widened by 10% for bold), and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        let em = match style.font_family {
            FontFamily::Monospace => 0.6,
            FontFamily::Serif | FontFamily::SansSerif => 0.55,
        };
        let weight = if style.font_weight >= FontWeight::BOLD {
            1.1
        } else {
            1.0
        };
        let advance_width = em * weight * style.font_size * text.chars().count() as f64;
        let ascent = 0.8 * style.font_size;
        TextMetrics {
            advance_width,
            ascent,
            // Keeps `line_height()` exactly equal to the font size.
            descent: style.font_size - ascent,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_width_scales_with_char_count() {
        let m = HeuristicTextMeasurer;
        let one = m.measure("a", TextStyle::new(10.0));
        let four = m.measure("abcd", TextStyle::new(10.0));
        assert!((four.advance_width - 4.0 * one.advance_width).abs() < 1e-9);
        assert!((one.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn heuristic_counts_chars_not_bytes() {
        let m = HeuristicTextMeasurer;
        let style = TextStyle::new(10.0).with_family(FontFamily::Monospace);
        let ascii = m.measure("ab", style);
        let accented = m.measure("\u{e9}\u{e8}", style);
        assert_eq!(ascii.advance_width, accented.advance_width);
    }

    #[test]
    fn bold_is_wider() {
        let m = HeuristicTextMeasurer;
        let normal = m.measure("2024", TextStyle::new(12.0));
        let bold = m.measure("2024", TextStyle::new(12.0).with_weight(FontWeight::BOLD));
        assert!(bold.advance_width > normal.advance_width);
        assert_eq!(bold.line_height(), normal.line_height());
    }

    #[test]
    fn empty_text_has_height_but_no_width() {
        let (w, h) = HeuristicTextMeasurer.measure("", TextStyle::default()).size();
        assert_eq!(w, 0.0);
        assert!((h - 12.0).abs() < 1e-9);
    }
}
