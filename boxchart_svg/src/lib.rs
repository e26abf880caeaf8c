// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG element builder for `boxchart`.
//!
//! Charts are assembled as a tree of [`Element`]s (rectangles, paths, text, a stylesheet) with
//! chainable attribute setters, then serialized once with [`Element::render`]. Building the tree
//! first means a document is never half-written: the root `<svg>` is closed only after every
//! child has been emitted.
//!
//! The builder never reads anything back from its output; it only knows how to write.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use kurbo::{BezPath, PathEl, Rect};
use peniko::Color;
use smallvec::SmallVec;

/// The SVG XML namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

type Attrs = SmallVec<[(&'static str, String); 8]>;

#[derive(Clone, Debug, PartialEq)]
enum Body {
    Empty,
    Text(String),
    Css(String),
    Children(Vec<Element>),
}

/// A single SVG element with attributes and content.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Attrs,
    body: Body,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            body: Body::Empty,
        }
    }

    /// Creates a root `<svg>` element of the given pixel size.
    pub fn svg(width: f64, height: f64) -> Self {
        Self::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("width", px(width))
            .attr("height", px(height))
    }

    /// Creates a `<g>` group.
    pub fn group() -> Self {
        Self::new("g")
    }

    /// Creates a `<rect>` covering `rect`.
    pub fn rect(rect: Rect) -> Self {
        Self::new("rect")
            .attr("x", rect.x0)
            .attr("y", rect.y0)
            .attr("width", rect.width())
            .attr("height", rect.height())
    }

    /// Creates a `<path>` whose `d` attribute is `path`.
    pub fn path(path: &BezPath) -> Self {
        Self::new("path").attr("d", path_data(path))
    }

    /// Creates a `<text>` element with the given content.
    pub fn text(content: impl Into<String>) -> Self {
        let mut el = Self::new("text");
        el.body = Body::Text(content.into());
        el
    }

    /// Creates a `<style type="text/css">` block.
    pub fn style(css: impl Into<String>) -> Self {
        let mut el = Self::new("style").attr("type", "text/css");
        el.body = Body::Css(css.into());
        el
    }

    /// Sets an attribute, replacing any previous value with the same name.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Display) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an attribute only when `value` is `Some` and renders to a non-empty string.
    #[must_use]
    pub fn attr_opt(self, name: &'static str, value: Option<impl Display>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.attr(name, v),
            _ => self,
        }
    }

    /// Sets an attribute in place.
    pub fn set_attr(&mut self, name: &'static str, value: impl Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Appends a child element and returns `self`.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Appends a child element.
    ///
    /// Any text or stylesheet content previously set on this element is replaced.
    pub fn push(&mut self, child: Self) {
        match &mut self.body {
            Body::Children(children) => children.push(child),
            body => *body = Body::Children(alloc::vec![child]),
        }
    }

    /// The tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the value of attribute `name`, if set.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the whitespace-separated `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|c| c == class))
    }

    /// Direct children (empty for leaf elements).
    pub fn children(&self) -> &[Self] {
        match &self.body {
            Body::Children(children) => children,
            _ => &[],
        }
    }

    /// Text content of a `<text>` element.
    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            Body::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Iterates over this element and all of its descendants, in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: alloc::vec![self] }
    }

    /// Serializes this element and its children into `out`.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, r#" {name}="{}""#, Escaped(value))?;
        }
        match &self.body {
            Body::Empty => out.write_str("/>"),
            Body::Text(text) => write!(out, ">{}</{}>", Escaped(text), self.tag),
            Body::Css(css) => write!(out, "><![CDATA[{css}]]></{}>", self.tag),
            Body::Children(children) => {
                out.write_char('>')?;
                for child in children {
                    child.render(out)?;
                }
                write!(out, "</{}>", self.tag)
            }
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Pre-order iterator returned by [`Element::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let el = self.stack.pop()?;
        self.stack.extend(el.children().iter().rev());
        Some(el)
    }
}

/// Formats a pixel length attribute (`"120px"`).
pub fn px(v: f64) -> String {
    alloc::format!("{v}px")
}

/// Formats an SVG `rotate(angle cx cy)` transform.
pub fn rotate(angle_degrees: f64, cx: f64, cy: f64) -> String {
    alloc::format!("rotate({angle_degrees} {cx} {cy})")
}

/// Serializes a path into SVG path data (`d` attribute syntax).
pub fn path_data(path: &BezPath) -> String {
    let mut out = String::new();
    for el in path.elements() {
        // Writing into a `String` is infallible.
        let _ = match *el {
            PathEl::MoveTo(p) => write!(out, "M{} {}", p.x, p.y),
            PathEl::LineTo(p) => write!(out, "L{} {}", p.x, p.y),
            PathEl::QuadTo(p1, p2) => write!(out, "Q{} {} {} {}", p1.x, p1.y, p2.x, p2.y),
            PathEl::CurveTo(p1, p2, p3) => write!(
                out,
                "C{} {} {} {} {} {}",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            ),
            PathEl::ClosePath => out.write_char('Z'),
        };
    }
    out
}

/// Formats a color as CSS paint: `#rrggbb`, or `rgba(..)` when translucent.
pub fn paint(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        alloc::format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
    } else {
        let alpha = f64::from(rgba.a) / 255.0;
        alloc::format!("rgba({},{},{},{alpha:.3})", rgba.r, rgba.g, rgba.b)
    }
}

/// Escapes XML special characters in `s`.
pub fn escape_xml(s: &str) -> String {
    Escaped(s).to_string()
}

struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&apos;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
