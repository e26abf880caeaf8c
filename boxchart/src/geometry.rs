// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout rectangles.
//!
//! [`LayoutBox`] is the axis-aligned rectangle every layout step produces; [`BoxCorners`] is the
//! four-point form used when a box has to be rotated (e.g. a vertical axis title) and then
//! turned back into layout bounds.
//!
//! Coordinates are screen space: `y` grows downward. All operations return new values.

use kurbo::{Affine, Point, Rect};

use crate::snap::{half_px, px};

/// An axis-aligned rectangle given by its four edges.
///
/// Consumers expect `left <= right` and `top <= bottom`. [`LayoutBox::width`] and
/// [`LayoutBox::height`] take the absolute value so an inverted box never reports a negative
/// size, but an inverted box means something upstream went wrong; see
/// [`LayoutBox::normalized`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl LayoutBox {
    /// Creates a box from its edges, in `top, left, right, bottom` order.
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Horizontal extent, `|right - left|`.
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    /// Vertical extent, `|bottom - top|`.
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    /// Pixel-snapped center: `left + width/2`, `top + height/2`, halves in whole pixels.
    pub fn center(&self) -> Point {
        Point::new(
            self.left + half_px(self.width()),
            self.top + half_px(self.height()),
        )
    }

    /// The smallest box containing both `self` and `other`.
    #[must_use]
    pub fn grow(&self, other: &Self) -> Self {
        Self {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// The four corners of this box, unrotated.
    pub fn corners(&self) -> BoxCorners {
        BoxCorners {
            top_left: Point::new(self.left, self.top),
            top_right: Point::new(self.right, self.top),
            bottom_right: Point::new(self.right, self.bottom),
            bottom_left: Point::new(self.left, self.bottom),
        }
    }

    /// Shrinks `self` by however far `other` overflows `bounds`, edge by edge.
    ///
    /// `bounds` is the hard limit (the canvas) and `other` is the extent the layout wants
    /// (plot plus axis decoration). If `other.top` lies `d` above `bounds.top`, the result's top
    /// moves down by `d`; likewise for the other three edges. Edges where `other` stays inside
    /// `bounds` keep `self`'s value.
    #[must_use]
    pub fn outer_constrain(&self, bounds: &Self, other: &Self) -> Self {
        let mut out = *self;
        if other.top < bounds.top {
            out.top = self.top + (bounds.top - other.top);
        }
        if other.left < bounds.left {
            out.left = self.left + (bounds.left - other.left);
        }
        if other.right > bounds.right {
            out.right = self.right - (other.right - bounds.right);
        }
        if other.bottom > bounds.bottom {
            out.bottom = self.bottom - (other.bottom - bounds.bottom);
        }
        out
    }

    /// Collapses inverted edges so that `left <= right` and `top <= bottom`.
    ///
    /// The left and top edges are kept; an inverted right/bottom edge is pulled back onto them,
    /// producing a zero-width or zero-height box.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            top: self.top,
            left: self.left,
            right: self.right.max(self.left),
            bottom: self.bottom.max(self.top),
        }
    }

    /// Returns `true` if the box has no area.
    pub fn is_empty(&self) -> bool {
        !(self.right > self.left && self.bottom > self.top)
    }

    /// Returns `true` if `other` lies entirely inside `self` (edges inclusive).
    pub fn contains_box(&self, other: &Self) -> bool {
        other.top >= self.top
            && other.left >= self.left
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Converts to a `kurbo::Rect`.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for LayoutBox {
    fn from(r: Rect) -> Self {
        Self::new(r.y0, r.x0, r.x1, r.y1)
    }
}

impl From<LayoutBox> for Rect {
    fn from(b: LayoutBox) -> Self {
        b.to_rect()
    }
}

/// The four corners of a (possibly rotated) rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoxCorners {
    /// Top-left corner (before rotation).
    pub top_left: Point,
    /// Top-right corner (before rotation).
    pub top_right: Point,
    /// Bottom-right corner (before rotation).
    pub bottom_right: Point,
    /// Bottom-left corner (before rotation).
    pub bottom_left: Point,
}

impl BoxCorners {
    /// The smallest axis-aligned box enclosing the corners.
    ///
    /// All four corners are considered for every edge, so the result is well formed whatever
    /// the rotation.
    pub fn bounds(&self) -> LayoutBox {
        let pts = [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ];
        pts.iter().fold(
            LayoutBox::new(
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
            |b, p| LayoutBox {
                top: b.top.min(p.y),
                left: b.left.min(p.x),
                right: b.right.max(p.x),
                bottom: b.bottom.max(p.y),
            },
        )
    }

    /// Pixel-snapped center.
    ///
    /// Averages each side's pair of corners, then adds half the (whole pixel) distance between
    /// opposite sides to the lesser side.
    pub fn center(&self) -> Point {
        let left = px(mean(self.top_left.x, self.bottom_left.x));
        let right = px(mean(self.top_right.x, self.bottom_right.x));
        let top = px(mean(self.top_left.y, self.top_right.y));
        let bottom = px(mean(self.bottom_left.y, self.bottom_right.y));
        Point::new(half_px(right - left) + left, half_px(bottom - top) + top)
    }

    /// Exact center: the average of the four corners.
    pub fn centroid(&self) -> Point {
        Point::new(
            0.25 * (self.top_left.x + self.top_right.x + self.bottom_right.x + self.bottom_left.x),
            0.25 * (self.top_left.y + self.top_right.y + self.bottom_right.y + self.bottom_left.y),
        )
    }

    /// Rotates all four corners by `theta_degrees` about the shape's center.
    ///
    /// Positive angles turn clockwise on screen (y down), the same direction as an SVG
    /// `rotate(angle cx cy)` transform. Rotation uses [`BoxCorners::centroid`] so that
    /// `rotate(a).rotate(-a)` returns to the original corners.
    #[must_use]
    pub fn rotate(&self, theta_degrees: f64) -> Self {
        let t = Affine::rotate_about(theta_degrees.to_radians(), self.centroid());
        Self {
            top_left: t * self.top_left,
            top_right: t * self.top_right,
            bottom_right: t * self.bottom_right,
            bottom_left: t * self.bottom_left,
        }
    }
}

fn mean(a: f64, b: f64) -> f64 {
    0.5 * (a + b)
}
