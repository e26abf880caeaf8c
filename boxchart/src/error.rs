// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

/// Errors raised when constructing a value range.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum RangeError {
    /// `min == max`: every value would map to the same pixel and translation divides by zero.
    #[error("degenerate range: min and max are both {0}")]
    Degenerate(f64),
    /// One of the bounds is NaN or infinite, or the distance between them overflows.
    #[error("range bounds and their span must be finite, got [{min}, {max}]")]
    NonFinite {
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
}

/// Errors raised while laying out or rendering a chart.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ChartError {
    /// The series has no points, so there is no data range to plot.
    #[error("series has no data points")]
    EmptySeries,
    /// A series point has a NaN or infinite coordinate.
    #[error("series value at index {index} is not finite")]
    NonFiniteValue {
        /// Index of the offending point.
        index: usize,
    },
    /// A data range could not be built.
    #[error(transparent)]
    Range(#[from] RangeError),
    /// The output sink rejected a write.
    #[error("failed to write chart output")]
    Write(#[from] core::fmt::Error),
}
