// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, these re-export `tracing` macros.
//! When disabled, they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

// Going through `crate::` keeps `warn` from resolving to the built-in lint attribute.
#[cfg(not(feature = "tracing"))]
pub(crate) use crate::{debug, warn};

#[cfg(test)]
mod tests {
    use super::{debug, warn};

    #[test]
    fn macros_accept_tracing_field_syntax() {
        let width = 10_u32;
        let plot = (1.0, 2.0);
        debug!(value = 1.5, "plain field");
        debug!(?plot, "debug-formatted field");
        warn!(width, height = 3, "shorthand and named fields");
        assert_eq!(
            (width, plot),
            (10, (1.0, 2.0)),
            "logging must not consume its arguments"
        );
    }
}
