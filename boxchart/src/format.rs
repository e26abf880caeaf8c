// Copyright 2025 the boxchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatters.
//!
//! A formatter turns a tick value into its label. Axes hold one as a [`ValueFormatter`]; the
//! functions in this module are the built-in choices.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A shared tick label formatter.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

const SECONDS_PER_DAY: i64 = 86_400;

/// Formats a value rounded to a whole number (`"1235"`).
pub fn format_int(v: f64) -> String {
    alloc::format!("{v:.0}")
}

/// Formats a value with the shortest decimal representation (`"2.5"`, `"3"`).
pub fn format_plain(v: f64) -> String {
    alloc::format!("{v}")
}

/// Formats unix seconds as a UTC calendar date (`"2024-02-29"`).
pub fn format_date(v: f64) -> String {
    let Some(secs) = whole_seconds(v.floor()) else {
        return alloc::format!("{v}");
    };
    let (y, m, d) = civil_from_days(secs.div_euclid(SECONDS_PER_DAY));
    alloc::format!("{y:04}-{m:02}-{d:02}")
}

/// Formats seconds as a duration: `"5"`, `"1:05"`, `"1:02:03"`.
pub fn format_duration(v: f64) -> String {
    let Some(secs) = whole_seconds(v.abs().round_half_up()) else {
        return alloc::format!("{v}");
    };
    let sign = if v < 0.0 && secs != 0 { "-" } else { "" };

    let h = secs / 3600;
    let m = (secs / 60) % 60;
    let s = secs % 60;

    if h > 0 {
        alloc::format!("{sign}{h}:{m:02}:{s:02}")
    } else if m > 0 {
        alloc::format!("{sign}{m}:{s:02}")
    } else {
        alloc::format!("{sign}{s}")
    }
}

trait RoundHalfUp {
    fn round_half_up(self) -> Self;
}

impl RoundHalfUp for f64 {
    fn round_half_up(self) -> Self {
        (self + 0.5).floor()
    }
}

fn whole_seconds(v: f64) -> Option<i64> {
    // Beyond ~2^53 seconds the calendar math stops being meaningful anyway.
    const LIMIT: f64 = 9.0e15;
    if !v.is_finite() || v.abs() > LIMIT {
        return None;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "finite, already integral and bounded by LIMIT"
    )]
    Some(v as i64)
}

/// Converts days since 1970-01-01 to a proleptic Gregorian `(year, month, day)`.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "month is in 1..=12 and day in 1..=31"
    )]
    (y, m as u32, d as u32)
}
