// Dweve benchfmt - Benchmark Report Formatter
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Human-scale duration formatting.
//!
//! Every number in a rendered report goes through [`format_ns`] (or a
//! [`TimeFormat`] with custom precision), so the unit boundaries here are
//! the only numeric presentation rules in the crate.

/// Placeholder rendered for a zero duration.
pub const EMPTY_DURATION: &str = "--";

const NS_PER_US: f64 = 1e3;
const NS_PER_MS: f64 = 1e6;
const NS_PER_S: f64 = 1e9;
const SECS_PER_MINUTE: f64 = 60.0;
const SECS_PER_HOUR: f64 = 3600.0;

/// Decimal precision used when formatting durations.
///
/// `precision` applies to the ns, µs, ms and plain-seconds forms.
/// `precision_over_minute` applies to the seconds field of the `M:SS.ss`
/// and `H:MM:SS.ss` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormat {
    /// Digits after the decimal point below one minute.
    pub precision: usize,
    /// Digits after the decimal point from one minute upwards.
    pub precision_over_minute: usize,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            precision: 3,
            precision_over_minute: 2,
        }
    }
}

impl TimeFormat {
    /// Sets the precision below one minute.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the precision from one minute upwards.
    pub fn with_precision_over_minute(mut self, precision: usize) -> Self {
        self.precision_over_minute = precision;
        self
    }

    /// Formats a duration given in nanoseconds.
    pub fn format_ns(&self, ns: f64) -> String {
        let abs_ns = ns.abs();
        let precision = self.precision;
        if ns == 0.0 {
            EMPTY_DURATION.to_string()
        } else if abs_ns < NS_PER_US {
            format!("{:.precision$} ns", ns)
        } else if abs_ns < NS_PER_MS {
            format!("{:.precision$} µs", ns / NS_PER_US)
        } else if abs_ns < NS_PER_S {
            format!("{:.precision$} ms", ns / NS_PER_MS)
        } else {
            format_seconds(ns / NS_PER_S, self)
        }
    }
}

/// Formats a duration in nanoseconds with the default precision.
///
/// # Examples
///
/// ```
/// use benchfmt::units::format_ns;
///
/// assert_eq!(format_ns(0.0), "--");
/// assert_eq!(format_ns(12.5), "12.500 ns");
/// assert_eq!(format_ns(1_500.0), "1.500 µs");
/// assert_eq!(format_ns(61e9), "1:01.00");
/// ```
pub fn format_ns(ns: f64) -> String {
    TimeFormat::default().format_ns(ns)
}

/// Formats a duration in seconds as `S.sss s`, `M:SS.ss` or `H:MM:SS.ss`.
pub fn format_seconds(seconds: f64, format: &TimeFormat) -> String {
    let sign = if seconds < 0.0 { "-" } else { "" };
    let abs_seconds = seconds.abs();
    let hours = (abs_seconds / SECS_PER_HOUR).floor();
    let minutes = ((abs_seconds % SECS_PER_HOUR) / SECS_PER_MINUTE).floor();
    let secs = abs_seconds % SECS_PER_MINUTE;

    let over = format.precision_over_minute;
    let width = if over == 0 { 2 } else { over + 3 };

    if hours >= 1.0 {
        format!(
            "{sign}{:.0}:{:02.0}:{:0width$.over$}",
            hours, minutes, secs
        )
    } else if minutes >= 1.0 {
        format!("{sign}{:.0}:{:0width$.over$}", minutes, secs)
    } else {
        let precision = format.precision;
        format!("{sign}{:.precision$}s", secs)
    }
}
