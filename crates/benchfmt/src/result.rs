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

//! Benchmark measurements and grouping.

use crate::units::TimeFormat;
use indexmap::IndexMap;
use std::fmt;

/// Direction of change between two measurements of the same benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Slower than the previous run.
    Up,
    /// Faster than the previous run.
    Down,
    /// Exactly the same time.
    Stable,
}

impl Trend {
    /// Returns the symbol rendered in comparison tables.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Up => "🔼",
            Trend::Down => "🔽",
            Trend::Stable => "🔄",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One parsed benchmark line.
///
/// Times are in nanoseconds. A result with zero time stands in for a
/// benchmark that is absent from a run (see [`BenchmarkResult::placeholder`]).
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    name: String,
    time: f64,
    cpu: f64,
    iterations: u64,
    details: String,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(
        name: impl Into<String>,
        time: f64,
        cpu: f64,
        iterations: u64,
        details: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time,
            cpu,
            iterations,
            details: details.into(),
        }
    }

    /// Creates the zero-valued stand-in for a benchmark missing from a run.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self::new(name, 0.0, 0.0, 0, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wall time in nanoseconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// CPU time in nanoseconds.
    pub fn cpu(&self) -> f64 {
        self.cpu
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Returns true for a zero-time stand-in.
    pub fn is_placeholder(&self) -> bool {
        self.time == 0.0
    }

    pub fn is_better_than(&self, other: &BenchmarkResult) -> bool {
        self.time < other.time
    }

    pub fn is_worse_than(&self, other: &BenchmarkResult) -> bool {
        self.time > other.time
    }

    /// Signed time difference `self - other` in nanoseconds.
    pub fn difference_to(&self, other: &BenchmarkResult) -> f64 {
        self.time - other.time
    }

    /// Signed relative change against `other`.
    ///
    /// Returns `0.0` when `other` has zero time, so placeholders never
    /// produce infinite ratios.
    pub fn difference_ratio(&self, other: &BenchmarkResult) -> f64 {
        if other.time == 0.0 {
            0.0
        } else {
            (self.time - other.time) / other.time
        }
    }

    pub fn trend(&self, other: &BenchmarkResult) -> Trend {
        if self.is_better_than(other) {
            Trend::Down
        } else if self.is_worse_than(other) {
            Trend::Up
        } else {
            Trend::Stable
        }
    }

    /// Renders the single-run table row for this result.
    pub fn table_row(&self, format: &TimeFormat) -> String {
        format!(
            "| {} | {} | {} | {} | {} |",
            self.name,
            format.format_ns(self.time),
            format.format_ns(self.cpu),
            self.iterations,
            self.details
        )
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.table_row(&TimeFormat::default()))
    }
}

/// A named category of benchmarks, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BenchmarkGroup {
    name: String,
    benchmarks: Vec<BenchmarkResult>,
}

impl BenchmarkGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            benchmarks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn benchmarks(&self) -> &[BenchmarkResult] {
        &self.benchmarks
    }

    pub fn push(&mut self, result: BenchmarkResult) {
        self.benchmarks.push(result);
    }

    /// Finds the first benchmark with the given name.
    pub fn get(&self, name: &str) -> Option<&BenchmarkResult> {
        self.benchmarks.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}

/// Group label -> group, insertion-ordered by first occurrence.
pub type GroupMap = IndexMap<String, BenchmarkGroup>;

/// Run identifier -> groups of that run, in input order.
pub type RunSet = IndexMap<String, GroupMap>;

/// Appends a result to its group, creating the group on first use.
pub fn insert_result(groups: &mut GroupMap, group: &str, result: BenchmarkResult) {
    groups
        .entry(group.to_string())
        .or_insert_with(|| BenchmarkGroup::new(group))
        .push(result);
}
