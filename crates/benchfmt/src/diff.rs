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

//! Cross-run aggregation.
//!
//! Comparison reports line up the same benchmark across N runs. Each row is
//! a [`BenchmarkDiff`] holding one result per run, in run order, with
//! placeholders for runs that did not contain the benchmark. Deltas are
//! chained: every run is compared against the run directly before it.

use crate::error::{BenchfmtError, Result};
use crate::result::{BenchmarkGroup, BenchmarkResult, RunSet};
use indexmap::{IndexMap, IndexSet};

/// Limits above which a change counts as significant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Relative change, `0.05` meaning 5%.
    pub ratio: f64,
    /// Absolute change in nanoseconds.
    pub ns: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ratio: 0.05,
            ns: 10.0,
        }
    }
}

impl Thresholds {
    pub fn new(ratio: f64, ns: f64) -> Self {
        Self { ratio, ns }
    }

    /// Returns true if either the signed ratio or the signed delta exceeds
    /// its limit. Speedups never exceed a non-negative limit.
    pub fn exceeded_by(&self, ratio: f64, delta_ns: f64) -> bool {
        ratio > self.ratio || delta_ns > self.ns
    }
}

/// One benchmark measured across several runs.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDiff {
    results: Vec<BenchmarkResult>,
}

impl BenchmarkDiff {
    /// Creates a diff from per-run results, in run order. `results` is
    /// never empty: a diff group always has at least one run.
    pub(crate) fn new(results: Vec<BenchmarkResult>) -> Self {
        debug_assert!(!results.is_empty());
        Self { results }
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn name(&self) -> &str {
        self.results[0].name()
    }

    /// First non-empty detail string across runs.
    pub fn details(&self) -> &str {
        self.results
            .iter()
            .map(BenchmarkResult::details)
            .find(|d| !d.is_empty())
            .unwrap_or("")
    }

    /// Adjacent `(previous, current)` pairs in run order.
    pub fn pairs(&self) -> impl Iterator<Item = (&BenchmarkResult, &BenchmarkResult)> {
        self.results.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Largest chained difference ratio, `0.0` for a single run.
    pub fn max_difference_ratio(&self) -> f64 {
        self.pairs()
            .map(|(prev, cur)| cur.difference_ratio(prev))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Largest chained difference in nanoseconds, `0.0` for a single run.
    pub fn max_difference(&self) -> f64 {
        self.pairs()
            .map(|(prev, cur)| cur.difference_to(prev))
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Returns true if the largest chained slowdown exceeds `thresholds`.
    ///
    /// A zero largest ratio is never significant. This covers single runs,
    /// unchanged times and benchmarks that only appear in later runs.
    pub fn is_significant(&self, thresholds: &Thresholds) -> bool {
        let ratio = self.max_difference_ratio();
        if ratio == 0.0 {
            return false;
        }
        thresholds.exceeded_by(ratio, self.max_difference())
    }
}

/// All diffs of one group across the compared runs.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkDiffGroup {
    name: String,
    file_names: Vec<String>,
    diffs: Vec<BenchmarkDiff>,
}

impl BenchmarkDiffGroup {
    /// Builds the diffs of one group from per-run groups.
    ///
    /// `results` maps run identifier to that run's version of the group, in
    /// run order. Benchmark names are collected in first-seen order across
    /// runs; a run lacking a benchmark contributes a placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`BenchfmtError::EmptyResults`] if `results` is empty.
    pub fn new(
        name: impl Into<String>,
        file_names: Vec<String>,
        results: &IndexMap<String, BenchmarkGroup>,
    ) -> Result<Self> {
        let name = name.into();
        if results.is_empty() {
            return Err(BenchfmtError::EmptyResults { group: name });
        }

        let benchmark_names: IndexSet<&str> = results
            .values()
            .flat_map(|group| group.benchmarks().iter().map(BenchmarkResult::name))
            .collect();

        let diffs = benchmark_names
            .into_iter()
            .map(|benchmark| {
                let per_run = results
                    .values()
                    .map(|group| {
                        group
                            .get(benchmark)
                            .cloned()
                            .unwrap_or_else(|| BenchmarkResult::placeholder(benchmark))
                    })
                    .collect();
                BenchmarkDiff::new(per_run)
            })
            .collect();

        Ok(Self {
            name,
            file_names,
            diffs,
        })
    }

    /// Builds one diff group per group label seen in any run.
    ///
    /// Groups appear in first-seen order across runs. A run without a given
    /// group takes part with an empty group, so every diff has exactly one
    /// entry per run.
    ///
    /// # Errors
    ///
    /// Returns [`BenchfmtError::EmptyResults`] if `runs` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchfmt::diff::BenchmarkDiffGroup;
    /// use benchfmt::parser::Parser;
    /// use benchfmt::result::RunSet;
    ///
    /// # fn main() -> benchfmt::Result<()> {
    /// let parser = Parser::default();
    /// let mut runs = RunSet::new();
    /// runs.insert("old".into(), parser.parse_str("Permute1 100 ns 100 ns 10"));
    /// runs.insert("new".into(), parser.parse_str("Permute1 150 ns 150 ns 10"));
    ///
    /// let groups = BenchmarkDiffGroup::from_results(&runs)?;
    /// assert_eq!(groups[0].diffs()[0].max_difference_ratio(), 0.5);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_results(runs: &RunSet) -> Result<Vec<Self>> {
        if runs.is_empty() {
            return Err(BenchfmtError::EmptyResults {
                group: String::new(),
            });
        }

        let file_names: Vec<String> = runs.keys().cloned().collect();
        let group_names: IndexSet<&str> = runs
            .values()
            .flat_map(|groups| groups.keys().map(String::as_str))
            .collect();

        group_names
            .into_iter()
            .map(|group_name| {
                let per_run: IndexMap<String, BenchmarkGroup> = runs
                    .iter()
                    .map(|(file, groups)| {
                        let group = groups
                            .get(group_name)
                            .cloned()
                            .unwrap_or_else(|| BenchmarkGroup::new(group_name));
                        (file.clone(), group)
                    })
                    .collect();
                Self::new(group_name, file_names.clone(), &per_run)
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    pub fn diffs(&self) -> &[BenchmarkDiff] {
        &self.diffs
    }

    pub fn max_difference_ratio(&self) -> f64 {
        self.diffs
            .iter()
            .map(BenchmarkDiff::max_difference_ratio)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn max_difference(&self) -> f64 {
        self.diffs
            .iter()
            .map(BenchmarkDiff::max_difference)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    pub fn is_significant(&self, thresholds: &Thresholds) -> bool {
        self.diffs.iter().any(|diff| diff.is_significant(thresholds))
    }
}
