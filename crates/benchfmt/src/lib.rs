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

//! Benchmark report formatting.
//!
//! Turns console output of benchmark runners into Markdown reports. A single
//! run becomes a grouped table report; several runs become a comparison with
//! per-benchmark trend, ratio and delta against the previous run.
//!
//! ## Pipeline
//!
//! - [`parser`]: extracts result lines and classifies them into groups
//! - [`classify`]: ordered name-pattern rules, first match wins
//! - [`diff`]: lines up benchmarks across runs
//! - [`render`]: Markdown tables, optional `<details>` folding
//! - [`units`]: human-scale duration formatting
//!
//! ## Usage
//!
//! ```
//! use benchfmt::{render, Parser, RenderConfig, RunSet};
//!
//! # fn main() -> benchfmt::Result<()> {
//! let parser = Parser::default();
//! let mut runs = RunSet::new();
//! runs.insert("main".into(), parser.parse_str("Permute1 100 ns 100 ns 1000"));
//! runs.insert("branch".into(), parser.parse_str("Permute1 150 ns 150 ns 1000"));
//!
//! let markdown = render(&runs, &RenderConfig::default())?;
//! assert!(markdown.contains("🔼 50.00%"));
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod diff;
pub mod error;
pub mod parser;
pub mod render;
pub mod result;
pub mod units;

pub use classify::{ClassificationRule, Classifier, DEFAULT_RULES, FALLBACK_GROUP};
pub use diff::{BenchmarkDiff, BenchmarkDiffGroup, Thresholds};
pub use error::{BenchfmtError, Result};
pub use parser::{insert_run, parse_line, run_identifier, Parser};
pub use render::{render, render_diff, render_groups, RenderConfig, WrapMode};
pub use result::{BenchmarkGroup, BenchmarkResult, GroupMap, RunSet, Trend};
pub use units::{format_ns, format_seconds, TimeFormat};
