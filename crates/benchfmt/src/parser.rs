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

//! Benchmark output parsing.
//!
//! Input is free-form text. Only lines shaped like
//! `<name> <time> ns <cpu> ns <iterations> [details]` are consumed, which is
//! the console layout of Google Benchmark style runners. Everything else
//! (headers, separators, context lines) is skipped without a diagnostic.

use crate::classify::{Classifier, FALLBACK_GROUP};
use crate::error::{BenchfmtError, Result};
use crate::result::{insert_result, BenchmarkResult, GroupMap, RunSet};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

static RESULT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\w\S+)\s+(\S+) ns\s+(\S+) ns\s+(\d+)\s*(.*)$").expect("result pattern compiles")
});

/// Parses a single result line.
///
/// Returns `None` for lines that do not have the result layout, and for
/// lines whose numeric fields fail to parse.
///
/// # Examples
///
/// ```
/// use benchfmt::parser::parse_line;
///
/// let result = parse_line("FooBar 1.0 ns 2.0 ns 100 extra text").unwrap();
/// assert_eq!(result.name(), "FooBar");
/// assert_eq!(result.iterations(), 100);
/// assert_eq!(result.details(), "extra text");
///
/// assert!(parse_line("Benchmark  Time  CPU  Iterations").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<BenchmarkResult> {
    let caps = RESULT_LINE.captures(line)?;
    let name = &caps[1];

    let fields = (
        caps[2].parse::<f64>(),
        caps[3].parse::<f64>(),
        caps[4].parse::<u64>(),
    );
    match fields {
        (Ok(time), Ok(cpu), Ok(iterations)) => Some(BenchmarkResult::new(
            name,
            time,
            cpu,
            iterations,
            &caps[5],
        )),
        _ => {
            debug!(benchmark = name, "skipping line with malformed numbers");
            None
        }
    }
}

/// Returns the identifier used for a run file in comparison reports.
///
/// This is the file name up to its first dot, so `runs/base.2024.txt`
/// becomes `base`.
pub fn run_identifier(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.split('.').next().map(str::to_string))
        .unwrap_or_default()
}

/// Turns benchmark output into groups using a [`Classifier`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    classifier: Classifier,
}

impl Parser {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Returns the group for a benchmark name, falling back to "Other".
    pub fn group_for<'a>(&'a self, name: &str) -> &'a str {
        match self.classifier.classify(name) {
            Some(group) => group,
            None => {
                warn!("Unknown benchmark: {}", name);
                FALLBACK_GROUP
            }
        }
    }

    /// Parses benchmark output held in memory.
    pub fn parse_str(&self, content: &str) -> GroupMap {
        let mut groups = GroupMap::new();

        for result in content.lines().filter_map(parse_line) {
            let group = self.group_for(result.name());
            debug!("Benchmark: {} -> {}", result.name(), group);
            insert_result(&mut groups, group, result);
        }

        groups
    }

    /// Reads and parses one benchmark output file.
    ///
    /// # Errors
    ///
    /// Returns [`BenchfmtError::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<GroupMap> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BenchfmtError::io_error(path, e))?;
        Ok(self.parse_str(&content))
    }

    /// Parses several run files, keyed by [`run_identifier`] in input order.
    ///
    /// See [`insert_run`] for how repeated identifiers are handled.
    pub fn parse_runs<P: AsRef<Path>>(&self, paths: &[P]) -> Result<RunSet> {
        let mut runs = RunSet::new();
        for path in paths {
            let groups = self.parse_file(path)?;
            insert_run(&mut runs, path, groups);
        }
        Ok(runs)
    }
}

/// Adds the groups parsed from `path` to `runs` under its [`run_identifier`].
///
/// When the identifier is already present the new groups replace the
/// earlier run's results but keep its position.
pub fn insert_run(runs: &mut RunSet, path: impl AsRef<Path>, groups: GroupMap) {
    let path = path.as_ref();
    let id = run_identifier(path);
    if runs.insert(id.clone(), groups).is_some() {
        warn!(
            "Duplicate run identifier '{}' from {}; replacing earlier results",
            id,
            path.display()
        );
    }
}
