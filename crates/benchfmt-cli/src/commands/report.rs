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

//! Report command - parse run files and render the Markdown report

use super::{read_file, write_output};
use crate::error::CliError;
use benchfmt::{insert_run, render, Classifier, Parser, RenderConfig, RunSet};
use std::path::PathBuf;
use tracing::info;

/// Everything the report command needs, resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Run files in comparison order (baseline first).
    pub files: Vec<PathBuf>,
    /// Custom classification rules; built-in rules when `None`.
    pub rules: Option<PathBuf>,
    /// Report destination; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Rendering options.
    pub render: RenderConfig,
}

/// Reads every run file into a [`RunSet`] keyed by run identifier.
///
/// Files go through the size-checked [`read_file`]; repeated identifiers
/// are handled by [`insert_run`].
pub fn load_runs(files: &[PathBuf], parser: &Parser) -> Result<RunSet, CliError> {
    let mut runs = RunSet::new();
    for path in files {
        let content = read_file(path)?;
        let groups = parser.parse_str(&content);
        info!(groups = groups.len(), "Parsed {}", path.display());
        insert_run(&mut runs, path, groups);
    }
    Ok(runs)
}

/// Render the report for the given run files.
///
/// One distinct run identifier produces the grouped report; more produce a
/// comparison against the previous run.
///
/// # Errors
///
/// Returns `Err` if:
/// - No input files are given
/// - An input or rules file cannot be read or decoded
/// - The render options are out of range
/// - The output cannot be written
///
/// # Examples
///
/// ```no_run
/// use benchfmt_cli::commands::{report, ReportOptions};
///
/// # fn main() -> Result<(), benchfmt_cli::error::CliError> {
/// report(&ReportOptions {
///     files: vec!["main.txt".into(), "branch.txt".into()],
///     output: Some("comparison.md".into()),
///     ..Default::default()
/// })?;
/// # Ok(())
/// # }
/// ```
pub fn report(options: &ReportOptions) -> Result<(), CliError> {
    if options.files.is_empty() {
        return Err(CliError::invalid_input("at least one input file is required"));
    }
    options.render.validate()?;

    let classifier = match &options.rules {
        Some(path) => Classifier::from_path(path)?,
        None => Classifier::default(),
    };
    let parser = Parser::new(classifier);

    let runs = load_runs(&options.files, &parser)?;
    let markdown = render(&runs, &options.render)?;

    match &options.output {
        Some(path) => {
            info!("Writing report to {}", path.display());
            write_output(&markdown, Some(path))
        }
        None => write_output(&format!("{}\n", markdown), None),
    }
}
