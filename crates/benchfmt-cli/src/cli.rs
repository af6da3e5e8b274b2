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

//! Command-line argument definitions.
//!
//! The tool has a single mode of operation, so arguments live on one
//! top-level [`Cli`] struct rather than in subcommands.

use crate::commands::{self, ReportOptions};
use crate::error::CliError;
use benchfmt::{RenderConfig, Thresholds, WrapMode};
use clap::{Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// `<details>` folding granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WrapArg {
    /// No folding
    #[default]
    None,
    /// Fold the whole report
    All,
    /// Fold each group's table
    Groups,
}

impl From<WrapArg> for WrapMode {
    fn from(arg: WrapArg) -> Self {
        match arg {
            WrapArg::None => WrapMode::None,
            WrapArg::All => WrapMode::All,
            WrapArg::Groups => WrapMode::Groups,
        }
    }
}

/// benchfmt - Benchmark results to Markdown
///
/// Formats benchmark runner output as grouped Markdown tables. With more
/// than one input file, renders a comparison where each run is compared
/// against the run before it.
///
/// # Examples
///
/// ```bash
/// # Single report
/// benchfmt results.txt
///
/// # Compare two runs, only significant changes, folded per group
/// benchfmt main.txt branch.txt -s -w groups -o comparison.md
/// ```
#[derive(Debug, Parser)]
#[command(name = "benchfmt")]
#[command(author, version, about = "benchfmt - Benchmark results to Markdown", long_about = None)]
pub struct Cli {
    /// Benchmark output files (baseline first)
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    pub files: Vec<PathBuf>,

    /// Markdown heading level of group headers
    #[arg(
        short = 'g',
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    pub group_header_level: u8,

    /// Wrap all benchmarks in details, only groups or none
    #[arg(short = 'w', long, value_enum, default_value_t = WrapArg::None)]
    pub wrap_in_details: WrapArg,

    /// Relative change above which a difference is significant
    #[arg(short = 'r', long, default_value_t = 0.05)]
    pub diff_threshold_ratio: f64,

    /// Absolute change in nanoseconds above which a difference is significant
    #[arg(short = 'n', long, default_value_t = 10.0)]
    pub diff_threshold_ns: f64,

    /// Only show benchmarks that are significantly different
    #[arg(short = 's', long)]
    pub significant_only: bool,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Classification rules file (JSON or YAML list of {pattern, group})
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Log every classified benchmark to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completion: Option<Shell>,
}

impl Cli {
    /// Resolves the arguments into report options.
    pub fn report_options(&self) -> ReportOptions {
        let render = RenderConfig::default()
            .with_group_header_level(usize::from(self.group_header_level))
            .with_wrap(self.wrap_in_details.into())
            .with_thresholds(Thresholds::new(
                self.diff_threshold_ratio,
                self.diff_threshold_ns,
            ))
            .with_significant_only(self.significant_only);

        ReportOptions {
            files: self.files.clone(),
            rules: self.rules.clone(),
            output: self.output_file.clone(),
            render,
        }
    }

    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading, rendering or writing the report fails.
    pub fn execute(self) -> Result<(), CliError> {
        if let Some(shell) = self.completion {
            commands::generate_completion(shell);
            return Ok(());
        }
        commands::report(&self.report_options())
    }
}
