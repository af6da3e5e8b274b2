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

//! Markdown rendering of single-run reports and run comparisons.

use crate::diff::{BenchmarkDiff, BenchmarkDiffGroup, Thresholds};
use crate::error::{BenchfmtError, Result};
use crate::result::{GroupMap, RunSet};
use crate::units::TimeFormat;
use std::fmt;
use std::str::FromStr;
use tracing::info;

const TABLE_HEADER: &str = "
| Benchmark | Time | CPU | Iterations | Details |
| --- | --- | --- | --- | --- |
";

const DETAILS_SUMMARY: &str = "Benchmark results";

/// Which parts of the report are folded into `<details>` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// No folding.
    #[default]
    None,
    /// The whole report in one block.
    All,
    /// Each group's table in its own block.
    Groups,
}

impl WrapMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WrapMode::None => "none",
            WrapMode::All => "all",
            WrapMode::Groups => "groups",
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WrapMode {
    type Err = BenchfmtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(WrapMode::None),
            "all" => Ok(WrapMode::All),
            "groups" => Ok(WrapMode::Groups),
            other => Err(BenchfmtError::invalid_config(
                "wrap_in_details",
                format!("expected one of none, all, groups; got '{}'", other),
            )),
        }
    }
}

/// Rendering options.
///
/// # Example
///
/// ```
/// use benchfmt::render::{RenderConfig, WrapMode};
///
/// let config = RenderConfig::default()
///     .with_group_header_level(3)
///     .with_wrap(WrapMode::Groups)
///     .with_significant_only(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Markdown heading depth of group headers (1..=6).
    pub group_header_level: usize,
    /// `<details>` folding.
    pub wrap: WrapMode,
    /// Significance limits for comparison reports.
    pub thresholds: Thresholds,
    /// Drop non-significant rows and groups from comparison reports.
    pub significant_only: bool,
    /// Duration formatting.
    pub time_format: TimeFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            group_header_level: 2,
            wrap: WrapMode::None,
            thresholds: Thresholds::default(),
            significant_only: false,
            time_format: TimeFormat::default(),
        }
    }
}

impl RenderConfig {
    pub fn with_group_header_level(mut self, level: usize) -> Self {
        self.group_header_level = level;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_significant_only(mut self, significant_only: bool) -> Self {
        self.significant_only = significant_only;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Checks option ranges.
    pub fn validate(&self) -> Result<()> {
        if !(1..=6).contains(&self.group_header_level) {
            return Err(BenchfmtError::invalid_config(
                "group_header_level",
                format!("must be between 1 and 6, got {}", self.group_header_level),
            ));
        }
        if self.thresholds.ratio < 0.0 || self.thresholds.ratio.is_nan() {
            return Err(BenchfmtError::invalid_config(
                "diff_threshold_ratio",
                "must be a non-negative number",
            ));
        }
        if self.thresholds.ns < 0.0 || self.thresholds.ns.is_nan() {
            return Err(BenchfmtError::invalid_config(
                "diff_threshold_ns",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }

    fn header(&self, name: &str) -> String {
        format!("{} {}", "#".repeat(self.group_header_level), name)
    }

    fn keeps_row(&self, diff: &BenchmarkDiff) -> bool {
        !self.significant_only || diff.is_significant(&self.thresholds)
    }

    fn keeps_group(&self, group: &BenchmarkDiffGroup) -> bool {
        !self.significant_only || group.is_significant(&self.thresholds)
    }
}

/// Wraps content in a collapsed `<details>` block.
pub fn details_block(content: &str) -> String {
    format!(
        "\n\n<details>\n<summary>{}</summary>\n\n{}\n\n</details>\n\n",
        DETAILS_SUMMARY, content
    )
}

/// Renders the groups of a single run.
pub fn render_groups(groups: &GroupMap, config: &RenderConfig) -> String {
    let mut content = String::new();

    for group in groups.values() {
        content.push_str(&config.header(group.name()));
        content.push('\n');

        let mut table = String::from(TABLE_HEADER);
        for benchmark in group.benchmarks() {
            table.push_str(&benchmark.table_row(&config.time_format));
            table.push('\n');
        }

        if config.wrap == WrapMode::Groups {
            table = details_block(&table);
        }
        content.push_str(&table);
        content.push('\n');
    }

    if config.wrap == WrapMode::All {
        content = details_block(&content);
    }
    content
}

/// Header and separator rows of a comparison table.
pub fn diff_table_header(file_names: &[String]) -> String {
    let mut header = String::from("| Benchmark |");
    let mut separator = String::from("| --- |");

    for (i, file_name) in file_names.iter().enumerate() {
        header.push_str(&format!(" {} |", file_name));
        separator.push_str(" --- |");
        if i > 0 {
            header.push_str(" Δ |");
            separator.push_str(" --- |");
        }
    }

    header.push_str(" Details |\n");
    separator.push_str(" --- |\n");
    header + &separator
}

/// One comparison table row.
///
/// The first run shows its time only; every later run shows its time and
/// then trend, ratio and delta against the run before it.
pub fn diff_table_row(diff: &BenchmarkDiff, format: &TimeFormat) -> String {
    let mut row = format!("| {} |", diff.name());

    for (i, result) in diff.results().iter().enumerate() {
        row.push_str(&format!(" {} |", format.format_ns(result.time())));
        if i > 0 {
            let previous = &diff.results()[i - 1];
            row.push_str(&format!(
                " {} {:.2}% {} |",
                result.trend(previous),
                result.difference_ratio(previous) * 100.0,
                format.format_ns(result.difference_to(previous))
            ));
        }
    }

    row.push_str(&format!(" {} |", diff.details()));
    row
}

fn diff_table(group: &BenchmarkDiffGroup, config: &RenderConfig) -> String {
    let rows: Vec<String> = group
        .diffs()
        .iter()
        .filter(|diff| config.keeps_row(diff))
        .map(|diff| diff_table_row(diff, &config.time_format))
        .collect();
    diff_table_header(group.file_names()) + &rows.join("\n")
}

/// Renders a comparison of several runs.
pub fn render_diff(groups: &[BenchmarkDiffGroup], config: &RenderConfig) -> String {
    let mut content = String::new();

    for group in groups.iter().filter(|g| config.keeps_group(g)) {
        content.push('\n');
        content.push_str(&config.header(group.name()));
        content.push_str("\n\n");

        let mut table = diff_table(group, config);
        if config.wrap == WrapMode::Groups {
            table = details_block(&table);
        }
        content.push_str(&table);
        content.push('\n');
    }

    if config.wrap == WrapMode::All {
        content = details_block(&content);
    }
    content
}

/// Renders a report for parsed runs.
///
/// A single run yields the grouped report, more runs yield a comparison.
///
/// # Errors
///
/// Returns [`BenchfmtError::InvalidConfig`] for out-of-range options and
/// [`BenchfmtError::EmptyResults`] when `runs` is empty.
pub fn render(runs: &RunSet, config: &RenderConfig) -> Result<String> {
    config.validate()?;

    if runs.len() == 1 {
        info!("Rendering single-run report");
        let groups = runs.values().next().map(|groups| render_groups(groups, config));
        return Ok(groups.unwrap_or_default());
    }

    info!(runs = runs.len(), "Rendering comparison report");
    let diff_groups = BenchmarkDiffGroup::from_results(runs)?;
    Ok(render_diff(&diff_groups, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn runs(inputs: &[(&str, &str)]) -> RunSet {
        let parser = Parser::default();
        inputs
            .iter()
            .map(|(id, text)| (id.to_string(), parser.parse_str(text)))
            .collect()
    }

    #[test]
    fn test_wrap_mode_from_str() {
        assert_eq!("none".parse::<WrapMode>().unwrap(), WrapMode::None);
        assert_eq!("all".parse::<WrapMode>().unwrap(), WrapMode::All);
        assert_eq!("groups".parse::<WrapMode>().unwrap(), WrapMode::Groups);
        assert!("everything".parse::<WrapMode>().is_err());
        assert_eq!(WrapMode::Groups.to_string(), "groups");
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(RenderConfig::default().with_group_header_level(0).validate().is_err());
        assert!(RenderConfig::default().with_group_header_level(7).validate().is_err());
        assert!(RenderConfig::default()
            .with_thresholds(Thresholds::new(-1.0, 10.0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_render_groups() {
        let groups = Parser::default().parse_str(
            "Permute1 100 ns 99 ns 7000\nParseSimple 1500 ns 1400 ns 300 items=3\n",
        );
        let output = render_groups(&groups, &RenderConfig::default());

        let expected = "## Permutation

| Benchmark | Time | CPU | Iterations | Details |
| --- | --- | --- | --- | --- |
| Permute1 | 100.000 ns | 99.000 ns | 7000 |  |

## Pattern Parsing

| Benchmark | Time | CPU | Iterations | Details |
| --- | --- | --- | --- | --- |
| ParseSimple | 1.500 µs | 1.400 µs | 300 | items=3 |

";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_groups_header_level() {
        let groups = Parser::default().parse_str("Permute1 100 ns 99 ns 7000\n");
        let output = render_groups(&groups, &RenderConfig::default().with_group_header_level(4));
        assert!(output.starts_with("#### Permutation\n"));
    }

    #[test]
    fn test_render_with_time_format() {
        let config = RenderConfig::default().with_time_format(TimeFormat::default().with_precision(1));

        let groups = Parser::default().parse_str("ParseSimple 1500 ns 1400 ns 300\n");
        let output = render_groups(&groups, &config);
        assert!(output.contains("| ParseSimple | 1.5 µs | 1.4 µs | 300 |  |"));

        let pair = runs(&[("old", "Permute1 100 ns 100 ns 10"), ("new", "Permute1 150 ns 150 ns 10")]);
        let output = render(&pair, &config).unwrap();
        assert!(output.contains("| Permute1 | 100.0 ns | 150.0 ns | 🔼 50.00% 50.0 ns |  |"));
    }

    #[test]
    fn test_render_groups_wrapped() {
        let groups = Parser::default().parse_str("Permute1 100 ns 99 ns 7000\nParseA 1 ns 1 ns 1\n");

        let per_group = render_groups(&groups, &RenderConfig::default().with_wrap(WrapMode::Groups));
        assert_eq!(per_group.matches("<details>").count(), 2);
        assert!(per_group.starts_with("## Permutation\n\n\n<details>"));

        let all = render_groups(&groups, &RenderConfig::default().with_wrap(WrapMode::All));
        assert_eq!(all.matches("<details>").count(), 1);
        assert!(all.starts_with("\n\n<details>\n<summary>Benchmark results</summary>\n\n## Permutation"));
        assert!(all.ends_with("</details>\n\n"));
    }

    #[test]
    fn test_diff_table_header() {
        let names = vec!["old".to_string(), "new".to_string(), "next".to_string()];
        assert_eq!(
            diff_table_header(&names),
            "| Benchmark | old | new | Δ | next | Δ | Details |\n\
             | --- | --- | --- | --- | --- | --- | --- |\n"
        );
    }

    #[test]
    fn test_diff_table_row() {
        let runs = runs(&[
            ("old", "Permute1 100 ns 100 ns 10 items=5"),
            ("new", "Permute1 150 ns 150 ns 10"),
        ]);
        let groups = BenchmarkDiffGroup::from_results(&runs).unwrap();
        let row = diff_table_row(&groups[0].diffs()[0], &TimeFormat::default());
        assert_eq!(
            row,
            "| Permute1 | 100.000 ns | 150.000 ns | 🔼 50.00% 50.000 ns | items=5 |"
        );
    }

    #[test]
    fn test_diff_table_row_improvement_and_missing() {
        let runs = runs(&[
            ("a", "Permute1 200 ns 200 ns 10"),
            ("b", "Permute1 100 ns 100 ns 10"),
            ("c", ""),
        ]);
        let groups = BenchmarkDiffGroup::from_results(&runs).unwrap();
        let row = diff_table_row(&groups[0].diffs()[0], &TimeFormat::default());
        assert_eq!(
            row,
            "| Permute1 | 200.000 ns | 100.000 ns | 🔽 -50.00% -100.000 ns | -- | 🔽 -100.00% -100.000 ns |  |"
        );
    }

    #[test]
    fn test_render_diff_significant_only() {
        let runs = runs(&[
            ("old", "Permute1 100 ns 100 ns 10\nPermute2 100 ns 100 ns 10\nParseA 100 ns 100 ns 10\n"),
            ("new", "Permute1 150 ns 150 ns 10\nPermute2 101 ns 101 ns 10\nParseA 100 ns 100 ns 10\n"),
        ]);
        let groups = BenchmarkDiffGroup::from_results(&runs).unwrap();

        let full = render_diff(&groups, &RenderConfig::default());
        assert!(full.contains("## Permutation"));
        assert!(full.contains("## Pattern Parsing"));
        assert!(full.contains("| Permute2 |"));
        assert!(full.contains("🔄 0.00% --"));

        let filtered = render_diff(&groups, &RenderConfig::default().with_significant_only(true));
        assert!(filtered.contains("## Permutation"));
        assert!(filtered.contains("| Permute1 |"));
        assert!(!filtered.contains("| Permute2 |"));
        assert!(!filtered.contains("## Pattern Parsing"));
    }

    #[test]
    fn test_render_diff_layout() {
        let runs = runs(&[("old", "Permute1 100 ns 100 ns 10"), ("new", "Permute1 150 ns 150 ns 10")]);
        let groups = BenchmarkDiffGroup::from_results(&runs).unwrap();
        let output = render_diff(&groups, &RenderConfig::default());
        assert_eq!(
            output,
            "\n## Permutation\n\n\
             | Benchmark | old | new | Δ | Details |\n\
             | --- | --- | --- | --- | --- |\n\
             | Permute1 | 100.000 ns | 150.000 ns | 🔼 50.00% 50.000 ns |  |\n"
        );
    }

    #[test]
    fn test_render_selects_mode() {
        let single = runs(&[("only", "Permute1 100 ns 100 ns 10")]);
        let output = render(&single, &RenderConfig::default()).unwrap();
        assert!(output.contains("| Benchmark | Time | CPU | Iterations | Details |"));

        let pair = runs(&[("old", "Permute1 100 ns 100 ns 10"), ("new", "Permute1 150 ns 150 ns 10")]);
        let output = render(&pair, &RenderConfig::default()).unwrap();
        assert!(output.contains("| Benchmark | old | new | Δ | Details |"));
    }

    #[test]
    fn test_render_empty_runs() {
        let err = render(&RunSet::new(), &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, BenchfmtError::EmptyResults { .. }));
    }

    #[test]
    fn test_render_rejects_bad_config() {
        let single = runs(&[("only", "Permute1 100 ns 100 ns 10")]);
        let err = render(&single, &RenderConfig::default().with_group_header_level(9)).unwrap_err();
        assert!(matches!(err, BenchfmtError::InvalidConfig { .. }));
    }
}
