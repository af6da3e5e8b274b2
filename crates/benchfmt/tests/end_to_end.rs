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

//! End-to-end tests: files on disk through parsing, aggregation and rendering.

use benchfmt::{
    render, BenchfmtError, BenchmarkDiffGroup, Parser, RenderConfig, RunSet, Thresholds, Trend,
    WrapMode,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test helper to write a run file into a temp directory
fn write_run(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write run file");
    path
}

const BASE_RUN: &str = "\
Running ./slug_benchmarks
------------------------------------------------------------
Benchmark                  Time             CPU   Iterations
------------------------------------------------------------
Permute1                 100 ns          100 ns      7000000
ParsePattern/8          2000 ns         1990 ns       350000 bytes_per_second=4.1M/s
FNV1aHash/64              12 ns           12 ns     57000000
";

const HEAD_RUN: &str = "\
Running ./slug_benchmarks
------------------------------------------------------------
Benchmark                  Time             CPU   Iterations
------------------------------------------------------------
Permute1                 150 ns          150 ns      4600000
ParsePattern/8          2001 ns         1995 ns       350000 bytes_per_second=4.1M/s
BuildDictionary        35000 ns        34900 ns        20000
";

#[test]
fn test_two_runs_permute_regression() {
    let dir = TempDir::new().unwrap();
    let old = write_run(&dir, "old.txt", "Permute1 100 ns 100 ns 1000\n");
    let new = write_run(&dir, "new.txt", "Permute1 150 ns 150 ns 1000\n");

    let runs = Parser::default().parse_runs(&[old, new]).unwrap();
    let groups = BenchmarkDiffGroup::from_results(&runs).unwrap();
    assert_eq!(groups.len(), 1);

    let diff = &groups[0].diffs()[0];
    let thresholds = Thresholds::default();
    assert!(diff.is_significant(&thresholds));
    assert_eq!(diff.results()[1].trend(&diff.results()[0]), Trend::Up);

    let config = RenderConfig::default().with_significant_only(true);
    let output = render(&runs, &config).unwrap();
    let rows: Vec<&str> = output.lines().filter(|l| l.starts_with("| Permute1 ")).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].contains("🔼 50.00% 50.000 ns"));
}

#[test]
fn test_comparison_report() {
    let dir = TempDir::new().unwrap();
    let base = write_run(&dir, "base.json.txt", BASE_RUN);
    let head = write_run(&dir, "head.txt", HEAD_RUN);

    let runs = Parser::default().parse_runs(&[base, head]).unwrap();
    let output = render(&runs, &RenderConfig::default()).unwrap();

    // Groups in first-seen order across runs.
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(
        headers,
        vec![
            "## Permutation",
            "## Pattern Parsing",
            "## Seed Hash Calculation",
            "## Dictionary Building"
        ]
    );

    assert!(output.contains("| Benchmark | base | head | Δ | Details |"));
    assert!(output.contains(
        "| FNV1aHash/64 | 12.000 ns | -- | 🔽 -100.00% -12.000 ns |  |"
    ));
    assert!(output.contains(
        "| BuildDictionary | -- | 35.000 µs | 🔼 0.00% 35.000 µs |  |"
    ));
    assert!(output.contains("bytes_per_second=4.1M/s |"));
}

#[test]
fn test_comparison_significant_only_drops_quiet_groups() {
    let dir = TempDir::new().unwrap();
    let base = write_run(&dir, "base.txt", BASE_RUN);
    let head = write_run(&dir, "head.txt", HEAD_RUN);

    let runs = Parser::default().parse_runs(&[base, head]).unwrap();
    let output = render(&runs, &RenderConfig::default().with_significant_only(true)).unwrap();

    assert!(output.contains("## Permutation"));
    // 1 ns / 0.05% change stays under both thresholds.
    assert!(!output.contains("## Pattern Parsing"));
    assert!(!output.contains("ParsePattern/8"));
    // Dropped and newly added benchmarks are not slowdowns.
    assert!(!output.contains("## Seed Hash Calculation"));
    assert!(!output.contains("## Dictionary Building"));
}

#[test]
fn test_significant_only_hides_speedups() {
    let dir = TempDir::new().unwrap();
    let old = write_run(
        &dir,
        "old.txt",
        "Permute1 100 ns 100 ns 1000\nFNV1aHash/64 12 ns 12 ns 1000\n",
    );
    let new = write_run(&dir, "new.txt", "Permute1 100 ns 100 ns 1000\n");
    let faster = write_run(&dir, "faster.txt", "Permute1 50 ns 50 ns 1000\n");
    let config = RenderConfig::default().with_significant_only(true);

    // Unchanged Permute1, FNV1aHash/64 dropped in the newer run.
    let runs = Parser::default().parse_runs(&[&old, &new]).unwrap();
    assert_eq!(render(&runs, &config).unwrap(), "");

    // Permute1 twice as fast.
    let runs = Parser::default().parse_runs(&[&old, &faster]).unwrap();
    assert_eq!(render(&runs, &config).unwrap(), "");

    // Without filtering the speedup is still rendered.
    let output = render(&runs, &RenderConfig::default()).unwrap();
    assert!(output.contains("🔽 -50.00% -50.000 ns"));
}

#[test]
fn test_single_run_report_wrapped_in_details() {
    let dir = TempDir::new().unwrap();
    let base = write_run(&dir, "base.txt", BASE_RUN);

    let runs = Parser::default().parse_runs(&[base]).unwrap();
    let config = RenderConfig::default()
        .with_group_header_level(3)
        .with_wrap(WrapMode::Groups);
    let output = render(&runs, &config).unwrap();

    assert_eq!(output.matches("<details>").count(), 3);
    assert!(output.contains("### Permutation"));
    assert!(output.contains("| Permute1 | 100.000 ns | 100.000 ns | 7000000 |  |"));
    assert!(output.contains(
        "| ParsePattern/8 | 2.000 µs | 1.990 µs | 350000 | bytes_per_second=4.1M/s |"
    ));
}

#[test]
fn test_file_without_results_yields_no_groups() {
    let dir = TempDir::new().unwrap();
    let empty = write_run(&dir, "empty.txt", "nothing to see here\n\n-----\n");

    let groups = Parser::default().parse_file(empty).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn test_empty_run_set_is_an_error() {
    let err = BenchmarkDiffGroup::from_results(&RunSet::new()).unwrap_err();
    assert!(matches!(err, BenchfmtError::EmptyResults { .. }));
}
