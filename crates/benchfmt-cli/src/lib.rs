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

//! benchfmt CLI library for command-line parsing and execution.
//!
//! - [`cli`]: argument model
//! - [`commands`]: report rendering, completion scripts, size-checked file I/O
//! - [`error`]: [`error::CliError`]
//!
//! # Examples
//!
//! ```no_run
//! use benchfmt_cli::commands::{report, ReportOptions};
//!
//! # fn main() -> Result<(), benchfmt_cli::error::CliError> {
//! report(&ReportOptions {
//!     files: vec!["results.txt".into()],
//!     ..Default::default()
//! })?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than [`commands::DEFAULT_MAX_FILE_SIZE`] are rejected
//! before reading (configurable via `BENCHFMT_MAX_FILE_SIZE`).

pub mod cli;
pub mod commands;
pub mod error;
