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

//! Error types for benchmark report generation.
//!
//! Parsing benchmark output is tolerant by construction: unknown lines are
//! skipped and unknown names fall into the "Other" group. The variants here
//! cover the few conditions that do abort a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for benchfmt operations
pub type Result<T> = std::result::Result<T, BenchfmtError>;

/// Errors that can occur while loading, aggregating or rendering results
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BenchfmtError {
    /// A diff group was requested without any per-file results.
    #[error("Results cannot be empty when building diff group '{group}'")]
    EmptyResults {
        /// Group being built
        group: String,
    },

    /// A classification rule has an invalid pattern.
    #[error("Invalid classification pattern '{pattern}': {message}")]
    InvalidRule {
        /// The offending pattern
        pattern: String,
        /// Regex compiler message
        message: String,
    },

    /// A rules file could not be decoded.
    #[error("Failed to load rules from '{path}': {message}")]
    RulesFormat {
        /// Rules file path
        path: PathBuf,
        /// Decoder message
        message: String,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// I/O operation failed while reading input.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },
}

impl BenchfmtError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
