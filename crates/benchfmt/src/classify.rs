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

//! Name-based classification of benchmarks into report groups.
//!
//! A [`Classifier`] holds an ordered list of rules. Each rule's pattern is
//! anchored at the start of the benchmark name and the first matching rule
//! decides the group.

use crate::error::{BenchfmtError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Group assigned to benchmarks that match no rule.
pub const FALLBACK_GROUP: &str = "Other";

/// Built-in rule table as `(pattern, group)` pairs, in priority order.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("^--+$", "line"),
    ("FNV1aHash.*", "Seed Hash Calculation"),
    ("Permute.*", "Permutation"),
    ("Parse.*", "Pattern Parsing"),
    ("Format.*", "Pattern Formatting"),
    ("Build.*", "Dictionary Building"),
    ("GenerateSlug.*", "Slug Generation"),
    ("Generate.*", "Value Generation"),
    ("Query.*", "IndexQuery"),
    ("Estimate.*", "Index Estimation"),
    ("FilterDictionary.*", "Dictionary Filtering"),
    ("Calculate.*", "Pattern Calculation"),
];

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    let rules = DEFAULT_RULES
        .iter()
        .map(|(pattern, group)| {
            ClassificationRule::new(pattern, *group).expect("built-in pattern compiles")
        })
        .collect();
    Classifier { rules }
});

/// A single `pattern -> group` rule.
#[derive(Debug, Clone)]
pub struct ClassificationRule {
    pattern: String,
    regex: Regex,
    group: String,
}

impl ClassificationRule {
    /// Compiles a rule. The pattern only has to match a prefix of the name.
    ///
    /// # Errors
    ///
    /// Returns [`BenchfmtError::InvalidRule`] if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str, group: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})", pattern)).map_err(|e| {
            BenchfmtError::InvalidRule {
                pattern: pattern.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            group: group.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// On-disk form of a rule in a rules file.
#[derive(Debug, Deserialize)]
struct RuleSpec {
    pattern: String,
    group: String,
}

/// Ordered rule list, first match wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ClassificationRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

impl Classifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    /// Loads rules from a JSON or YAML file.
    ///
    /// The file holds a list of `{ "pattern": ..., "group": ... }` objects.
    /// Files ending in `.yaml` or `.yml` are read as YAML, anything else as
    /// JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use benchfmt::classify::Classifier;
    ///
    /// # fn main() -> benchfmt::Result<()> {
    /// let classifier = Classifier::from_path("rules.yaml")?;
    /// assert_eq!(classifier.classify("Permute3"), Some("Permutation"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BenchfmtError::io_error(path, e))?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let specs: Vec<RuleSpec> = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| BenchfmtError::RulesFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| BenchfmtError::RulesFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        let rules = specs
            .iter()
            .map(|spec| ClassificationRule::new(&spec.pattern, spec.group.as_str()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Returns the group of the first rule matching `name`, or `None`.
    pub fn classify(&self, name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(name))
            .map(ClassificationRule::group)
    }
}
