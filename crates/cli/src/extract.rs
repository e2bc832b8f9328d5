// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test suite extraction from headers.
//!
//! Every header must declare exactly one `unittest::TestSuite` subclass.
//! A header without one aborts the whole extraction; a header without test
//! cases only produces a warning.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::pattern::{find_suite_class, find_test_cases, lower_first};
use crate::reader::FileReader;

/// One test suite discovered in a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    /// Absolute header path, used verbatim in the include directive.
    pub include_path: PathBuf,
    /// File name without its final extension (`alpha_test`).
    pub file_stem: String,
    /// Name of the suite class.
    pub class_name: String,
    /// Local variable holding the suite instance.
    pub instance_name: String,
    /// Test case methods in declaration order.
    pub test_cases: Vec<String>,
}

impl TestSuite {
    /// Build a suite from header text.
    ///
    /// `path` is only used for naming; nothing is read from disk.
    pub fn from_text(path: &Path, text: &str) -> Result<Self> {
        let class = find_suite_class(text).ok_or_else(|| Error::Extraction {
            path: path.to_path_buf(),
        })?;

        let file_stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            include_path: absolute(path),
            file_stem,
            class_name: class.to_string(),
            instance_name: lower_first(class),
            test_cases: find_test_cases(text).into_iter().map(String::from).collect(),
        })
    }
}

/// Non-fatal findings during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractWarning {
    /// The suite class exists but declares no test cases.
    NoTestCases { path: PathBuf },
}

impl std::fmt::Display for ExtractWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractWarning::NoTestCases { path } => {
                write!(f, "no tests found in {}", path.display())
            }
        }
    }
}

/// Suites found in a set of headers.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Suites sorted by file stem.
    pub suites: Vec<TestSuite>,
    /// Warnings in scan order.
    pub warnings: Vec<ExtractWarning>,
}

/// Extract one suite per header, sorted by file stem.
///
/// Headers are read one at a time in the given order. The first header
/// without a suite class fails the whole batch. `on_warning` sees each
/// warning as soon as its header is processed, so warnings for earlier
/// headers are still delivered when a later one fails.
pub fn extract_tests(
    headers: &[PathBuf],
    reader: &FileReader,
    mut on_warning: impl FnMut(&ExtractWarning),
) -> Result<Extraction> {
    let mut extraction = Extraction::default();

    for header in headers {
        let text = reader.read(header)?;
        let suite = TestSuite::from_text(header, &text)?;

        if suite.test_cases.is_empty() {
            let warning = ExtractWarning::NoTestCases {
                path: header.clone(),
            };
            on_warning(&warning);
            extraction.warnings.push(warning);
        }

        tracing::debug!(
            class = %suite.class_name,
            cases = suite.test_cases.len(),
            "extracted suite"
        );
        extraction.suites.push(suite);
    }

    // Stable: equal stems keep scan order.
    extraction
        .suites
        .sort_by(|a, b| a.file_stem.cmp(&b.file_stem));

    Ok(extraction)
}

/// Make a path absolute against the working directory without resolving links.
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
