// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner generation: extract, render, write.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::extract::{ExtractWarning, TestSuite, extract_tests};
use crate::reader::FileReader;
use crate::render::{RenderOptions, render, write_runner};

/// Result of a successful generation.
#[derive(Debug)]
pub struct Generated {
    /// The runner source.
    pub content: String,
    /// Suites in the order they appear in the runner.
    pub suites: Vec<TestSuite>,
    /// Non-fatal findings from extraction.
    pub warnings: Vec<ExtractWarning>,
}

/// Generates test runners from test headers.
pub struct RunnerGenerator {
    reader: FileReader,
    options: RenderOptions,
}

impl RunnerGenerator {
    /// Create a generator with the given render options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            reader: FileReader::new(),
            options,
        }
    }

    /// Use a custom reader (e.g. with a different size limit).
    pub fn with_reader(mut self, reader: FileReader) -> Self {
        self.reader = reader;
        self
    }

    /// Generate the runner for `headers`, logging warnings through `tracing`.
    pub fn generate(&self, headers: &[PathBuf], destination: Option<&Path>) -> Result<Generated> {
        self.generate_with(headers, destination, |warning| {
            tracing::warn!("{}", warning);
        })
    }

    /// Generate the runner for `headers`, passing each warning to `on_warning`
    /// as soon as it is found.
    ///
    /// Writes `destination` only after every header was extracted. The
    /// rendered text is returned either way.
    pub fn generate_with(
        &self,
        headers: &[PathBuf],
        destination: Option<&Path>,
        on_warning: impl FnMut(&ExtractWarning),
    ) -> Result<Generated> {
        let extraction = extract_tests(headers, &self.reader, on_warning)?;
        let content = render(&extraction.suites, &self.options);

        if let Some(destination) = destination {
            write_runner(destination, &content)?;
            tracing::info!(
                path = %destination.display(),
                suites = extraction.suites.len(),
                "wrote test runner"
            );
        }

        Ok(Generated {
            content,
            suites: extraction.suites,
            warnings: extraction.warnings,
        })
    }
}

/// Generate a runner with default reader settings.
pub fn render_runner(
    headers: &[PathBuf],
    destination: Option<&Path>,
    options: &RenderOptions,
) -> Result<Generated> {
    RunnerGenerator::new(options.clone()).generate(headers, destination)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
