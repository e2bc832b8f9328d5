// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test header discovery.
//!
//! Uses the `ignore` crate to walk a source tree and keeps files whose name
//! ends in a test suffix followed by a header extension (`*_test.hpp`).
//! Walking is sequential and sorted by path so repeated runs see the same order.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

use crate::error::{Error, Result};

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Default marker between the suite name and the extension.
pub const DEFAULT_SUFFIX: &str = "_test";

/// Header extensions recognized by default.
pub const HEADER_EXTENSIONS: &[&str] = &[".h", ".hh", ".hpp", ".hxx", ".h++"];

/// Directories to skip entirely during walking.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git"];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Marker that precedes the extension (default: `_test`).
    pub suffix: String,

    /// Accepted header extensions, including the leading dot.
    pub extensions: Vec<String>,

    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// Exclude patterns (walker-level: prevents I/O on subtrees).
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            extensions: HEADER_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_patterns: Vec::new(),
            git_ignore: false,
            hidden: false,
        }
    }
}

impl WalkerConfig {
    /// File name patterns accepted by this configuration (`*_test.hpp`, ...).
    pub fn name_patterns(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!("*{}{}", globset::escape(&self.suffix), globset::escape(ext)))
            .collect()
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Test headers discovered.
    pub files_found: usize,

    /// Files visited that did not look like test headers.
    pub files_ignored: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Errors encountered.
    pub errors: usize,
}

impl std::fmt::Display for WalkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} test headers, {} other files",
            self.files_found, self.files_ignored
        )?;
        if self.symlink_loops > 0 {
            write!(f, ", {} symlink loops", self.symlink_loops)?;
        }
        if self.errors > 0 {
            write!(f, ", {} unreadable entries", self.errors)?;
        }
        Ok(())
    }
}

/// Sequential test header walker.
pub struct FileWalker {
    config: WalkerConfig,
    names: GlobSet,
}

impl FileWalker {
    /// Create a new walker with the given configuration.
    ///
    /// Fails if the suffix/extension combination cannot form a glob.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in config.name_patterns() {
            let glob = Glob::new(&pattern).map_err(|e| Error::Argument(e.to_string()))?;
            builder.add(glob);
        }
        let names = builder
            .build()
            .map_err(|e| Error::Argument(e.to_string()))?;

        Ok(Self { config, names })
    }

    /// Whether a file name marks a test header.
    pub fn is_test_header(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| self.names.is_match(Path::new(name)))
            .unwrap_or(false)
    }

    /// Walk the given root, returning matching files in path order.
    ///
    /// `root` may be a directory or a single file.
    pub fn walk(&self, root: &Path) -> Result<(Vec<PathBuf>, WalkStats)> {
        if !root.exists() {
            return Err(Error::Walk {
                message: format!("path does not exist: {}", root.display()),
            });
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(false)
            .parents(self.config.git_ignore)
            .follow_links(true)
            .sort_by_file_path(|a, b| a.cmp(b));

        if let Some(depth) = self.config.max_depth {
            builder.max_depth(Some(depth));
        }

        // Overrides without `!` whitelist; with `!` they exclude.
        if !self.config.exclude_patterns.is_empty() {
            let mut override_builder = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                override_builder
                    .add(&format!("!{}", pattern))
                    .map_err(|e| Error::Argument(format!("invalid exclude pattern: {e}")))?;
            }
            let overrides = override_builder
                .build()
                .map_err(|e| Error::Argument(format!("invalid exclude pattern: {e}")))?;
            builder.overrides(overrides);
        }

        builder.filter_entry(|entry| {
            !entry.file_type().map(|t| t.is_dir()).unwrap_or(false)
                || !entry
                    .file_name()
                    .to_str()
                    .map(|name| SKIP_DIRECTORIES.contains(&name))
                    .unwrap_or(false)
        });

        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
                    if !is_file {
                        continue;
                    }

                    if !self.is_test_header(entry.path()) {
                        stats.files_ignored += 1;
                        continue;
                    }

                    tracing::debug!(path = %entry.path().display(), "found test header");

                    stats.files_found += 1;
                    files.push(entry.into_path());
                }
                Err(err) => {
                    if is_loop_error(&err) {
                        tracing::warn!("Symlink loop detected: {}", err);
                        stats.symlink_loops += 1;
                    } else {
                        tracing::warn!("Walk error: {}", err);
                        stats.errors += 1;
                    }
                }
            }
        }

        tracing::debug!(
            found = stats.files_found,
            ignored = stats.files_ignored,
            symlink_loops = stats.symlink_loops,
            errors = stats.errors,
            "walk complete"
        );

        Ok((files, stats))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
