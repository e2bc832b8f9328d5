// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles unittest.toml parsing with version validation and unknown key warnings.
//! Every setting is optional; command-line flags take precedence over the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::reader::FileReader;
use crate::render::RenderOptions;
use crate::walker::WalkerConfig;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "unittest.toml";

/// Default generated runner file.
pub const DEFAULT_OUTPUT: &str = "unittest_runner.cpp";

const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Test header discovery.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Generated runner.
    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// `[discovery]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryConfig {
    /// Marker between suite name and extension (default: `_test`).
    pub suffix: Option<String>,

    /// Header extensions including the dot.
    pub extensions: Option<Vec<String>>,

    /// Glob patterns excluded from the walk.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Maximum directory depth.
    pub max_depth: Option<usize>,

    /// Respect .gitignore files (default: false).
    pub git_ignore: Option<bool>,

    /// Largest header read, in bytes (default: 10 MiB).
    pub max_file_size: Option<u64>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// `[runner]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunnerConfig {
    /// Destination of the generated runner.
    pub output: Option<PathBuf>,

    /// Announce each test case to the reporter.
    pub with_function_names: Option<bool>,

    /// Name of the generated entry point function.
    pub entry_point: Option<String>,

    /// Header providing `unittest::reporter`.
    pub reporter_header: Option<String>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Config {
    /// Dotted names of keys this version does not understand.
    pub fn unknown_keys(&self) -> Vec<String> {
        let top = self.unknown.keys().cloned();
        let discovery = self
            .discovery
            .unknown
            .keys()
            .map(|k| format!("discovery.{k}"));
        let runner = self.runner.unknown.keys().map(|k| format!("runner.{k}"));
        top.chain(discovery).chain(runner).collect()
    }

    /// Walker settings with config values applied over the defaults.
    pub fn walker_config(&self) -> WalkerConfig {
        let defaults = WalkerConfig::default();
        let discovery = &self.discovery;
        WalkerConfig {
            suffix: discovery.suffix.clone().unwrap_or(defaults.suffix),
            extensions: discovery.extensions.clone().unwrap_or(defaults.extensions),
            max_depth: discovery.max_depth.or(defaults.max_depth),
            exclude_patterns: discovery.exclude.clone(),
            git_ignore: discovery.git_ignore.unwrap_or(defaults.git_ignore),
            hidden: defaults.hidden,
        }
    }

    /// Header reader honoring `discovery.max_file_size`.
    pub fn file_reader(&self) -> FileReader {
        match self.discovery.max_file_size {
            Some(max_size) => FileReader::with_max_size(max_size),
            None => FileReader::new(),
        }
    }

    /// Render settings with config values applied over the defaults.
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        let runner = &self.runner;
        RenderOptions {
            emit_case_names: runner
                .with_function_names
                .unwrap_or(defaults.emit_case_names),
            entry_point: runner.entry_point.clone().unwrap_or(defaults.entry_point),
            reporter_header: runner
                .reporter_header
                .clone()
                .unwrap_or(defaults.reporter_header),
        }
    }

    /// Destination configured for the runner, or the default file name.
    pub fn output(&self) -> PathBuf {
        self.runner
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    parse(&content, path)
}

/// Load config, warning on stderr for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let config = load(path)?;
    for key in config.unknown_keys() {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "modm-unittest: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
