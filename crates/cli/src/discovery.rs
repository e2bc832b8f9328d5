// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the scan root up to the git root looking for unittest.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};

/// Find unittest.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "MODM_UNITTEST_CONFIG")
/// 2. Discovery from the scan root up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, scan_root: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => {
            let root = std::path::absolute(scan_root).unwrap_or_else(|_| scan_root.to_path_buf());
            // A single header as root: search from its directory.
            let start = if root.is_file() {
                root.parent().unwrap_or(&root)
            } else {
                &root
            };
            Ok(find_config(start))
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
