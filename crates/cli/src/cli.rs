// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Generate a unittest runner from `*_test.hpp` headers
#[derive(Parser)]
#[command(name = "modm-unittest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The path to search for unittests in
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Generated runner file, `-` for stdout [default: unittest_runner.cpp]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Generate with test function names (also `-fn`)
    #[arg(short = 'f', long = "with-function-names")]
    pub with_function_names: bool,

    /// Generate without test function names, overriding the config file
    #[arg(long, conflicts_with = "with_function_names")]
    pub no_function_names: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "MODM_UNITTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// List discovered suites on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Function-name setting requested on the command line, if any.
    pub fn emit_case_names(&self) -> Option<bool> {
        if self.with_function_names {
            Some(true)
        } else if self.no_function_names {
            Some(false)
        } else {
            None
        }
    }
}

/// Spelling of `--with-function-names` with a single dash.
const SHORT_FUNCTION_NAMES: &str = "-fn";

/// Rewrite `-fn` to `--with-function-names` so clap does not read it as `-f -n`.
///
/// Arguments after `--` are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                arg
            } else if arg == SHORT_FUNCTION_NAMES {
                OsString::from("--with-function-names")
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
