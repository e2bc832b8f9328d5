// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runner generation command.

use std::path::{Path, PathBuf};

use modm_unittest::cli::Cli;
use modm_unittest::config::{self, Config};
use modm_unittest::discovery;
use modm_unittest::error::ExitCode;
use modm_unittest::runner::RunnerGenerator;
use modm_unittest::walker::FileWalker;

/// Destination that means "write to stdout".
const STDOUT_MARKER: &str = "-";

/// Load the config that applies to `cli.path`, or defaults.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, Option<PathBuf>)> {
    match discovery::resolve_config(cli.config.as_deref(), &cli.path)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let config = config::load_with_warnings(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

/// Output path: CLI flag, else the config value relative to the config file.
fn resolve_output(cli: &Cli, config: &Config, config_path: Option<&Path>) -> PathBuf {
    if let Some(output) = &cli.output {
        return output.clone();
    }

    let output = config.output();
    match (config.runner.output.is_some(), config_path.and_then(Path::parent)) {
        (true, Some(dir)) if output.is_relative() => dir.join(output),
        _ => output,
    }
}

/// Run the generate command.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let (config, config_path) = load_config(cli)?;

    let mut walker_config = config.walker_config();
    if let Some(depth) = cli.max_depth {
        walker_config.max_depth = Some(depth);
    }

    let walker = FileWalker::new(walker_config)?;
    let (headers, stats) = walker.walk(&cli.path)?;
    if cli.verbose {
        eprintln!("scanned {}: {}", cli.path.display(), stats);
    }
    if stats.symlink_loops > 0 {
        eprintln!(
            "modm-unittest: warning: {} symlink loop(s) skipped in {}",
            stats.symlink_loops,
            cli.path.display()
        );
    }
    if headers.is_empty() {
        eprintln!(
            "modm-unittest: warning: no test headers found in {}",
            cli.path.display()
        );
    }

    let mut options = config.render_options();
    if let Some(emit) = cli.emit_case_names() {
        options.emit_case_names = emit;
    }

    let output = resolve_output(cli, &config, config_path.as_deref());
    let to_stdout = output.as_os_str() == STDOUT_MARKER;
    let destination = (!to_stdout).then_some(output.as_path());

    let generated = RunnerGenerator::new(options)
        .with_reader(config.file_reader())
        .generate_with(&headers, destination, |warning| {
            eprintln!("modm-unittest: warning: {}", warning);
        })?;

    if cli.verbose {
        for suite in &generated.suites {
            eprintln!(
                "{}: {} ({} tests)",
                suite.include_path.display(),
                suite.class_name,
                suite.test_cases.len()
            );
        }
        if let Some(destination) = destination {
            eprintln!(
                "wrote {} suites to {}",
                generated.suites.len(),
                destination.display()
            );
        }
    }

    if to_stdout {
        print!("{}", generated.content);
    }

    Ok(ExitCode::Success)
}
