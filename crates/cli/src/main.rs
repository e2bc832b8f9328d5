// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! modm-unittest CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use modm_unittest::cli::{Cli, normalize_args};
use modm_unittest::error::ExitCode;

mod cmd_generate;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MODM_UNITTEST_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("modm-unittest: {}", e);
            match e.downcast_ref::<modm_unittest::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    cmd_generate::run(&cli)
}
