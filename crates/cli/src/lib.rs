pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod pattern;
pub mod reader;
pub mod render;
pub mod runner;
pub mod walker;

pub use cli::Cli;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use extract::{ExtractWarning, Extraction, TestSuite, extract_tests};
pub use reader::FileReader;
pub use render::{RenderOptions, render, write_runner};
pub use runner::{Generated, RunnerGenerator, render_runner};
pub use walker::{FileWalker, WalkStats, WalkerConfig};
