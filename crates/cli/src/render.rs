// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner source generation.
//!
//! Generated layout:
//! ```text
//! #include <unittest/reporter.hpp>
//!
//! #include "/abs/path/alpha_test.hpp"
//!
//! namespace
//! {
//! FLASH_STORAGE_STRING(alphaName) = "alpha";
//! }
//!
//! int run_modm_unit_test()
//! {
//!     using namespace modm::accessor;
//!
//!     unittest::reporter.nextTestSuite(asFlash(alphaName));
//!     {
//!         Alpha alpha;
//!
//!         alpha.setUp();
//!         alpha.testOne();
//!         alpha.tearDown();
//!     }
//!
//!     return unittest::reporter.printSummary();
//! }
//! ```

use std::path::Path;

use crate::error::{Error, Result};
use crate::extract::TestSuite;

/// Default name of the generated entry point.
pub const DEFAULT_ENTRY_POINT: &str = "run_modm_unit_test";

/// Default header declaring `unittest::reporter`.
pub const DEFAULT_REPORTER_HEADER: &str = "unittest/reporter.hpp";

/// Characters dropped from the end of a file stem (`_test`).
const STEM_SUFFIX_LEN: usize = 5;

/// Characters dropped from the start of a test case (`test`).
const CASE_PREFIX_LEN: usize = 4;

const INDENT: &str = "    ";

/// Settings for one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Announce every test case to the reporter before running it.
    pub emit_case_names: bool,
    /// Name of the generated function.
    pub entry_point: String,
    /// Include path of the reporter header.
    pub reporter_header: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            emit_case_names: false,
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            reporter_header: DEFAULT_REPORTER_HEADER.to_string(),
        }
    }
}

/// Suite name shown by the reporter: the stem minus its last 5 characters.
pub fn suite_display_name(file_stem: &str) -> String {
    let count = file_stem.chars().count();
    file_stem
        .chars()
        .take(count.saturating_sub(STEM_SUFFIX_LEN))
        .collect()
}

/// Case name shown by the reporter: the case minus its first 4 characters.
pub fn case_display_name(test_case: &str) -> String {
    test_case.chars().skip(CASE_PREFIX_LEN).collect()
}

fn suite_name_constant(suite: &TestSuite) -> String {
    format!("{}Name", suite.instance_name)
}

fn case_name_constant(suite: &TestSuite, test_case: &str) -> String {
    format!("{}_{}Name", suite.instance_name, test_case)
}

/// Render the runner source for `suites` in the given order.
///
/// The output depends only on the arguments.
pub fn render(suites: &[TestSuite], options: &RenderOptions) -> String {
    let mut lines = Vec::new();

    lines.push(format!("#include <{}>", options.reporter_header));
    lines.push(String::new());

    if !suites.is_empty() {
        for suite in suites {
            lines.push(format!("#include \"{}\"", suite.include_path.display()));
        }
        lines.push(String::new());
    }

    // Name constants
    lines.push("namespace".to_string());
    lines.push("{".to_string());
    for suite in suites {
        lines.push(format!(
            "FLASH_STORAGE_STRING({}) = \"{}\";",
            suite_name_constant(suite),
            suite_display_name(&suite.file_stem)
        ));
        if options.emit_case_names {
            for test_case in &suite.test_cases {
                lines.push(format!(
                    "FLASH_STORAGE_STRING({}) = \"{}\";",
                    case_name_constant(suite, test_case),
                    case_display_name(test_case)
                ));
            }
        }
    }
    lines.push("}".to_string());
    lines.push(String::new());

    // Entry point
    lines.push(format!("int {}()", options.entry_point));
    lines.push("{".to_string());
    lines.push(format!("{INDENT}using namespace modm::accessor;"));
    lines.push(String::new());

    for suite in suites {
        push_suite(&mut lines, suite, options);
        lines.push(String::new());
    }

    lines.push(format!("{INDENT}return unittest::reporter.printSummary();"));
    lines.push("}".to_string());

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

fn push_suite(lines: &mut Vec<String>, suite: &TestSuite, options: &RenderOptions) {
    let body = INDENT.repeat(2);
    let instance = &suite.instance_name;

    lines.push(format!(
        "{INDENT}unittest::reporter.nextTestSuite(asFlash({}));",
        suite_name_constant(suite)
    ));
    lines.push(format!("{INDENT}{{"));
    lines.push(format!("{body}{} {};", suite.class_name, instance));

    for test_case in &suite.test_cases {
        lines.push(String::new());
        if options.emit_case_names {
            lines.push(format!(
                "{body}unittest::reporter.nextTestFunction(asFlash({}));",
                case_name_constant(suite, test_case)
            ));
        }
        lines.push(format!("{body}{instance}.setUp();"));
        lines.push(format!("{body}{instance}.{test_case}();"));
        lines.push(format!("{body}{instance}.tearDown();"));
    }

    lines.push(format!("{INDENT}}}"));
}

/// Replace `destination` with the runner text.
///
/// Missing parent directories are created.
pub fn write_runner(destination: &Path, content: &str) -> Result<()> {
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    std::fs::write(destination, content).map_err(|e| Error::io(destination, e))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
