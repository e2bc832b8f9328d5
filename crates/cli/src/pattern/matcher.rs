// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled matchers for suite classes and test-case declarations.

use std::sync::LazyLock;

use regex::Regex;

/// Upper-case identifier publicly deriving from `unittest::TestSuite`.
#[allow(clippy::expect_used)]
static SUITE_CLASS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+([A-Z]\w+)\s+:\s+public\s+unittest::TestSuite").expect("valid regex")
});

/// `void test...();` with an empty or `void` parameter list.
#[allow(clippy::expect_used)]
static TEST_CASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"void\s+(test[_a-zA-Z]\w*)\s*\([\svoid]*\)\s*;").expect("valid regex")
});

/// Find the first class deriving publicly from `unittest::TestSuite`.
///
/// Only the first declaration counts; later ones are ignored.
pub fn find_suite_class(text: &str) -> Option<&str> {
    SUITE_CLASS_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Find all test-case declarations in order of appearance.
///
/// Duplicates are returned as often as they occur.
pub fn find_test_cases(text: &str) -> Vec<&str> {
    TEST_CASE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Lower-case the first character only: `AtomicsTest` -> `atomicsTest`.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
