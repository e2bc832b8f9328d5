// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern matching for test suite declarations.
//!
//! Test headers are scanned as free-form text, not parsed as C++:
//! - Suite class: `class Name : public unittest::TestSuite`
//! - Test cases: `void testSomething();` declarations
//!
//! Every function here is a pure `&str -> match data` function.

pub mod matcher;

pub use matcher::{find_suite_class, find_test_cases, lower_first};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
