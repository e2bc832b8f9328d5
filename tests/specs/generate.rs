//! Behavioral specs for runner generation.
//!
//! Covers discovery of `*_test.hpp` headers, the generated runner layout,
//! the function-name flag, and failure handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Discovery and Layout
// =============================================================================

/// > Every `*_test.hpp` header becomes one suite; other files are ignored
#[test]
fn generates_runner_for_fixture_suites() {
    let temp = Project::empty();
    let runner = temp.path().join("runner.cpp");

    generate(fixture("suites")).output(&runner).passes();

    let content = temp.read("runner.cpp");
    let atomics = fixture("suites/ext/atomics_test.hpp");
    let latch = fixture("suites/fiber/fiber_latch_barrier_test.hpp");

    assert!(content.starts_with("#include <unittest/reporter.hpp>\n"));
    assert!(content.contains(&format!("#include \"{}\"", atomics.display())));
    assert!(content.contains(&format!("#include \"{}\"", latch.display())));
    assert!(!content.contains("shared.hpp"));
    assert!(!content.contains("fiber_test.cpp"));

    assert!(content.contains("FLASH_STORAGE_STRING(atomicsTestName) = \"atomics\";"));
    assert!(content.contains(
        "FLASH_STORAGE_STRING(latchBarrierTestName) = \"fiber_latch_barrier\";"
    ));
    assert!(content.contains("        AtomicsTest atomicsTest;\n"));
    assert!(content.contains("        atomicsTest.testAtomicFlag();\n"));
    assert!(content.contains("        latchBarrierTest.testBarrier();\n"));
    assert!(content.ends_with("    return unittest::reporter.printSummary();\n}\n"));
}

/// > Suites appear in file-stem order, cases in declaration order
#[test]
fn suites_sorted_by_file_stem() {
    let temp = Project::empty();
    temp.suite("src/b_test.hpp", "BTest", &["testB"]);
    temp.suite("src/nested/a_test.hpp", "ATest", &["testSecond", "testFirst"]);

    generate(temp.path().join("src"))
        .output(temp.path().join("runner.cpp"))
        .passes();

    let content = temp.read("runner.cpp");
    let a = content.find("ATest aTest;").unwrap();
    let b = content.find("BTest bTest;").unwrap();
    assert!(a < b, "a_test should run before b_test:\n{content}");

    let second = content.find("aTest.testSecond();").unwrap();
    let first = content.find("aTest.testFirst();").unwrap();
    assert!(second < first, "declaration order should be kept:\n{content}");
}

/// > Without an output flag the runner lands in ./unittest_runner.cpp
#[test]
fn default_output_in_working_directory() {
    let temp = Project::empty();
    temp.suite("test/alpha_test.hpp", "Alpha", &["testOne"]);

    generate("test").pwd(temp.path()).passes();

    assert!(temp.read("unittest_runner.cpp").contains("Alpha alpha;"));
}

/// > Relative header paths are made absolute in include directives
#[test]
fn include_paths_are_absolute() {
    let temp = Project::empty();
    temp.suite("test/alpha_test.hpp", "Alpha", &["testOne"]);

    generate("test").pwd(temp.path()).passes();

    let content = temp.read("unittest_runner.cpp");
    let include = content
        .lines()
        .find(|l| l.contains("alpha_test.hpp"))
        .unwrap();
    let path = include
        .trim_start_matches("#include \"")
        .trim_end_matches('"');
    assert!(std::path::Path::new(path).is_absolute(), "got {include}");
}

/// > `-o -` prints the runner instead of writing a file
#[test]
fn output_dash_prints_to_stdout() {
    let temp = Project::empty();
    temp.suite("alpha_test.hpp", "Alpha", &["testOne"]);

    generate(temp.path())
        .args(&["-o", "-"])
        .passes()
        .stdout_has("int run_modm_unit_test()")
        .stdout_has("alpha.testOne();");

    assert!(!temp.exists("-"));
}

/// > Existing runner files are replaced, not appended to
#[test]
fn overwrites_existing_runner() {
    let temp = Project::empty();
    temp.suite("test/alpha_test.hpp", "Alpha", &["testOne"]);
    temp.file("unittest_runner.cpp", "// stale runner\n");

    generate("test").pwd(temp.path()).passes();

    let content = temp.read("unittest_runner.cpp");
    assert!(!content.contains("stale runner"));
    assert!(content.starts_with("#include <unittest/reporter.hpp>"));
}

/// > Generating twice yields identical bytes
#[test]
fn generation_is_deterministic() {
    let temp = Project::empty();

    generate(fixture("suites"))
        .args(&["-fn"])
        .output(temp.path().join("one.cpp"))
        .passes();
    generate(fixture("suites"))
        .args(&["-fn"])
        .output(temp.path().join("two.cpp"))
        .passes();

    assert_eq!(temp.read("one.cpp"), temp.read("two.cpp"));
}

/// > An empty tree still produces a runner, with a warning
#[test]
fn empty_tree_warns() {
    let temp = Project::empty();
    temp.file("src/main.cpp", "int main() {}\n");

    generate(temp.path().join("src"))
        .output(temp.path().join("runner.cpp"))
        .passes()
        .stderr_has("warning: no test headers found");

    assert!(temp.read("runner.cpp").contains("printSummary"));
}

// =============================================================================
// Function Names
// =============================================================================

/// > Without the flag no case names are announced
#[test]
fn no_case_names_by_default() {
    generate(fixture("suites"))
        .args(&["-o", "-"])
        .passes()
        .stdout_lacks("nextTestFunction")
        .stdout_lacks("atomicsTest_testAtomic8Name");
}

/// > `-fn` declares and announces one name per case, minus the `test` prefix
#[test]
fn single_dash_fn_emits_case_names() {
    let result = generate(fixture("suites")).args(&["-fn", "-o", "-"]).passes();
    let stdout = result.stdout();

    assert!(stdout.contains("FLASH_STORAGE_STRING(atomicsTest_testAtomic8Name) = \"Atomic8\";"));
    assert!(stdout.contains(
        "        unittest::reporter.nextTestFunction(asFlash(atomicsTest_testAtomic8Name));\n"
    ));
    assert_eq!(stdout.matches("nextTestFunction").count(), 5);
}

/// > `-fn` and `--with-function-names` are the same flag
#[test]
fn short_and_long_function_name_flags_agree() {
    let short = generate(fixture("suites")).args(&["-fn", "-o", "-"]).passes();
    let long = generate(fixture("suites"))
        .args(&["--with-function-names", "-o", "-"])
        .passes();

    similar_asserts::assert_eq!(short.stdout(), long.stdout());
}

// =============================================================================
// Failures and Warnings
// =============================================================================

/// > A header without a TestSuite class aborts with its path and exit code 1
#[test]
fn missing_suite_class_fails() {
    let temp = Project::empty();
    temp.file("runner.cpp", "previous\n");

    generate(fixture("broken"))
        .output(temp.path().join("runner.cpp"))
        .exits(1)
        .stderr_has("test class not found in")
        .stderr_has("helper_test.hpp");

    assert_eq!(temp.read("runner.cpp"), "previous\n");
}

/// > One bad header fails the whole run even when others are fine
#[test]
fn one_bad_header_fails_the_batch() {
    let temp = Project::empty();
    temp.suite("test/good_test.hpp", "GoodTest", &["testIt"]);
    temp.file("test/zzz_test.hpp", "struct NotASuite {};\n");

    generate("test").pwd(temp.path()).exits(1);

    assert!(!temp.exists("unittest_runner.cpp"));
}

/// > A suite without test cases only warns
#[test]
fn suite_without_cases_warns() {
    let temp = Project::empty();

    generate(fixture("idle"))
        .output(temp.path().join("runner.cpp"))
        .passes()
        .stderr_has("modm-unittest: warning: no tests found in")
        .stderr_has("idle_test.hpp");

    let content = temp.read("runner.cpp");
    assert!(content.contains("IdleTest idleTest;"));
    assert!(!content.contains("idleTest.setUp();"));
}

/// > Empty-suite warnings are printed even when a later header fails
#[test]
fn empty_suite_warning_survives_later_failure() {
    let temp = Project::empty();
    temp.suite("src/a_idle_test.hpp", "IdleTest", &[]);
    temp.file("src/b_broken_test.hpp", "struct Helper {};\n");

    generate(temp.path().join("src"))
        .output(temp.path().join("runner.cpp"))
        .exits(1)
        .stderr_has("modm-unittest: warning: no tests found in")
        .stderr_has("a_idle_test.hpp")
        .stderr_has("test class not found in");

    assert!(!temp.exists("runner.cpp"));
}

/// > Each empty suite is reported once, whatever the log level
#[test]
fn empty_suite_warning_printed_once_with_logging() {
    let temp = Project::empty();

    let result = generate(fixture("idle"))
        .env("MODM_UNITTEST_LOG", "warn")
        .output(temp.path().join("runner.cpp"))
        .passes();

    assert_eq!(result.stderr().matches("no tests found").count(), 1);
}

/// > --verbose lists every suite
#[test]
fn verbose_lists_suites() {
    let temp = Project::empty();

    generate(fixture("suites"))
        .args(&["-v"])
        .output(temp.path().join("runner.cpp"))
        .passes()
        .stderr_has("AtomicsTest (3 tests)")
        .stderr_has("LatchBarrierTest (2 tests)")
        .stderr_has("wrote 2 suites to");
}

/// > --verbose summarizes the walk
#[test]
fn verbose_reports_walk_summary() {
    let temp = Project::empty();

    generate(fixture("suites"))
        .args(&["-v"])
        .output(temp.path().join("runner.cpp"))
        .passes()
        .stderr_has("scanned ")
        .stderr_has(": 2 test headers, 2 other files\n");
}
