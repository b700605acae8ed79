use std::process::{Command, Output};

use console::strip_ansi_codes;
use pretty_assertions::assert_eq;

const MAIN_RS: &str = include_str!("../src/main.rs");

fn run_miniunit(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_miniunit"))
        .args(args)
        .env_remove("MINIUNIT_COLOR")
        .env_remove("MINIUNIT_ELAPSED_PRECISION")
        .env_remove("NO_COLOR")
        .output()
        .unwrap_or_else(|err| panic!("failed to run miniunit: {:?}", err))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_passing_suite_exits_successfully() {
    let output = run_miniunit(&["--threads", "3"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("(1) Arithmetic\n"));
    assert!(out.contains("  (1-1) [Passed] addition\n"));
    assert!(out.contains("(2) Strings\n"));
    assert!(out.contains("  (3-4) [Passed] every worker was counted\n"));
    assert!(!out.contains("[Failed]"));
    // One line per case boundary, plus the final case.
    assert_eq!(out.matches("  Elapsed time ").count(), 3);
}

#[test]
fn test_failing_assertion_exits_with_status_1() {
    let output = run_miniunit(&["--fail"]);
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    let expected_line = MAIN_RS
        .lines()
        .position(|line| line.contains(r#"expect!(in reporter, "one equals two""#))
        .unwrap()
        + 1;
    assert_eq!(
        out.lines().last().unwrap(),
        format!(
            "  (4-1) [Failed] one equals two (1 == 2) [src/main.rs:{}]",
            expected_line
        )
    );
    assert_eq!(out.matches("  Elapsed time ").count(), 3);
    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("assertion failed: one equals two"));
}

#[test]
fn test_piped_output_is_not_colored() {
    let out = stdout(&run_miniunit(&[]));
    assert_eq!(strip_ansi_codes(&out), out.as_str());
}

#[test]
#[cfg_attr(feature = "no-color", ignore)]
fn test_color_always() {
    let out = stdout(&run_miniunit(&["--color", "always"]));
    let first = out.lines().next().unwrap();
    assert_eq!(first, "\x1b[36m(1) Arithmetic\x1b[0m");
}

#[test]
fn test_precision_option() {
    let out = stdout(&run_miniunit(&["--precision", "6"]));
    let elapsed = out
        .lines()
        .find(|line| line.starts_with("  Elapsed time "))
        .unwrap();
    let digits = elapsed
        .strip_suffix("sec.")
        .and_then(|s| s.split('.').nth(1))
        .unwrap();
    assert_eq!(digits.len(), 6);
}

#[test]
fn test_invalid_option_is_a_usage_error() {
    let output = run_miniunit(&["--color", "purple"]);
    assert_eq!(output.status.code(), Some(2));
}
