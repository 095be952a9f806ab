//! End-to-end tests for the interactive shell: two dates in on stdin, one
//! signed integer out on stdout, diagnostics on stderr.

use assert_cmd::Command;
use predicates::prelude::*;

fn day_count() -> Command {
    #[allow(clippy::unwrap_used)]
    Command::cargo_bin("day-count").unwrap()
}

#[test]
fn adjacent_days_without_leap_years() {
    day_count()
        .args(["--leap", "none"])
        .write_stdin("01/01/2000\n02/01/2000\n")
        .assert()
        .success()
        .stdout("1\n")
        .stderr("");
}

#[test]
fn negative_when_second_date_is_earlier() {
    day_count()
        .args(["--leap", "none"])
        .write_stdin("02/01/2000\n01/01/2000\n")
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn naive_rule_gives_february_2000_a_leap_day() {
    day_count()
        .args(["--leap", "naive"])
        .write_stdin("28/02/2000\n01/03/2000\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn naive_rule_is_the_default() {
    day_count()
        .write_stdin("28/02/2000\n01/03/2000\n")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn invalid_lines_are_reported_and_rerequested() {
    day_count()
        .args(["--leap", "naive"])
        .write_stdin("3 0/01/2020\n30/02/2020\n01/01/2020\n03/01/2020\n")
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("please enter date again"));
}

#[test]
fn dash_separated_dates_are_accepted() {
    day_count()
        .write_stdin("1-1-2020\n11-1-2020\n")
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn fails_when_input_ends_before_two_dates() {
    day_count()
        .write_stdin("01/01/2020\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of input"));
}
