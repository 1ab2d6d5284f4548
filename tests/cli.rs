use assert_cmd::Command;

fn contest_io() -> Command {
    Command::cargo_bin("contest-io").unwrap()
}

#[test]
fn prints_difference_of_two_integers() {
    contest_io().write_stdin("7 2").assert().success().stdout("5");
}

#[test]
fn accepts_operands_on_separate_lines() {
    contest_io()
        .write_stdin("10\n4\n")
        .assert()
        .success()
        .stdout("6");
}

#[test]
fn result_may_be_negative() {
    contest_io().write_stdin("2 7").assert().success().stdout("-5");
}

#[test]
fn rejects_malformed_input() {
    contest_io().write_stdin("four 2").assert().failure();
}

#[test]
fn rejects_missing_input() {
    contest_io().write_stdin("7").assert().failure();
}

#[test]
fn rejects_empty_input() {
    contest_io().write_stdin("").assert().failure();
}
