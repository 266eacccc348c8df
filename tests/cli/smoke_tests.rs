use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{InputFixture, SCENARIO};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_passphrase_checker"))
}

#[test]
fn shows_help() {
    bin().arg("--help").assert().success().stdout(predicate::str::contains("passphrase_checker"));
}

#[test]
fn help_states_single_path_limit() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("入力ファイルは1つだけ指定できます"));
}

#[test]
fn extra_path_is_a_usage_error() {
    bin().args(["a.txt", "b.txt"]).assert().code(2).stdout(predicate::str::is_empty());
}

#[test]
fn counts_given_file() {
    let fixture = InputFixture::new(SCENARIO);
    bin()
        .arg(&fixture.path)
        .assert()
        .success()
        .stdout(
            "GENERAL\nCorrect passphrases in total:  1\n\n\
             VARIANT\nCorrect passphrases in total:  1\n\n\
             Passphrases checking finished.\n",
        );
}

#[test]
fn defaults_to_input_txt_in_working_dir() {
    let fixture = InputFixture::new("egy ketto!\nharom negy?\n");
    bin()
        .current_dir(fixture.dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct passphrases in total:  2"))
        .stdout(predicate::str::ends_with("Passphrases checking finished.\n"));
}

#[test]
fn missing_file_reports_and_exits_zero() {
    let fixture = InputFixture::new("");
    bin()
        .current_dir(fixture.dir.path())
        .arg("does-not-exist.txt")
        .assert()
        .success()
        .stdout("File not found: does-not-exist.txt\nPassphrases checking finished.\n");
}

#[test]
fn json_format() {
    let fixture = InputFixture::new(SCENARIO);
    bin()
        .args(["--format", "json"])
        .arg(&fixture.path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"reports":[{"policy":"general","valid":1},{"policy":"variant","valid":1}]}"#));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = InputFixture::new(SCENARIO);
    bin()
        .arg("-vv")
        .arg(&fixture.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("GENERAL"))
        .stderr(predicate::str::contains("rejected"));
}
