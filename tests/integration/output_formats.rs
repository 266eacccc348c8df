// tests/integration/output_formats.rs
use passphrase_checker::{
    app,
    config::{OutputFormat, RunConfig},
};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{InputFixture, SCENARIO};

fn execute(config: &RunConfig) -> String {
    let mut out = Vec::new();
    app::execute(config, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn text_output_matches_report_layout() {
    let fixture = InputFixture::new(SCENARIO);
    let config = RunConfig { input: fixture.path.clone(), ..RunConfig::default() };
    let expected = "GENERAL\n\
                    Correct passphrases in total:  1\n\
                    \n\
                    VARIANT\n\
                    Correct passphrases in total:  1\n\
                    \n\
                    Passphrases checking finished.\n";
    assert_eq!(execute(&config), expected);
}

#[test]
fn json_output_lists_each_policy() {
    let fixture = InputFixture::new(SCENARIO);
    let config = RunConfig { input: fixture.path.clone(), format: OutputFormat::Json, verbosity: 0 };
    let output = execute(&config);
    let (json, rest) = output.split_once('\n').unwrap();

    let value: Value = serde_json::from_str(json).unwrap();
    let reports = value["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["policy"], "general");
    assert_eq!(reports[0]["valid"], 1);
    assert_eq!(reports[1]["policy"], "variant");
    assert_eq!(reports[1]["valid"], 1);
    assert_eq!(rest, "Passphrases checking finished.\n");
}

#[test]
fn json_error_for_invalid_utf8() {
    let fixture = InputFixture::new("");
    std::fs::write(&fixture.path, [0xffu8, 0xfe, b'\n']).unwrap();
    let config = RunConfig { input: fixture.path.clone(), format: OutputFormat::Json, verbosity: 0 };
    let output = execute(&config);
    let (json, rest) = output.split_once('\n').unwrap();

    let value: Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["error"]["kind"], "unexpected");
    assert!(value["error"]["message"].as_str().unwrap().starts_with("An unexpected error occurred:"));
    assert_eq!(rest, "Passphrases checking finished.\n");
}
