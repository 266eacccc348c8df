// src/presentation.rs
use std::io::{self, Write};

use passphrase_checker_shared_kernel::PassphraseError;
use passphrase_checker_usecase::PolicyReport;
use serde::Serialize;

use crate::config::OutputFormat;

/// Printed last on every run, successful or not.
pub const COMPLETION_MESSAGE: &str = "Passphrases checking finished.";

#[derive(Serialize)]
struct JsonReports<'a> {
    reports: &'a [PolicyReport],
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    error: JsonError<'a>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    kind: &'a str,
    message: String,
}

pub fn print_reports<W: Write>(out: &mut W, reports: &[PolicyReport], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => print_text(out, reports),
        OutputFormat::Json => print_json(out, &JsonReports { reports }),
    }
}

pub fn print_error<W: Write>(out: &mut W, err: &PassphraseError, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{err}"),
        OutputFormat::Json => {
            let failure = JsonFailure { error: JsonError { kind: err.kind(), message: err.to_string() } };
            print_json(out, &failure)
        }
    }
}

pub fn print_completion<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{COMPLETION_MESSAGE}")
}

fn print_text<W: Write>(out: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    for (idx, report) in reports.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", report.policy.name())?;
        writeln!(out, "Correct passphrases in total:  {}", report.valid)?;
    }
    writeln!(out)
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
