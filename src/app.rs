use std::io::{self, Write};

use passphrase_checker_infra::FileLineSource;
use passphrase_checker_shared_kernel::Result;
use passphrase_checker_usecase::{CountValidPassphrases, PolicyReport};

use crate::{config::RunConfig, presentation};

/// Count valid passphrases in the configured input under every policy.
pub fn run(config: &RunConfig) -> Result<Vec<PolicyReport>> {
    let source = FileLineSource::new(&config.input);
    CountValidPassphrases::new(&source).run_all()
}

/// Run and print the outcome to `out`.
///
/// Failures are printed, not returned; the completion message is written
/// on every path.
pub fn execute<W: Write>(config: &RunConfig, out: &mut W) -> io::Result<()> {
    log::info!("checking passphrases in '{}'", config.input.display());
    let printed = match run(config) {
        Ok(reports) => presentation::print_reports(out, &reports, config.format),
        Err(err) => {
            log::warn!("run failed ({}): {err}", err.kind());
            presentation::print_error(out, &err, config.format)
        }
    };
    let finished = presentation::print_completion(out);
    printed.and(finished)
}
