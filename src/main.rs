// src/main.rs
use std::process::ExitCode;

use passphrase_checker::{app, cli, logging};

fn main() -> ExitCode {
    let config = cli::load_config();
    logging::init(config.verbosity);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::execute(&config, &mut out) {
        log::error!("failed to write output: {e}");
    }
    // Errors are reported on stdout; the process itself always succeeds.
    ExitCode::SUCCESS
}
