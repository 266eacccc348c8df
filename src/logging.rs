// src/logging.rs
use tracing_subscriber::filter::LevelFilter;

/// Map the `-v` count to a log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Install the stderr subscriber; `log` records from the library crates are
/// forwarded through its `tracing-log` bridge.
pub fn init(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(e) = installed {
        eprintln!("[warn] logging disabled: {e}");
    }
}
