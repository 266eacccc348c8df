mod args;
mod value_enum;

pub use args::Args;
use clap::Parser;
pub use value_enum::CliOutputFormat;

use crate::config::RunConfig;

/// Parse CLI arguments and materialise a [`RunConfig`].
pub fn load_config() -> RunConfig {
    let args = Args::parse();
    build_config(&args)
}

/// Convert parsed CLI arguments into a run configuration.
pub fn build_config(args: &Args) -> RunConfig {
    RunConfig {
        input: args.path.clone(),
        format: args.format.into(),
        verbosity: args.verbose,
    }
}
