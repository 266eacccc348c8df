// src/config.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Input file used when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a single run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    /// Number of `-v` flags given.
    pub verbosity: u8,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { input: PathBuf::from(DEFAULT_INPUT), format: OutputFormat::default(), verbosity: 0 }
    }
}
