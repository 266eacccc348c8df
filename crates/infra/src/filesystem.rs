// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use passphrase_checker_ports::line_source::LineSource;
use passphrase_checker_shared_kernel::{ErrorContext, PassphraseError, Result};

use crate::persistence::FileReader;

/// Line source backed by a single UTF-8 text file.
///
/// Every call to [`LineSource::read_lines`] reads the whole file again.
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = FileReader::read_to_string(&self.path)
            .map_err(|e| {
                log::debug!("failed to read '{}': {e}", self.path.display());
                PassphraseError::from_io(&self.path, e)
            })
            .with_context(|| format!("failed to decode '{}'", self.path.display()))?;
        let lines = split_lines(&content);
        log::debug!("read {} line(s), {} byte(s) from '{}'", lines.len(), content.len(), self.path.display());
        Ok(lines)
    }
}

/// Split text into lines, keeping the `\n` terminator.
///
/// `\r\n` and a lone `\r` both count as a line break and are normalised to `\n`.
fn split_lines(content: &str) -> Vec<String> {
    let normalised = content.replace("\r\n", "\n").replace('\r', "\n");
    normalised.split_inclusive('\n').map(str::to_owned).collect()
}
