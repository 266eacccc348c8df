// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Every failure the driver can observe is one of these three kinds; the
/// `Display` text is the message printed to the user.
#[derive(Debug, Error)]
pub enum PassphraseError {
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("An IO error occurred: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catch-all for anything that is neither a missing file nor an I/O failure.
    #[error("An unexpected error occurred: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PassphraseError>;

impl PassphraseError {
    /// Classify an I/O error raised while reading `path`.
    ///
    /// A decode failure surfaces as `InvalidData` from `read_to_string`; it is
    /// not an I/O problem and lands in the catch-all.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path: path.into() },
            std::io::ErrorKind::InvalidData => Self::Unexpected(anyhow::Error::new(source)),
            _ => Self::Io { path: path.into(), source },
        }
    }

    /// Short label for the error kind, used in logs and JSON output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => "file_not_found",
            Self::Io { .. } => "io",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

/// Extension trait to add additional context to results.
///
/// Context is attached to the catch-all variant only; the file errors
/// already carry their path and keep their kind untouched.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<PassphraseError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        let context = context.into();
        self.map_err(|e| attach(e.into(), context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| attach(e.into(), f()))
    }
}

fn attach(err: PassphraseError, context: String) -> PassphraseError {
    match err {
        PassphraseError::Unexpected(inner) => PassphraseError::Unexpected(inner.context(context)),
        other => other,
    }
}
