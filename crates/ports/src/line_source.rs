// crates/ports/src/line_source.rs
use passphrase_checker_shared_kernel::Result;

/// Port for reading candidate passphrase lines.
///
/// Lines come back in input order and keep their `\n` terminator when the
/// input had one. A missing input must surface as
/// [`PassphraseError::FileNotFound`](passphrase_checker_shared_kernel::PassphraseError::FileNotFound),
/// any other read failure as `Io`.
pub trait LineSource: Send + Sync {
    fn read_lines(&self) -> Result<Vec<String>>;
}
