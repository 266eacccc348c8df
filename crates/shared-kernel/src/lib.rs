// crates/shared-kernel/src/lib.rs
pub use error::{ErrorContext, PassphraseError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::PassphraseCount;
