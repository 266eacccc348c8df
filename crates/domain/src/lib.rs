//! # Domain
//!
//! Passphrase validation rules.
//!
//! - [`policy`]: the policy selector and its resolved rule set
//! - [`rules`]: the [`PassphraseRules`] strategy and its two implementations
//!
//! Everything here is pure; nothing touches the filesystem.

pub mod policy;
pub mod rules;

pub use policy::{Policy, is_valid_passphrase};
pub use rules::{GeneralRules, PassphraseRules, Rejection, VariantRules, is_space};
