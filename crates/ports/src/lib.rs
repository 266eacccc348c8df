//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`line_source`]: where candidate passphrase lines come from
//!
//! The use case layer only sees these traits, never a concrete file.

// crates/ports/src/lib.rs
pub mod line_source;
