//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`counter`]: counting valid passphrases over a sequence of lines
//! - [`orchestrator`]: reading lines through a port and counting them per policy
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

pub mod counter;
pub mod dto;
pub mod orchestrator;

pub use counter::count_valid_passphrases;
pub use dto::PolicyReport;
pub use orchestrator::CountValidPassphrases;
