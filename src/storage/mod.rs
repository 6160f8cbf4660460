//! Persistent storage preparation.
//!
//! The launcher's only storage duty is to make sure the data directory is
//! present and writable before the server starts. The server receives the
//! path through its environment and owns everything inside it.

pub mod provision;

pub use provision::{provision, Provisioned};
