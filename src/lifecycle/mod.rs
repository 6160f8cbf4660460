//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → Provision data dir → Hand off
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → forwarded to the spawned server (spawn handoff only)
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then storage, then the server
//! - No shutdown phase of our own: after exec the server owns the process

pub mod signals;
pub mod startup;

pub use startup::{bootstrap, launch, LaunchState};
