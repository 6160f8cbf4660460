//! Observability subsystem.
//!
//! The launcher emits a handful of structured events before handoff
//! (configuration, provisioning, handoff or failure). Everything after that
//! is the server's own output.

pub mod logging;
