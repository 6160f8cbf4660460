//! Handoff to the application server.
//!
//! # Data Flow
//! ```text
//! LauncherConfig
//!     → command.rs (program, args, DATA_DIR env)
//!     → exec.rs   (HandoffMode::Exec: replace process image)
//!     → spawn.rs  (HandoffMode::Spawn: child + exit-code forwarding)
//! ```

pub mod command;
pub mod exec;
pub mod spawn;

pub use command::ServerCommand;
pub use exec::{ExecHandoff, Handoff};
pub use spawn::SpawnHandoff;

use crate::config::HandoffMode;

/// Select the handoff implementation for `mode`.
pub fn handoff_for(mode: HandoffMode) -> Box<dyn Handoff> {
    match mode {
        HandoffMode::Exec => Box::new(ExecHandoff),
        HandoffMode::Spawn => Box::new(SpawnHandoff),
    }
}
