//! Bootstrap launcher
//!
//! ```text
//!  env (DATA_DIR, PORT, LAUNCHER_*)
//!        │
//!        ▼
//!  ┌─────────────┐    ┌─────────────┐    ┌──────────────────────────┐
//!  │   config    │───▶│   storage   │───▶│  launch (exec | spawn)   │───▶ server
//!  │ resolution  │    │  provision  │    │ run app.py --server.port │
//!  └─────────────┘    └─────────────┘    └──────────────────────────┘
//! ```
//!
//! Takes no arguments. Exits nonzero if configuration, provisioning or the
//! handoff fails; otherwise the exit code is the server's.

use std::process::ExitCode;

use bootstrap_launcher::lifecycle::{self, LaunchState};
use bootstrap_launcher::observability::logging;

fn main() -> ExitCode {
    logging::init();

    let extra = std::env::args_os().skip(1).count();
    if extra > 0 {
        tracing::warn!(count = extra, "Ignoring command-line arguments");
    }

    match lifecycle::bootstrap() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(state = %LaunchState::Failed, error = %e, "Launch aborted");
            ExitCode::from(&e)
        }
    }
}
