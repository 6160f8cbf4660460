//! Spawn-and-forward handoff.
//!
//! # Responsibilities
//! - Start the server as a child process
//! - Wait for it and forward its exit code
//! - Forward SIGTERM/SIGINT to the child, then wait for it to exit
//!
//! # Design Decisions
//! - Single-threaded runtime, built only for this path
//! - The child chooses how to shut down; the launcher only waits
//! - Child is killed on drop so it never outlives a panicking launcher
//! - No restart: the child exiting ends the launcher

use std::future::Future;
use std::process::ExitStatus;

use crate::error::LaunchError;
use crate::launch::command::ServerCommand;
use crate::launch::exec::Handoff;
use crate::lifecycle::signals::{self, Termination};
use crate::lifecycle::LaunchState;

/// Spawn the server and mirror its lifetime.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpawnHandoff;

impl Handoff for SpawnHandoff {
    fn hand_off(&self, command: &ServerCommand) -> Result<u8, LaunchError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|source| LaunchError::Io {
                program: command.program.clone(),
                source,
            })?;

        runtime.block_on(run_forwarding(command, signals::termination()))
    }
}

/// Run the server until it exits. When `shutdown` resolves first, its signal
/// is passed on to the server and the server is awaited.
pub async fn run_forwarding<F>(command: &ServerCommand, shutdown: F) -> Result<u8, LaunchError>
where
    F: Future<Output = Termination>,
{
    let mut child = command
        .to_tokio_command()
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| LaunchError::from_io(&command.program, e))?;

    tracing::info!(
        state = %LaunchState::Launched,
        pid = ?child.id(),
        program = %command.program,
        "Server spawned"
    );

    let finished = tokio::select! {
        status = child.wait() => Ok(status),
        termination = shutdown => Err(termination),
    };

    let status = match finished {
        Ok(status) => status,
        Err(termination) => {
            tracing::info!(%termination, "Forwarding termination to server");
            forward(&mut child, termination);
            child.wait().await
        }
    }
    .map_err(|source| LaunchError::Wait {
        program: command.program.clone(),
        source,
    })?;

    let code = exit_code(status);
    tracing::info!(%status, code, "Server exited");
    Ok(code)
}

#[cfg(unix)]
fn forward(child: &mut tokio::process::Child, termination: Termination) {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    // None once the child has been reaped.
    let Some(pid) = child.id().and_then(|id| i32::try_from(id).ok()) else {
        return;
    };

    if let Err(errno) = kill(Pid::from_raw(pid), termination.signal()) {
        tracing::warn!(pid, %errno, "Failed to signal server");
    }
}

#[cfg(not(unix))]
fn forward(child: &mut tokio::process::Child, _termination: Termination) {
    if let Err(e) = child.start_kill() {
        tracing::warn!(error = %e, "Failed to stop server");
    }
}

/// Map a child status to the launcher's exit code; signal N becomes 128 + N.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return (code & 0xff) as u8;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128u8.wrapping_add((signal & 0x7f) as u8);
        }
    }

    1
}
