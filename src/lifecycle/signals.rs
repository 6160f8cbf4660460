//! OS signal handling for the spawn handoff.
//!
//! Only relevant while the launcher stays alive as the server's parent. With
//! exec there is no launcher left to receive signals.

use std::fmt;

/// A termination request received by the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// SIGTERM.
    Terminate,
    /// SIGINT, or Ctrl-C off Unix.
    Interrupt,
}

impl Termination {
    /// The signal to pass on to the server.
    #[cfg(unix)]
    pub fn signal(self) -> nix::sys::signal::Signal {
        use nix::sys::signal::Signal;

        match self {
            Termination::Terminate => Signal::SIGTERM,
            Termination::Interrupt => Signal::SIGINT,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Terminate => f.write_str("SIGTERM"),
            Termination::Interrupt => f.write_str("SIGINT"),
        }
    }
}

/// Resolves with the first SIGTERM or SIGINT (Ctrl-C off Unix) received.
pub async fn termination() -> Termination {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let (mut term, mut int) = match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(term), Ok(int)) => (term, int),
            (Err(e), _) | (_, Err(e)) => {
                tracing::warn!(error = %e, "Failed to install signal handlers");
                return std::future::pending().await;
            }
        };

        tokio::select! {
            _ = term.recv() => Termination::Terminate,
            _ = int.recv() => Termination::Interrupt,
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
            return std::future::pending().await;
        }
        Termination::Interrupt
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use nix::sys::signal::Signal;

    #[test]
    fn test_signal_mapping() {
        assert_eq!(Termination::Terminate.signal(), Signal::SIGTERM);
        assert_eq!(Termination::Interrupt.signal(), Signal::SIGINT);
        assert_eq!(Termination::Terminate.to_string(), "SIGTERM");
    }
}
