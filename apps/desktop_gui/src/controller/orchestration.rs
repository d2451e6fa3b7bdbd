//! Hands player actions to the game backend without blocking the frame.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd`; a refused command is reported in the status line instead.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "game command queue full; dropped");
            *status = format!("Game is busy, {cmd_name} was dropped; try again");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "game backend is gone");
            *status = "Game timers and voice input stopped; restart Simon".to_string();
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
