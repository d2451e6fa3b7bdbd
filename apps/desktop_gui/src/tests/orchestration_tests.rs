use super::*;

use crossbeam_channel::bounded;
use simon_core::Color;

#[test]
fn queued_command_leaves_status_alone() {
    let (cmd_tx, cmd_rx) = bounded(1);
    let mut status = "Watch the sequence".to_string();

    dispatch_backend_command(&cmd_tx, BackendCommand::Press(Color::Red), &mut status);

    assert_eq!(status, "Watch the sequence");
    assert_eq!(cmd_rx.try_recv().expect("queued"), BackendCommand::Press(Color::Red));
}

#[test]
fn full_queue_names_the_dropped_command() {
    let (cmd_tx, _cmd_rx) = bounded(1);
    let mut status = String::new();
    dispatch_backend_command(&cmd_tx, BackendCommand::StartVoice, &mut status);

    dispatch_backend_command(&cmd_tx, BackendCommand::Restart, &mut status);

    assert_eq!(status, "Game is busy, restart was dropped; try again");
}

#[test]
fn stopped_backend_asks_for_an_app_restart() {
    let (cmd_tx, cmd_rx) = bounded(1);
    drop(cmd_rx);
    let mut status = String::new();

    dispatch_backend_command(&cmd_tx, BackendCommand::Press(Color::Blue), &mut status);

    assert!(status.contains("restart Simon"), "status: {status}");
}
