//! Backend bridge: command queue intake, tokio worker thread, and the
//! desktop implementations of the speech and notification collaborators.

pub mod commands;
pub mod platform;
pub mod runtime;
