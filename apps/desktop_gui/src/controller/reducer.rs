//! Window state folded from backend events.

use std::time::{Duration, Instant};

use simon_core::{Color, GameSnapshot};

use crate::controller::events::{err_label, UiError, UiEvent};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub game: Option<GameSnapshot>,
    pub listening: bool,
    pub permission_prompt_open: bool,
    pub status: String,
    pub banner: Option<UiError>,
    pub toasts: Vec<Toast>,
    pub last_transcript: Option<(String, bool)>,
}

impl ViewState {
    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::Info(message) => self.status = message,
            UiEvent::Error(err) => {
                self.status = format!("{} error: {}", err_label(err.category()), err.message());
                if !err.is_degraded_feature() {
                    self.banner = Some(err);
                }
            }
            UiEvent::GameChanged(snapshot) => self.game = Some(snapshot),
            UiEvent::VoiceListening(listening) => {
                self.listening = listening;
                if listening {
                    self.status = "Listening for a color...".to_string();
                }
            }
            UiEvent::TranscriptHeard {
                transcript,
                accepted,
            } => {
                self.status = if accepted {
                    format!("Heard \"{transcript}\"")
                } else {
                    format!("Heard \"{transcript}\" (ignored)")
                };
                self.last_transcript = Some((transcript, accepted));
            }
            UiEvent::NotificationPermissionRequested => self.permission_prompt_open = true,
            UiEvent::Notification(message) => self.toasts.push(Toast {
                message,
                expires_at: now + TOAST_LIFETIME,
            }),
        }
    }

    pub fn expire_toasts(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn score(&self) -> usize {
        self.game.as_ref().map_or(0, |game| game.score)
    }

    pub fn is_lost(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.lost)
    }

    pub fn is_machine_turn(&self) -> bool {
        self.game.as_ref().is_some_and(|game| game.machine_turn)
    }

    pub fn is_shining(&self, color: Color) -> bool {
        self.game.as_ref().is_some_and(|game| game.is_shining(color))
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
