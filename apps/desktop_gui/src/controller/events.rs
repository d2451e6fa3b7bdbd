//! UI/backend events and error modeling for the game window.

use game_client::SessionEvent;
use simon_core::{GameSnapshot, InputOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    GameChanged(GameSnapshot),
    VoiceListening(bool),
    TranscriptHeard { transcript: String, accepted: bool },
    NotificationPermissionRequested,
    Notification(String),
}

/// Maps a session event to what the window needs to show, if anything.
pub fn ui_event_for(event: SessionEvent) -> Option<UiEvent> {
    match event {
        SessionEvent::StateChanged(snapshot) => Some(UiEvent::GameChanged(snapshot)),
        SessionEvent::VoiceAttemptChanged { listening } => Some(UiEvent::VoiceListening(listening)),
        SessionEvent::TranscriptHeard {
            transcript,
            outcome,
            ..
        } => Some(UiEvent::TranscriptHeard {
            transcript,
            accepted: outcome != InputOutcome::Ignored,
        }),
        // The notifier already surfaced it.
        SessionEvent::NotificationDelivered { .. } => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Voice,
    Notification,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    VoiceCommand,
    General,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("speech")
            || message_lower.contains("recognition")
            || message_lower.contains("voice")
        {
            UiErrorCategory::Voice
        } else if message_lower.contains("notification") {
            UiErrorCategory::Notification
        } else if message_lower.contains("queue")
            || message_lower.contains("disconnected")
            || message_lower.contains("runtime")
            || message_lower.contains("backend")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Voice and notification failures leave the game playable by clicks.
    pub fn is_degraded_feature(&self) -> bool {
        matches!(
            self.category,
            UiErrorCategory::Voice | UiErrorCategory::Notification
        )
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Voice => "Voice",
        UiErrorCategory::Notification => "Notification",
        UiErrorCategory::Transport => "Backend",
        UiErrorCategory::Unknown => "Unexpected",
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
