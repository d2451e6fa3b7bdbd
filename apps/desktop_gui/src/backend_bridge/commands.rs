//! Backend commands queued from UI to backend worker.

use simon_core::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    Press(Color),
    Restart,
    StartVoice,
    /// Typed stand-in for a spoken utterance.
    SubmitTranscript(String),
    AnswerNotificationPrompt {
        granted: bool,
    },
    Shutdown,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Press(_) => "press",
            BackendCommand::Restart => "restart",
            BackendCommand::StartVoice => "start_voice",
            BackendCommand::SubmitTranscript(_) => "submit_transcript",
            BackendCommand::AnswerNotificationPrompt { .. } => "answer_notification_prompt",
            BackendCommand::Shutdown => "shutdown",
        }
    }
}
