//! One recognition attempt at a time over a recognizer owned by the session.

use std::sync::{Arc, Weak};

use platform_integration::{RecognitionEvent, SpeechRecognizer};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use crate::{scheduler::ScheduledTask, SessionEvent, SimonSession, VoiceCommandError};

pub(crate) struct VoiceChannel {
    recognizer: Arc<dyn SpeechRecognizer>,
    attempt: Option<ScheduledTask>,
}

impl VoiceChannel {
    pub(crate) fn new(recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self {
            recognizer,
            attempt: None,
        }
    }

    fn attempt_pending(&self) -> bool {
        self.attempt
            .as_ref()
            .is_some_and(|attempt| !attempt.is_finished())
    }

    /// Rejects a new attempt while the previous one has not ended.
    ///
    /// `listening: true` goes out before the pump exists, so the pump's
    /// closing `listening: false` is always the later of the two.
    pub(crate) async fn start_attempt(
        &mut self,
        session: &SimonSession,
    ) -> Result<(), VoiceCommandError> {
        if self.attempt_pending() {
            return Err(VoiceCommandError::AttemptInProgress);
        }

        let events = self.recognizer.subscribe_events();
        self.recognizer
            .start()
            .await
            .map_err(|err| VoiceCommandError::Start(format!("{err:#}")))?;
        debug!("voice: recognition attempt started");
        session.emit(SessionEvent::VoiceAttemptChanged { listening: true });

        let recognizer = Arc::clone(&self.recognizer);
        self.attempt = Some(ScheduledTask::spawn(pump_recognition(
            session.self_ref.clone(),
            recognizer,
            events,
        )));
        Ok(())
    }

    pub(crate) async fn abort_attempt(&mut self) {
        if let Some(attempt) = self.attempt.take() {
            if !attempt.is_finished() {
                if let Err(err) = self.recognizer.abort().await {
                    warn!("voice: failed to abort recognition attempt: {err:#}");
                }
            }
        }
    }
}

async fn pump_recognition(
    session: Weak<SimonSession>,
    recognizer: Arc<dyn SpeechRecognizer>,
    mut events: broadcast::Receiver<RecognitionEvent>,
) {
    loop {
        match events.recv().await {
            Ok(RecognitionEvent::Result(heard)) => {
                let Some(active) = session.upgrade() else {
                    return;
                };
                active.handle_transcript(heard).await;
            }
            Ok(RecognitionEvent::SpeechEnd) => {
                if let Err(err) = recognizer.stop().await {
                    warn!("voice: failed to stop recognition after speech end: {err:#}");
                }
            }
            Ok(RecognitionEvent::NoMatch) => debug!("voice: no match"),
            Ok(RecognitionEvent::Error(message)) => {
                warn!("voice: recognition error: {message}");
            }
            Ok(RecognitionEvent::End) | Err(RecvError::Closed) => break,
            Err(RecvError::Lagged(skipped)) => {
                warn!("voice: recognition event stream lagged, skipped={skipped}");
            }
        }
    }

    debug!("voice: recognition attempt ended");
    if let Some(active) = session.upgrade() {
        active.emit(SessionEvent::VoiceAttemptChanged { listening: false });
    }
}
