//! Desktop stand-ins for the speech and notification collaborators.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use crossbeam_channel::Sender;
use platform_integration::{
    DesktopNotifier, NotificationPermission, RecognitionAlternative, RecognitionEvent,
    RecognitionOptions, SpeechRecognizer, SpeechRecognizerProvider,
};
use tokio::sync::{broadcast, watch};

use crate::controller::events::UiEvent;

/// Recognizer whose "microphone" is a text field in the window.
pub struct TypedSpeechRecognizer {
    events_tx: broadcast::Sender<RecognitionEvent>,
    listening: AtomicBool,
}

impl TypedSpeechRecognizer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events_tx: broadcast::channel(32).0,
            listening: AtomicBool::new(false),
        })
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// One utterance; blank input means speech ended without a result.
    pub fn submit(&self, utterance: &str) {
        if !self.is_listening() {
            tracing::debug!("voice: typed utterance dropped, not listening");
            return;
        }

        let transcript = utterance.trim().to_lowercase();
        if transcript.is_empty() {
            let _ = self.events_tx.send(RecognitionEvent::NoMatch);
        } else {
            let _ = self
                .events_tx
                .send(RecognitionEvent::Result(RecognitionAlternative {
                    transcript,
                    confidence: 1.0,
                }));
        }
        let _ = self.events_tx.send(RecognitionEvent::SpeechEnd);
    }

    fn finish(&self) {
        if self.listening.swap(false, Ordering::SeqCst) {
            let _ = self.events_tx.send(RecognitionEvent::End);
        }
    }
}

#[async_trait]
impl SpeechRecognizer for TypedSpeechRecognizer {
    async fn start(&self) -> Result<()> {
        if self.listening.swap(true, Ordering::SeqCst) {
            return Err(anyhow!("recognition has already started"));
        }
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.finish();
        Ok(())
    }

    async fn abort(&self) -> Result<()> {
        self.finish();
        Ok(())
    }

    fn subscribe_events(&self) -> broadcast::Receiver<RecognitionEvent> {
        self.events_tx.subscribe()
    }
}

pub struct TypedSpeechProvider {
    recognizer: Arc<TypedSpeechRecognizer>,
}

impl TypedSpeechProvider {
    pub fn new(recognizer: Arc<TypedSpeechRecognizer>) -> Self {
        Self { recognizer }
    }
}

#[async_trait]
impl SpeechRecognizerProvider for TypedSpeechProvider {
    async fn configure(&self, options: RecognitionOptions) -> Result<Arc<dyn SpeechRecognizer>> {
        tracing::info!(
            lang = %options.lang,
            grammar = %options.grammar.to_jsgf(),
            "voice: typed recognizer configured"
        );
        Ok(self.recognizer.clone())
    }
}

/// Shows notifications as in-window toasts; permission is asked once through
/// a prompt in the window and kept for the lifetime of the app.
pub struct InAppNotifier {
    permission: watch::Sender<NotificationPermission>,
    prompting: AtomicBool,
    ui_tx: Sender<UiEvent>,
}

impl InAppNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self {
            permission: watch::Sender::new(NotificationPermission::Default),
            prompting: AtomicBool::new(false),
            ui_tx,
        }
    }

    /// Records the player's answer to the permission prompt.
    pub fn answer(&self, granted: bool) {
        let permission = if granted {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        };
        self.prompting.store(false, Ordering::SeqCst);
        self.permission.send_replace(permission);
        tracing::info!(?permission, "notification: permission answered");
    }
}

#[async_trait]
impl DesktopNotifier for InAppNotifier {
    fn permission(&self) -> NotificationPermission {
        *self.permission.borrow()
    }

    async fn request_permission(&self) -> Result<NotificationPermission> {
        let current = self.permission();
        if current != NotificationPermission::Default {
            return Ok(current);
        }

        let mut rx = self.permission.subscribe();
        if !self.prompting.swap(true, Ordering::SeqCst) {
            if let Err(err) = self.ui_tx.try_send(UiEvent::NotificationPermissionRequested) {
                self.prompting.store(false, Ordering::SeqCst);
                return Err(anyhow!("failed to show notification prompt: {err}"));
            }
        }
        let answered = rx
            .wait_for(|permission| *permission != NotificationPermission::Default)
            .await
            .map_err(|err| anyhow!("notification prompt closed: {err}"))?;
        Ok(*answered)
    }

    async fn show(&self, title: &str) -> Result<()> {
        self.ui_tx
            .try_send(UiEvent::Notification(title.to_string()))
            .map_err(|err| anyhow!("failed to queue notification: {err}"))
    }
}

#[cfg(test)]
#[path = "../tests/platform_tests.rs"]
mod tests;
