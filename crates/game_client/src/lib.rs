use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Weak,
};

use async_trait::async_trait;
use platform_integration::{
    DesktopNotifier, RecognitionAlternative, RecognitionOptions, SpeechRecognizerProvider,
    DEFAULT_LANG,
};
use serde::{Deserialize, Serialize};
use simon_core::{
    Color, ColorSource, Game, GameSnapshot, InputOutcome, PlaybackTransition, Timings,
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

mod notify;
mod scheduler;
mod voice;

pub use notify::loss_notification_title;

use scheduler::ScheduledTask;
use voice::VoiceChannel;

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub timings: Timings,
    pub lang: String,
    /// Also notify when the loss came from a voice command.
    pub notify_on_voice_loss: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            lang: DEFAULT_LANG.to_string(),
            notify_on_voice_loss: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum SessionEvent {
    StateChanged(GameSnapshot),
    VoiceAttemptChanged {
        listening: bool,
    },
    TranscriptHeard {
        transcript: String,
        confidence: f32,
        outcome: InputOutcome,
    },
    NotificationDelivered {
        title: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartOutcome {
    Scheduled,
    AlreadyPending,
    NotLost,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceCommandError {
    #[error("speech recognition is not available")]
    Unsupported,
    #[error("a speech recognition attempt is already in progress")]
    AttemptInProgress,
    #[error("failed to start speech recognition: {0}")]
    Start(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputChannel {
    Click,
    Voice,
}

#[async_trait]
pub trait GameHandle: Send + Sync {
    async fn press(&self, color: Color) -> InputOutcome;
    async fn request_restart(&self) -> RestartOutcome;
    async fn start_voice_attempt(&self) -> Result<(), VoiceCommandError>;
    async fn snapshot(&self) -> GameSnapshot;
    async fn shutdown(&self);
    fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent>;
}

pub struct SimonSession {
    settings: SessionSettings,
    game: Mutex<Game>,
    playback: Mutex<Option<ScheduledTask>>,
    restart: Mutex<Option<ScheduledTask>>,
    voice: Mutex<Option<VoiceChannel>>,
    recognizer_provider: Arc<dyn SpeechRecognizerProvider>,
    notifier: Arc<dyn DesktopNotifier>,
    events: broadcast::Sender<SessionEvent>,
    closed: AtomicBool,
    self_ref: Weak<SimonSession>,
}

impl SimonSession {
    pub fn new_with_dependencies(
        settings: SessionSettings,
        colors: Box<dyn ColorSource>,
        recognizer_provider: Arc<dyn SpeechRecognizerProvider>,
        notifier: Arc<dyn DesktopNotifier>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new_cyclic(|self_ref| Self {
            settings,
            game: Mutex::new(Game::new(colors)),
            playback: Mutex::new(None),
            restart: Mutex::new(None),
            voice: Mutex::new(None),
            recognizer_provider,
            notifier,
            events,
            closed: AtomicBool::new(false),
            self_ref: self_ref.clone(),
        })
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Configures the recognizer and begins revealing the first color.
    pub async fn start(&self) {
        let options = RecognitionOptions::single_color(self.settings.lang.clone());
        match self.recognizer_provider.configure(options).await {
            Ok(recognizer) => {
                *self.voice.lock().await = Some(VoiceChannel::new(recognizer));
                info!("voice: speech recognition configured lang={}", self.settings.lang);
            }
            Err(err) => {
                warn!("voice: speech recognition unavailable, voice commands disabled: {err:#}");
            }
        }

        {
            let game = self.game.lock().await;
            self.publish(&game);
        }
        self.schedule_playback().await;
    }

    fn publish(&self, game: &Game) {
        let snapshot = game.snapshot();
        debug!(
            snapshot = %serde_json::to_string(&snapshot).unwrap_or_default(),
            "game: state changed"
        );
        let _ = self.events.send(SessionEvent::StateChanged(snapshot));
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }

    /// Replaces any running playback with a fresh one for the current machine turn.
    /// No-op once the session is shut down.
    async fn schedule_playback(&self) {
        let mut playback = self.playback.lock().await;
        if self.closed.load(Ordering::SeqCst) {
            debug!("playback: session closed, not scheduling");
            return;
        }
        let session = self.self_ref.clone();
        let timings = self.settings.timings;
        *playback = Some(ScheduledTask::spawn(run_playback(session, timings)));
    }

    pub(crate) async fn apply_input(&self, color: Color, channel: InputChannel) -> InputOutcome {
        let outcome = {
            let mut game = self.game.lock().await;
            let outcome = game.submit(color);
            if outcome != InputOutcome::Ignored {
                self.publish(&game);
            }
            outcome
        };

        match outcome {
            InputOutcome::Ignored => {
                debug!(?channel, %color, "game: input ignored");
            }
            InputOutcome::Advanced { step } => {
                debug!(?channel, %color, step, "game: correct input");
            }
            InputOutcome::RoundComplete { score } => {
                info!(?channel, score, "game: round complete");
                self.schedule_playback().await;
            }
            InputOutcome::Lost { score } => {
                info!(?channel, %color, score, "game: lost");
                if channel == InputChannel::Click || self.settings.notify_on_voice_loss {
                    notify::spawn_loss_notification(
                        Arc::clone(&self.notifier),
                        self.events.clone(),
                        score,
                    );
                }
            }
        }

        outcome
    }

    pub(crate) async fn handle_transcript(&self, heard: RecognitionAlternative) {
        let outcome = match heard.transcript.parse::<Color>() {
            Ok(color) => self.apply_input(color, InputChannel::Voice).await,
            Err(err) => {
                debug!("voice: discarded transcript: {err}");
                InputOutcome::Ignored
            }
        };
        info!(
            transcript = %heard.transcript,
            confidence = heard.confidence,
            ?outcome,
            "voice: heard"
        );
        self.emit(SessionEvent::TranscriptHeard {
            transcript: heard.transcript,
            confidence: heard.confidence,
            outcome,
        });
    }
}

async fn run_playback(session: Weak<SimonSession>, timings: Timings) {
    loop {
        let Some(active) = session.upgrade() else {
            return;
        };
        let revision = {
            let mut game = active.game.lock().await;
            if !game.is_machine_turn() || game.is_lost() {
                return;
            }
            game.begin_pause();
            active.publish(&game);
            game.revision()
        };
        drop(active);

        tokio::time::sleep(timings.pause).await;

        let Some(active) = session.upgrade() else {
            return;
        };
        {
            let mut game = active.game.lock().await;
            if game.revision() != revision {
                return;
            }
            game.end_pause();
            debug!(color = ?game.highlighted(), "playback: showing");
            active.publish(&game);
        }
        drop(active);

        tokio::time::sleep(timings.show).await;

        let Some(active) = session.upgrade() else {
            return;
        };
        let transition = {
            let mut game = active.game.lock().await;
            if game.revision() != revision {
                return;
            }
            let transition = game.advance_playback();
            active.publish(&game);
            transition
        };

        match transition {
            PlaybackTransition::Continued { .. } => continue,
            PlaybackTransition::HandedToPlayer => {
                debug!("playback: player turn");
                return;
            }
            PlaybackTransition::Ignored => return,
        }
    }
}

async fn run_restart(session: Weak<SimonSession>, timings: Timings) {
    tokio::time::sleep(timings.restart_delay).await;

    let Some(active) = session.upgrade() else {
        return;
    };
    {
        let mut game = active.game.lock().await;
        if !game.is_lost() {
            return;
        }
        game.restart();
        info!("game: restarted");
        active.publish(&game);
    }
    active.schedule_playback().await;
}

#[async_trait]
impl GameHandle for SimonSession {
    async fn press(&self, color: Color) -> InputOutcome {
        self.apply_input(color, InputChannel::Click).await
    }

    async fn request_restart(&self) -> RestartOutcome {
        if self.closed.load(Ordering::SeqCst) || !self.game.lock().await.is_lost() {
            return RestartOutcome::NotLost;
        }

        let mut pending = self.restart.lock().await;
        if pending.as_ref().is_some_and(|task| !task.is_finished()) {
            return RestartOutcome::AlreadyPending;
        }

        debug!(delay = ?self.settings.timings.restart_delay, "game: restart scheduled");
        *pending = Some(ScheduledTask::spawn(run_restart(
            self.self_ref.clone(),
            self.settings.timings,
        )));
        RestartOutcome::Scheduled
    }

    async fn start_voice_attempt(&self) -> Result<(), VoiceCommandError> {
        let mut voice = self.voice.lock().await;
        let Some(channel) = voice.as_mut() else {
            return Err(VoiceCommandError::Unsupported);
        };
        channel.start_attempt(self).await
    }

    async fn snapshot(&self) -> GameSnapshot {
        self.game.lock().await.snapshot()
    }

    async fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.restart.lock().await.take();
        self.playback.lock().await.take();
        if let Some(channel) = self.voice.lock().await.as_mut() {
            channel.abort_attempt().await;
        }
        info!("game: session shut down");
    }

    fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
