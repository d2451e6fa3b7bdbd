//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use game_client::{GameHandle, RestartOutcome, SessionEvent, SimonSession};
use platform_integration::{MissingSpeechRecognizer, SpeechRecognizerProvider};
use simon_core::{ColorSource, RandomColors};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::platform::{InAppNotifier, TypedSpeechProvider, TypedSpeechRecognizer};
use crate::config::Settings;
use crate::controller::events::{ui_event_for, UiError, UiErrorContext, UiEvent};

#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub settings: Settings,
    pub typed_voice: bool,
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, options: BridgeOptions) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(run_backend(cmd_rx, ui_tx, options));
    });
}

fn color_source(seed: Option<u64>) -> Box<dyn ColorSource> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "game: using seeded colors");
            Box::new(RandomColors::seeded(seed))
        }
        None => Box::new(RandomColors::from_entropy()),
    }
}

async fn forward_session_events(
    mut events: broadcast::Receiver<SessionEvent>,
    ui_tx: Sender<UiEvent>,
) {
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(ui_event) = ui_event_for(event) {
                    if ui_tx.try_send(ui_event).is_err() {
                        tracing::warn!("ui event queue unavailable; dropping session event");
                    }
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("session event stream lagged, skipped={skipped}");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

async fn run_backend(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, options: BridgeOptions) {
    let notifier = Arc::new(InAppNotifier::new(ui_tx.clone()));
    let typed_recognizer = options.typed_voice.then(TypedSpeechRecognizer::new);
    let provider: Arc<dyn SpeechRecognizerProvider> = match &typed_recognizer {
        Some(recognizer) => Arc::new(TypedSpeechProvider::new(Arc::clone(recognizer))),
        None => Arc::new(MissingSpeechRecognizer),
    };

    let session = SimonSession::new_with_dependencies(
        options.settings.session_settings(),
        color_source(options.settings.seed),
        provider,
        notifier.clone(),
    );
    let event_task = tokio::spawn(forward_session_events(
        session.subscribe_events(),
        ui_tx.clone(),
    ));
    session.start().await;
    let _ = ui_tx.try_send(UiEvent::Info("Watch the sequence".to_string()));

    while let Ok(cmd) = cmd_rx.recv() {
        tracing::debug!(command = cmd.name(), "backend: handling command");
        match cmd {
            BackendCommand::Press(color) => {
                session.press(color).await;
            }
            BackendCommand::Restart => match session.request_restart().await {
                RestartOutcome::Scheduled => {
                    let _ = ui_tx.try_send(UiEvent::Info("Restarting...".to_string()));
                }
                RestartOutcome::AlreadyPending => {
                    let _ = ui_tx.try_send(UiEvent::Info("Restart already scheduled".to_string()));
                }
                RestartOutcome::NotLost => {}
            },
            BackendCommand::StartVoice => {
                if let Err(err) = session.start_voice_attempt().await {
                    tracing::warn!("voice: {err}");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::VoiceCommand,
                        err.to_string(),
                    )));
                }
            }
            BackendCommand::SubmitTranscript(utterance) => match &typed_recognizer {
                Some(recognizer) => recognizer.submit(&utterance),
                None => tracing::debug!("voice: typed utterance ignored, typed voice disabled"),
            },
            BackendCommand::AnswerNotificationPrompt { granted } => notifier.answer(granted),
            BackendCommand::Shutdown => break,
        }
    }

    session.shutdown().await;
    event_task.abort();
    tracing::info!("backend worker stopped");
}
