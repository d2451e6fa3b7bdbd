use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use simon_core::Color;
use tokio::sync::broadcast;

pub mod notification;

pub use notification::{DesktopNotifier, MissingNotifier, NotificationPermission};

pub const DEFAULT_LANG: &str = "en-US";

/// JSGF grammar restricting recognition to a fixed word list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechGrammar {
    pub name: String,
    pub words: Vec<String>,
    pub weight: f32,
}

impl SpeechGrammar {
    pub fn colors() -> Self {
        Self {
            name: "colors".to_string(),
            words: Color::ALL.iter().map(|c| c.name().to_string()).collect(),
            weight: 1.0,
        }
    }

    pub fn to_jsgf(&self) -> String {
        format!(
            "#JSGF V1.0; grammar {}; public <color> = {};",
            self.name,
            self.words.join(" | ")
        )
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionOptions {
    pub grammar: SpeechGrammar,
    pub lang: String,
    pub continuous: bool,
    pub interim_results: bool,
    pub max_alternatives: u32,
}

impl RecognitionOptions {
    /// Single utterance, top alternative only, final results only.
    pub fn single_color(lang: impl Into<String>) -> Self {
        Self {
            grammar: SpeechGrammar::colors(),
            lang: lang.into(),
            continuous: false,
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self::single_color(DEFAULT_LANG)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionAlternative {
    pub transcript: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecognitionEvent {
    Result(RecognitionAlternative),
    NoMatch,
    SpeechEnd,
    Error(String),
    /// The attempt is over; no further events until the next `start`.
    End,
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn start(&self) -> anyhow::Result<()>;
    async fn stop(&self) -> anyhow::Result<()>;
    /// Ends the attempt without delivering a result.
    async fn abort(&self) -> anyhow::Result<()>;
    fn subscribe_events(&self) -> broadcast::Receiver<RecognitionEvent>;
}

#[async_trait]
pub trait SpeechRecognizerProvider: Send + Sync {
    async fn configure(
        &self,
        options: RecognitionOptions,
    ) -> anyhow::Result<std::sync::Arc<dyn SpeechRecognizer>>;
}

pub struct MissingSpeechRecognizer;

#[async_trait]
impl SpeechRecognizerProvider for MissingSpeechRecognizer {
    async fn configure(
        &self,
        _options: RecognitionOptions,
    ) -> anyhow::Result<std::sync::Arc<dyn SpeechRecognizer>> {
        Err(anyhow::anyhow!("speech recognition is unavailable"))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
