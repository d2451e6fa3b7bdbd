use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use game_client::SessionSettings;
use platform_integration::DEFAULT_LANG;
use serde::Deserialize;
use simon_core::Timings;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "simon.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pause_ms: u64,
    pub show_ms: u64,
    pub restart_delay_ms: u64,
    pub lang: String,
    pub notify_on_voice_loss: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            pause_ms: timings.pause.as_millis() as u64,
            show_ms: timings.show.as_millis() as u64,
            restart_delay_ms: timings.restart_delay.as_millis() as u64,
            lang: DEFAULT_LANG.into(),
            notify_on_voice_loss: false,
            seed: None,
        }
    }
}

impl Settings {
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            timings: Timings {
                pause: Duration::from_millis(self.pause_ms),
                show: Duration::from_millis(self.show_ms),
                restart_delay: Duration::from_millis(self.restart_delay_ms),
            },
            lang: self.lang.clone(),
            notify_on_voice_loss: self.notify_on_voice_loss,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    pause_ms: Option<u64>,
    show_ms: Option<u64>,
    restart_delay_ms: Option<u64>,
    lang: Option<String>,
    notify_on_voice_loss: Option<bool>,
    seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults, then the TOML file, then environment variables.
///
/// An explicit `path` must exist; the default `simon.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let mut settings = Settings::default();

    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file_settings(&mut settings, &raw, &path)?,
        Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {}
        Err(source) => return Err(SettingsError::Read { path, source }),
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, raw: &str, path: &Path) -> Result<(), SettingsError> {
    let file_cfg: FileSettings = toml::from_str(raw).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(v) = file_cfg.pause_ms {
        settings.pause_ms = v;
    }
    if let Some(v) = file_cfg.show_ms {
        settings.show_ms = v;
    }
    if let Some(v) = file_cfg.restart_delay_ms {
        settings.restart_delay_ms = v;
    }
    if let Some(v) = file_cfg.lang {
        settings.lang = v;
    }
    if let Some(v) = file_cfg.notify_on_voice_loss {
        settings.notify_on_voice_loss = v;
    }
    if let Some(v) = file_cfg.seed {
        settings.seed = Some(v);
    }
    Ok(())
}

fn parse_or_warn<T: std::str::FromStr>(name: &str, value: &str) -> Option<T> {
    match value.trim().parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!("ignoring {name}={value:?}: not a valid value");
            None
        }
    }
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for name in ["SIMON_PAUSE_MS", "APP__PAUSE_MS"] {
        if let Some(v) = lookup(name).and_then(|v| parse_or_warn(name, &v)) {
            settings.pause_ms = v;
        }
    }
    for name in ["SIMON_SHOW_MS", "APP__SHOW_MS"] {
        if let Some(v) = lookup(name).and_then(|v| parse_or_warn(name, &v)) {
            settings.show_ms = v;
        }
    }
    for name in ["SIMON_RESTART_DELAY_MS", "APP__RESTART_DELAY_MS"] {
        if let Some(v) = lookup(name).and_then(|v| parse_or_warn(name, &v)) {
            settings.restart_delay_ms = v;
        }
    }
    if let Some(v) = lookup("SIMON_LANG") {
        if !v.trim().is_empty() {
            settings.lang = v;
        }
    }
    if let Some(v) = lookup("SIMON_NOTIFY_ON_VOICE_LOSS")
        .and_then(|v| parse_or_warn("SIMON_NOTIFY_ON_VOICE_LOSS", &v))
    {
        settings.notify_on_voice_loss = v;
    }
    if let Some(v) = lookup("SIMON_SEED").and_then(|v| parse_or_warn("SIMON_SEED", &v)) {
        settings.seed = Some(v);
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
