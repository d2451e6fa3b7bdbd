use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let dir = env::temp_dir().join(format!("simon_config_test_{suffix}"));
    fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join("simon.toml");
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_match_the_game_cadence() {
    let settings = Settings::default();
    assert_eq!(settings.pause_ms, 500);
    assert_eq!(settings.show_ms, 1000);
    assert_eq!(settings.restart_delay_ms, 1000);
    assert_eq!(settings.lang, "en-US");
    assert!(!settings.notify_on_voice_loss);

    let session = settings.session_settings();
    assert_eq!(session.timings, Timings::default());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config("pause_ms = 250\nlang = \"en-GB\"\nseed = 42\n");
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        &fs::read_to_string(&path).expect("read"),
        &path,
    )
    .expect("apply");

    assert_eq!(settings.pause_ms, 250);
    assert_eq!(settings.show_ms, 1000);
    assert_eq!(settings.lang, "en-GB");
    assert_eq!(settings.seed, Some(42));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn malformed_file_is_reported_with_its_path() {
    let path = temp_config("pause_ms = \"fast\"\n");
    let err = load_settings(Some(path.as_path())).expect_err("should fail");
    assert!(matches!(err, SettingsError::Parse { .. }));
    assert!(err.to_string().contains("simon.toml"));

    fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = load_settings(Some(Path::new("/definitely/not/here/simon.toml")))
        .expect_err("should fail");
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn env_overrides_win_and_bad_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        lookup_from(&[
            ("SIMON_PAUSE_MS", "100"),
            ("APP__PAUSE_MS", "200"),
            ("SIMON_SHOW_MS", "soon"),
            ("SIMON_NOTIFY_ON_VOICE_LOSS", "true"),
            ("SIMON_SEED", "9"),
            ("SIMON_LANG", "  "),
        ]),
    );

    assert_eq!(settings.pause_ms, 200);
    assert_eq!(settings.show_ms, 1000);
    assert!(settings.notify_on_voice_loss);
    assert_eq!(settings.seed, Some(9));
    assert_eq!(settings.lang, "en-US");
}
