//! Session configuration across build modes.

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use uuid::Uuid;

/// Key file removed on drop.
struct KeyFile {
    path: PathBuf,
}

impl KeyFile {
    fn with_len(len: usize) -> Self {
        let path = std::env::temp_dir().join(format!("temple-session-key-{}", Uuid::new_v4()));
        std::fs::write(&path, vec![b'k'; len]).expect("write key file");
        Self { path }
    }

    fn path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

impl Drop for KeyFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn env_from(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn full_key() -> KeyFile {
    KeyFile::with_len(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &KeyFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[rstest]
fn release_accepts_complete_configuration(full_key: KeyFile) {
    let env = env_from(release_vars(&full_key));

    let settings =
        session_settings_from_env(&env, BuildMode::Release).expect("valid release settings");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_rejects_each_missing_toggle(full_key: KeyFile, #[case] removed: &'static str) {
    let mut vars = release_vars(&full_key);
    vars.remove(removed);

    let err = session_settings_from_env(&env_from(vars), BuildMode::Release)
        .err()
        .expect("missing toggle rejected");

    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == removed));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "")]
fn release_rejects_malformed_toggles(
    full_key: KeyFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&full_key);
    vars.insert(name, value.to_owned());

    let err = session_settings_from_env(&env_from(vars), BuildMode::Release)
        .err()
        .expect("malformed toggle rejected");

    assert!(matches!(err, SessionConfigError::InvalidEnv { name: found, .. } if found == name));
}

#[rstest]
fn release_rejects_ephemeral_keys(full_key: KeyFile) {
    let mut vars = release_vars(&full_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());

    let err = session_settings_from_env(&env_from(vars), BuildMode::Release)
        .err()
        .expect("ephemeral rejected");

    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_short_key() {
    let short = KeyFile::with_len(SESSION_KEY_MIN_LEN / 2);

    let err = session_settings_from_env(&env_from(release_vars(&short)), BuildMode::Release)
        .err()
        .expect("short key rejected");

    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, .. } if length == SESSION_KEY_MIN_LEN / 2
    ));
}

#[rstest]
fn release_rejects_unreadable_key(full_key: KeyFile) {
    let mut vars = release_vars(&full_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/temple/session_key".to_owned());

    let err = session_settings_from_env(&env_from(vars), BuildMode::Release)
        .err()
        .expect("unreadable key rejected");

    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn release_rejects_insecure_same_site_none(full_key: KeyFile) {
    let mut vars = release_vars(&full_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    let err = session_settings_from_env(&env_from(vars), BuildMode::Release)
        .err()
        .expect("insecure None rejected");

    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn debug_falls_back_on_empty_environment() {
    let settings = session_settings_from_env(&env_from(HashMap::new()), BuildMode::Debug)
        .expect("debug defaults");

    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_derives_the_same_key_from_the_same_file(full_key: KeyFile) {
    let first = session_settings_from_env(&env_from(release_vars(&full_key)), BuildMode::Debug)
        .expect("first read");
    let second = session_settings_from_env(&env_from(release_vars(&full_key)), BuildMode::Debug)
        .expect("second read");

    assert_eq!(
        fingerprint::KeyFingerprint::of(&first.key),
        fingerprint::KeyFingerprint::of(&second.key)
    );
}
