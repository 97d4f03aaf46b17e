//! Process settings loaded through OrthoConfig.
//!
//! Values layer as CLI flags over `TEMPLE_*` environment variables over the
//! defaults below. Session cookie settings live in
//! [`crate::inbound::http::session_config`] instead.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{Locale, Messages, UnknownLocale};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 720;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TEMPLE_BIND_ADDR '{value}' is not a socket address")]
    BindAddr { value: String },
    #[error(transparent)]
    Locale(#[from] UnknownLocale),
    #[error("TEMPLE_SESSION_TTL_HOURS must be at least 1")]
    SessionTtl,
}

/// Runtime configuration for the HTTP server and CLI tools.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TEMPLE")]
#[serde(default)]
pub struct AppSettings {
    /// PostgreSQL URL. Absent means in-memory adapters.
    pub database_url: Option<String>,
    /// Listener address.
    pub bind_addr: Option<String>,
    /// `th` or `en`.
    pub locale: Option<String>,
    /// Session cookie lifetime in hours.
    #[ortho_config(default = 720)]
    pub session_ttl_hours: u64,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            database_url: None,
            bind_addr: None,
            locale: None,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }
}

impl AppSettings {
    /// Trimmed database URL; blank values count as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim().parse().map_err(|_| SettingsError::BindAddr {
            value: raw.to_owned(),
        })
    }

    pub fn locale(&self) -> Result<Locale, SettingsError> {
        self.locale
            .as_deref()
            .map_or(Ok(Locale::default()), str::parse)
            .map_err(SettingsError::from)
    }

    pub fn messages(&self) -> Result<Messages, SettingsError> {
        self.locale().map(Messages::new)
    }

    pub fn session_ttl(&self) -> Result<Duration, SettingsError> {
        match self.session_ttl_hours {
            0 => Err(SettingsError::SessionTtl),
            hours => Ok(Duration::from_secs(hours.saturating_mul(3600))),
        }
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "TEMPLE_DATABASE_URL",
        "TEMPLE_BIND_ADDR",
        "TEMPLE_LOCALE",
        "TEMPLE_SESSION_TTL_HOURS",
        "TEMPLE_DB_MAX_CONNECTIONS",
    ];

    fn load() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("temple-backend")]).expect("settings load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load();

        assert!(settings.database_url().is_none());
        assert_eq!(
            settings.bind_addr().expect("bind addr"),
            "0.0.0.0:8080".parse().expect("socket addr")
        );
        assert_eq!(settings.locale().expect("locale"), Locale::Thai);
        assert_eq!(
            settings.session_ttl().expect("ttl"),
            Duration::from_secs(720 * 3600)
        );
        assert_eq!(settings.db_max_connections(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "TEMPLE_DATABASE_URL",
                Some("postgres://temple@localhost/temple".to_owned()),
            ),
            ("TEMPLE_BIND_ADDR", Some("127.0.0.1:3001".to_owned())),
            ("TEMPLE_LOCALE", Some("en".to_owned())),
            ("TEMPLE_SESSION_TTL_HOURS", Some("24".to_owned())),
            ("TEMPLE_DB_MAX_CONNECTIONS", Some("3".to_owned())),
        ]);

        let settings = load();

        assert_eq!(
            settings.database_url(),
            Some("postgres://temple@localhost/temple")
        );
        assert_eq!(
            settings.bind_addr().expect("bind addr").port(),
            3001
        );
        assert_eq!(settings.locale().expect("locale"), Locale::English);
        assert_eq!(
            settings.session_ttl().expect("ttl"),
            Duration::from_secs(24 * 3600)
        );
        assert_eq!(settings.db_max_connections(), 3);
    }

    #[rstest]
    #[case(AppSettings { bind_addr: Some("nowhere".to_owned()), ..AppSettings::default() })]
    #[case(AppSettings { locale: Some("fr".to_owned()), ..AppSettings::default() })]
    #[case(AppSettings { session_ttl_hours: 0, ..AppSettings::default() })]
    fn invalid_values_are_reported(#[case] settings: AppSettings) {
        let failed = settings.bind_addr().is_err()
            || settings.locale().is_err()
            || settings.session_ttl().is_err();
        assert!(failed);
    }

    #[rstest]
    fn defaults_match_the_documented_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
        assert_eq!(settings.db_max_connections(), DEFAULT_DB_MAX_CONNECTIONS);
        assert!(settings.bind_addr().is_ok());
        assert!(settings.messages().is_ok());
    }

    #[rstest]
    fn blank_database_urls_mean_in_memory() {
        let settings = AppSettings {
            database_url: Some("   ".to_owned()),
            ..AppSettings::default()
        };
        assert!(settings.database_url().is_none());
    }
}
