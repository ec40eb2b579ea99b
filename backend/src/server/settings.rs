//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SOCIALBUDDY_*` environment variables and
//! configuration files, in that order of precedence.

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_ADDRESS_LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Startup configuration for the HTTP server and its adapters.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SOCIALBUDDY")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait when checking out a pooled connection.
    pub db_connection_timeout_secs: Option<u64>,
    /// Base URL of the postal directory.
    pub address_lookup_url: Option<String>,
    /// Seconds before a postal directory request is abandoned.
    pub address_lookup_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Parse the bind address, falling back to the default.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// PostgreSQL URL; `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool size, falling back to the default.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Pool checkout timeout, falling back to the default.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Postal directory base URL, falling back to the public ViaCEP service.
    pub fn address_lookup_url(&self) -> &str {
        self.address_lookup_url
            .as_deref()
            .unwrap_or(socialbuddy::outbound::viacep::DEFAULT_VIACEP_BASE_URL)
    }

    /// Postal directory request timeout, falling back to the default.
    pub fn address_lookup_timeout(&self) -> Duration {
        Duration::from_secs(
            self.address_lookup_timeout_secs
                .unwrap_or(DEFAULT_ADDRESS_LOOKUP_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "SOCIALBUDDY_BIND_ADDR",
        "SOCIALBUDDY_DATABASE_URL",
        "SOCIALBUDDY_DB_MAX_CONNECTIONS",
        "SOCIALBUDDY_DB_CONNECTION_TIMEOUT_SECS",
        "SOCIALBUDDY_ADDRESS_LOOKUP_URL",
        "SOCIALBUDDY_ADDRESS_LOOKUP_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("socialbuddy")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            "0.0.0.0:8081".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.db_connection_timeout(), Duration::from_secs(30));
        assert_eq!(settings.address_lookup_url(), "https://viacep.com.br");
        assert_eq!(settings.address_lookup_timeout(), Duration::from_secs(10));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SOCIALBUDDY_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "SOCIALBUDDY_DATABASE_URL",
                Some("postgres://localhost/socialbuddy".to_owned()),
            ),
            ("SOCIALBUDDY_DB_MAX_CONNECTIONS", Some("4".to_owned())),
            ("SOCIALBUDDY_DB_CONNECTION_TIMEOUT_SECS", Some("5".to_owned())),
            (
                "SOCIALBUDDY_ADDRESS_LOOKUP_URL",
                Some("http://localhost:8089".to_owned()),
            ),
            ("SOCIALBUDDY_ADDRESS_LOOKUP_TIMEOUT_SECS", Some("2".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/socialbuddy")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(settings.db_connection_timeout(), Duration::from_secs(5));
        assert_eq!(settings.address_lookup_url(), "http://localhost:8089");
        assert_eq!(settings.address_lookup_timeout(), Duration::from_secs(2));
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env([("SOCIALBUDDY_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
