//! Server settings read from the environment.

use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_INACTIVITY_HOURS: u64 = 12;

/// HOST, PORT, STATIC_DIR and INACTIVITY_HOURS; unset or unparsable values fall back to defaults.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Served under `/static`.
    pub static_dir: String,
    /// Tournaments not accessed for this long are dropped from memory.
    pub inactivity_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            inactivity_timeout: Duration::from_secs(DEFAULT_INACTIVITY_HOURS * 3600),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let hours = lookup("INACTIVITY_HOURS").and_then(|h| h.parse::<u64>().ok());
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            inactivity_timeout: hours
                .map(|h| Duration::from_secs(h.saturating_mul(3600)))
                .unwrap_or(defaults.inactivity_timeout),
        }
    }
}
