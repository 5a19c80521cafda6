//! Client configuration resolved from the environment

use log::warn;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:8080";
pub const HOST_ENV: &str = "WORKQUEUE_HOST";
pub const TIMEOUT_ENV: &str = "WORKQUEUE_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Host used when `--host` is not given.
    pub default_host: String,
    /// Whole-request timeout. `None` leaves cancellation to the caller.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_host: DEFAULT_HOST.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_host = lookup(HOST_ENV)
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let timeout = lookup(TIMEOUT_ENV).and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(0) | Err(_) => {
                warn!("Ignoring {TIMEOUT_ENV}='{raw}', expected a positive number of seconds");
                None
            }
            Ok(secs) => Some(Duration::from_secs(secs)),
        });

        Self {
            default_host,
            timeout,
        }
    }
}
