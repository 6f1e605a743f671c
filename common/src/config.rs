//! Dashboard configuration.
//!
//! Values are baked in at build time by the frontend; parsing lives here so it
//! can be checked without a browser.

use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DEVICE_IDS: [&str; 3] = [
    "verde-terra-esp32-001",
    "verde-terra-esp32-002",
    "verde-terra-esp32-003",
];
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("VERDETERRA_API_ENDPOINT is not set")]
    MissingEndpoint,
    #[error("VERDETERRA_DEVICE_IDS does not contain any device id")]
    NoDevices,
    #[error("invalid fetch timeout: {0}")]
    Timeout(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the data API, without the `/data` suffix
    pub api_endpoint: String,
    /// Selectable devices, the first one is the default
    pub device_ids: Vec<String>,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Build a config from raw values. Only the endpoint is required.
    pub fn parse(
        api_endpoint: Option<&str>,
        device_ids: Option<&str>,
        fetch_timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_endpoint = api_endpoint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?
            .to_owned();

        let device_ids: Vec<String> = match device_ids {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
            None => DEFAULT_DEVICE_IDS.iter().map(|s| s.to_string()).collect(),
        };
        if device_ids.is_empty() {
            return Err(ConfigError::NoDevices);
        }

        let fetch_timeout = match fetch_timeout_secs {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Timeout(raw.to_owned())),
            },
            None => DEFAULT_FETCH_TIMEOUT,
        };

        Ok(Self {
            api_endpoint,
            device_ids,
            fetch_timeout,
        })
    }
}
