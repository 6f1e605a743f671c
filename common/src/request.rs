use std::time::Duration;

use log::{debug, warn};
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    StatusCode,
};
use thiserror::Error;

use crate::req::{DataResponse, ErrorResponse, SensorReading};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("HTTP error! status: {}{}", .status.as_u16(), .message.as_ref().map_or(String::new(), |m| format!(" - {m}")))]
    Http {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("{0}")]
    Transport(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct SensorDataClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SensorDataClient {
    pub fn new(endpoint_base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint_base.trim_end_matches('/').to_owned(),
        }
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.endpoint)
    }

    /// Issues exactly one `GET /data` request. No retries.
    pub async fn fetch_readings(
        &self,
        device_id: &str,
        lookback_ms: u64,
    ) -> Result<Vec<SensorReading>, FetchError> {
        let url = self.api_url("data");
        let time_back_ms = lookback_ms.to_string();
        debug!("GET {url} deviceId={device_id} timeBackMs={time_back_ms}");

        let resp = self
            .client
            .get(&url)
            .query(&[("deviceId", device_id), ("timeBackMs", time_back_ms.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("request to {url} failed: {e}");
                FetchError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = FetchError::Http {
                status,
                message: error_message(&body),
            };
            warn!("{err}");
            return Err(err);
        }

        Ok(resp.json::<DataResponse>().await?.data)
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
}
