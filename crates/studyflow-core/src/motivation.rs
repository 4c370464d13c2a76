//! Motivation message client.
//!
//! One request per user action, no retry: POST the user's free-form note
//! (or mood keyword) to the motivation endpoint and parse
//! `{"message": ..., "type": ...}`. Any network, status or decode failure
//! is logged and degrades to [`MotivationMessage::fallback`] -- it must
//! never stall the caller or surface as a blocking error.

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::error::MotivationError;
use crate::model::{MotivationKind, MotivationMessage};

/// Shown whenever the endpoint cannot produce a message.
pub const FALLBACK_MESSAGE: &str = "Keep pushing forward!";

/// Default endpoint of the companion backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize)]
struct MotivationResponse {
    message: String,
    #[serde(rename = "type", default)]
    kind: Option<MotivationKind>,
}

impl MotivationMessage {
    pub fn fallback() -> Self {
        Self {
            message: FALLBACK_MESSAGE.into(),
            kind: MotivationKind::Encouragement,
            timestamp: Utc::now(),
        }
    }
}

pub struct MotivationClient {
    base_url: Url,
    client: Client,
}

impl MotivationClient {
    pub fn new(base_url: &str) -> Result<Self, MotivationError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Client::new(),
        })
    }

    /// Request a motivational message for the given mood text.
    pub async fn fetch(&self, mood_text: &str) -> Result<MotivationMessage, MotivationError> {
        let url = self.base_url.join("/api/motivation")?;
        let body = serde_json::json!({ "mood": mood_text });
        let response = self.client.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(MotivationError::Status(response.status().as_u16()));
        }
        let parsed: MotivationResponse = response.json().await?;
        Ok(MotivationMessage {
            message: parsed.message,
            kind: parsed.kind.unwrap_or(MotivationKind::Encouragement),
            timestamp: Utc::now(),
        })
    }

    /// Like [`fetch`](Self::fetch), but failures are logged and swallowed.
    pub async fn fetch_or_fallback(&self, mood_text: &str) -> MotivationMessage {
        match self.fetch(mood_text).await {
            Ok(message) => message,
            Err(err) => {
                log::warn!("motivation fetch failed: {err}");
                MotivationMessage::fallback()
            }
        }
    }
}
