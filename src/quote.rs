//! Motivational quote for the landing page, generated by Gemini.
//!
//! One request per call; a fixed quote stands in whenever the model answers
//! with nothing or the request fails.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub const PROMPT: &str = "Напиши одну короткую вдохновляющую фразу на русском для женщины, которая начинает рисовать. Тепло, ярко и мотивирующе. До 12 слов.";

pub const TEMPERATURE: f32 = 1.0;

/// Shown when the model returns no text
pub const EMPTY_FALLBACK: &str = "Твое творчество — это яркий танец красок на холсте.";

/// Shown when the request fails
pub const ERROR_FALLBACK: &str = "Твое сердце полно красок. Просто дай им свободу проявиться.";

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Gemini API key is not configured")]
    MissingKey,

    #[error("Gemini request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned status {0}")]
    Status(StatusCode),
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl QuoteClient {
    pub fn new(
        endpoint: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: reqwest::Client::builder().build()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
            timeout,
        })
    }

    /// Raw model output, possibly empty.
    pub async fn generate(&self) -> Result<String, QuoteError> {
        let Some(api_key) = &self.api_key else {
            return Err(QuoteError::MissingKey);
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": PROMPT }] }],
            "generationConfig": { "temperature": TEMPERATURE },
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status()));
        }

        let parsed = response.json::<GenerateContentResponse>().await?;
        Ok(parsed.text())
    }

    /// The quote to display, never empty.
    pub async fn inspiration(&self) -> String {
        match self.generate().await {
            Ok(text) if text.trim().is_empty() => {
                debug!(model = %self.model, "Empty quote, using fallback");
                EMPTY_FALLBACK.to_string()
            }
            Ok(text) => text.trim().to_string(),
            Err(QuoteError::MissingKey) => ERROR_FALLBACK.to_string(),
            Err(error) => {
                warn!(%error, model = %self.model, "Failed to generate quote");
                ERROR_FALLBACK.to_string()
            }
        }
    }
}
