//! Client for the external practice-suggestion service.
//!
//! Builds a natural-language prompt summarizing the current collection,
//! posts it to a text-generation endpoint, and extracts the plain-text
//! segments of the reply. Configuration is via environment variables:
//! - `MISHMAR_SUGGESTION_URL` - endpoint override (default: the hosted service)
//! - `ANTHROPIC_API_KEY` - credential; when absent the request is sent
//!   unauthenticated

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Practice;

/// Default endpoint of the text-generation service.
const DEFAULT_URL: &str = "https://api.anthropic.com/v1/messages";

/// Model identifier sent with every request.
const MODEL: &str = "claude-sonnet-4-20250514";

/// Token cap sent with every request.
const MAX_TOKENS: u32 = 1000;

/// Protocol version header the hosted service expects alongside a
/// credential.
const API_VERSION: &str = "2023-06-01";

/// Shown instead of a suggestion when the service cannot be reached or
/// returns something unreadable.
pub const FALLBACK_MESSAGE: &str = "Unable to get suggestion at this time. Please try again.";

/// What went wrong talking to the service. Never escapes
/// [`SuggestionClient::suggest`]; exists for the diagnostic log.
#[derive(Debug, Error)]
enum SuggestionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error: {0}: {1}")]
    Service(reqwest::StatusCode, String),
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentSegment>,
}

/// One typed segment of the service reply. Only segments whose `type` is
/// `"text"` carry suggestion text; everything else is skipped.
#[derive(Deserialize)]
struct ContentSegment {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

/// Client for the suggestion service.
///
/// At most one request is outstanding at a time; clones share the
/// in-flight flag, so the limit holds across all of them. There is no
/// timeout and no cancellation: a stalled call keeps the flag set until
/// it returns.
#[derive(Clone)]
pub struct SuggestionClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
    busy: Arc<AtomicBool>,
}

impl SuggestionClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("MISHMAR_SUGGESTION_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        Self::new(endpoint, api_key)
    }

    /// Create with explicit configuration.
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            client: reqwest::Client::new(),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a request is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Ask the service for one practice worth adding, given the current
    /// collection.
    ///
    /// Returns `None` when another request is already in flight; the call
    /// is dropped, not queued. Transport and decode failures come back as
    /// the fixed [`FALLBACK_MESSAGE`] with the cause logged, never as an
    /// error.
    pub async fn suggest(&self, practices: &[Practice]) -> Option<String> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!("Suggestion request already in flight, ignoring");
            return None;
        }

        let prompt = build_prompt(practices);
        let result = self.request_suggestion(&prompt).await;
        self.busy.store(false, Ordering::SeqCst);

        Some(match result {
            Ok(suggestion) => suggestion,
            Err(e) => {
                tracing::warn!("Failed to get suggestion: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        })
    }

    async fn request_suggestion(&self, prompt: &str) -> Result<String, SuggestionError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut req = self.client.post(&self.endpoint).json(&body);
        if let Some(ref key) = self.api_key {
            req = req
                .header("x-api-key", key)
                .header("anthropic-version", API_VERSION);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestionError::Service(status, body));
        }

        let parsed: MessagesResponse = response.json().await?;
        Ok(extract_text(&parsed))
    }
}

/// Build the prompt describing the current collection.
///
/// With practices present, the service is asked for one complementary
/// practice and the prompt embeds a comma-joined
/// `"name (category, frequency)"` descriptor for every record, in
/// collection order. An empty collection asks for a foundational starting
/// practice instead.
pub fn build_prompt(practices: &[Practice]) -> String {
    if practices.is_empty() {
        return "Suggest a foundational spiritual practice for someone starting a Rule of Life, \
                drawing from Christian and Messianic Jewish traditions. Keep it brief and practical."
            .to_string();
    }

    let current = practices
        .iter()
        .map(|p| format!("{} ({}, {})", p.name, p.category.as_str(), p.frequency.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I'm building a Rule of Life with these practices: {}. Suggest one complementary \
         spiritual practice I might be missing, considering Christian and Messianic Jewish \
         traditions. Keep it brief and practical.",
        current
    )
}

/// Concatenate the reply's plain-text segments, in order, separated by
/// newlines.
fn extract_text(response: &MessagesResponse) -> String {
    response
        .content
        .iter()
        .filter(|segment| segment.kind == "text")
        .filter_map(|segment| segment.text.as_deref())
        .collect::<Vec<_>>()
        .join("\n")
}
