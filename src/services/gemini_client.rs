use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::{
    core::generator::TextGenerator,
    error::{PlannerError, Result},
};

/// Client for the Gemini `generateContent` endpoint.
///
/// A single attempt per call: any transport or HTTP failure is returned to
/// the caller, which falls back instead of retrying.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/models/{}:generateContent", trimmed, model)
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Concatenate the text parts of the first candidate.
fn response_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|value| value.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let response = self
            .http
            .post(build_generate_url(&self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let response_text_raw = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&response_text_raw)
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|value| value.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text_raw);

            return Err(PlannerError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let response_json: Value = serde_json::from_str(&response_text_raw)?;
        response_text(&response_json).ok_or(PlannerError::EmptyResponse)
    }
}
