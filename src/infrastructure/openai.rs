// src/infrastructure/openai.rs
use crate::application::CompletionClient;
use crate::constants::API_KEY_ENV;
use crate::domain::DomainError;
use crate::infrastructure::AiSettings;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    settings: AiSettings,
    http: Client,
}

impl OpenAiClient {
    pub fn new(settings: AiSettings) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| DomainError::GenerationFailed(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_http_client(settings, http))
    }

    /// Use a preconfigured HTTP client; the settings' timeout is not applied.
    pub fn with_http_client(settings: AiSettings, http: Client) -> Self {
        Self { settings, http }
    }
}

fn failed(msg: impl Into<String>) -> DomainError {
    DomainError::GenerationFailed(msg.into())
}

impl CompletionClient for OpenAiClient {
    fn is_configured(&self) -> bool {
        self.settings.has_credential()
    }

    #[instrument(level = "debug", skip(self, prompt), fields(model = %self.settings.model))]
    fn complete(&self, prompt: &str) -> Result<String, DomainError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(DomainError::MissingCredential(API_KEY_ENV))?;

        let request = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.settings.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .map_err(|e| failed(format!("Request to {} failed: {}", self.settings.endpoint, e)))?;

        let status = response.status();
        debug!(%status, "Completion endpoint responded");
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(failed(format!("API returned error status {}: {}", status, body.trim())));
        }

        let envelope: ChatResponse = response
            .json()
            .map_err(|e| failed(format!("Failed to parse completion response: {}", e)))?;

        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| failed("Completion response contained no message content"))
    }
}
