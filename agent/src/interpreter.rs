//! Task interpreter: one outbound call to the completion service.
//!
//! The service is asked, via a fixed system prompt, to convert the user's
//! free-text task into a JSON operation object. This module only transports
//! text; decoding the reply into a typed operation happens in
//! [`crate::core::operation`].

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// System instruction sent with every interpretation request.
pub const SYSTEM_PROMPT: &str =
    "You are an automation agent that converts user tasks into JSON-based operations.";

/// Seam over the completion service so tests can script replies.
#[async_trait]
pub trait Completions: Send + Sync {
    /// Return the textual content of the model's single reply.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Client for OpenAI-compatible chat-completions endpoints.
///
/// Exactly one request per call: no retry, no timeout beyond the HTTP
/// client's defaults. The credential is passed in explicitly at construction
/// rather than read from ambient process state.
pub struct OpenAiClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl Completions for OpenAiClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: system,
                },
                Message {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!(model = %self.model, "requesting completion");
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .context("call completion service")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("completion service returned {status}: {body}");
        }

        let completion: ChatResponse = response
            .json()
            .await
            .context("decode completion service response")?;

        match completion.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => bail!("completion service returned no choices"),
        }
    }
}

// OpenAI chat-completions wire format, request side borrowed to avoid clones.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
