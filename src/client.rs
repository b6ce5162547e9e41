use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "Cease-And-Desist-pro";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "POE_API_KEY";

const DEFAULT_API_BASE: &str = "https://api.poe.com/v1/";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing API key: set {API_KEY_ENV} or pass one explicitly")]
    MissingApiKey,

    #[error("invalid API base `{base}`: {message}")]
    InvalidBaseUrl { base: String, message: String },

    #[error("request to chat API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("chat API returned no choices")]
    EmptyResponse,
}

/// One entry in a conversation history, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Client for the Poe chat-completions API (OpenAI-compatible schema).
///
/// Holds no connection state; every call is a single request/response
/// exchange. No retries or timeouts beyond what reqwest itself does.
#[derive(Debug, Clone)]
pub struct PoeClient {
    http: reqwest::Client,
    api_key: String,
    api_base: Url,
}

impl PoeClient {
    /// Build a client. The key comes from `api_key` if given, otherwise from
    /// the `POE_API_KEY` environment variable. No network activity happens
    /// here.
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Result<Self, ClientError> {
        let api_key = api_key
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.is_empty())
            .ok_or(ClientError::MissingApiKey)?;

        Ok(Self {
            http,
            api_key,
            api_base: Url::parse(DEFAULT_API_BASE)
                .map_err(|e| ClientError::InvalidBaseUrl {
                    base: DEFAULT_API_BASE.to_string(),
                    message: e.to_string(),
                })?,
        })
    }

    /// Point the client at a different base address (e.g. a test server).
    /// A missing trailing slash is added so endpoint paths join under it.
    pub fn with_api_base(mut self, base: &str) -> Result<Self, ClientError> {
        let mut url = Url::parse(base).map_err(|e| ClientError::InvalidBaseUrl {
            base: base.to_string(),
            message: e.to_string(),
        })?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.api_base = url;
        Ok(self)
    }

    /// Send a single user message and return the reply text.
    pub async fn chat(&self, message: &str, model: &str) -> Result<String, ClientError> {
        self.chat_with_history(&[ChatMessage::user(message)], model).await
    }

    /// Send a caller-supplied conversation history, unmodified, and return
    /// the reply text. Ordering and role correctness are the caller's
    /// responsibility. Failures are logged here and returned unchanged.
    pub async fn chat_with_history(
        &self,
        messages: &[ChatMessage],
        model: &str,
    ) -> Result<String, ClientError> {
        let res = self.dispatch(messages, model).await;
        if let Err(err) = &res {
            tracing::error!(%err, "chat completion request failed");
        }
        res
    }

    async fn dispatch(
        &self,
        messages: &[ChatMessage],
        model: &str,
    ) -> Result<String, ClientError> {
        let url = self
            .api_base
            .join("chat/completions")
            .map_err(|e| ClientError::InvalidBaseUrl {
                base: self.api_base.to_string(),
                message: e.to_string(),
            })?;

        let body = ChatCompletionRequest { model, messages };

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status: status.as_u16(), body });
        }

        let parsed: ChatCompletionResponse = resp.json().await?;
        extract_reply(parsed).ok_or(ClientError::EmptyResponse)
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_reply(r: ChatCompletionResponse) -> Option<String> {
    r.choices.into_iter().next()?.message?.content
}
