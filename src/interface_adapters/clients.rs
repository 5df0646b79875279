use crate::domain::{BoxError, SuggestionProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// The client defined here is a reqwest client for external inference services.
// Thin wrapper around reqwest for OpenAI-compatible chat completions. The same
// client serves hosted backends and locally served models; only the base URL
// and key differ.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    http: Client,
    pub base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorResponse {
    error: UpstreamErrorBody,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

#[derive(Debug)]
pub enum ChatCompletionsError {
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
    EmptyCompletion,
}

impl fmt::Display for ChatCompletionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatCompletionsError::Transport(err) => write!(f, "inference transport error: {err}"),
            ChatCompletionsError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "inference upstream error {status}: {message}")
                } else {
                    write!(f, "inference upstream error {status}")
                }
            }
            ChatCompletionsError::Decode(err) => {
                write!(f, "inference response decode error: {err}")
            }
            ChatCompletionsError::EmptyCompletion => {
                write!(f, "inference response carried no completion text")
            }
        }
    }
}

impl std::error::Error for ChatCompletionsError {}

impl ChatCompletionsClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
        })
    }
}

#[async_trait]
impl SuggestionProvider for ChatCompletionsClient {
    async fn generate(&self, prompt: &str) -> Result<String, BoxError> {
        // Compose the completions URL and POST a single-turn user message.
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut request = self.http.post(url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let res = request.send().await.map_err(ChatCompletionsError::Transport)?;
        let status = res.status();

        // Keep upstream status/message so handlers can report backend failures.
        if !status.is_success() {
            let message = res
                .json::<UpstreamErrorResponse>()
                .await
                .ok()
                .map(|payload| payload.error.message);
            return Err(ChatCompletionsError::Upstream { status, message }.into());
        }

        // Parse the completion and take the first choice with text content.
        let completion = res
            .json::<ChatCompletionResponse>()
            .await
            .map_err(ChatCompletionsError::Decode)?;

        let content = completion
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .filter(|text| !text.trim().is_empty());

        match content {
            Some(text) => Ok(text),
            None => Err(ChatCompletionsError::EmptyCompletion.into()),
        }
    }
}
