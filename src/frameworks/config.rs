use std::{env, time::Duration};

// Runtime/server settings (not model behavior).

// Default model identifier; local deployments usually override this.
pub const DEFAULT_MODEL: &str = "inclusionAI/Ling-1T";

pub fn http_port() -> u16 {
    env::var("ANALYSIS_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5002)
}

// Base URL of the chat-completions backend. Point it at a local
// OpenAI-compatible server to run against a locally served model.
pub fn inference_base_url() -> String {
    env::var("INFERENCE_BASE_URL")
        .unwrap_or_else(|_| "https://router.huggingface.co/v1".to_string())
}

pub fn inference_api_key() -> Option<String> {
    env::var("INFERENCE_API_KEY")
        .ok()
        .filter(|value| !value.trim().is_empty())
}

pub fn inference_model() -> String {
    env::var("INFERENCE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}

pub fn inference_timeout() -> Duration {
    // Keep a long default timeout, local models can be slow.
    let millis = env::var("INFERENCE_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(60_000);
    Duration::from_millis(millis)
}
