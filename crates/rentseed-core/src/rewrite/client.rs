//! Chat-completion client for the text-generation API.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::prompt::ChatMessage;
use crate::config::ApiConfig;
use crate::http::{self, FetchError};

const COMPLETIONS_PATH: &str = "llm/v1/chat/completions";

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("request failed: {0}")]
    Transport(#[from] FetchError),
    #[error("API returned HTTP {0}")]
    Status(u32),
    #[error("encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("decode response: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("response had no completion text")]
    EmptyResponse,
}

/// Something that turns a conversation into one completion.
pub trait CompletionApi {
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String, RewriteError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [ChatMessage],
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extracts `choices[0].message.content`, trimmed.
fn parse_completion(body: &[u8]) -> Result<String, RewriteError> {
    let resp: ChatResponse = serde_json::from_slice(body).map_err(RewriteError::Decode)?;
    let text = resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(RewriteError::EmptyResponse);
    }
    Ok(text)
}

/// Completion endpoint under `base_url`, keeping any path prefix on the base.
pub fn completions_endpoint(base_url: &str) -> Result<String> {
    let mut base = url::Url::parse(base_url.trim())
        .with_context(|| format!("invalid API base URL: {}", base_url))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let endpoint = base
        .join(COMPLETIONS_PATH)
        .with_context(|| format!("build completions URL from {}", base_url))?;
    Ok(endpoint.into())
}

/// Blocking client for the built-in text-generation API.
#[derive(Debug, Clone)]
pub struct ForgeClient {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ForgeClient {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            endpoint,
            api_key,
            timeout,
        }
    }

    pub fn from_config(api: &ApiConfig, timeout: Duration) -> Result<Self> {
        let endpoint = completions_endpoint(&api.base_url)?;
        Ok(Self::new(endpoint, api.api_key.clone(), timeout))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionApi for ForgeClient {
    fn complete(&self, messages: &[ChatMessage], temperature: f64) -> Result<String, RewriteError> {
        let body = serde_json::to_vec(&ChatRequest {
            messages,
            temperature,
        })
        .map_err(RewriteError::Encode)?;

        let auth = format!("Bearer {}", self.api_key.as_deref().unwrap_or(""));
        let resp = http::post_json(
            &self.endpoint,
            &[("Authorization", auth.as_str())],
            &body,
            self.timeout,
        )?;
        if resp.status != 200 {
            return Err(RewriteError::Status(resp.status));
        }
        parse_completion(&resp.body)
    }
}
