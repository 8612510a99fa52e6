//! Gemini `generateContent` commentator.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::generator::{CommentaryGenerator, CommentaryRequest};
use super::EMPTY_REPLY_COMMENTARY;
use crate::error::CommentaryError;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Connection and sampling settings for [`GeminiCommentator`].
#[derive(Clone)]
pub struct CommentaryConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl std::fmt::Debug for CommentaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentaryConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("top_k", &self.top_k)
            .field("top_p", &self.top_p)
            .finish()
    }
}

impl CommentaryConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read settings from the process environment.
    ///
    /// - `NEXUS_GEMINI_API_KEY` (or `API_KEY`): required
    /// - `NEXUS_GEMINI_MODEL`: defaults to [`DEFAULT_MODEL`]
    /// - `NEXUS_GEMINI_BASE_URL`: defaults to [`DEFAULT_BASE_URL`]
    /// - `NEXUS_COMMENTARY_TIMEOUT_MS`: defaults to [`DEFAULT_TIMEOUT_MS`]
    pub fn from_env() -> Result<Self, CommentaryError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`CommentaryConfig::from_env`] with a custom variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CommentaryError> {
        let api_key = lookup("NEXUS_GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|k| !k.trim().is_empty())
            .ok_or(CommentaryError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Some(model) = lookup("NEXUS_GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = lookup("NEXUS_GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("NEXUS_COMMENTARY_TIMEOUT_MS") {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| CommentaryError::InvalidVar {
                    name: "NEXUS_COMMENTARY_TIMEOUT_MS".to_string(),
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_millis(ms);
        }
        Ok(config)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

// === Wire types ===

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Default)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// First line of the first candidate's text, or `None` when empty.
fn reply_text(response: &GenerateResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let joined: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    let line = joined.trim().lines().next()?.trim();
    (!line.is_empty()).then(|| line.to_string())
}

/// Commentator backed by the Gemini REST API.
pub struct GeminiCommentator {
    client: reqwest::Client,
    config: CommentaryConfig,
}

impl GeminiCommentator {
    pub fn new(config: CommentaryConfig) -> Result<Self, CommentaryError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &CommentaryConfig {
        &self.config
    }
}

#[async_trait]
impl CommentaryGenerator for GeminiCommentator {
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(request.prompt()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
            },
        };

        let response = self
            .client
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CommentaryError::Status(status.as_u16()));
        }

        let reply: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CommentaryError::Malformed(e.to_string()))?;

        Ok(reply_text(&reply).unwrap_or_else(|| EMPTY_REPLY_COMMENTARY.to_string()))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
