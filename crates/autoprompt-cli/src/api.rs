//! Autoprompt API Client

use anyhow::{bail, Context, Result};
use autoprompt::{ModelFamily, PromptRequest, Tone};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// API Client for a remote Autoprompt server
pub struct AutopromptClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Types
// ============================================

#[derive(Debug, Serialize)]
pub struct ComposeRequest {
    pub user_goal: String,
    pub keywords: String,
    pub tone: String,
    pub target_model_family: String,
}

impl From<&PromptRequest> for ComposeRequest {
    fn from(request: &PromptRequest) -> Self {
        Self {
            user_goal: request.user_goal.clone(),
            keywords: request.keywords.clone(),
            tone: request.tone.label().to_string(),
            target_model_family: request.target_model_family.label().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ComposeResponse {
    pub system_prompt: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct OptionsResponse {
    pub tones: Vec<Tone>,
    pub model_families: Vec<ModelFamily>,
}

impl AutopromptClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Compose a prompt on the server
    pub async fn compose(&self, request: &PromptRequest) -> Result<ComposeResponse> {
        let url = format!("{}/autoprompt/compose", self.base_url);
        let resp = self
            .authorized(self.client.post(&url))
            .json(&ComposeRequest::from(request))
            .send()
            .await
            .context("Failed to connect to Autoprompt API")?;

        Self::parse(resp).await
    }

    /// Fetch the option sets the server accepts
    pub async fn options(&self) -> Result<OptionsResponse> {
        let url = format!("{}/autoprompt/options", self.base_url);
        let resp = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context("Failed to connect to Autoprompt API")?;

        Self::parse(resp).await
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("Authorization", format!("Bearer {}", key)),
            None => builder,
        }
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }
}
