//! HTTP client for the strand service: model catalog, API key management,
//! release lookups, and agent run submission.

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Default service endpoint; override with `STRAND_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.strand.tools/v1";

pub const ENV_API_URL: &str = "STRAND_API_URL";
pub const ENV_API_KEY: &str = "STRAND_API_KEY";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiKeyInfo {
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct KeysResponse {
    keys: Vec<ApiKeyInfo>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedKey {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    version: String,
}

/// One agent run, submitted to the service.
#[derive(Debug, Serialize)]
pub struct AgentRunRequest {
    pub run_id: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_instructions: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command_args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub auto_approved: bool,
    pub web_ui: bool,
}

#[derive(Debug, Deserialize)]
pub struct AgentRunResponse {
    pub output: String,
    #[serde(default)]
    pub session_url: Option<String>,
    #[serde(default)]
    pub exit_code: Option<i32>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty());
        Self::new(base_url, api_key)
    }

    fn require_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("No API key configured. Run `strand login` first."))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(anyhow!("strand API error {status}: {body}"))
    }

    pub async fn list_models(&self) -> Result<Vec<String>> {
        let key = self.require_key()?;
        let response = self
            .http
            .get(self.url("models"))
            .bearer_auth(key)
            .send()
            .await?;
        let body: ModelsResponse = Self::check(response).await?.json().await?;
        Ok(body.models)
    }

    pub async fn list_keys(&self) -> Result<Vec<ApiKeyInfo>> {
        let key = self.require_key()?;
        let response = self
            .http
            .get(self.url("keys"))
            .bearer_auth(key)
            .send()
            .await?;
        let body: KeysResponse = Self::check(response).await?.json().await?;
        Ok(body.keys)
    }

    pub async fn create_key(&self, name: &str) -> Result<CreatedKey> {
        let key = self.require_key()?;
        let response = self
            .http
            .post(self.url("keys"))
            .bearer_auth(key)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn revoke_key(&self, name: &str) -> Result<()> {
        let key = self.require_key()?;
        let response = self
            .http
            .delete(self.url(&format!("keys/{name}")))
            .bearer_auth(key)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Latest published CLI version. Unauthenticated.
    pub async fn latest_version(&self) -> Result<String> {
        let response = self.http.get(self.url("cli/latest")).send().await?;
        let body: LatestRelease = Self::check(response).await?.json().await?;
        Ok(body.version)
    }

    pub async fn run_agent(&self, request: &AgentRunRequest) -> Result<AgentRunResponse> {
        let key = self.require_key()?;
        tracing::debug!(run_id = %request.run_id, "submitting agent run");
        let response = self
            .http
            .post(self.url("runs"))
            .bearer_auth(key)
            .json(request)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
