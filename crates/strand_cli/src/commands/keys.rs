//! `strand key <list|create|revoke>`: API key management.

use anyhow::{Result, anyhow};

use crate::api::ApiClient;
use crate::output;

const USAGE: &str = "usage: strand key <list|create|revoke> [name]";

/// `input` is the full positional token list, starting with "key".
pub async fn handle(api: &ApiClient, input: &[String]) -> Result<()> {
    match input.get(1).map(String::as_str) {
        Some("list") => list(api).await,
        Some("create") => {
            let name = input
                .get(2)
                .ok_or_else(|| anyhow!("missing key name; {USAGE}"))?;
            create(api, name).await
        }
        Some("revoke") => {
            let name = input
                .get(2)
                .ok_or_else(|| anyhow!("missing key name; {USAGE}"))?;
            revoke(api, name).await
        }
        Some(other) => Err(anyhow!("unknown key action '{other}'; {USAGE}")),
        None => Err(anyhow!(USAGE)),
    }
}

async fn list(api: &ApiClient) -> Result<()> {
    let keys = api.list_keys().await?;
    if keys.is_empty() {
        output::dim("No API keys found.");
        return Ok(());
    }
    output::header("API keys");
    for key in &keys {
        output::item(&key.name, key.created_at.as_deref().unwrap_or(""));
    }
    Ok(())
}

async fn create(api: &ApiClient, name: &str) -> Result<()> {
    let created = api.create_key(name).await?;
    output::success(&format!("Created key '{}'", created.name));
    // Shown once; the service stores only a hash.
    output::kv("Key", &created.key);
    output::dim("Store it now, it cannot be retrieved again.");
    Ok(())
}

async fn revoke(api: &ApiClient, name: &str) -> Result<()> {
    api.revoke_key(name).await?;
    output::success(&format!("Revoked key '{name}'"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn offline_api() -> ApiClient {
        ApiClient::new("http://localhost:0", Some("sk-test".into()))
    }

    #[tokio::test]
    async fn test_missing_action_is_usage_error() {
        let err = handle(&offline_api(), &tokens(&["key"])).await.unwrap_err();
        assert!(err.to_string().contains("usage:"));
    }

    #[tokio::test]
    async fn test_unknown_action_is_usage_error() {
        let err = handle(&offline_api(), &tokens(&["key", "rotate"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unknown key action 'rotate'"));
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let err = handle(&offline_api(), &tokens(&["key", "create"]))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing key name"));
    }
}
