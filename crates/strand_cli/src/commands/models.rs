//! `strand list-models`: query the service for available models.

use anyhow::Result;

use crate::api::ApiClient;
use crate::output;

pub async fn handle(api: &ApiClient) -> Result<()> {
    let spinner = output::spinner("Fetching available models...");

    match api.list_models().await {
        Ok(models) => {
            spinner.abandon();
            if models.is_empty() {
                output::dim("No available models found.");
                return Ok(());
            }
            output::header("Available models");
            for model in &models {
                output::item(model, "");
            }
            Ok(())
        }
        Err(err) => {
            output::spinner_error(&spinner, "Failed to fetch models");
            Err(err)
        }
    }
}
