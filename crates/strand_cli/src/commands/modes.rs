//! `strand list-modes`: list execution modes from the agent configuration.

use std::path::Path;

use anyhow::Result;

use strand_config::ConfigManager;
use strand_core::Invocation;

use crate::output;

pub async fn handle(inv: &Invocation) -> Result<()> {
    let manager = ConfigManager::load(inv.flags.agent_file.as_deref().map(Path::new))?;

    if !manager.has_config() {
        output::warning("No agent configuration found.");
        return Ok(());
    }

    let modes = manager.list_modes();
    if modes.is_empty() {
        output::warning("No modes found in configuration.");
        return Ok(());
    }

    output::header("Available modes:");
    for name in &modes {
        let description = manager
            .mode_config(name)
            .and_then(|m| m.description.clone())
            .unwrap_or_default();
        output::item(name, &description);
    }
    println!();
    println!("To use a mode, run: strand --mode <mode-name>");

    Ok(())
}
