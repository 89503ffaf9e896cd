//! `strand create-agent`: scaffold a starter agent configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Result, anyhow};

use strand_config::agents::AGENT_CONFIG_FILE;
use strand_config::{AgentConfig, CommandConfig};
use strand_core::Invocation;

use crate::output;

pub async fn handle(inv: &Invocation) -> Result<()> {
    let path = inv.flags.agent_file.as_deref().unwrap_or(AGENT_CONFIG_FILE);
    write_starter_config(Path::new(path), inv.flags.set.as_deref())?;

    output::success(&format!("Created {path}"));
    output::dim("Edit the instructions, then run: strand list-agents");
    Ok(())
}

fn write_starter_config(path: &Path, description: Option<&str>) -> Result<()> {
    if path.exists() {
        return Err(anyhow!(
            "{} already exists; edit it directly or pass --agent-file",
            path.display()
        ));
    }

    let mut commands = BTreeMap::new();
    commands.insert(
        "example".to_string(),
        CommandConfig {
            description: Some(
                description
                    .unwrap_or("Describe what this agent does")
                    .to_string(),
            ),
            instructions: "Replace this with the instructions your agent should follow."
                .to_string(),
            available_tools: vec!["filesystem".into(), "git".into()],
            model: None,
        },
    );

    let config = AgentConfig {
        version: Some("1.0".to_string()),
        commands,
        modes: BTreeMap::new(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(&config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strand_config::ConfigManager;

    #[test]
    fn test_starter_config_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        write_starter_config(&path, Some("Check PR hygiene")).unwrap();

        let manager = ConfigManager::load(Some(&path)).unwrap();
        assert_eq!(manager.list_commands(), vec!["example"]);
        let example = manager.command_config("example").unwrap();
        assert_eq!(example.description.as_deref(), Some("Check PR hygiene"));
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        fs::write(&path, "# existing").unwrap();

        let err = write_starter_config(&path, None).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");
    }
}
