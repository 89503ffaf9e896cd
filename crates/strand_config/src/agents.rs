//! Agent configuration (`agent.toml`): named agent commands and modes.
//!
//! Lookup order: explicit path, then `./agent.toml`, then
//! `~/.strand/agent.toml`. Having no configuration at all is a normal state,
//! not an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::STRAND_DIR;
use crate::error::{ConfigError, Result};

/// Default agent configuration file name.
pub const AGENT_CONFIG_FILE: &str = "agent.toml";

/// One named agent command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One named execution mode, layered on top of a command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Parsed `agent.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub commands: BTreeMap<String, CommandConfig>,
    #[serde(default)]
    pub modes: BTreeMap<String, ModeConfig>,
}

/// Loads and answers questions about the agent configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: Option<AgentConfig>,
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration. An explicit path must exist; the default
    /// locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        for candidate in Self::default_paths() {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: AgentConfig = toml::from_str(&raw)?;
        Ok(Self {
            config: Some(config),
            path: Some(path.to_path_buf()),
        })
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(AGENT_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(STRAND_DIR).join(AGENT_CONFIG_FILE));
        }
        paths
    }

    pub fn has_config(&self) -> bool {
        self.config.is_some()
    }

    /// Path of the loaded file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Sorted agent command names.
    pub fn list_commands(&self) -> Vec<String> {
        self.config
            .as_ref()
            .map(|c| c.commands.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn command_config(&self, name: &str) -> Option<&CommandConfig> {
        self.config.as_ref()?.commands.get(name)
    }

    /// Sorted mode names.
    pub fn list_modes(&self) -> Vec<String> {
        self.config
            .as_ref()
            .map(|c| c.modes.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn mode_config(&self, name: &str) -> Option<&ModeConfig> {
        self.config.as_ref()?.modes.get(name)
    }
}
