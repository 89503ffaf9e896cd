//! MCP server configuration (`mcp.json`).
//!
//! The file maps server names to either a local command or a remote URL:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "github": { "command": "github-mcp-server", "args": ["--stdio"] },
//!     "docs": { "url": "https://mcp.example.com/docs" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::STRAND_DIR;
use crate::error::{ConfigError, Result};

/// Default MCP configuration file name.
pub const MCP_CONFIG_FILE: &str = "mcp.json";

/// Servers shipped with the CLI, available without configuration.
pub const BUILTIN_SERVERS: &[(&str, &str)] = &[
    ("ripgrep", "Fast regex search over the workspace"),
    ("filesystem", "Read, write, and list workspace files"),
    ("git", "Repository status, diffs, and history"),
];

/// One configured server. `command` and `url` are mutually exclusive in
/// practice; `command` wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct McpServerEntry {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl McpServerEntry {
    pub fn transport(&self) -> &'static str {
        if self.command.is_some() {
            "stdio"
        } else {
            "remote"
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct McpFile {
    #[serde(rename = "mcpServers", default)]
    servers: BTreeMap<String, McpServerEntry>,
}

/// Where a listed server came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSource {
    Builtin,
    Configured,
}

/// One row of the `list-mcp` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpEntry {
    pub name: String,
    pub transport: String,
    pub detail: String,
    pub source: ServerSource,
}

/// Loaded MCP server set.
#[derive(Debug, Default)]
pub struct McpServers {
    configured: BTreeMap<String, McpServerEntry>,
}

impl McpServers {
    /// Load configuration. An explicit path must exist; the default
    /// locations (`./mcp.json`, `~/.strand/mcp.json`) are optional.
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
        let file: McpFile = serde_json::from_str(&raw)?;
        Ok(Self {
            configured: file.servers,
        })
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(MCP_CONFIG_FILE)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(STRAND_DIR).join(MCP_CONFIG_FILE));
        }
        paths
    }

    /// Deterministic listing: builtins first (unless excluded), then
    /// configured servers. A configured server shadows a builtin of the
    /// same name.
    pub fn entries(&self, include_builtin: bool) -> Vec<McpEntry> {
        let mut entries = Vec::new();

        if include_builtin {
            for (name, description) in BUILTIN_SERVERS {
                if self.configured.contains_key(*name) {
                    continue;
                }
                entries.push(McpEntry {
                    name: name.to_string(),
                    transport: "stdio".to_string(),
                    detail: description.to_string(),
                    source: ServerSource::Builtin,
                });
            }
        }

        for (name, server) in &self.configured {
            let detail = server
                .command
                .clone()
                .or_else(|| server.url.clone())
                .unwrap_or_default();
            entries.push(McpEntry {
                name: name.clone(),
                transport: server.transport().to_string(),
                detail,
                source: ServerSource::Configured,
            });
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "mcpServers": {
            "github": { "command": "github-mcp-server", "args": ["--stdio"] },
            "docs": { "url": "https://mcp.example.com/docs" }
        }
    }"#;

    fn load_sample() -> McpServers {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.json");
        fs::write(&path, SAMPLE).unwrap();
        McpServers::load(Some(&path)).unwrap()
    }

    #[test]
    fn test_entries_with_builtins() {
        let servers = load_sample();
        let entries = servers.entries(true);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ripgrep", "filesystem", "git", "docs", "github"]);
    }

    #[test]
    fn test_entries_without_builtins() {
        let servers = load_sample();
        let entries = servers.entries(false);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.source == ServerSource::Configured));
    }

    #[test]
    fn test_transport_detection() {
        let servers = load_sample();
        let entries = servers.entries(false);
        let github = entries.iter().find(|e| e.name == "github").unwrap();
        assert_eq!(github.transport, "stdio");
        assert_eq!(github.detail, "github-mcp-server");
        let docs = entries.iter().find(|e| e.name == "docs").unwrap();
        assert_eq!(docs.transport, "remote");
        assert_eq!(docs.detail, "https://mcp.example.com/docs");
    }

    #[test]
    fn test_configured_shadows_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.json");
        fs::write(
            &path,
            r#"{ "mcpServers": { "git": { "command": "my-git-server" } } }"#,
        )
        .unwrap();
        let servers = McpServers::load(Some(&path)).unwrap();

        let entries = servers.entries(true);
        let git: Vec<_> = entries.iter().filter(|e| e.name == "git").collect();
        assert_eq!(git.len(), 1);
        assert_eq!(git[0].source, ServerSource::Configured);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let err = McpServers::load(Some(Path::new("/nonexistent/mcp.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mcp.json");
        fs::write(&path, "{ not json").unwrap();
        let err = McpServers::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
