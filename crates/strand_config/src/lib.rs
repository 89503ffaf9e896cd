//! Configuration loading for the strand CLI: agent definitions (`agent.toml`),
//! MCP servers (`mcp.json`), and user settings (`settings.json`).

pub mod agents;
pub mod error;
pub mod mcp;
pub mod settings;

pub use agents::{AgentConfig, CommandConfig, ConfigManager, ModeConfig};
pub use error::{ConfigError, Result};
pub use mcp::{BUILTIN_SERVERS, McpEntry, McpServerEntry, McpServers, ServerSource};
pub use settings::{Settings, Theme};

/// Directory under the user's home that holds strand state (`~/.strand`).
pub const STRAND_DIR: &str = ".strand";
