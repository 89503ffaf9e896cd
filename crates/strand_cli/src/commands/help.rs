//! Help text: a static base plus a dynamic section listing configured agents.

use std::path::Path;

use anyhow::Result;

use strand_config::ConfigManager;
use strand_core::Invocation;

const BASE_HELP_TEXT: &str = r#"
  Usage
    $ strand [options] <prompt>

  Commands
    login                       Save an API key for the strand service
    list-models                 List available models
    list-agents                 List configured agents (interactive in CLI mode)
    list-modes                  List configured execution modes
    list-mcp                    List available local and remote MCP servers
    create-agent                Scaffold a starter agent configuration
    init                        Run a guided tour of the current repository
    merge [pr]                  Merge a pull request by number or URL
    self-review                 Group local changes for review (web interface)
    chain "A > B > C"           Run multiple agents sequentially (quote the chain!)
    key list                    List API keys
    key create <name>           Create an API key with the given name
    key revoke <name>           Revoke an API key by name
    update                      Check for a newer release
    theme                       Show the current theme
    theme --set light|dark      Set the theme
    config                      Open interactive settings

  Options
    -h, --help                  Show help and exit
    -v, --version               Show version and exit
    -y, --yes                   Confirm all prompts automatically (useful for CI)
    -m, --model=name            Use a specific model
    --mode=name                 Apply an execution mode from the agent config
    --ui                        Open the web interface
    --gerrit                    Start a gerrit review session
    --interactive               Force the interactive selector
    --agent-file=path           Custom path to the agent configuration file
    --mcp-file=path             Custom path to mcp.json
    --no-builtin                Disable built-in MCP servers (ripgrep, filesystem, git)

  Examples
    $ strand "Review my latest changes and suggest improvements"
    $ strand chain "improve > review > open-pr"
    $ strand merge 123
    $ strand list-agents
    $ strand key create my-ci-key
"#;

/// Build the help text, appending configured agents when a configuration can
/// be read. Any configuration error degrades silently to the base text.
pub fn generate_help_text(agent_file: Option<&str>) -> String {
    let manager = match ConfigManager::load(agent_file.map(Path::new)) {
        Ok(manager) => manager,
        Err(_) => return BASE_HELP_TEXT.to_string(),
    };

    let commands = manager.list_commands();
    if commands.is_empty() {
        return BASE_HELP_TEXT.to_string();
    }

    let mut section = String::from("\n  Available agents (from agent config):\n");
    for name in commands {
        section.push_str(&format!("    {name}   (usage: strand {name})\n"));
        if let Some(description) = manager
            .command_config(&name)
            .and_then(|c| c.description.clone())
        {
            section.push_str(&format!("      {description}\n"));
        }
    }

    format!("{BASE_HELP_TEXT}{section}")
}

pub async fn handle(inv: &Invocation) -> Result<()> {
    println!("{}", generate_help_text(inv.flags.agent_file.as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_base_text_without_config() {
        let text = generate_help_text(None);
        assert!(text.contains("Usage"));
        assert!(text.contains("chain \"A > B > C\""));
    }

    #[test]
    fn test_agent_section_appended_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            b"[commands.review]\ndescription = \"Review changes\"\ninstructions = \"x\"\n",
        )
        .unwrap();

        let text = generate_help_text(Some(path.to_str().unwrap()));
        assert!(text.contains("Available agents"));
        assert!(text.contains("usage: strand review"));
        assert!(text.contains("Review changes"));
    }

    #[test]
    fn test_unreadable_config_degrades_to_base_text() {
        let text = generate_help_text(Some("/nonexistent/agent.toml"));
        assert_eq!(text, BASE_HELP_TEXT);
    }
}
