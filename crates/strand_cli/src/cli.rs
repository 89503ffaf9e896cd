//! CLI argument definitions using clap derive macros.
//!
//! Clap's built-in help and version handling is disabled: the router owns
//! both flags so their precedence over command tokens stays in one place.

use clap::Parser;

use strand_core::{EnvSnapshot, Flags, Invocation};

/// Run configured agents, free prompts, and agent chains from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "strand",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// A command, an agent name, or a free prompt
    #[arg(value_name = "INPUT")]
    pub input: Vec<String>,

    /// Show help and exit
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Show version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Start a gerrit review session (requires GERRIT_USER/GERRIT_PASSWORD)
    #[arg(long)]
    pub gerrit: bool,

    /// Open the web interface
    #[arg(long)]
    pub ui: bool,

    /// Force the interactive selector
    #[arg(long)]
    pub interactive: bool,

    /// Run in merge mode
    #[arg(long)]
    pub merge: bool,

    /// Confirm all prompts automatically (useful for CI)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Suppress auto-approval notices
    #[arg(long)]
    pub silent_auto_approve: bool,

    /// Disable built-in MCP servers (ripgrep, filesystem, git)
    #[arg(long)]
    pub no_builtin: bool,

    /// Custom path to the agent configuration file
    #[arg(long, value_name = "PATH")]
    pub agent_file: Option<String>,

    /// Custom path to mcp.json
    #[arg(long, value_name = "PATH")]
    pub mcp_file: Option<String>,

    /// Model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Execution mode from the agent configuration
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Pull request number
    #[arg(long, value_name = "NUMBER")]
    pub pr: Option<String>,

    /// Value for commands that take one (e.g. `theme --set light`)
    #[arg(long, value_name = "VALUE")]
    pub set: Option<String>,
}

impl Cli {
    /// Convert the parsed arguments into the router's invocation shape.
    pub fn into_invocation(self, env: EnvSnapshot) -> Invocation {
        let flags = Flags {
            help: self.help,
            version: self.version,
            gerrit: self.gerrit,
            ui: self.ui,
            interactive: self.interactive,
            merge: self.merge,
            yes: self.yes,
            silent_auto_approve: self.silent_auto_approve,
            builtin: !self.no_builtin,
            agent_file: self.agent_file,
            mcp_file: self.mcp_file,
            model: self.model,
            mode: self.mode,
            pr: self.pr,
            set: self.set,
        };
        Invocation::new(self.input, flags, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_positional_tokens_preserved_in_order() {
        let cli = parse(&["strand", "merge", "123", "extra"]);
        let inv = cli.into_invocation(EnvSnapshot::default());
        assert_eq!(inv.input, vec!["merge", "123", "extra"]);
    }

    #[test]
    fn test_short_flags() {
        let cli = parse(&["strand", "-h"]);
        assert!(cli.help);
        let cli = parse(&["strand", "-v"]);
        assert!(cli.version);
        let cli = parse(&["strand", "-y", "review"]);
        assert!(cli.yes);
    }

    #[test]
    fn test_no_builtin_inverts_to_builtin_flag() {
        let inv = parse(&["strand", "list-mcp", "--no-builtin"])
            .into_invocation(EnvSnapshot::default());
        assert!(!inv.flags.builtin);

        let inv = parse(&["strand", "list-mcp"]).into_invocation(EnvSnapshot::default());
        assert!(inv.flags.builtin);
    }

    #[test]
    fn test_value_flags() {
        let cli = parse(&[
            "strand",
            "--model",
            "sonnet",
            "--agent-file",
            "custom.toml",
            "review",
        ]);
        let inv = cli.into_invocation(EnvSnapshot::default());
        assert_eq!(inv.flags.model.as_deref(), Some("sonnet"));
        assert_eq!(inv.flags.agent_file.as_deref(), Some("custom.toml"));
        assert_eq!(inv.input, vec!["review"]);
    }

    #[test]
    fn test_env_snapshot_is_carried() {
        let env = EnvSnapshot {
            mode: Some("gerrit".into()),
            gerrit_user: Some("alice".into()),
            gerrit_password: Some("secret".into()),
        };
        let inv = parse(&["strand"]).into_invocation(env.clone());
        assert_eq!(inv.env, env);
    }
}
