//! `strand list-agents`: list configured agents, interactively in CLI mode.

use std::path::Path;

use anyhow::Result;

use strand_config::ConfigManager;
use strand_core::{Flags, Invocation};

use crate::launcher::Launcher;
use crate::output;
use crate::selector::{self, SelectItem};

/// How the process is being driven. The router never computes this; listing
/// commands use it to decide between interactive and plain output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppType {
    Cli,
    Ui,
    Ci,
}

impl AppType {
    pub fn detect(flags: &Flags, ci_env: bool) -> Self {
        if flags.ui {
            AppType::Ui
        } else if ci_env {
            AppType::Ci
        } else {
            AppType::Cli
        }
    }
}

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<()> {
    let manager = ConfigManager::load(inv.flags.agent_file.as_deref().map(Path::new))?;

    if !manager.has_config() {
        output::warning("No agent configuration found.");
        output::dim("To create one, run: strand create-agent");
        return Ok(());
    }

    let commands = manager.list_commands();
    if commands.is_empty() {
        output::warning("No agents found in configuration.");
        return Ok(());
    }

    let agents: Vec<SelectItem> = commands
        .iter()
        .map(|name| SelectItem {
            name: name.clone(),
            description: manager
                .command_config(name)
                .and_then(|c| c.description.clone()),
        })
        .collect();
    let modes = manager.list_modes();

    let app_type = AppType::detect(&inv.flags, std::env::var("CI").is_ok());
    if app_type != AppType::Cli && !inv.flags.interactive {
        print_plain(&agents, &modes);
        return Ok(());
    }

    match selector::select("Select an agent", &agents)? {
        Some(name) => {
            output::success(&format!("Running agent: {name}"));
            output::dim("Initializing...");
            let synthetic = inv.synthesize().with_input(vec![name]).build();
            launcher.run(&synthetic, None).await
        }
        // Raw mode unsupported; fall back to the plain listing.
        None => {
            print_plain(&agents, &modes);
            Ok(())
        }
    }
}

fn print_plain(agents: &[SelectItem], modes: &[String]) {
    output::header("Available agents:");
    for agent in agents {
        let usage = format!("(usage: strand {})", agent.name);
        output::item(&agent.name, &usage);
        if let Some(description) = &agent.description {
            output::dim(&format!("    {description}"));
        }
    }
    println!();
    if !modes.is_empty() {
        output::header("Available modes:");
        for mode in modes {
            output::item(mode, &format!("(usage: strand --mode {mode})"));
        }
        println!();
    }
    println!("To run an agent, use: strand <agent-name>");
    if let Some(first) = agents.first() {
        println!("Example: strand {}", first.name);
    }
}
