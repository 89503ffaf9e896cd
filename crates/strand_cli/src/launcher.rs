//! The shared two-step launch path: resolve an invocation into a prepared
//! run, then hand it to the agent service.
//!
//! Every long-running command (init, merge, gerrit, self-review, chain
//! stages, and the default agent flow) goes through this module, so the
//! resolution rules live in exactly one place.

use std::path::Path;

use anyhow::{Result, anyhow};
use uuid::Uuid;

use strand_config::{CommandConfig, ConfigManager};
use strand_core::Invocation;

use crate::api::{AgentRunRequest, AgentRunResponse, ApiClient};
use crate::output;

/// A fully resolved run, ready to start.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedApp {
    pub prompt: String,
    pub extra_instructions: Option<String>,
    pub command_args: Vec<String>,
    pub model: Option<String>,
    pub auto_approved: bool,
    pub web_ui: bool,
}

/// Built-in agent that walks a new user through the repository.
pub fn repo_tour() -> CommandConfig {
    CommandConfig {
        description: Some("Guided tour of the current repository".into()),
        instructions: "Explore the repository structure, identify the main \
                       components, and produce a short orientation guide for \
                       a new contributor."
            .into(),
        available_tools: vec!["filesystem".into(), "ripgrep".into(), "git".into()],
        model: None,
    }
}

/// Built-in agent that reviews an open Gerrit change.
pub fn gerrit_review() -> CommandConfig {
    CommandConfig {
        description: Some("Review the active Gerrit change".into()),
        instructions: "Fetch the active Gerrit change using the configured \
                       credentials, review the diff, and post inline comments \
                       for every problem found."
            .into(),
        available_tools: vec!["git".into()],
        model: None,
    }
}

/// Built-in agent that groups uncommitted changes for self-review.
pub fn self_review() -> CommandConfig {
    CommandConfig {
        description: Some("Group local changes into logical change sets".into()),
        instructions: "Analyze uncommitted git changes, group them into \
                       logical change sets, and present each group with a \
                       suggested commit message."
            .into(),
        available_tools: vec!["git".into(), "filesystem".into()],
        model: None,
    }
}

#[derive(Debug, Clone)]
pub struct Launcher {
    api: ApiClient,
}

impl Launcher {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Resolve the invocation into a prepared run.
    ///
    /// Resolution order: an explicit built-in preset, else the agent-config
    /// command named by the first token, else the tokens as a free prompt.
    pub fn initialize(
        &self,
        inv: &Invocation,
        preset: Option<&CommandConfig>,
    ) -> Result<PreparedApp> {
        let manager = ConfigManager::load(inv.flags.agent_file.as_deref().map(Path::new))?;

        let (prompt, command_args, command_model) = if let Some(preset) = preset {
            (preset.instructions.clone(), inv.input.clone(), preset.model.clone())
        } else if let Some(config) = inv.first_token().and_then(|t| manager.command_config(t))
        {
            (
                config.instructions.clone(),
                inv.rest().to_vec(),
                config.model.clone(),
            )
        } else {
            let prompt = inv.input.join(" ");
            if prompt.trim().is_empty() {
                return Err(anyhow!(
                    "Nothing to run: give a prompt, an agent name, or a command. \
                     See `strand help`."
                ));
            }
            (prompt, Vec::new(), None)
        };

        let extra_instructions = inv
            .flags
            .mode
            .as_deref()
            .and_then(|mode| manager.mode_config(mode))
            .and_then(|config| config.instructions.clone());

        Ok(PreparedApp {
            prompt,
            extra_instructions,
            command_args,
            model: inv.flags.model.clone().or(command_model),
            auto_approved: inv.flags.yes || inv.flags.silent_auto_approve,
            web_ui: inv.flags.ui,
        })
    }

    /// Submit the prepared run and print the result.
    pub async fn start(&self, prepared: PreparedApp) -> Result<()> {
        let request = AgentRunRequest {
            run_id: Uuid::new_v4().to_string(),
            prompt: prepared.prompt,
            extra_instructions: prepared.extra_instructions,
            command_args: prepared.command_args,
            model: prepared.model,
            auto_approved: prepared.auto_approved,
            web_ui: prepared.web_ui,
        };
        tracing::info!(run_id = %request.run_id, web_ui = request.web_ui, "starting agent run");

        let AgentRunResponse {
            output: text,
            session_url,
            exit_code,
        } = self.api.run_agent(&request).await?;

        if let Some(url) = session_url {
            output::kv("Session", &url);
        }
        if !text.is_empty() {
            println!("{text}");
        }
        match exit_code {
            Some(code) if code != 0 => Err(anyhow!("agent run finished with status {code}")),
            _ => Ok(()),
        }
    }

    /// Initialize and start in one step.
    pub async fn run(&self, inv: &Invocation, preset: Option<&CommandConfig>) -> Result<()> {
        let prepared = self.initialize(inv, preset)?;
        self.start(prepared).await
    }

    /// The default application path for invocations the router left
    /// unhandled: run the original invocation as-is.
    pub async fn run_default(&self, inv: &Invocation) -> Result<()> {
        self.run(inv, None).await
    }
}
