//! The command router: a fixed precedence chain over one invocation.
//!
//! Evaluation order, stopping at the first match:
//! help flag → version flag → gerrit mode (flag or environment) → chain
//! (explicit token or `run` heuristic) → exact-match command table → fall
//! through unhandled. At most one handler runs per invocation.
//!
//! Errors from the chain and table handlers are caught once here and become
//! `Exit { code: 1 }`. Errors from the help, version, and gerrit handlers
//! propagate: a failure there is a defect and should crash loudly.

use anyhow::Result;
use async_trait::async_trait;

use strand_core::{
    Command, ExecContext, Invocation, Outcome, SessionMode, is_chain_invocation,
};

use crate::output;

/// One method per collaborator call the router makes. The production
/// implementation wires the real adapters; tests record calls.
#[async_trait]
pub trait CommandHandlers {
    async fn help(&self, inv: &Invocation) -> Result<()>;
    async fn version(&self, inv: &Invocation) -> Result<()>;
    async fn gerrit(&self, inv: &Invocation, ctx: &ExecContext) -> Result<()>;
    /// Returns the chain engine's exit code.
    async fn chain(&self, inv: &Invocation) -> Result<i32>;
    async fn init(&self, inv: &Invocation) -> Result<()>;
    async fn login(&self, inv: &Invocation) -> Result<()>;
    async fn list_models(&self, inv: &Invocation) -> Result<()>;
    async fn list_mcp(&self, inv: &Invocation) -> Result<()>;
    async fn list_agents(&self, inv: &Invocation) -> Result<()>;
    async fn list_modes(&self, inv: &Invocation) -> Result<()>;
    async fn create_agent(&self, inv: &Invocation) -> Result<()>;
    async fn update(&self, inv: &Invocation) -> Result<()>;
    async fn theme(&self, inv: &Invocation) -> Result<()>;
    async fn settings(&self, inv: &Invocation) -> Result<()>;
    async fn key(&self, inv: &Invocation) -> Result<()>;
    async fn merge(&self, inv: &Invocation) -> Result<()>;
    async fn self_review(&self, inv: &Invocation) -> Result<()>;
}

/// Route one invocation to at most one handler and decide the outcome.
pub async fn route<H: CommandHandlers + ?Sized>(
    handlers: &H,
    inv: &Invocation,
    ctx: &mut ExecContext,
) -> Result<Outcome> {
    if inv.flags.help {
        handlers.help(inv).await?;
        return Ok(Outcome::Exit { code: 0 });
    }

    if inv.flags.version {
        handlers.version(inv).await?;
        return Ok(Outcome::Exit { code: 0 });
    }

    if inv.flags.gerrit || ctx.mode() == Some(SessionMode::Gerrit) {
        // Record the canonical mode first so re-entrant routing through this
        // context observes it.
        ctx.enter_mode(SessionMode::Gerrit);
        handlers.gerrit(inv, ctx).await?;
        return Ok(Outcome::Continue);
    }

    match dispatch(handlers, inv).await {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            tracing::error!(error = %err, "command handler failed");
            output::error(&format!("Command failed: {err:#}"));
            Ok(Outcome::Exit { code: 1 })
        }
    }
}

/// Chain detection plus the exact-match table. Flags never pick the branch;
/// only the first token does.
async fn dispatch<H: CommandHandlers + ?Sized>(
    handlers: &H,
    inv: &Invocation,
) -> Result<Outcome> {
    if is_chain_invocation(&inv.input) {
        let code = handlers.chain(inv).await?;
        return Ok(Outcome::Exit { code });
    }

    let Some(command) = inv.first_token().and_then(Command::from_token) else {
        return Ok(Outcome::Unhandled);
    };

    match command {
        Command::Help => {
            handlers.help(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Init => {
            handlers.init(inv).await?;
            // Legacy mixed case: with --ui the launched session keeps the
            // process alive.
            if inv.flags.ui {
                Ok(Outcome::Continue)
            } else {
                Ok(Outcome::Exit { code: 0 })
            }
        }
        Command::Login => {
            handlers.login(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::ListModels => {
            handlers.list_models(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::ListMcp => {
            handlers.list_mcp(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::ListAgents => {
            handlers.list_agents(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::ListModes => {
            handlers.list_modes(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::CreateAgent => {
            handlers.create_agent(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Update => {
            handlers.update(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Theme => {
            handlers.theme(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Config => {
            handlers.settings(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Key => {
            handlers.key(inv).await?;
            Ok(Outcome::Exit { code: 0 })
        }
        Command::Merge => {
            handlers.merge(inv).await?;
            Ok(Outcome::Wait)
        }
        Command::SelfReview => {
            handlers.self_review(inv).await?;
            Ok(Outcome::Wait)
        }
        // Plain `run <prompt>`: defer to the default agent flow.
        Command::Run => Ok(Outcome::Unhandled),
    }
}
