//! Production wiring of the router's handler trait onto the command adapters.

use anyhow::Result;
use async_trait::async_trait;

use strand_core::{ExecContext, Invocation};

use crate::api::ApiClient;
use crate::commands;
use crate::launcher::Launcher;
use crate::router::CommandHandlers;

pub struct App {
    api: ApiClient,
    launcher: Launcher,
}

impl App {
    pub fn from_env() -> Self {
        let api = ApiClient::from_env();
        let launcher = Launcher::new(api.clone());
        Self { api, launcher }
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }
}

#[async_trait]
impl CommandHandlers for App {
    async fn help(&self, inv: &Invocation) -> Result<()> {
        commands::help::handle(inv).await
    }

    async fn version(&self, _inv: &Invocation) -> Result<()> {
        commands::version::handle().await
    }

    async fn gerrit(&self, inv: &Invocation, _ctx: &ExecContext) -> Result<()> {
        commands::gerrit::handle(inv, &self.launcher).await
    }

    async fn chain(&self, inv: &Invocation) -> Result<i32> {
        commands::chain::handle(inv, &self.launcher).await
    }

    async fn init(&self, inv: &Invocation) -> Result<()> {
        commands::init::handle(inv, &self.launcher).await
    }

    async fn login(&self, _inv: &Invocation) -> Result<()> {
        commands::login::handle().await
    }

    async fn list_models(&self, _inv: &Invocation) -> Result<()> {
        commands::models::handle(&self.api).await
    }

    async fn list_mcp(&self, inv: &Invocation) -> Result<()> {
        commands::mcp_list::handle(inv).await
    }

    async fn list_agents(&self, inv: &Invocation) -> Result<()> {
        commands::agents::handle(inv, &self.launcher).await
    }

    async fn list_modes(&self, inv: &Invocation) -> Result<()> {
        commands::modes::handle(inv).await
    }

    async fn create_agent(&self, inv: &Invocation) -> Result<()> {
        commands::create_agent::handle(inv).await
    }

    async fn update(&self, _inv: &Invocation) -> Result<()> {
        commands::update::handle(&self.api).await
    }

    async fn theme(&self, inv: &Invocation) -> Result<()> {
        commands::theme::handle(inv).await
    }

    async fn settings(&self, _inv: &Invocation) -> Result<()> {
        commands::settings::handle().await
    }

    async fn key(&self, inv: &Invocation) -> Result<()> {
        commands::keys::handle(&self.api, &inv.input).await
    }

    async fn merge(&self, inv: &Invocation) -> Result<()> {
        commands::merge::handle(inv, &self.launcher).await
    }

    async fn self_review(&self, inv: &Invocation) -> Result<()> {
        commands::self_review::handle(inv, &self.launcher).await
    }
}
