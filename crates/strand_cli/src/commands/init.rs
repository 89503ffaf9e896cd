//! `strand init`: run the repository tour agent with auto-approval.

use anyhow::Result;

use strand_core::Invocation;

use crate::launcher::{self, Launcher};

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<()> {
    let synthetic = inv.synthesize().auto_approve().build();
    launcher.run(&synthetic, Some(&launcher::repo_tour())).await
}
