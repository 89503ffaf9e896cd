//! `strand self-review`: group local changes for review in the web interface.

use anyhow::Result;

use strand_core::Invocation;

use crate::launcher::{self, Launcher};
use crate::output;

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<()> {
    output::success("Starting self-review analysis in the web interface...");

    let synthetic = inv.synthesize().auto_approve().with_ui().build();
    launcher.run(&synthetic, Some(&launcher::self_review())).await
}
