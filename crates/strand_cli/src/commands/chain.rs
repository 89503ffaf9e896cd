//! The chain engine: run a `"A > B > C"` spec stage by stage.
//!
//! Each stage is launched like a standalone agent invocation with
//! auto-approval forced. The first failing stage stops the chain; the result
//! is the process exit code.

use anyhow::Result;

use strand_core::{chain_spec, split_stages, Invocation};

use crate::launcher::Launcher;
use crate::output;

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<i32> {
    let Some(spec) = chain_spec(&inv.input) else {
        output::error("No chain specification given.");
        output::dim("Usage: strand chain \"improve > review > open-pr\"");
        return Ok(1);
    };

    let stages = split_stages(&spec);
    if stages.is_empty() {
        output::error(&format!("Chain spec '{spec}' contains no stages."));
        return Ok(1);
    }

    tracing::info!(stages = stages.len(), "running agent chain");
    for (idx, stage) in stages.iter().enumerate() {
        output::header(&format!("Stage {}/{}: {stage}", idx + 1, stages.len()));

        let synthetic = inv
            .synthesize()
            .auto_approve()
            .with_input(vec![stage.clone()])
            .build();
        if let Err(err) = launcher.run(&synthetic, None).await {
            output::error(&format!("Stage '{stage}' failed: {err:#}"));
            return Ok(1);
        }
    }

    output::success("Chain complete");
    Ok(0)
}
