//! `strand list-mcp`: list built-in and configured MCP servers.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Color};

use strand_config::{McpServers, ServerSource};
use strand_core::Invocation;

use crate::output;

pub async fn handle(inv: &Invocation) -> Result<()> {
    let servers = McpServers::load(inv.flags.mcp_file.as_deref().map(Path::new))?;
    let entries = servers.entries(inv.flags.builtin);

    if entries.is_empty() {
        output::dim("No MCP servers configured.");
        output::dim("Add servers to mcp.json or drop --no-builtin.");
        return Ok(());
    }

    output::header("MCP servers");
    let mut table = output::table(&["Name", "Transport", "Detail"]);
    for entry in &entries {
        let name = match entry.source {
            ServerSource::Builtin => Cell::new(format!("{} (builtin)", entry.name)),
            ServerSource::Configured => Cell::new(&entry.name),
        }
        .fg(Color::Green);
        table.add_row(vec![
            name,
            Cell::new(&entry.transport),
            Cell::new(&entry.detail),
        ]);
    }
    println!("{table}");

    Ok(())
}
