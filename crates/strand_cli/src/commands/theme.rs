//! `strand theme`: show or set the display theme.

use anyhow::{Result, anyhow};

use strand_config::{Settings, Theme};
use strand_core::Invocation;

use crate::output;

pub async fn handle(inv: &Invocation) -> Result<()> {
    let mut settings = Settings::load()?;

    let Some(raw) = inv.flags.set.as_deref() else {
        output::kv("Current theme", settings.theme.as_str());
        output::dim("Set it with: strand theme --set light|dark");
        return Ok(());
    };

    let theme: Theme = raw
        .parse()
        .map_err(|_| anyhow!("unknown theme '{raw}'; expected 'light' or 'dark'"))?;
    settings.theme = theme;
    settings.save()?;
    output::success(&format!("Theme set to {theme}"));
    Ok(())
}
