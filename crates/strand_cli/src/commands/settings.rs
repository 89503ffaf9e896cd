//! `strand config`: interactive settings editor.

use std::io::{self, Write};

use anyhow::Result;

use strand_config::{Settings, Theme};

use crate::output;

pub async fn handle() -> Result<()> {
    let mut settings = Settings::load()?;
    let mut changed = false;

    loop {
        output::header("Settings");
        output::kv("1) Theme", settings.theme.as_str());
        output::kv("2) Show diffs", if settings.show_diffs { "on" } else { "off" });
        println!();
        print!("Toggle a setting [1-2], or q to quit: ");
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;

        match choice.trim() {
            "1" => {
                settings.theme = match settings.theme {
                    Theme::Dark => Theme::Light,
                    Theme::Light => Theme::Dark,
                };
                changed = true;
            }
            "2" => {
                settings.show_diffs = !settings.show_diffs;
                changed = true;
            }
            "q" | "" => break,
            other => output::warning(&format!("Unknown choice '{other}'")),
        }
        println!();
    }

    if changed {
        settings.save()?;
        output::success("Settings saved");
    }
    Ok(())
}
