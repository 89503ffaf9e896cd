//! `strand login`: prompt for an API key and persist it to `~/.strand/env`.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal,
};

use strand_config::STRAND_DIR;

use crate::api::ENV_API_KEY;
use crate::output;

pub async fn handle() -> Result<()> {
    output::header("Log in to strand");
    output::dim("Create an API key at https://app.strand.tools/keys");
    println!();

    let key = prompt_api_key()?;
    if key.is_empty() {
        output::warning("No key entered, cancelled.");
        return Ok(());
    }

    let path = env_file_path()?;
    save_env_entry(&path, ENV_API_KEY, &key)?;

    output::success(&format!("Saved {} to {}", ENV_API_KEY, path.display()));
    output::dim("Restart your shell or run `source ~/.strand/env` to apply.");
    Ok(())
}

/// Masked key prompt: echoes `*` per character, raw mode.
fn prompt_api_key() -> Result<String> {
    print!("Enter API key: ");
    io::stdout().flush()?;

    let mut key = String::new();
    terminal::enable_raw_mode()?;

    loop {
        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(k) = event::read()? {
            match k.code {
                KeyCode::Enter => {
                    println!();
                    break;
                }
                KeyCode::Backspace => {
                    if key.pop().is_some() {
                        print!("\x08 \x08");
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Char(c) => {
                    if k.modifiers.contains(KeyModifiers::CONTROL) && c == 'c' {
                        terminal::disable_raw_mode()?;
                        println!();
                        return Ok(String::new());
                    }
                    key.push(c);
                    print!("*");
                    io::stdout().flush()?;
                }
                _ => {}
            }
        }
    }

    terminal::disable_raw_mode()?;
    Ok(key.trim().to_string())
}

fn env_file_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("could not find home directory"))?;
    let strand_dir = home.join(STRAND_DIR);
    fs::create_dir_all(&strand_dir)?;
    Ok(strand_dir.join("env"))
}

/// Upsert one `export VAR="value"` entry, preserving unrelated lines.
fn save_env_entry(path: &Path, var: &str, value: &str) -> Result<()> {
    let existing = if path.exists() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    let mut entries: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let line = line.trim().strip_prefix("export ")?;
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect();

    entries.insert(var.to_string(), format!("\"{value}\""));

    let mut content = String::from("# strand CLI configuration\n");
    content.push_str("# Source this file: source ~/.strand/env\n\n");
    for (key, value) in &entries {
        content.push_str(&format!("export {key}={value}\n"));
    }

    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_env_entry_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        save_env_entry(&path, "STRAND_API_KEY", "sk-abc").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("export STRAND_API_KEY=\"sk-abc\""));
    }

    #[test]
    fn test_save_env_entry_preserves_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        save_env_entry(&path, "OTHER_VAR", "keep").unwrap();
        save_env_entry(&path, "STRAND_API_KEY", "sk-new").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("export OTHER_VAR=\"keep\""));
        assert!(content.contains("export STRAND_API_KEY=\"sk-new\""));
    }

    #[test]
    fn test_save_env_entry_replaces_existing_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("env");
        save_env_entry(&path, "STRAND_API_KEY", "sk-old").unwrap();
        save_env_entry(&path, "STRAND_API_KEY", "sk-new").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("sk-old"));
        assert!(content.contains("export STRAND_API_KEY=\"sk-new\""));
    }
}
