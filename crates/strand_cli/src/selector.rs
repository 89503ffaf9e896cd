//! Interactive list selector for CLI mode.
//!
//! Raw-mode arrow-key navigation. When the terminal cannot support raw mode
//! (piped output, CI), `select` returns `None` and callers fall back to a
//! plain listing.

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType},
    tty::IsTty,
};

pub struct SelectItem {
    pub name: String,
    pub description: Option<String>,
}

/// Let the user pick one item with the arrow keys.
///
/// Returns `Ok(None)` when interactive selection is unsupported or the user
/// cancels (Esc, q, Ctrl-C).
pub fn select(title: &str, items: &[SelectItem]) -> Result<Option<String>> {
    if items.is_empty() || !io::stdin().is_tty() || !io::stdout().is_tty() {
        return Ok(None);
    }

    println!("{}", style(title).bold().cyan());
    println!("{}", style("(↑/↓ to move, Enter to select, Esc to cancel)").dim());

    let mut selected = 0usize;
    draw(items, selected)?;

    terminal::enable_raw_mode()?;
    let result = run_loop(items, &mut selected);
    terminal::disable_raw_mode()?;
    println!();

    result
}

fn run_loop(items: &[SelectItem], selected: &mut usize) -> Result<Option<String>> {
    loop {
        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                *selected = selected.saturating_sub(1);
                redraw(items, *selected)?;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if *selected + 1 < items.len() {
                    *selected += 1;
                }
                redraw(items, *selected)?;
            }
            KeyCode::Enter => return Ok(Some(items[*selected].name.clone())),
            KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None);
            }
            _ => {}
        }
    }
}

fn draw(items: &[SelectItem], selected: usize) -> Result<()> {
    let mut stdout = io::stdout();
    for (idx, item) in items.iter().enumerate() {
        let marker = if idx == selected { "›" } else { " " };
        let name = if idx == selected {
            style(&item.name).green().bold()
        } else {
            style(&item.name).dim()
        };
        let desc = item
            .description
            .as_deref()
            .map(|d| format!("  {}", style(d).dim()))
            .unwrap_or_default();
        write!(stdout, " {marker} {name}{desc}\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn redraw(items: &[SelectItem], selected: usize) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveUp(items.len() as u16),
        Clear(ClearType::FromCursorDown)
    )?;
    draw(items, selected)
}
