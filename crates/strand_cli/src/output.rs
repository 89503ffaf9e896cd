//! Terminal output helpers.
//!
//! Uses `console` for colors (respects NO_COLOR, auto-disables when piped),
//! `comfy-table` for listings, and `indicatif` for spinners.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn header(text: &str) {
    println!("{}", style(text).bold().cyan());
}

pub fn success(text: &str) {
    println!("{} {}", style("✓").green(), text);
}

pub fn error(text: &str) {
    eprintln!("{} {}", style("✗").red(), text);
}

pub fn warning(text: &str) {
    println!("{} {}", style("!").yellow(), text);
}

pub fn dim(text: &str) {
    println!("{}", style(text).dim());
}

/// A named list entry with a dim trailing description.
pub fn item(name: &str, desc: &str) {
    if desc.is_empty() {
        println!("  {} {}", style("•").green(), style(name).green().bold());
    } else {
        println!(
            "  {} {} {}",
            style("•").green(),
            style(name).green().bold(),
            style(desc).dim()
        );
    }
}

/// Key-value pair with a styled key.
pub fn kv(key: &str, value: &str) {
    println!("  {} {}", style(key).cyan().bold(), value);
}

/// Styled table with the given column headers.
pub fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| {
                Cell::new(h)
                    .fg(Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold)
            })
            .collect::<Vec<_>>(),
    );
    table
}

/// Spinner for async operations.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

#[allow(dead_code)]
pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    success(message);
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.abandon();
    error(message);
}
