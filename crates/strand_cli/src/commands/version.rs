//! Version reporting.

use anyhow::Result;

pub fn version_line() -> String {
    format!("strand {}", env!("CARGO_PKG_VERSION"))
}

pub async fn handle() -> Result<()> {
    println!("{}", version_line());
    Ok(())
}
