//! `strand update`: check for a newer published release.

use anyhow::Result;

use crate::api::ApiClient;
use crate::output;

pub async fn handle(api: &ApiClient) -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    let spinner = output::spinner("Checking for updates...");

    match api.latest_version().await {
        Ok(latest) => {
            spinner.abandon();
            if is_newer(current, &latest) {
                output::warning(&format!("A newer release is available: {latest} (current: {current})"));
                output::dim("Update with: cargo install strand-cli");
            } else {
                output::success(&format!("strand {current} is up to date"));
            }
            Ok(())
        }
        Err(err) => {
            output::spinner_error(&spinner, "Update check failed");
            Err(err)
        }
    }
}

/// Dotted-numeric comparison; unparseable versions fall back to inequality.
fn is_newer(current: &str, latest: &str) -> bool {
    match (parse(current), parse(latest)) {
        (Some(current), Some(latest)) => latest > current,
        _ => latest != current,
    }
}

fn parse(version: &str) -> Option<Vec<u64>> {
    version
        .trim()
        .trim_start_matches('v')
        .split('.')
        .map(|part| part.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_comparison() {
        assert!(is_newer("0.1.0", "0.2.0"));
        assert!(is_newer("0.1.0", "1.0.0"));
        assert!(!is_newer("0.2.0", "0.1.9"));
        assert!(!is_newer("0.1.0", "0.1.0"));
    }

    #[test]
    fn test_v_prefix_accepted() {
        assert!(is_newer("0.1.0", "v0.1.1"));
        assert!(!is_newer("v0.1.1", "0.1.1"));
    }

    #[test]
    fn test_unparseable_falls_back_to_inequality() {
        assert!(is_newer("0.1.0", "nightly"));
        assert!(!is_newer("nightly", "nightly"));
    }
}
