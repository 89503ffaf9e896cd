//! `strand merge`: extract the pull-request reference and hand off to the
//! merge agent flow.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use strand_core::Invocation;

use crate::launcher::Launcher;

static PR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]*github\.com/.*/pull/(\d+)").unwrap()
});

/// Result of inspecting the tokens after the `merge` command word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrReference {
    pub pr: Option<String>,
    pub remaining: Vec<String>,
}

/// Inspect the first remaining token: a pure number is the PR number (and is
/// consumed); a GitHub pull-request URL yields the number but the token is
/// kept for the agent; anything else passes through untouched.
pub fn extract_pr(tokens: &[String]) -> PrReference {
    let Some(candidate) = tokens.first() else {
        return PrReference {
            pr: None,
            remaining: Vec::new(),
        };
    };

    if !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_digit()) {
        return PrReference {
            pr: Some(candidate.clone()),
            remaining: tokens[1..].to_vec(),
        };
    }

    if let Some(captures) = PR_URL.captures(candidate) {
        return PrReference {
            pr: Some(captures[1].to_string()),
            remaining: tokens.to_vec(),
        };
    }

    PrReference {
        pr: None,
        remaining: tokens.to_vec(),
    }
}

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<()> {
    let extracted = extract_pr(inv.rest());

    let mut builder = inv
        .synthesize()
        .with_merge()
        .auto_approve()
        .with_input(extracted.remaining);
    if let Some(pr) = extracted.pr {
        builder = builder.with_pr(pr);
    }

    launcher.run(&builder.build(), None).await
}
