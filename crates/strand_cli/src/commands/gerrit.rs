//! Gerrit review sessions: credential gate, then an auto-approved launch of
//! the gerrit-review agent.

use anyhow::Result;
use thiserror::Error;

use strand_core::{ENV_GERRIT_PASSWORD, ENV_GERRIT_USER, EnvSnapshot, Invocation};

use crate::launcher::{self, Launcher};
use crate::output;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{var} environment variable is required when using --gerrit")]
pub struct MissingCredential {
    pub var: &'static str,
    pub hint: &'static str,
}

/// Check both credential variables are present and non-empty. Returns the
/// validated user name.
pub fn validate_credentials(env: &EnvSnapshot) -> Result<&str, MissingCredential> {
    let user = env
        .gerrit_user
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(MissingCredential {
            var: ENV_GERRIT_USER,
            hint: "export GERRIT_USER=your-username",
        })?;

    env.gerrit_password
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(MissingCredential {
            var: ENV_GERRIT_PASSWORD,
            hint: "export GERRIT_PASSWORD=your-password",
        })?;

    Ok(user)
}

pub async fn handle(inv: &Invocation, launcher: &Launcher) -> Result<()> {
    // Gate on credentials before any collaborator call. The fast path
    // terminates the process directly instead of going through Outcome.
    let user = match validate_credentials(&inv.env) {
        Ok(user) => user,
        Err(missing) => {
            output::error(&missing.to_string());
            output::dim(&format!("Set it with: {}", missing.hint));
            std::process::exit(1);
        }
    };

    output::success(&format!("Gerrit credentials validated for user: {user}"));

    let synthetic = inv.synthesize().auto_approve().build();
    launcher.run(&synthetic, Some(&launcher::gerrit_review())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(user: Option<&str>, password: Option<&str>) -> EnvSnapshot {
        EnvSnapshot {
            mode: None,
            gerrit_user: user.map(String::from),
            gerrit_password: password.map(String::from),
        }
    }

    #[test]
    fn test_both_credentials_present() {
        let env = env(Some("alice"), Some("secret"));
        assert_eq!(validate_credentials(&env).unwrap(), "alice");
    }

    #[test]
    fn test_missing_user_reported_first() {
        let err = validate_credentials(&env(None, Some("secret"))).unwrap_err();
        assert_eq!(err.var, ENV_GERRIT_USER);
        assert!(err.to_string().contains("GERRIT_USER"));
    }

    #[test]
    fn test_missing_password() {
        let err = validate_credentials(&env(Some("alice"), None)).unwrap_err();
        assert_eq!(err.var, ENV_GERRIT_PASSWORD);
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        assert!(validate_credentials(&env(Some(""), Some("secret"))).is_err());
        assert!(validate_credentials(&env(Some("alice"), Some(""))).is_err());
    }
}
