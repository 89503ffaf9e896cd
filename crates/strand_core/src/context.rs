//! Execution context threaded through routing.
//!
//! The session mode used to live in a process environment variable that the
//! router wrote back as a side effect. It is an explicit value here so that
//! repeated or nested routing through the same context stays deterministic
//! and testable.

use std::str::FromStr;

use crate::invocation::EnvSnapshot;

/// Long-lived session mode selected by flag or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Gerrit,
}

impl SessionMode {
    /// Canonical spelling, as written by the gerrit trigger.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Gerrit => "gerrit",
        }
    }
}

impl FromStr for SessionMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gerrit" => Ok(SessionMode::Gerrit),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mutable routing state for one process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecContext {
    mode: Option<SessionMode>,
}

impl ExecContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the context from the environment snapshot. Unrecognized mode
    /// values are ignored.
    pub fn from_env(env: &EnvSnapshot) -> Self {
        let mode = env.mode.as_deref().and_then(|raw| raw.parse().ok());
        Self { mode }
    }

    pub fn mode(&self) -> Option<SessionMode> {
        self.mode
    }

    /// Record the active mode so re-entrant routing observes it.
    pub fn enter_mode(&mut self, mode: SessionMode) {
        self.mode = Some(mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_mode_parses_case_insensitively() {
        assert_eq!("gerrit".parse(), Ok(SessionMode::Gerrit));
        assert_eq!("GERRIT".parse(), Ok(SessionMode::Gerrit));
        assert_eq!("Gerrit".parse(), Ok(SessionMode::Gerrit));
        assert!("gerrit ".parse::<SessionMode>().is_err());
        assert!("review".parse::<SessionMode>().is_err());
        assert!("".parse::<SessionMode>().is_err());
    }

    #[test]
    fn test_canonical_spelling() {
        assert_eq!(SessionMode::Gerrit.as_str(), "gerrit");
        assert_eq!(SessionMode::Gerrit.to_string(), "gerrit");
    }

    #[test]
    fn test_context_seeded_from_env() {
        let env = EnvSnapshot {
            mode: Some("GERRIT".into()),
            ..Default::default()
        };
        assert_eq!(ExecContext::from_env(&env).mode(), Some(SessionMode::Gerrit));

        let unset = EnvSnapshot::default();
        assert_eq!(ExecContext::from_env(&unset).mode(), None);

        let unknown = EnvSnapshot {
            mode: Some("webhook".into()),
            ..Default::default()
        };
        assert_eq!(ExecContext::from_env(&unknown).mode(), None);
    }

    #[test]
    fn test_enter_mode_is_observed_on_reentry() {
        let mut ctx = ExecContext::new();
        assert_eq!(ctx.mode(), None);
        ctx.enter_mode(SessionMode::Gerrit);
        assert_eq!(ctx.mode(), Some(SessionMode::Gerrit));
    }
}
