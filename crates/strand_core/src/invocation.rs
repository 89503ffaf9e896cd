//! Parsed CLI invocation: positional tokens, typed flags, environment snapshot.

use crate::{ENV_GERRIT_PASSWORD, ENV_GERRIT_USER, ENV_MODE};

/// Flags recognized by the router and its adapters.
///
/// Booleans are off by default except `builtin`, which stays on unless the
/// user passes `--no-builtin`. Optional values are absent unless set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags {
    pub help: bool,
    pub version: bool,
    pub gerrit: bool,
    pub ui: bool,
    pub interactive: bool,
    pub merge: bool,
    pub yes: bool,
    pub silent_auto_approve: bool,
    pub builtin: bool,
    pub agent_file: Option<String>,
    pub mcp_file: Option<String>,
    pub model: Option<String>,
    pub mode: Option<String>,
    pub pr: Option<String>,
    pub set: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            gerrit: false,
            ui: false,
            interactive: false,
            merge: false,
            yes: false,
            silent_auto_approve: false,
            builtin: true,
            agent_file: None,
            mcp_file: None,
            model: None,
            mode: None,
            pr: None,
            set: None,
        }
    }
}

/// Snapshot of the environment variables the router cares about, taken once
/// at startup. Credential values are captured verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub mode: Option<String>,
    pub gerrit_user: Option<String>,
    pub gerrit_password: Option<String>,
}

impl EnvSnapshot {
    pub fn from_process() -> Self {
        Self {
            mode: std::env::var(ENV_MODE).ok(),
            gerrit_user: std::env::var(ENV_GERRIT_USER).ok(),
            gerrit_password: std::env::var(ENV_GERRIT_PASSWORD).ok(),
        }
    }
}

/// Immutable input to the router. Token order is preserved; the first token,
/// if present, is the command-name candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub input: Vec<String>,
    pub flags: Flags,
    pub env: EnvSnapshot,
}

impl Invocation {
    pub fn new(input: Vec<String>, flags: Flags, env: EnvSnapshot) -> Self {
        Self { input, flags, env }
    }

    /// The command-name candidate.
    pub fn first_token(&self) -> Option<&str> {
        self.input.first().map(String::as_str)
    }

    /// Tokens after the command word.
    pub fn rest(&self) -> &[String] {
        if self.input.is_empty() { &[] } else { &self.input[1..] }
    }

    /// Start building a derived invocation for a sub-application hand-off.
    /// The builder owns a copy of this invocation's flags, so overrides never
    /// touch the caller's state.
    pub fn synthesize(&self) -> InvocationBuilder {
        InvocationBuilder {
            input: Vec::new(),
            flags: self.flags.clone(),
            env: self.env.clone(),
        }
    }
}

/// Builder for synthetic sub-invocations handed to the launcher.
///
/// Starts from a copy of the originating invocation's flags and applies named
/// overrides. The auto-approval override set lives here so every command that
/// needs it forces the same flags.
#[derive(Debug, Clone)]
pub struct InvocationBuilder {
    input: Vec<String>,
    flags: Flags,
    env: EnvSnapshot,
}

impl InvocationBuilder {
    /// Force auto-approval so the downstream agent flow never blocks on an
    /// interactive confirmation.
    pub fn auto_approve(mut self) -> Self {
        self.flags.yes = true;
        self.flags.silent_auto_approve = true;
        self
    }

    pub fn with_ui(mut self) -> Self {
        self.flags.ui = true;
        self
    }

    pub fn with_merge(mut self) -> Self {
        self.flags.merge = true;
        self
    }

    pub fn with_pr(mut self, pr: impl Into<String>) -> Self {
        self.flags.pr = Some(pr.into());
        self
    }

    pub fn with_input(mut self, input: Vec<String>) -> Self {
        self.input = input;
        self
    }

    pub fn build(self) -> Invocation {
        Invocation {
            input: self.input,
            flags: self.flags,
            env: self.env,
        }
    }
}
