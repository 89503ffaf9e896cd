//! The router's decision for a single invocation.

/// Exactly one outcome is produced per routed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was handled; the process must terminate with this code.
    Exit { code: i32 },

    /// A long-lived flow was started (merge, self-review); the process must
    /// stay alive until the session ends.
    Wait,

    /// The handler returned, but the session it launched keeps the process
    /// alive. This names the legacy mixed exit/wait cases (gerrit mode,
    /// `init --ui`) so their ambiguity stays explicit instead of hiding in
    /// two booleans.
    Continue,

    /// No router branch matched; the caller proceeds to the default agent
    /// flow with the original invocation.
    Unhandled,
}

impl Outcome {
    pub fn should_exit(&self) -> bool {
        matches!(self, Outcome::Exit { .. })
    }

    pub fn should_wait(&self) -> bool {
        matches!(self, Outcome::Wait | Outcome::Continue)
    }

    /// Meaningful only when `should_exit()` is true.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Outcome::Exit { code } => Some(*code),
            _ => None,
        }
    }
}
