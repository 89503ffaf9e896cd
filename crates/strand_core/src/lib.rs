//! Core types for the strand CLI: the parsed invocation, the router's
//! outcome, the exact-match command table, and the chain heuristic.

pub mod chain;
pub mod command;
pub mod context;
pub mod invocation;
pub mod outcome;

pub use chain::{CHAIN_SEPARATOR, chain_spec, is_chain_invocation, split_stages};
pub use command::Command;
pub use context::{ExecContext, SessionMode};
pub use invocation::{EnvSnapshot, Flags, Invocation, InvocationBuilder};
pub use outcome::Outcome;

/// Binary name, used in user-facing hints.
pub const BIN_NAME: &str = "strand";

/// Environment variable selecting a long-lived session mode (e.g. "gerrit").
pub const ENV_MODE: &str = "STRAND_MODE";

/// Gerrit credential variables, read verbatim with no defaults.
pub const ENV_GERRIT_USER: &str = "GERRIT_USER";
pub const ENV_GERRIT_PASSWORD: &str = "GERRIT_PASSWORD";
