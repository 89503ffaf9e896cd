//! The exact-match command table.

/// Closed set of first-token commands the router dispatches on.
///
/// Matching is case-sensitive byte equality against the first positional
/// token only. No prefix, suffix, separator, or case variants ever match;
/// anything else falls through to the default agent flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Init,
    Login,
    ListModels,
    ListMcp,
    ListAgents,
    ListModes,
    CreateAgent,
    Update,
    Theme,
    Config,
    Key,
    Merge,
    SelfReview,
    Run,
}

impl Command {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "help" => Some(Command::Help),
            "init" => Some(Command::Init),
            "login" => Some(Command::Login),
            "list-models" => Some(Command::ListModels),
            "list-mcp" => Some(Command::ListMcp),
            "list-agents" => Some(Command::ListAgents),
            "list-modes" => Some(Command::ListModes),
            "create-agent" => Some(Command::CreateAgent),
            "update" => Some(Command::Update),
            "theme" => Some(Command::Theme),
            "config" => Some(Command::Config),
            "key" => Some(Command::Key),
            "merge" => Some(Command::Merge),
            "self-review" => Some(Command::SelfReview),
            "run" => Some(Command::Run),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Init => "init",
            Command::Login => "login",
            Command::ListModels => "list-models",
            Command::ListMcp => "list-mcp",
            Command::ListAgents => "list-agents",
            Command::ListModes => "list-modes",
            Command::CreateAgent => "create-agent",
            Command::Update => "update",
            Command::Theme => "theme",
            Command::Config => "config",
            Command::Key => "key",
            Command::Merge => "merge",
            Command::SelfReview => "self-review",
            Command::Run => "run",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Command] = &[
        Command::Help,
        Command::Init,
        Command::Login,
        Command::ListModels,
        Command::ListMcp,
        Command::ListAgents,
        Command::ListModes,
        Command::CreateAgent,
        Command::Update,
        Command::Theme,
        Command::Config,
        Command::Key,
        Command::Merge,
        Command::SelfReview,
        Command::Run,
    ];

    #[test]
    fn test_token_round_trip() {
        for cmd in ALL {
            assert_eq!(Command::from_token(cmd.token()), Some(*cmd));
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Command::from_token("Help"), None);
        assert_eq!(Command::from_token("HELP"), None);
        assert_eq!(Command::from_token("LIST-MODELS"), None);
        assert_eq!(Command::from_token("Merge"), None);
    }

    #[test]
    fn test_no_separator_or_affix_variants() {
        assert_eq!(Command::from_token("list_models"), None);
        assert_eq!(Command::from_token("list-models2"), None);
        assert_eq!(Command::from_token("xlist-models"), None);
        assert_eq!(Command::from_token(" merge"), None);
        assert_eq!(Command::from_token("merge "), None);
        assert_eq!(Command::from_token("selfreview"), None);
    }

    #[test]
    fn test_unknown_and_empty_tokens() {
        assert_eq!(Command::from_token("frobnicate"), None);
        assert_eq!(Command::from_token(""), None);
        // Renamed long ago; must not resolve.
        assert_eq!(Command::from_token("models"), None);
    }
}
