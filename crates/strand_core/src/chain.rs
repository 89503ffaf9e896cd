//! Chain detection and stage splitting.
//!
//! A chain runs several agents sequentially, written as `"improve > review >
//! open-pr"`. The explicit form is `strand chain "<spec>"`; the implicit form
//! is `strand run "<spec>"` where the spec is the sole argument.

/// Separator between chain stages.
pub const CHAIN_SEPARATOR: char = '>';

/// Decide whether an invocation's tokens name an agent chain.
///
/// `chain` as the first token always does. `run` does only when there are
/// exactly two tokens and the second contains the separator. A literal `run`
/// prompt that happens to contain `'>'` is therefore treated as a chain —
/// an accepted false positive of the heuristic.
pub fn is_chain_invocation(input: &[String]) -> bool {
    match input.first().map(String::as_str) {
        Some("chain") => true,
        Some("run") => input.len() == 2 && input[1].contains(CHAIN_SEPARATOR),
        _ => false,
    }
}

/// Extract the chain spec string from a chain-shaped invocation.
///
/// For the `run` form the spec is the second token; for the `chain` form it
/// is the remaining tokens joined (shells may have split an unquoted spec).
pub fn chain_spec(input: &[String]) -> Option<String> {
    match input.first().map(String::as_str) {
        Some("chain") if input.len() > 1 => Some(input[1..].join(" ")),
        Some("run") if input.len() == 2 => Some(input[1].clone()),
        _ => None,
    }
}

/// Split a chain spec into trimmed, non-empty stage names.
pub fn split_stages(spec: &str) -> Vec<String> {
    spec.split(CHAIN_SEPARATOR)
        .map(str::trim)
        .filter(|stage| !stage.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_explicit_chain_always_matches() {
        assert!(is_chain_invocation(&tokens(&["chain", "a > b > c"])));
        assert!(is_chain_invocation(&tokens(&["chain"])));
        assert!(is_chain_invocation(&tokens(&["chain", "a", "b"])));
    }

    #[test]
    fn test_run_matches_only_single_arg_with_separator() {
        assert!(is_chain_invocation(&tokens(&["run", "a > b > c"])));
        assert!(!is_chain_invocation(&tokens(&["run", "a > b", "extra"])));
        assert!(!is_chain_invocation(&tokens(&["run", "just a prompt"])));
        assert!(!is_chain_invocation(&tokens(&["run"])));
    }

    #[test]
    fn test_literal_prompt_with_separator_is_accepted_false_positive() {
        assert!(is_chain_invocation(&tokens(&["run", "echo a > file"])));
    }

    #[test]
    fn test_other_tokens_never_chain() {
        assert!(!is_chain_invocation(&tokens(&["merge", "a > b"])));
        assert!(!is_chain_invocation(&tokens(&["Chain", "a > b"])));
        assert!(!is_chain_invocation(&[]));
    }

    #[test]
    fn test_chain_spec_extraction() {
        assert_eq!(
            chain_spec(&tokens(&["chain", "a > b > c"])),
            Some("a > b > c".to_string())
        );
        // Unquoted spec split by the shell is rejoined.
        assert_eq!(
            chain_spec(&tokens(&["chain", "a", ">", "b"])),
            Some("a > b".to_string())
        );
        assert_eq!(
            chain_spec(&tokens(&["run", "a > b"])),
            Some("a > b".to_string())
        );
        assert_eq!(chain_spec(&tokens(&["chain"])), None);
        assert_eq!(chain_spec(&tokens(&["review"])), None);
    }

    #[test]
    fn test_split_stages() {
        assert_eq!(
            split_stages("improve > review > open-pr"),
            vec!["improve", "review", "open-pr"]
        );
        assert_eq!(split_stages("a>b"), vec!["a", "b"]);
        assert_eq!(split_stages("  a  >  > b "), vec!["a", "b"]);
        assert!(split_stages(" > ").is_empty());
    }
}
