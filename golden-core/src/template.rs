/// Wildcard token used when no other delimiter is configured.
pub const DEFAULT_WILDCARD: &str = "{{";

/// Derive the literal match prefix of an expectation.
///
/// Everything from the first `wildcard` occurrence onward is discarded and
/// the remainder is trimmed. Without a wildcard the whole trimmed expectation
/// is the prefix. An empty `wildcard` is treated as absent.
pub fn match_prefix<'a>(expectation: &'a str, wildcard: &str) -> &'a str {
    if wildcard.is_empty() {
        return expectation.trim();
    }
    match expectation.split_once(wildcard) {
        Some((head, _)) => head.trim(),
        None => expectation.trim(),
    }
}
