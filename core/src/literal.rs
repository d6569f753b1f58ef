/// Returns true if `text` is written as a multi-valued literal, that is, wrapped
/// in `{` and `}`.
pub fn is_non_atomic_literal(text: &str) -> bool {
    let text = text.trim();
    text.len() >= 2 && text.starts_with('{') && text.ends_with('}')
}

/// Parses a multi-valued literal of the form `{v1, v2, ..., vN}` into its
/// atomic values.
///
/// Surrounding whitespace is ignored. A single leading `{` and a single trailing
/// `}` are stripped, the rest is split on `,` and every piece is trimmed.
/// Parsing never fails: a missing brace is simply not stripped and empty pieces
/// become empty values. Empty pieces at the end of the text are dropped
/// (`"{a, b,}"` has two values and `"{,}"` has none) unless the whole text is
/// empty, in which case it has one empty value.
pub fn parse_non_atomic(text: &str) -> Vec<String> {
    let text = text.trim();
    let text = text.strip_prefix('{').unwrap_or(text);
    let text = text.strip_suffix('}').unwrap_or(text);

    if text.is_empty() {
        return vec![String::new()];
    }

    let mut pieces: Vec<&str> = text.split(',').collect();
    while pieces.last().map(|p| p.is_empty()) == Some(true) {
        pieces.pop();
    }

    pieces.into_iter().map(|p| p.trim().to_string()).collect()
}
