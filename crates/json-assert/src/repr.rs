//! How documents are named in failure messages.

/// Longest document prefix, in characters, quoted in a failure message.
const MAX_QUOTED_CHARS: usize = 50;

/// Trims `json` and cuts it to 50 characters, marking the cut with `...`.
pub fn abbreviate(json: &str) -> String {
    let trimmed = json.trim();

    if trimmed.chars().count() <= MAX_QUOTED_CHARS {
        return trimmed.to_owned();
    }

    let prefix: String = trimmed.chars().take(MAX_QUOTED_CHARS).collect();

    format!("{}...", prefix.trim_end())
}

/// `null` for no document, otherwise the abbreviated document in single quotes.
///
/// The JSON literal `null` is therefore rendered `'null'`.
pub fn representation(json: Option<&str>) -> String {
    match json {
        None => "null".to_owned(),
        Some(json) => format!("'{}'", abbreviate(json)),
    }
}
