/// Lowercases the text, collapses each run of characters that are not ASCII
/// alphanumerics or spaces into a single space, and trims the result.
///
/// "Ford-Explorer!" becomes "ford explorer".
pub fn normalize_text(text: &str) -> String {
    let lowercased = text.to_lowercase();
    let mut normalized = String::with_capacity(lowercased.len());
    let mut in_separator_run = false;

    for c in lowercased.chars() {
        if c.is_ascii_alphanumeric() || c == ' ' {
            normalized.push(c);
            in_separator_run = false;
        } else if !in_separator_run {
            normalized.push(' ');
            in_separator_run = true;
        }
    }

    normalized.trim().to_string()
}

/// Lowercases the text and drops every character that is not an ASCII
/// alphanumeric or a space. Unlike `normalize_text`, nothing is replaced.
pub fn strip_to_searchable(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
