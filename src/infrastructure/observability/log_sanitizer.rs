const MAX_VISIBLE_CHARS: usize = 100;
const MIN_BLOB_LENGTH: usize = 64;

/// Shortens and scrubs user-provided text before it reaches the logs.
///
/// Truncation counts characters, not bytes. Email addresses, bearer tokens
/// and long base64 runs are replaced with markers.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let mut words = Vec::new();
    let mut after_bearer = false;
    for word in trimmed.split_whitespace() {
        if after_bearer {
            words.push("[REDACTED]".to_string());
        } else {
            words.push(redact_word(word));
        }
        after_bearer = word.eq_ignore_ascii_case("bearer");
    }
    let redacted = words.join(" ");

    let total = redacted.chars().count();
    if total > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total)
    } else {
        redacted
    }
}

fn redact_word(word: &str) -> String {
    if word.contains('@') && word.contains('.') {
        return "[EMAIL]".to_string();
    }
    if word.starts_with("data:") || looks_like_base64(word) {
        return "[BLOB]".to_string();
    }
    if let Some(idx) = word.find("api_key=").or_else(|| word.find("token=")) {
        let (head, _) = word.split_at(idx);
        let key_end = word[idx..].find('=').map(|i| idx + i + 1).unwrap_or(word.len());
        return format!("{}{}[REDACTED]", head, &word[idx..key_end]);
    }
    word.to_string()
}

fn looks_like_base64(word: &str) -> bool {
    word.len() >= MIN_BLOB_LENGTH
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
}
