const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes transcript and reply text for safe logging. Spoken input is
/// user content; keep only a bounded prefix and strip anything that looks
/// like a credential.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let sanitized = if trimmed.len() > MAX_VISIBLE_LENGTH {
        let mut cut = MAX_VISIBLE_LENGTH;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... ({} chars total)", &trimmed[..cut], trimmed.len())
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
