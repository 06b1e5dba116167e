//! String helpers used when rendering error messages and matched text

/// Keep at most `max_chars` characters of `s`, appending `suffix` when anything was cut
///
/// A zero budget yields just the suffix.
pub fn truncate(s: &str, max_chars: usize, suffix: &str) -> String {
    if max_chars == 0 {
        return suffix.to_string();
    }
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}{}", &s[..cut], suffix),
    }
}

/// Escape `s` for display inside double quotes
pub fn escape_double_quote(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Turn `\r\n` and lone `\r` line endings into `\n`
pub fn normalize_newlines(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }
    s.replace("\r\n", "\n").replace('\r', "\n")
}
