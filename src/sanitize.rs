//! HTML neutralization for user-supplied strings echoed back to clients.

/// Escape the markup delimiters `<` and `>`; every other character passes through.
/// Idempotent, so values sanitized on write are unchanged on read.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
