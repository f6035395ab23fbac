//! Display-text sanitizing for TOC labels.

/// Zero-width space, non-joiner, joiner and the byte-order mark
pub const ZERO_WIDTH_CHARS: [char; 4] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// Remove every zero-width character from `text`
pub fn strip_zero_width(text: &str) -> String {
    text.chars().filter(|c| !ZERO_WIDTH_CHARS.contains(c)).collect()
}

/// Make heading text safe to embed verbatim as link display text.
///
/// Zero-width characters are dropped, then `& < > " '` and the backtick are
/// replaced by character references. Not idempotent: `&` always becomes
/// `&amp;`, so apply it exactly once per heading.
pub fn sanitize_label(text: &str) -> String {
    let visible = strip_zero_width(text);
    let escaped = html_escape::encode_quoted_attribute(&visible);
    // html_escape never emits a backtick, so this cannot re-escape its output
    escaped.replace('`', "&#96;")
}
