//! Preview formatting for values shown next to reported keys
//!
//! Values are never assumed to be text. Both previews are bounded to
//! [`PREVIEW_LIMIT`] units and append `...` after the closing quote when the
//! input was longer.

/// Maximum number of bytes (raw) or characters (text) shown in a preview
pub const PREVIEW_LIMIT: usize = 10;

/// Returned by [`preview_text`] when the value is not valid UTF-8
pub const NON_UTF8_SENTINEL: &str = "[non-utf8]";

const ELLIPSIS: &str = "...";

/// Render bytes as a double-quoted literal
///
/// Valid UTF-8 runs are kept readable: printable characters pass through,
/// `"` and `\\` are backslash-escaped, the C control characters use their short
/// escapes (`\a \b \t \n \v \f \r`), remaining ASCII controls become `\xNN`
/// and other unprintable characters become `\uNNNN` or `\UNNNNNNNN`. Bytes
/// that are not part of valid UTF-8 are written as `\xNN`.
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_escaped(&mut out, c);
        }
        for b in chunk.invalid() {
            out.push_str(&format!("\\x{:02x}", b));
        }
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{0b}' => out.push_str("\\v"),
        '\u{0c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
        c if is_printable(c) => out.push(c),
        c if (c as u32) <= 0xFFFF => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => out.push_str(&format!("\\U{:08x}", c as u32)),
    }
}

/// Printable: not a control or format character, and no whitespace other than ' '
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}'
                | '\u{200b}'..='\u{200f}'
                | '\u{2060}'..='\u{2064}'
                | '\u{feff}'
                | '\u{e0000}'..='\u{e007f}'
        ))
}

/// Preview a value paired with a binary key
///
/// Takes at most the first 10 bytes and renders them escaped.
pub fn preview_raw(value: &[u8]) -> String {
    if value.len() > PREVIEW_LIMIT {
        format!("{}{}", quote_bytes(&value[..PREVIEW_LIMIT]), ELLIPSIS)
    } else {
        quote_bytes(value)
    }
}

/// Preview a value paired with a text key
///
/// Truncates by character, not byte, so multi-byte characters are never split.
/// Invalid UTF-8 yields [`NON_UTF8_SENTINEL`].
pub fn preview_text(value: &[u8]) -> String {
    let Ok(text) = std::str::from_utf8(value) else {
        return NON_UTF8_SENTINEL.to_string();
    };

    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{:?}{}", &text[..cut], ELLIPSIS),
        None => format!("{:?}", text),
    }
}
