//! String escaping for JSON text

use std::io::Write;

use crate::error::Result;

/// Escape sequences for the control characters U+0000..U+001F, indexed by
/// code point. Short forms where RFC 8259 defines one, `\u00XX` otherwise.
static CONTROL_ESCAPES: [&str; 32] = [
    "\\u0000", "\\u0001", "\\u0002", "\\u0003", "\\u0004", "\\u0005", "\\u0006", "\\u0007",
    "\\b", "\\t", "\\n", "\\u000b", "\\f", "\\r", "\\u000e", "\\u000f", "\\u0010", "\\u0011",
    "\\u0012", "\\u0013", "\\u0014", "\\u0015", "\\u0016", "\\u0017", "\\u0018", "\\u0019",
    "\\u001a", "\\u001b", "\\u001c", "\\u001d", "\\u001e", "\\u001f",
];

/// Look up the escape sequence for a byte inside a string literal.
///
/// Returns `None` for bytes that pass through unchanged. Bytes >= 0x80 are
/// continuation or leading bytes of multi-byte UTF-8 sequences and never
/// escape.
#[inline]
fn escape_for(byte: u8) -> Option<&'static str> {
    match byte {
        b'"' => Some("\\\""),
        b'\\' => Some("\\\\"),
        0x00..=0x1f => Some(CONTROL_ESCAPES[byte as usize]),
        _ => None,
    }
}

/// Write `text` into `sink` with JSON string escaping applied.
///
/// Runs of characters that need no escaping are forwarded to the sink in a
/// single write.
pub fn write_escaped<W: Write>(sink: &mut W, text: &str) -> Result<()> {
    let bytes = text.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if let Some(escape) = escape_for(byte) {
            if start < i {
                sink.write_all(&bytes[start..i])?;
            }
            sink.write_all(escape.as_bytes())?;
            start = i + 1;
        }
    }
    if start < bytes.len() {
        sink.write_all(&bytes[start..])?;
    }
    Ok(())
}

/// Write a single character into `sink` with JSON string escaping applied.
pub fn write_escaped_char<W: Write>(sink: &mut W, character: char) -> Result<()> {
    let mut buf = [0u8; 4];
    let encoded = character.encode_utf8(&mut buf);
    match escape_for(encoded.as_bytes()[0]) {
        Some(escape) => sink.write_all(escape.as_bytes())?,
        None => sink.write_all(encoded.as_bytes())?,
    }
    Ok(())
}
