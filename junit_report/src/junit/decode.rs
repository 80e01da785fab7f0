use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use once_cell::sync::Lazy;
use regex::Regex;
use regex::bytes::Regex as BytesRegex;
use thiserror::Error;

static DECLARED_ENCODING: Lazy<BytesRegex> = Lazy::new(|| {
    BytesRegex::new(r#"^\s*<\?xml[^>]*?\bencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("encoding declaration regex")
});

static DECLARATION_ENCODING_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\s*<\?xml[^>]*?\bencoding\s*=\s*)(["'])[^"']*(["'])"#)
        .expect("declaration rewrite regex")
});

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid {encoding} byte sequence")]
    Malformed { encoding: &'static str },
}

/// Picks the document encoding: byte order mark, then the 16-bit `<?` pattern,
/// then the `encoding=` declaration, defaulting to UTF-8.
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    if let Some(found) = Encoding::for_bom(bytes) {
        return found;
    }
    match bytes {
        [b'<', 0, b'?', 0, ..] => return (UTF_16LE, 0),
        [0, b'<', 0, b'?', ..] => return (UTF_16BE, 0),
        _ => {}
    }
    let declared = DECLARED_ENCODING
        .captures(bytes)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8);
    (declared, 0)
}

/// Decodes XML bytes into text roxmltree can parse; the declaration of a
/// transcoded document is rewritten to say UTF-8.
pub fn decode_xml(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    let (encoding, bom_len) = detect_encoding(bytes);
    let body = &bytes[bom_len..];
    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(std::str::from_utf8(body)?));
    }
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(DecodeError::Malformed {
            encoding: encoding.name(),
        })?;
    let rewritten = DECLARATION_ENCODING_VALUE.replace(&text, "${1}${2}UTF-8${3}");
    Ok(Cow::Owned(rewritten.into_owned()))
}
