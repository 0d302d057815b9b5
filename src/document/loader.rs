//! Whole-file loading with encoding repair.
//!
//! Lattes exports declare `encoding="ISO-8859-1"`. The bytes are transcoded
//! to UTF-8 and the declaration rewritten to match before parsing, so the
//! parser never sees a declared/actual mismatch.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use regex::Regex;
use regex::bytes::Regex as BytesRegex;

use super::error::{DocumentError, DocumentResult};
use super::tree::Element;

static RE_DECLARED_ENCODING: LazyLock<BytesRegex> = LazyLock::new(|| {
    BytesRegex::new(r#"(?i)encoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#).unwrap()
});

static RE_ENCODING_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)encoding\s*=\s*["'][^"']*["']"#).unwrap());

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and parse the curriculum at `path`.
pub fn load_document(path: &Path) -> DocumentResult<Element> {
    let bytes = std::fs::read(path).map_err(|e| DocumentError::Unreadable {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read curriculum document");
    parse_bytes(&bytes)
}

/// Normalize encoding and parse raw document bytes into a tree.
pub fn parse_bytes(bytes: &[u8]) -> DocumentResult<Element> {
    let text = normalize_encoding(bytes)?;
    parse_text(&text)
}

/// Decode `bytes` to UTF-8 text according to the XML declaration.
///
/// A declared non-UTF-8 encoding is transcoded and the declaration rewritten
/// to `encoding="UTF-8"`. Labels `encoding_rs` does not know are read as
/// ISO-8859-1, the Lattes export default. Without a declaration the bytes
/// must already be UTF-8.
pub fn normalize_encoding(bytes: &[u8]) -> DocumentResult<Cow<'_, str>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label).unwrap_or(WINDOWS_1252),
        None => UTF_8,
    };

    if encoding == UTF_8 {
        return std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| DocumentError::Malformed {
                message: format!("invalid UTF-8: {e}"),
            });
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "document contained bytes not representable in declared encoding"
        );
    }
    tracing::debug!(from = encoding.name(), "transcoded document to UTF-8");

    let rewritten = RE_ENCODING_ATTR.replacen(&decoded, 1, r#"encoding="UTF-8""#);
    Ok(Cow::Owned(rewritten.into_owned()))
}

/// Parse UTF-8 XML text into an owned element tree.
pub fn parse_text(text: &str) -> DocumentResult<Element> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let doc = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
        DocumentError::Malformed {
            message: e.to_string(),
        }
    })?;
    Ok(Element::from(doc.root_element()))
}

/// The `encoding` pseudo-attribute of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    RE_DECLARED_ENCODING
        .captures(&bytes[..end])
        .and_then(|c| c.get(1))
        .map(|m| m.as_bytes())
}
