//! Record identifier synthesis.
//!
//! Ids are either `prefix[-subkind]-<sequence>` from the source's own
//! sequence attribute, or `prefix-<md5>` over a record's natural key for
//! categories without one. The mix is deliberate: visibility files written
//! by earlier deployments reference ids in exactly these shapes.

use md5::{Digest, Md5};

/// Id from a source sequence number.
///
/// Falls back to [`hash_id`] over `natural_key` when the sequence attribute
/// is missing, so a record never ends up with a bare `prefix-` id.
pub fn sequence_id(prefix: &str, subkind: Option<&str>, seq: &str, natural_key: &[&str]) -> String {
    let stem = match subkind {
        Some(sub) => format!("{prefix}-{sub}"),
        None => prefix.to_string(),
    };
    let seq = seq.trim();
    if seq.is_empty() {
        return hash_id(&stem, natural_key);
    }
    format!("{stem}-{}", sanitize(seq))
}

/// Id from an MD5 digest of the concatenated natural-key fields.
///
/// Records with identical natural keys share an id; the source treats
/// that as deduplication.
pub fn hash_id(prefix: &str, natural_key: &[&str]) -> String {
    let mut hasher = Md5::new();
    for part in natural_key {
        hasher.update(part.as_bytes());
    }
    format!("{prefix}-{:x}", hasher.finalize())
}

/// Restrict to `[a-z0-9-]`.
fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
