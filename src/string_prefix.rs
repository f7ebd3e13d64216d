//! Fixed-length sortkeys of string prefixes, for range pruning.
//!
//! The first eight weight bytes of a string are read as a big-endian
//! integer. Compared as `u64`, keys order the same way the collation orders
//! the strings' leading characters; strings that share those characters get
//! equal keys, so a key can only bound a range, never decide equality.
use crate::collation::Collation;
use crate::sentinel::UBIGINT_NULL;
use std::cmp::Ordering;

pub const PREFIX_BYTES: usize = 8;

/// Sortkey of `bytes[..len]` under the collation with `collation_id`.
/// Unknown ids fall back to binary weights.
///
/// A string of NUL bytes encodes like the empty string.
pub fn encode(bytes: &[u8], len: usize, collation_id: u32) -> i64 {
    let collation = Collation::from_id(collation_id).unwrap_or_else(|err| {
        log::warn!("{err}; encoding string prefix with binary weights");
        Collation::Binary
    });
    encode_with(bytes, len, collation)
}

pub fn encode_with(bytes: &[u8], len: usize, collation: Collation) -> i64 {
    let src = &bytes[..len.min(bytes.len())];
    let mut prefix = [0u8; PREFIX_BYTES];
    collation.transform(src, &mut prefix);

    let key = u64::from_be_bytes(prefix);
    // Keep clear of the NULL marker; one step down keeps the order.
    let key = if key == UBIGINT_NULL { key - 1 } else { key };
    key as i64
}

/// Like [`encode`], but an empty string yields the NULL sentinel.
pub fn encode_or_null_sentinel(bytes: &[u8], len: usize, collation_id: u32) -> i64 {
    if len < 1 {
        return UBIGINT_NULL as i64;
    }
    encode(bytes, len, collation_id)
}

pub fn is_null_sentinel(key: i64) -> bool {
    key as u64 == UBIGINT_NULL
}

/// Order of two sortkeys.
pub fn cmp_keys(a: i64, b: i64) -> Ordering {
    (a as u64).cmp(&(b as u64))
}
