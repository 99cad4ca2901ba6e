//! DER encoding

use num_bigint::BigInt;

use super::Tag;

/// Definite-form DER length octets.
///
/// Short form for lengths below 128, otherwise a length-of-length octet
/// followed by the minimal big-endian length.
pub fn encode_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let be = len.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count();
    let significant = &be[skip..];
    let mut out = Vec::with_capacity(significant.len() + 1);
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Encode a primitive field from its content octets
pub fn encode_primitive(tag: Tag, value: &[u8]) -> Vec<u8> {
    let length = encode_length(value.len());
    let mut out = Vec::with_capacity(1 + length.len() + value.len());
    out.push(tag.byte());
    out.extend_from_slice(&length);
    out.extend_from_slice(value);
    out
}

/// Encode a constructed field whose content is the concatenation of
/// already-encoded children
pub fn encode_constructed(tag: Tag, children: &[&[u8]]) -> Vec<u8> {
    debug_assert!(tag.is_constructed());
    let content_len: usize = children.iter().map(|c| c.len()).sum();
    let length = encode_length(content_len);
    let mut out = Vec::with_capacity(1 + length.len() + content_len);
    out.push(tag.byte());
    out.extend_from_slice(&length);
    for child in children {
        out.extend_from_slice(child);
    }
    out
}

/// Minimal two's-complement content octets of an INTEGER
pub(crate) fn integer_content(value: &BigInt) -> Vec<u8> {
    let mut bytes = value.to_signed_bytes_be();
    if bytes.is_empty() {
        bytes.push(0);
    }
    bytes
}
