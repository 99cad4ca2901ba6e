//! DER decoding

use num_bigint::BigInt;

use super::{BitString, Field, ObjectIdentifier, Tag};
use crate::error::{validate, Error, Result};

/// Deepest nesting of constructed fields accepted by the decoder
pub const MAX_DEPTH: usize = 32;

/// Decode every field in `bytes`, which must be a concatenation of complete
/// TLV records.
pub fn parse(bytes: &[u8]) -> Result<Vec<Field>> {
    parse_all(bytes, 0)
}

/// Decode exactly one field; trailing bytes are an error
pub fn parse_single(bytes: &[u8]) -> Result<Field> {
    let (field, consumed) = parse_one(bytes, 0)?;
    validate::tlv(
        consumed == bytes.len(),
        "DER input",
        "trailing bytes after field",
    )?;
    Ok(field)
}

fn parse_all(mut bytes: &[u8], depth: usize) -> Result<Vec<Field>> {
    let mut fields = Vec::new();
    while !bytes.is_empty() {
        let (field, consumed) = parse_one(bytes, depth)?;
        fields.push(field);
        bytes = &bytes[consumed..];
    }
    Ok(fields)
}

fn parse_one(bytes: &[u8], depth: usize) -> Result<(Field, usize)> {
    validate::remaining("tag", bytes.len(), 1)?;
    let tag = Tag::from_byte(bytes[0])
        .ok_or_else(|| Error::tlv("tag", format!("unrecognized tag 0x{:02X}", bytes[0])))?;

    let (len, length_octets) = read_length(&bytes[1..])?;
    let header = 1 + length_octets;
    validate::remaining(context_of(tag), bytes.len() - header, len)?;
    let content = &bytes[header..header + len];

    let field = match tag {
        Tag::Integer => Field::Integer(decode_integer(content)?),
        Tag::BitString => {
            validate::tlv(!content.is_empty(), "BIT STRING", "missing unused-bits octet")?;
            Field::BitString(BitString::with_unused_bits(content[1..].to_vec(), content[0])?)
        }
        Tag::OctetString => Field::OctetString(content.to_vec()),
        Tag::Null => {
            validate::tlv(content.is_empty(), "NULL", "non-empty content")?;
            Field::Null
        }
        Tag::ObjectIdentifier => Field::ObjectIdentifier(ObjectIdentifier::from_der_bytes(content)?),
        Tag::Sequence | Tag::ContextSpecific(_) => {
            validate::tlv(depth < MAX_DEPTH, context_of(tag), "nesting too deep")?;
            let children = parse_all(content, depth + 1)?;
            match tag {
                Tag::ContextSpecific(n) => Field::context(n, children),
                _ => Field::Sequence(children),
            }
        }
    };

    Ok((field, header + len))
}

/// Returns the content length and the number of length octets consumed
fn read_length(bytes: &[u8]) -> Result<(usize, usize)> {
    const CONTEXT: &str = "length";
    validate::remaining(CONTEXT, bytes.len(), 1)?;

    let first = bytes[0];
    if first < 0x80 {
        return Ok((first as usize, 1));
    }
    validate::tlv(first != 0x80, CONTEXT, "indefinite length")?;

    let n = (first & 0x7F) as usize;
    validate::tlv(
        n <= core::mem::size_of::<usize>(),
        CONTEXT,
        "length does not fit in usize",
    )?;
    validate::remaining(CONTEXT, bytes.len() - 1, n)?;

    let octets = &bytes[1..=n];
    validate::tlv(octets[0] != 0, CONTEXT, "non-minimal long-form length")?;
    let len = octets.iter().fold(0usize, |acc, &b| (acc << 8) | b as usize);
    validate::tlv(len >= 0x80, CONTEXT, "long form used for short length")?;

    Ok((len, 1 + n))
}

fn decode_integer(content: &[u8]) -> Result<BigInt> {
    const CONTEXT: &str = "INTEGER";
    validate::tlv(!content.is_empty(), CONTEXT, "empty content")?;
    if content.len() > 1 {
        let redundant_zero = content[0] == 0x00 && content[1] & 0x80 == 0;
        let redundant_ones = content[0] == 0xFF && content[1] & 0x80 != 0;
        validate::tlv(
            !redundant_zero && !redundant_ones,
            CONTEXT,
            "non-minimal encoding",
        )?;
    }
    Ok(BigInt::from_signed_bytes_be(content))
}

fn context_of(tag: Tag) -> &'static str {
    match tag {
        Tag::Integer => "INTEGER",
        Tag::BitString => "BIT STRING",
        Tag::OctetString => "OCTET STRING",
        Tag::Null => "NULL",
        Tag::ObjectIdentifier => "OBJECT IDENTIFIER",
        Tag::Sequence => "SEQUENCE",
        Tag::ContextSpecific(_) => "context-specific",
    }
}
