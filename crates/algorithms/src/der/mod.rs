//! Tag-length-value codec for the DER subset used by key envelopes
//!
//! Decoded input is an explicit tree of [`Field`] values: every node states
//! its own kind, so consumers match on variants instead of guessing what a
//! nested list holds. Supported universal types are INTEGER, BIT STRING,
//! OCTET STRING, NULL, OBJECT IDENTIFIER and SEQUENCE, plus constructed
//! context-specific tags `[0]` to `[30]`.
//!
//! Decoding is strict: non-minimal lengths and integers, indefinite
//! lengths, trailing bytes and unknown tags are all rejected.

mod decode;
mod encode;
pub mod oid;

pub use decode::{parse, parse_single, MAX_DEPTH};
pub use encode::{encode_constructed, encode_length, encode_primitive};
pub use oid::ObjectIdentifier;

use num_bigint::BigInt;
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Identifier octet of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Universal 2
    Integer,
    /// Universal 3
    BitString,
    /// Universal 4
    OctetString,
    /// Universal 5
    Null,
    /// Universal 6
    ObjectIdentifier,
    /// Universal 16, constructed
    Sequence,
    /// Context-specific, constructed, tag number 0..=30
    ContextSpecific(u8),
}

impl Tag {
    const CONTEXT_CONSTRUCTED: u8 = 0xA0;
    const TAG_NUMBER_MASK: u8 = 0x1F;
    /// Highest tag number that fits in the low-tag-number form
    pub const MAX_CONTEXT_NUMBER: u8 = 30;

    /// The identifier octet.
    ///
    /// Panics for a context-specific tag number above
    /// [`MAX_CONTEXT_NUMBER`](Self::MAX_CONTEXT_NUMBER).
    pub fn byte(self) -> u8 {
        match self {
            Tag::Integer => 0x02,
            Tag::BitString => 0x03,
            Tag::OctetString => 0x04,
            Tag::Null => 0x05,
            Tag::ObjectIdentifier => 0x06,
            Tag::Sequence => 0x30,
            Tag::ContextSpecific(n) => {
                assert!(
                    n <= Self::MAX_CONTEXT_NUMBER,
                    "context tag number {} needs the high-tag-number form",
                    n
                );
                Self::CONTEXT_CONSTRUCTED | n
            }
        }
    }

    /// Recognize an identifier octet, `None` for anything unsupported
    pub fn from_byte(byte: u8) -> Option<Tag> {
        match byte {
            0x02 => Some(Tag::Integer),
            0x03 => Some(Tag::BitString),
            0x04 => Some(Tag::OctetString),
            0x05 => Some(Tag::Null),
            0x06 => Some(Tag::ObjectIdentifier),
            0x30 => Some(Tag::Sequence),
            b if b & !Self::TAG_NUMBER_MASK == Self::CONTEXT_CONSTRUCTED
                && b & Self::TAG_NUMBER_MASK <= Self::MAX_CONTEXT_NUMBER =>
            {
                Some(Tag::ContextSpecific(b & Self::TAG_NUMBER_MASK))
            }
            _ => None,
        }
    }

    /// Whether the content of this tag is a list of nested fields
    pub fn is_constructed(self) -> bool {
        matches!(self, Tag::Sequence | Tag::ContextSpecific(_))
    }
}

/// A BIT STRING value: the count of unused trailing bits plus the octets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    unused_bits: u8,
    bytes: Vec<u8>,
}

impl BitString {
    /// A whole-octet bit string
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            unused_bits: 0,
            bytes,
        }
    }

    /// A bit string whose last `unused_bits` bits are padding.
    ///
    /// The padding bits must be zero and `unused_bits` must be 0 for an empty
    /// string, as DER requires.
    pub fn with_unused_bits(bytes: Vec<u8>, unused_bits: u8) -> Result<Self> {
        const CONTEXT: &str = "BIT STRING";
        validate::tlv(unused_bits <= 7, CONTEXT, "more than 7 unused bits")?;
        validate::tlv(
            !bytes.is_empty() || unused_bits == 0,
            CONTEXT,
            "unused bits in empty string",
        )?;
        if let Some(last) = bytes.last() {
            let mask = (1u8 << unused_bits) - 1;
            validate::tlv(last & mask == 0, CONTEXT, "non-zero padding bits")?;
        }
        Ok(Self { unused_bits, bytes })
    }

    /// Number of padding bits at the end of the last octet
    pub fn unused_bits(&self) -> u8 {
        self.unused_bits
    }

    /// The octets, including any padding bits
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// DER content octets: the unused-bit count followed by the octets
    pub fn to_der_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.push(self.unused_bits);
        out.extend_from_slice(&self.bytes);
        out
    }
}

/// A decoded or to-be-encoded TLV field.
///
/// Constructed variants own their children; the tree has no sharing and no
/// back references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Two's-complement INTEGER
    Integer(BigInt),
    /// OCTET STRING
    OctetString(Vec<u8>),
    /// OBJECT IDENTIFIER
    ObjectIdentifier(ObjectIdentifier),
    /// BIT STRING
    BitString(BitString),
    /// NULL
    Null,
    /// SEQUENCE of fields
    Sequence(Vec<Field>),
    /// Constructed context-specific field `[tag]`
    ContextSpecific {
        /// Tag number, 0..=30
        tag: u8,
        /// Nested fields
        children: Vec<Field>,
    },
}

impl Field {
    /// Shorthand for a context-specific field.
    ///
    /// Panics if `tag` exceeds [`Tag::MAX_CONTEXT_NUMBER`].
    pub fn context(tag: u8, children: Vec<Field>) -> Self {
        assert!(
            tag <= Tag::MAX_CONTEXT_NUMBER,
            "context tag number {} out of range",
            tag
        );
        Field::ContextSpecific { tag, children }
    }

    /// The tag this field encodes with
    pub fn tag(&self) -> Tag {
        match self {
            Field::Integer(_) => Tag::Integer,
            Field::OctetString(_) => Tag::OctetString,
            Field::ObjectIdentifier(_) => Tag::ObjectIdentifier,
            Field::BitString(_) => Tag::BitString,
            Field::Null => Tag::Null,
            Field::Sequence(_) => Tag::Sequence,
            Field::ContextSpecific { tag, .. } => Tag::ContextSpecific(*tag),
        }
    }

    /// Human-readable kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Field::Integer(_) => "INTEGER",
            Field::OctetString(_) => "OCTET STRING",
            Field::ObjectIdentifier(_) => "OBJECT IDENTIFIER",
            Field::BitString(_) => "BIT STRING",
            Field::Null => "NULL",
            Field::Sequence(_) => "SEQUENCE",
            Field::ContextSpecific { .. } => "context-specific",
        }
    }

    /// Encode this field and all of its children
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Field::Integer(value) => encode_primitive(Tag::Integer, &encode::integer_content(value)),
            Field::OctetString(bytes) => encode_primitive(Tag::OctetString, bytes),
            Field::ObjectIdentifier(oid) => {
                encode_primitive(Tag::ObjectIdentifier, &oid.to_der_bytes())
            }
            Field::BitString(bits) => encode_primitive(Tag::BitString, &bits.to_der_bytes()),
            Field::Null => encode_primitive(Tag::Null, &[]),
            Field::Sequence(children) | Field::ContextSpecific { children, .. } => {
                let encoded: Vec<Vec<u8>> = children.iter().map(Field::encode).collect();
                let parts: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
                encode_constructed(self.tag(), &parts)
            }
        }
    }

    /// The value of an INTEGER field
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Field::Integer(v) => Some(v),
            _ => None,
        }
    }

    /// The octets of an OCTET STRING field
    pub fn as_octet_string(&self) -> Option<&[u8]> {
        match self {
            Field::OctetString(v) => Some(v),
            _ => None,
        }
    }

    /// The identifier of an OBJECT IDENTIFIER field
    pub fn as_object_identifier(&self) -> Option<&ObjectIdentifier> {
        match self {
            Field::ObjectIdentifier(v) => Some(v),
            _ => None,
        }
    }

    /// The value of a BIT STRING field
    pub fn as_bit_string(&self) -> Option<&BitString> {
        match self {
            Field::BitString(v) => Some(v),
            _ => None,
        }
    }

    /// The children of a SEQUENCE field
    pub fn as_sequence(&self) -> Option<&[Field]> {
        match self {
            Field::Sequence(v) => Some(v),
            _ => None,
        }
    }

    /// The children of a context-specific field with the given tag number
    pub fn as_context(&self, number: u8) -> Option<&[Field]> {
        match self {
            Field::ContextSpecific { tag, children } if *tag == number => Some(children),
            _ => None,
        }
    }
}

// Byte-carrying variants are wiped; integers are replaced by zero.
impl Zeroize for Field {
    fn zeroize(&mut self) {
        match self {
            Field::Integer(v) => *v = BigInt::default(),
            Field::OctetString(bytes) => bytes.zeroize(),
            Field::BitString(bits) => bits.bytes.zeroize(),
            Field::Sequence(children) | Field::ContextSpecific { children, .. } => {
                children.iter_mut().for_each(Zeroize::zeroize)
            }
            Field::ObjectIdentifier(_) | Field::Null => {}
        }
    }
}
