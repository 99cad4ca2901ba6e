//! ASN.1 object identifiers

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{validate, Error, Result};

/// An object identifier such as `1.3.132.0.10`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ObjectIdentifier(Vec<u64>);

impl ObjectIdentifier {
    /// Build an identifier from its arcs.
    ///
    /// At least two arcs are required, the first must be 0, 1 or 2, and the
    /// second must be below 40 unless the first is 2.
    pub fn new(arcs: &[u64]) -> Result<Self> {
        validate::parameter(arcs.len() >= 2, "oid", "needs at least two arcs")?;
        validate::parameter(arcs[0] <= 2, "oid", "first arc must be 0, 1 or 2")?;
        validate::parameter(
            arcs[0] == 2 || arcs[1] < 40,
            "oid",
            "second arc must be below 40",
        )?;
        validate::parameter(
            arcs[1] <= u64::MAX - 80,
            "oid",
            "second arc too large",
        )?;
        Ok(Self(arcs.to_vec()))
    }

    /// The arcs of this identifier
    pub fn arcs(&self) -> &[u64] {
        &self.0
    }

    /// DER content octets (without tag and length)
    pub fn to_der_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() + 4);
        encode_subidentifier(self.0[0] * 40 + self.0[1], &mut out);
        for &arc in &self.0[2..] {
            encode_subidentifier(arc, &mut out);
        }
        out
    }

    /// Parse DER content octets (without tag and length)
    pub fn from_der_bytes(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "OBJECT IDENTIFIER";
        validate::tlv(!bytes.is_empty(), CONTEXT, "empty content")?;

        let mut arcs = Vec::with_capacity(bytes.len() + 1);
        let mut value: u64 = 0;
        let mut started = false;
        for &byte in bytes {
            validate::tlv(
                started || byte != 0x80,
                CONTEXT,
                "non-minimal subidentifier",
            )?;
            validate::tlv(value >> 57 == 0, CONTEXT, "subidentifier overflows 64 bits")?;
            value = (value << 7) | u64::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                if arcs.is_empty() {
                    let first = (value / 40).min(2);
                    arcs.push(first);
                    arcs.push(value - first * 40);
                } else {
                    arcs.push(value);
                }
                value = 0;
                started = false;
            } else {
                started = true;
            }
        }
        validate::tlv(!started, CONTEXT, "truncated subidentifier")?;
        Ok(Self(arcs))
    }
}

fn encode_subidentifier(mut value: u64, out: &mut Vec<u8>) {
    let mut groups = [0u8; 10];
    let mut n = 0;
    loop {
        groups[n] = (value & 0x7F) as u8;
        n += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        let continuation = if i == 0 { 0x00 } else { 0x80 };
        out.push(groups[i] | continuation);
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arc) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", arc)?;
        }
        Ok(())
    }
}

impl FromStr for ObjectIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let arcs = s
            .split('.')
            .map(|arc| {
                arc.parse::<u64>()
                    .map_err(|_| Error::param("oid", format!("invalid arc '{}'", arc)))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&arcs)
    }
}

impl TryFrom<String> for ObjectIdentifier {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ObjectIdentifier> for String {
    fn from(oid: ObjectIdentifier) -> Self {
        oid.to_string()
    }
}
