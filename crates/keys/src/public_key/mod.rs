//! Public keys: a curve point together with its curve

use core::fmt;

use nodekey_algorithms::ec::{Curve, Point};
use nodekey_api::{Error, Result, ResultExt, Serialize};

use crate::envelope;
use crate::text::{self, TextEnvelopeConfig};

/// An elliptic-curve public key `Q = s·G`.
///
/// Never the point at infinity.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// Wrap a curve point as a public key.
    ///
    /// Returns an error for the point at infinity.
    pub fn new(point: Point) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidPoint {
                context: "public key",
                message: "public key cannot be the point at infinity".to_string(),
            });
        }
        Ok(Self { point })
    }

    pub(crate) fn from_point(point: Point) -> Self {
        debug_assert!(!point.is_identity());
        Self { point }
    }

    /// The curve this key lives on
    pub fn curve(&self) -> &'static Curve {
        self.point.curve()
    }

    /// The underlying point
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// SEC1 encoding of the point, compressed (`0x02`/`0x03 || x`) or
    /// uncompressed (`0x04 || x || y`)
    pub fn to_encoded(&self, compressed: bool) -> Vec<u8> {
        self.point.to_sec1(compressed)
    }

    /// Decode a SEC1 point on `curve`
    pub fn from_encoded(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let point = Point::from_sec1(curve, bytes).with_context("public key")?;
        Self::new(point)
    }

    /// Lowercase hex of the SEC1 encoding
    pub fn to_hex(&self, compressed: bool) -> String {
        hex::encode(self.to_encoded(compressed))
    }

    /// Decode a hex SEC1 point on `curve`
    pub fn from_hex(hex_str: &str, curve: &'static Curve) -> Result<Self> {
        let bytes = hex::decode(hex_str.trim()).map_err(|e| Error::InvalidKeyFormat {
            context: "public key hex",
            message: e.to_string(),
        })?;
        Self::from_encoded(curve, &bytes)
    }

    /// `SubjectPublicKeyInfo` DER with a compressed point
    pub fn to_binary(&self) -> Vec<u8> {
        envelope::encode_public_key(self.curve(), &self.to_encoded(true))
    }

    /// Decode a `SubjectPublicKeyInfo`; the point may be compressed or not
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let (curve, point) = envelope::decode_public_key(bytes)?;
        Self::from_encoded(curve, &point)
    }

    /// `PUBLIC KEY` text envelope
    pub fn to_text(&self) -> String {
        self.to_text_with(&TextEnvelopeConfig::public_key())
    }

    /// Text envelope with an explicit layout
    pub fn to_text_with(&self, config: &TextEnvelopeConfig) -> String {
        text::encode(config, &self.to_binary())
    }

    /// Decode a `PUBLIC KEY` text envelope
    pub fn from_text(input: &str) -> Result<Self> {
        Self::from_text_with(input, &TextEnvelopeConfig::public_key())
    }

    /// Decode a text envelope with an explicit layout
    pub fn from_text_with(input: &str, config: &TextEnvelopeConfig) -> Result<Self> {
        let der = text::decode(config, input)?;
        Self::from_binary(&der)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve().name())
            .field("point", &self.to_hex(true))
            .finish()
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_binary(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_binary()
    }
}
