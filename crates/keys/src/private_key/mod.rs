//! Private keys: a secret scalar in `[1, N-1]` bound to its curve
//!
//! The secret is held as fixed-width big-endian bytes (the width of `N`) in
//! a buffer that is wiped on drop. The public key is derived on first use
//! and cached, so generating many keys costs no scalar multiplications.

use core::fmt;

use nodekey_algorithms::ec::{Curve, SEC1_UNCOMPRESSED};
use nodekey_algorithms::{field, BigInt};
use nodekey_api::{Error, Result, SerializeSecret};
use nodekey_internal::constant_time::ct_eq;
use num_traits::{One, Signed};
use once_cell::sync::OnceCell;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::envelope;
use crate::public_key::PublicKey;
use crate::text::{self, TextEnvelopeConfig};

/// An elliptic-curve private key
#[derive(Clone)]
pub struct PrivateKey {
    curve: &'static Curve,
    secret: Zeroizing<Vec<u8>>,
    public_key: OnceCell<PublicKey>,
}

impl PrivateKey {
    /// Draw a uniformly random key on `curve`.
    ///
    /// Candidates are masked to the bit length of `N` and rejected until one
    /// lands in `[1, N-1]`.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R, curve: &'static Curve) -> Result<Self> {
        let n = curve.n();
        let width = curve.scalar_size();
        let excess_bits = width * 8 - n.bits() as usize;
        let top_mask = 0xFFu8 >> excess_bits;

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let mut candidate = Zeroizing::new(vec![0u8; width]);
            rng.try_fill_bytes(&mut candidate)
                .map_err(|e| Error::RandomGeneration {
                    context: "private key generation",
                    message: e.to_string(),
                })?;
            candidate[0] &= top_mask;

            let value = field::from_be_bytes(&candidate);
            if value.is_positive() && &value < n {
                trace!(curve = curve.name(), attempts, "private key generated");
                return Ok(Self::from_parts(curve, candidate));
            }
        }
    }

    /// Draw a key on secp256k1 from the operating system's random source
    #[cfg(feature = "std")]
    pub fn generate_default() -> Result<Self> {
        Self::generate(
            &mut rand::rngs::OsRng,
            nodekey_algorithms::ec::default_curve(),
        )
    }

    /// Build a key from an explicit secret.
    ///
    /// Returns `SecretOutOfRange` unless `1 <= secret <= N-1`.
    pub fn new(curve: &'static Curve, secret: &BigInt) -> Result<Self> {
        if secret < &BigInt::one() || secret >= curve.n() {
            return Err(Error::SecretOutOfRange {
                context: "private key",
                curve: curve.name(),
            });
        }
        let bytes = Zeroizing::new(field::to_be_bytes_padded(secret, curve.scalar_size()));
        Ok(Self::from_parts(curve, bytes))
    }

    fn from_parts(curve: &'static Curve, secret: Zeroizing<Vec<u8>>) -> Self {
        Self {
            curve,
            secret,
            public_key: OnceCell::new(),
        }
    }

    /// The curve this key lives on
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// The secret scalar
    pub fn secret(&self) -> BigInt {
        field::from_be_bytes(&self.secret)
    }

    /// The secret as big-endian bytes, padded to the width of `N`
    pub fn secret_bytes(&self) -> &[u8] {
        &self.secret
    }

    /// The public key `s·G`
    pub fn public_key(&self) -> PublicKey {
        self.public_key
            .get_or_init(|| {
                let secret = self.secret();
                PublicKey::from_point(self.curve.generator().mul(&secret))
            })
            .clone()
    }

    /// Minimal big-endian hex of the secret, with a leading `00` byte when
    /// the top bit of the first byte is set
    pub fn to_hex(&self) -> Zeroizing<String> {
        let secret = self.secret();
        let (_, minimal) = secret.to_bytes_be();
        let mut bytes = Zeroizing::new(Vec::with_capacity(minimal.len() + 1));
        if minimal[0] & 0x80 != 0 {
            bytes.push(0);
        }
        bytes.extend_from_slice(&minimal);
        Zeroizing::new(hex::encode(&*bytes))
    }

    /// Parse a hex secret for `curve`.
    ///
    /// Odd-length input is read as if it had a leading zero.
    pub fn from_hex(hex_str: &str, curve: &'static Curve) -> Result<Self> {
        let trimmed = hex_str.trim();
        let padded = Zeroizing::new(if trimmed.len() % 2 == 1 {
            format!("0{}", trimmed)
        } else {
            trimmed.to_string()
        });
        let bytes = Zeroizing::new(hex::decode(&*padded).map_err(|e| Error::InvalidKeyFormat {
            context: "private key hex",
            message: e.to_string(),
        })?);
        Self::new(curve, &field::from_be_bytes(&bytes))
    }

    /// `ECPrivateKey` DER with the compressed public key embedded
    pub fn to_binary(&self) -> Zeroizing<Vec<u8>> {
        let public_key = self.public_key().to_encoded(true);
        envelope::encode_private_key(self.curve, &self.secret, &public_key)
    }

    /// Decode an `ECPrivateKey`.
    ///
    /// The secret must be in range for the curve named in the envelope, and
    /// the embedded public key must equal the one derived from the secret.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        let fields = envelope::decode_private_key(bytes).map_err(|e| {
            debug!(kind = e.kind(), "private key envelope rejected");
            e
        })?;

        let key = Self::new(fields.curve, &field::from_be_bytes(&fields.secret)).map_err(|e| {
            debug!(curve = fields.curve.name(), "private key envelope secret out of range");
            e.with_context("private key envelope")
        })?;

        // Compare in the same SEC1 form the envelope used
        let matches = match &fields.public_key {
            Some(embedded) => {
                let compressed = embedded.first() != Some(&SEC1_UNCOMPRESSED);
                ct_eq(key.public_key().to_encoded(compressed), embedded)
            }
            None => false,
        };
        if !matches {
            debug!(curve = fields.curve.name(), "embedded public key mismatch");
            return Err(Error::PublicKeyMismatch {
                context: "private key envelope",
            });
        }

        Ok(key)
    }

    /// `EC PRIVATE KEY` text envelope
    pub fn to_text(&self) -> Zeroizing<String> {
        self.to_text_with(&TextEnvelopeConfig::private_key())
    }

    /// Text envelope with an explicit layout
    pub fn to_text_with(&self, config: &TextEnvelopeConfig) -> Zeroizing<String> {
        Zeroizing::new(text::encode(config, &self.to_binary()))
    }

    /// Decode an `EC PRIVATE KEY` text envelope
    pub fn from_text(input: &str) -> Result<Self> {
        Self::from_text_with(input, &TextEnvelopeConfig::private_key())
    }

    /// Decode a text envelope with an explicit layout
    pub fn from_text_with(input: &str, config: &TextEnvelopeConfig) -> Result<Self> {
        let der = text::decode(config, input)?;
        Self::from_binary(&der)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        (core::ptr::eq(self.curve, other.curve) || self.curve == other.curve)
            && ct_eq(&*self.secret, &*other.secret)
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_binary(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.to_binary()
    }
}
