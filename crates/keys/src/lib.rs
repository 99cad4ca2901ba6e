//! Elliptic-curve keys for node identities
//!
//! [`PrivateKey`] holds a secret scalar bound to a curve from the registry
//! and derives its [`PublicKey`] on demand. Both serialize to DER envelopes
//! (`ECPrivateKey` and `SubjectPublicKeyInfo`) and to text envelopes built
//! on them, laid out by a [`TextEnvelopeConfig`].
//!
//! Randomness is always supplied by the caller:
//!
//! ```no_run
//! use nodekey_algorithms::ec::secp256k1;
//! use nodekey_keys::PrivateKey;
//! use rand::rngs::OsRng;
//!
//! let key = PrivateKey::generate(&mut OsRng, secp256k1())?;
//! let restored = PrivateKey::from_text(&key.to_text())?;
//! assert_eq!(key, restored);
//! # Ok::<(), nodekey_api::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod envelope;
pub mod private_key;
pub mod public_key;
pub mod text;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
pub use text::TextEnvelopeConfig;

pub use nodekey_api::{Error, Result};
