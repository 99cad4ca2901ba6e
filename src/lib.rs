//! # nodekey
//!
//! The cryptographic identity layer of a blockchain node: elliptic-curve key
//! generation, public key derivation, and DER / text key envelopes, built on
//! exact prime-field arithmetic.
//!
//! ## Features
//!
//! - `std` (default): operating-system randomness for
//!   `PrivateKey::generate_default`
//! - `keys` (default): private and public key types and their envelopes
//! - `serde`: serialization of `TextEnvelopeConfig` and object identifiers
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`nodekey-api`]: error taxonomy and encoding traits
//! - [`nodekey-params`]: curve and envelope constants
//! - [`nodekey-algorithms`]: field arithmetic, curves, points, DER codec
//! - [`nodekey-keys`]: private/public keys and envelopes
//!
//! ## Example
//!
//! ```no_run
//! use nodekey::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let key = PrivateKey::generate(&mut OsRng, secp256k1())?;
//! let pem = key.to_text();
//! let restored = PrivateKey::from_text(&pem)?;
//! assert_eq!(restored.public_key(), key.public_key());
//! # Ok::<(), nodekey::api::Error>(())
//! ```

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use nodekey_algorithms as algorithms;
pub use nodekey_api as api;
pub use nodekey_internal as internal;
pub use nodekey_params as params;

// Feature-gated re-exports
#[cfg(feature = "keys")]
pub use nodekey_keys as keys;

// Secret-carrying return values are wrapped in these
pub use zeroize;

#[cfg(feature = "keys")]
pub use rand;

/// Common imports for nodekey users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export encoding traits
    pub use crate::api::{Serialize, SerializeSecret};

    // Curves and points
    pub use crate::algorithms::ec::{
        default_curve, lookup, lookup_by_name, prime256v1, secp256k1, Curve, Point,
    };
    pub use crate::algorithms::{BigInt, ObjectIdentifier};
    pub use zeroize::Zeroizing;

    #[cfg(feature = "keys")]
    pub use crate::keys::{PrivateKey, PublicKey, TextEnvelopeConfig};
}
