//! Constants for the binary and text key envelopes

/// Version flag carried by every private key envelope
pub const EC_PRIVATE_KEY_VERSION: u8 = 1;

/// Context-specific tag number wrapping the curve identifier
pub const EC_PRIVATE_KEY_PARAMETERS_TAG: u8 = 0;

/// Context-specific tag number wrapping the embedded public key
pub const EC_PRIVATE_KEY_PUBLIC_KEY_TAG: u8 = 1;

/// Object identifier arcs of `id-ecPublicKey` (1.2.840.10045.2.1)
pub const EC_PUBLIC_KEY_OID: &[u64] = &[1, 2, 840, 10045, 2, 1];

/// Text envelope label for private keys
pub const PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";

/// Text envelope label for public keys
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Number of base64 characters per text envelope body line
pub const TEXT_LINE_WIDTH: usize = 64;
