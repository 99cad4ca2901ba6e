//! Error type definitions for key and envelope operations

use thiserror::Error as ThisError;

/// Primary error type returned to collaborators.
///
/// Every variant is terminal: nothing in this workspace retries, and a
/// cryptographic inconsistency is never defaulted or patched over.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Secret scalar is not in `[1, N-1]` for its curve
    #[error("{context}: secret is outside [1, N-1] for curve {curve}")]
    SecretOutOfRange {
        context: &'static str,
        curve: &'static str,
    },

    /// Curve identifier is not present in the registry
    #[error("{context}: unknown curve identifier {identifier}")]
    UnknownCurve {
        context: &'static str,
        identifier: String,
    },

    /// Structurally invalid tag-length-value encoding
    #[error("Malformed TLV encoding: {context}: {message}")]
    MalformedTlv {
        context: &'static str,
        message: String,
    },

    /// Wrong version flag, or a required field is missing or misplaced
    #[error("Invalid key format: {context}: {message}")]
    InvalidKeyFormat {
        context: &'static str,
        message: String,
    },

    /// Embedded public key disagrees with the one derived from the secret
    #[error("{context}: embedded public key does not match the secret")]
    PublicKeyMismatch { context: &'static str },

    /// Text wrapper markers absent, misordered, or body not base64
    #[error("Invalid envelope: {context}: {message}")]
    InvalidEnvelope {
        context: &'static str,
        message: String,
    },

    /// Untrusted bytes that do not describe a point on the curve
    #[error("Invalid point: {context}: {message}")]
    InvalidPoint {
        context: &'static str,
        message: String,
    },

    /// Arithmetic outside its domain, such as inverting zero
    #[error("Domain error: {context}: {message}")]
    DomainError {
        context: &'static str,
        message: String,
    },

    /// The injected random source failed
    #[error("Random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for key and envelope operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::SecretOutOfRange { curve, .. } => Self::SecretOutOfRange { context, curve },
            Self::UnknownCurve { identifier, .. } => Self::UnknownCurve { context, identifier },
            Self::MalformedTlv { message, .. } => Self::MalformedTlv { context, message },
            Self::InvalidKeyFormat { message, .. } => Self::InvalidKeyFormat { context, message },
            Self::PublicKeyMismatch { .. } => Self::PublicKeyMismatch { context },
            Self::InvalidEnvelope { message, .. } => Self::InvalidEnvelope { context, message },
            Self::InvalidPoint { message, .. } => Self::InvalidPoint { context, message },
            Self::DomainError { message, .. } => Self::DomainError { context, message },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
        }
    }

    /// Short stable name of the error kind, for logs and metrics labels
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SecretOutOfRange { .. } => "secret_out_of_range",
            Self::UnknownCurve { .. } => "unknown_curve",
            Self::MalformedTlv { .. } => "malformed_tlv",
            Self::InvalidKeyFormat { .. } => "invalid_key_format",
            Self::PublicKeyMismatch { .. } => "public_key_mismatch",
            Self::InvalidEnvelope { .. } => "invalid_envelope",
            Self::InvalidPoint { .. } => "invalid_point",
            Self::DomainError { .. } => "domain_error",
            Self::RandomGeneration { .. } => "random_generation",
        }
    }
}
