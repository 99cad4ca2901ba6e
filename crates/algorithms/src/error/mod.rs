//! Error handling for field, curve and codec primitives

use std::borrow::Cow;

use nodekey_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for field, curve and codec primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Arithmetic outside its domain
    #[error("Domain error in {operation}: {details}")]
    Domain {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Structurally invalid DER input
    #[error("Malformed TLV in {context}: {details}")]
    MalformedTlv {
        /// Element being decoded
        context: &'static str,
        /// What was wrong with it
        details: Cow<'static, str>,
    },

    /// Bytes or coordinates that do not describe a point on the curve
    #[error("Invalid point on {curve}: {details}")]
    InvalidPoint {
        /// Curve the point was decoded for
        curve: &'static str,
        /// Why the point was rejected
        details: &'static str,
    },

    /// Curve identifier missing from the registry
    #[error("Unknown curve identifier {identifier}")]
    UnknownCurve {
        /// Dotted form of the identifier that was looked up
        identifier: String,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create a MalformedTlv error
    pub fn tlv<D: Into<Cow<'static, str>>>(context: &'static str, details: D) -> Self {
        Error::MalformedTlv {
            context,
            details: details.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidKeyFormat {
                context: "parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Domain { operation, details } => CoreError::DomainError {
                context: operation,
                message: details.to_string(),
            },
            Error::MalformedTlv { context, details } => CoreError::MalformedTlv {
                context,
                message: details.into_owned(),
            },
            Error::InvalidPoint { curve, details } => CoreError::InvalidPoint {
                context: curve,
                message: details.to_string(),
            },
            Error::UnknownCurve { identifier } => CoreError::UnknownCurve {
                context: "curve registry",
                identifier,
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use nodekey_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
