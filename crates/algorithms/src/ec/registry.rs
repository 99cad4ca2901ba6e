//! Read-only registry of supported curves

use once_cell::sync::Lazy;
use tracing::debug;

use nodekey_params::{PRIME256V1, SUPPORTED_CURVES};

use crate::der::ObjectIdentifier;
use crate::error::{Error, Result};

use super::curve::Curve;

/// The supported curves, keyed by object identifier.
///
/// Built once on first use from the parameter tables and never mutated.
#[derive(Debug)]
pub struct CurveRegistry {
    curves: Vec<Curve>,
}

static REGISTRY: Lazy<CurveRegistry> = Lazy::new(|| {
    let curves: Vec<Curve> = SUPPORTED_CURVES
        .iter()
        .map(|constants| {
            Curve::from_constants(constants).expect("built-in curve parameters are valid")
        })
        .collect();
    debug!(
        count = curves.len(),
        default = curves[0].name(),
        "curve registry initialized"
    );
    CurveRegistry { curves }
});

impl CurveRegistry {
    /// The process-wide registry
    pub fn global() -> &'static CurveRegistry {
        &REGISTRY
    }

    /// Find the curve named by `oid`
    pub fn lookup(&'static self, oid: &ObjectIdentifier) -> Result<&'static Curve> {
        self.curves
            .iter()
            .find(|curve| curve.oid() == oid)
            .ok_or_else(|| Error::UnknownCurve {
                identifier: oid.to_string(),
            })
    }

    /// Find a curve by standard name or alias, ignoring ASCII case
    pub fn lookup_by_name(&'static self, name: &str) -> Result<&'static Curve> {
        self.curves
            .iter()
            .find(|curve| curve.is_named(name))
            .ok_or_else(|| Error::UnknownCurve {
                identifier: name.to_string(),
            })
    }

    /// The first registered curve
    pub fn default_curve(&'static self) -> &'static Curve {
        &self.curves[0]
    }

    /// Every registered curve, default first
    pub fn curves(&'static self) -> impl Iterator<Item = &'static Curve> {
        self.curves.iter()
    }
}

/// Find the curve named by `oid` in the global registry
pub fn lookup(oid: &ObjectIdentifier) -> Result<&'static Curve> {
    CurveRegistry::global().lookup(oid)
}

/// Find a curve by name in the global registry
pub fn lookup_by_name(name: &str) -> Result<&'static Curve> {
    CurveRegistry::global().lookup_by_name(name)
}

/// secp256k1, the default curve
pub fn default_curve() -> &'static Curve {
    CurveRegistry::global().default_curve()
}

/// Every curve in the global registry
pub fn curves() -> impl Iterator<Item = &'static Curve> {
    CurveRegistry::global().curves()
}

/// secp256k1
pub fn secp256k1() -> &'static Curve {
    default_curve()
}

/// prime256v1 / secp256r1 / P-256
pub fn prime256v1() -> &'static Curve {
    lookup_by_name(PRIME256V1.name).expect("prime256v1 is a supported curve")
}
