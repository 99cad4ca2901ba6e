//! Elliptic curve primitives
//!
//! Curves are short Weierstrass curves `y^2 = x^3 + a*x + b` over a prime
//! field, with arithmetic on arbitrary-precision integers so that any curve
//! in the registry shares one implementation. Points are affine; the point
//! at infinity is an explicit variant rather than a sentinel coordinate.

mod curve;
mod point;
pub mod registry;

pub use curve::Curve;
pub use point::{
    Point, SEC1_COMPRESSED_EVEN, SEC1_COMPRESSED_ODD, SEC1_IDENTITY, SEC1_UNCOMPRESSED,
};
pub use registry::{
    curves, default_curve, lookup, lookup_by_name, prime256v1, secp256k1, CurveRegistry,
};
