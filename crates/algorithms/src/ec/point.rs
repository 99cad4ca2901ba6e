//! Affine points and the group law

use core::fmt;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{validate, Error, Result};
use crate::field;

use super::curve::Curve;

/// SEC1 prefix of the point at infinity
pub const SEC1_IDENTITY: u8 = 0x00;
/// SEC1 prefix of a compressed point with even `y`
pub const SEC1_COMPRESSED_EVEN: u8 = 0x02;
/// SEC1 prefix of a compressed point with odd `y`
pub const SEC1_COMPRESSED_ODD: u8 = 0x03;
/// SEC1 prefix of an uncompressed point
pub const SEC1_UNCOMPRESSED: u8 = 0x04;

#[derive(Clone, PartialEq, Eq)]
enum Coordinates {
    Infinity,
    Affine { x: BigInt, y: BigInt },
}

/// A point on a short Weierstrass curve in affine coordinates.
///
/// Every point produced by the group law lies on its curve. Points decoded
/// from untrusted bytes are validated by [`Point::new`] and
/// [`Point::from_sec1`].
#[derive(Clone)]
pub struct Point {
    curve: &'static Curve,
    coords: Coordinates,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.same_curve(other) && self.coords == other.coords
    }
}

impl Eq for Point {}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Coordinates::Infinity => write!(f, "Point({}, infinity)", self.curve.name()),
            Coordinates::Affine { x, y } => {
                write!(f, "Point({}, x={:x}, y={:x})", self.curve.name(), x, y)
            }
        }
    }
}

impl Point {
    /// The point at infinity of `curve`
    pub fn identity(curve: &'static Curve) -> Self {
        Point {
            curve,
            coords: Coordinates::Infinity,
        }
    }

    /// Create a point from affine coordinates.
    ///
    /// Returns an error if a coordinate is outside `[0, p-1]` or the
    /// coordinates don't satisfy the curve equation.
    pub fn new(curve: &'static Curve, x: BigInt, y: BigInt) -> Result<Self> {
        let p = curve.p();
        validate::point(
            !x.is_negative() && &x < p && !y.is_negative() && &y < p,
            curve.name(),
            "coordinate out of field range",
        )?;
        validate::point(
            curve.contains(&x, &y),
            curve.name(),
            "coordinates do not satisfy curve equation",
        )?;
        Ok(Point {
            curve,
            coords: Coordinates::Affine { x, y },
        })
    }

    /// Build a point the caller already knows to be on the curve
    pub(crate) fn from_affine(curve: &'static Curve, x: BigInt, y: BigInt) -> Self {
        debug_assert!(curve.contains(&x, &y), "point not on {}", curve.name());
        Point {
            curve,
            coords: Coordinates::Affine { x, y },
        }
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// Check if this point is the point at infinity.
    pub fn is_identity(&self) -> bool {
        matches!(self.coords, Coordinates::Infinity)
    }

    /// Check if this point satisfies its curve equation.
    pub fn is_on_curve(&self) -> bool {
        match &self.coords {
            Coordinates::Infinity => true,
            Coordinates::Affine { x, y } => self.curve.contains(x, y),
        }
    }

    /// Affine x-coordinate, `None` at infinity
    pub fn x(&self) -> Option<&BigInt> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, `None` at infinity
    pub fn y(&self) -> Option<&BigInt> {
        match &self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { y, .. } => Some(y),
        }
    }

    /// Add two points using the group law.
    ///
    /// # Panics
    ///
    /// If the points belong to different curves.
    pub fn add(&self, other: &Self) -> Self {
        assert!(self.same_curve(other), "cannot add points on different curves");
        let (x1, y1, x2, y2) = match (&self.coords, &other.coords) {
            (Coordinates::Infinity, _) => return other.clone(),
            (_, Coordinates::Infinity) => return self.clone(),
            (Coordinates::Affine { x: x1, y: y1 }, Coordinates::Affine { x: x2, y: y2 }) => {
                (x1, y1, x2, y2)
            }
        };

        let p = self.curve.p();
        if x1 == x2 {
            // Same x: either P + (-P) or P + P
            if field::add(y1, y2, p).is_zero() {
                return Self::identity(self.curve);
            }
            return self.double();
        }

        // λ = (y₂ − y₁) / (x₂ − x₁)
        let lambda = field::mul(
            &field::sub(y2, y1, p),
            &invert(&field::sub(x2, x1, p), p),
            p,
        );
        self.chord(&lambda, x1, y1, x2)
    }

    /// Double a point (add it to itself).
    pub fn double(&self) -> Self {
        let (x, y) = match &self.coords {
            Coordinates::Infinity => return self.clone(),
            Coordinates::Affine { x, y } => (x, y),
        };
        // Vertical tangent
        if y.is_zero() {
            return Self::identity(self.curve);
        }

        let p = self.curve.p();
        // λ = (3·x² + a) / (2·y)
        let x_sq = field::mul(x, x, p);
        let numerator = field::add(
            &field::mul(&BigInt::from(3u32), &x_sq, p),
            self.curve.a(),
            p,
        );
        let lambda = field::mul(&numerator, &invert(&field::add(y, y, p), p), p);
        self.chord(&lambda, x, y, x)
    }

    /// The additive inverse `(x, -y)`
    pub fn negate(&self) -> Self {
        match &self.coords {
            Coordinates::Infinity => self.clone(),
            Coordinates::Affine { x, y } => {
                Self::from_affine(self.curve, x.clone(), field::neg(y, self.curve.p()))
            }
        }
    }

    /// Scalar multiplication: compute `k * self` with `k` reduced modulo `n`.
    ///
    /// Negative and overflowing scalars are accepted. Uses MSB-first
    /// double-and-add over the bytes of the reduced scalar.
    ///
    /// # Panics
    ///
    /// If `n` is not positive, or the result falls off the curve.
    pub fn scalar_multiply(&self, k: &BigInt, n: &BigInt) -> Self {
        assert!(n.is_positive(), "scalar modulus must be positive");
        let k = field::reduce(k, n);
        let mut result = Self::identity(self.curve);
        if k.is_zero() || self.is_identity() {
            return result;
        }

        let (_, scalar_bytes) = k.to_bytes_be();
        for byte in scalar_bytes.iter() {
            for bit_pos in (0..8).rev() {
                result = result.double();
                if (byte >> bit_pos) & 1 == 1 {
                    result = result.add(self);
                }
            }
        }

        assert!(
            result.is_on_curve(),
            "scalar multiplication left {}",
            self.curve.name()
        );
        result
    }

    /// `k * self` with `k` reduced modulo the curve order
    pub fn mul(&self, k: &BigInt) -> Self {
        self.scalar_multiply(k, self.curve.n())
    }

    /// SEC1 encoding: `0x04 || x || y` or `0x02/0x03 || x`, with
    /// coordinates padded to the field width. Infinity is the single
    /// byte `0x00`.
    pub fn to_sec1(&self, compressed: bool) -> Vec<u8> {
        let (x, y) = match &self.coords {
            Coordinates::Infinity => return vec![SEC1_IDENTITY],
            Coordinates::Affine { x, y } => (x, y),
        };
        let width = self.curve.field_size();
        let mut out = Vec::with_capacity(1 + 2 * width);
        if compressed {
            out.push(if field::is_even(y) {
                SEC1_COMPRESSED_EVEN
            } else {
                SEC1_COMPRESSED_ODD
            });
            out.extend_from_slice(&field::to_be_bytes_padded(x, width));
        } else {
            out.push(SEC1_UNCOMPRESSED);
            out.extend_from_slice(&field::to_be_bytes_padded(x, width));
            out.extend_from_slice(&field::to_be_bytes_padded(y, width));
        }
        out
    }

    /// Decode a SEC1 point, compressed or uncompressed.
    ///
    /// Returns an error if the bytes don't represent a valid point.
    pub fn from_sec1(curve: &'static Curve, bytes: &[u8]) -> Result<Self> {
        let name = curve.name();
        let width = curve.field_size();
        validate::point(!bytes.is_empty(), name, "empty encoding")?;

        match bytes[0] {
            SEC1_IDENTITY => {
                validate::point(bytes.len() == 1, name, "trailing bytes after identity")?;
                Ok(Self::identity(curve))
            }
            SEC1_UNCOMPRESSED => {
                validate::point(
                    bytes.len() == 1 + 2 * width,
                    name,
                    "invalid uncompressed point length",
                )?;
                let x = field::from_be_bytes(&bytes[1..1 + width]);
                let y = field::from_be_bytes(&bytes[1 + width..]);
                Self::new(curve, x, y)
            }
            prefix @ (SEC1_COMPRESSED_EVEN | SEC1_COMPRESSED_ODD) => {
                validate::point(
                    bytes.len() == 1 + width,
                    name,
                    "invalid compressed point length",
                )?;
                let x = field::from_be_bytes(&bytes[1..]);
                validate::point(&x < curve.p(), name, "coordinate out of field range")?;

                let y = field::sqrt(&curve.rhs(&x), curve.p())
                    .ok_or(Error::InvalidPoint {
                        curve: name,
                        details: "x-coordinate has no point on the curve",
                    })?;
                let want_even = prefix == SEC1_COMPRESSED_EVEN;
                let y = if field::is_even(&y) == want_even {
                    y
                } else {
                    field::neg(&y, curve.p())
                };
                // y = 0 has only the even root
                validate::point(field::is_even(&y) == want_even, name, "parity has no root")?;
                Ok(Self::from_affine(curve, x, y))
            }
            _ => Err(Error::InvalidPoint {
                curve: name,
                details: "unknown point prefix",
            }),
        }
    }

    fn same_curve(&self, other: &Self) -> bool {
        core::ptr::eq(self.curve, other.curve) || self.curve == other.curve
    }

    // x₃ = λ² − x₁ − x₂, y₃ = λ·(x₁ − x₃) − y₁
    fn chord(&self, lambda: &BigInt, x1: &BigInt, y1: &BigInt, x2: &BigInt) -> Self {
        let p = self.curve.p();
        let x3 = field::sub(&field::sub(&field::mul(lambda, lambda, p), x1, p), x2, p);
        let y3 = field::sub(&field::mul(lambda, &field::sub(x1, &x3, p), p), y1, p);
        Self::from_affine(self.curve, x3, y3)
    }
}

fn invert(denominator: &BigInt, p: &BigInt) -> BigInt {
    field::mod_inverse(denominator, p).expect("group law denominator is nonzero")
}
