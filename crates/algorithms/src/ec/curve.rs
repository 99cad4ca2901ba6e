//! Short Weierstrass curve parameters

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use nodekey_params::CurveConstants;

use crate::der::ObjectIdentifier;
use crate::error::{validate, Result};
use crate::field;

use super::point::Point;

/// A curve `y^2 = x^3 + a*x + b (mod p)` with a generator of order `n`.
///
/// Curves are immutable and live for the whole process; points borrow them
/// as `&'static Curve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    name: &'static str,
    aliases: &'static [&'static str],
    p: BigInt,
    a: BigInt,
    b: BigInt,
    gx: BigInt,
    gy: BigInt,
    n: BigInt,
    oid: ObjectIdentifier,
}

impl Curve {
    /// Create a curve from explicit parameters.
    ///
    /// Parameters are checked for range and the generator for membership;
    /// primality of `p` and `n` is the caller's responsibility.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &'static str,
        p: BigInt,
        a: BigInt,
        b: BigInt,
        gx: BigInt,
        gy: BigInt,
        n: BigInt,
        oid: ObjectIdentifier,
    ) -> Result<Self> {
        validate::parameter(p > BigInt::from(3u32), "p", "field prime must exceed 3")?;
        validate::parameter(n > BigInt::one(), "n", "group order must exceed 1")?;
        for (name, value) in [("a", &a), ("b", &b), ("gx", &gx), ("gy", &gy)] {
            validate::parameter(
                !value.is_negative() && value < &p,
                name,
                "must be reduced modulo p",
            )?;
        }

        // 4a^3 + 27b^2 != 0 (mod p)
        let a3 = field::mul(&field::mul(&a, &a, &p), &a, &p);
        let b2 = field::mul(&b, &b, &p);
        let discriminant = field::add(
            &field::mul(&BigInt::from(4u32), &a3, &p),
            &field::mul(&BigInt::from(27u32), &b2, &p),
            &p,
        );
        validate::parameter(!discriminant.is_zero(), "a, b", "curve is singular")?;

        let curve = Self {
            name,
            aliases: &[],
            p,
            a,
            b,
            gx,
            gy,
            n,
            oid,
        };
        validate::parameter(
            curve.contains(&curve.gx, &curve.gy),
            "generator",
            "not on the curve",
        )?;
        Ok(curve)
    }

    /// Create a curve from a hexadecimal parameter table
    pub fn from_constants(constants: &CurveConstants) -> Result<Self> {
        let curve = Self::new(
            constants.name,
            field::from_hex(constants.p)?,
            field::from_hex(constants.a)?,
            field::from_hex(constants.b)?,
            field::from_hex(constants.gx)?,
            field::from_hex(constants.gy)?,
            field::from_hex(constants.n)?,
            ObjectIdentifier::new(constants.oid)?,
        )?;
        Ok(Self {
            aliases: constants.aliases,
            ..curve
        })
    }

    /// Standard name, e.g. `secp256k1`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `name` is the standard name or an alias, ignoring ASCII case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    /// Field prime
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient `a`
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Order of the generator
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    /// Object identifier naming this curve
    pub fn oid(&self) -> &ObjectIdentifier {
        &self.oid
    }

    /// Width in bytes of an encoded coordinate
    pub fn field_size(&self) -> usize {
        field::byte_len(&self.p)
    }

    /// Width in bytes of an encoded scalar
    pub fn scalar_size(&self) -> usize {
        field::byte_len(&self.n)
    }

    /// The generator point `G`
    pub fn generator(&'static self) -> Point {
        Point::from_affine(self, self.gx.clone(), self.gy.clone())
    }

    /// Whether `(x, y)` satisfies the curve equation
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        field::mul(y, y, &self.p) == self.rhs(x)
    }

    /// `x^3 + a*x + b (mod p)`
    pub fn rhs(&self, x: &BigInt) -> BigInt {
        let p = &self.p;
        let x3 = field::mul(&field::mul(x, x, p), x, p);
        let ax = field::mul(&self.a, x, p);
        field::add(&field::add(&x3, &ax, p), &self.b, p)
    }

    /// Whether `n * G` is the point at infinity
    pub fn verify_order(&'static self) -> bool {
        self.generator().scalar_multiply(&self.n, &self.n).is_identity()
            && !self.generator().is_identity()
    }
}
