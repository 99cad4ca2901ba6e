//! Domain parameters for the supported short Weierstrass curves
//!
//! Values are big-endian hexadecimal so they can be parsed into
//! arbitrary-precision integers by the arithmetic crate.

/// Domain parameters of a curve `y^2 = x^3 + a*x + b (mod p)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Standard curve name
    pub name: &'static str,
    /// Other names the curve is known by
    pub aliases: &'static [&'static str],
    /// Field prime
    pub p: &'static str,
    /// Coefficient `a`
    pub a: &'static str,
    /// Coefficient `b`
    pub b: &'static str,
    /// Generator x-coordinate
    pub gx: &'static str,
    /// Generator y-coordinate
    pub gy: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Object identifier arcs naming the curve
    pub oid: &'static [u64],
}

/// secp256k1 (SEC 2, section 2.4.1), OID 1.3.132.0.10
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    aliases: &[],
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "00",
    b: "07",
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    oid: &[1, 3, 132, 0, 10],
};

/// prime256v1 / secp256r1 / NIST P-256, OID 1.2.840.10045.3.1.7
pub const PRIME256V1: CurveConstants = CurveConstants {
    name: "prime256v1",
    aliases: &["secp256r1", "P-256"],
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    oid: &[1, 2, 840, 10045, 3, 1, 7],
};

/// Every curve the registry is populated with; the first entry is the default
pub const SUPPORTED_CURVES: &[CurveConstants] = &[SECP256K1, PRIME256V1];
