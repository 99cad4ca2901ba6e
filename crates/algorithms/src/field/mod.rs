//! Modular arithmetic over a prime field Z/pZ
//!
//! Every function takes the modulus explicitly; nothing here knows about a
//! particular curve. Inputs may be negative or larger than the modulus and
//! are reduced first, outputs are always in `[0, p-1]`.
//!
//! All functions are pure and safe to call from any number of threads.

use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Reduce `a` into `[0, p-1]`
pub fn reduce(a: &BigInt, p: &BigInt) -> BigInt {
    let r = a % p;
    if r.is_negative() {
        r + p
    } else {
        r
    }
}

/// `(a + b) mod p`
pub fn add(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a + b), p)
}

/// `(a - b) mod p`
pub fn sub(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a - b), p)
}

/// `(a * b) mod p`
pub fn mul(a: &BigInt, b: &BigInt, p: &BigInt) -> BigInt {
    reduce(&(a * b), p)
}

/// `-a mod p`
pub fn neg(a: &BigInt, p: &BigInt) -> BigInt {
    reduce(&-a, p)
}

/// Multiplicative inverse of `a` modulo `p` by the extended Euclidean algorithm.
///
/// Fails with a domain error when `a ≡ 0 (mod p)`, or more generally when
/// `a` and `p` share a factor.
pub fn mod_inverse(a: &BigInt, p: &BigInt) -> Result<BigInt> {
    let a = reduce(a, p);
    if a.is_zero() {
        return Err(Error::Domain {
            operation: "mod_inverse",
            details: "zero has no multiplicative inverse",
        });
    }

    let mut old_r = a;
    let mut r = p.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::Domain {
            operation: "mod_inverse",
            details: "operand is not coprime to the modulus",
        });
    }

    Ok(reduce(&old_s, p))
}

/// `base^exp mod p` by left-to-right square-and-multiply.
///
/// A negative exponent inverts the base first, so it fails exactly when
/// [`mod_inverse`] would.
pub fn mod_exp(base: &BigInt, exp: &BigInt, p: &BigInt) -> Result<BigInt> {
    let base = if exp.is_negative() {
        mod_inverse(base, p)?
    } else {
        reduce(base, p)
    };

    let (_, exp_bytes) = exp.to_bytes_be();
    let mut result = reduce(&BigInt::one(), p);
    for byte in exp_bytes.iter() {
        for bit_pos in (0..8).rev() {
            result = mul(&result, &result, p);
            if (byte >> bit_pos) & 1 == 1 {
                result = mul(&result, &base, p);
            }
        }
    }
    Ok(result)
}

/// Legendre symbol of `a` modulo an odd prime `p`: `1`, `-1` or `0`
pub fn legendre(a: &BigInt, p: &BigInt) -> i8 {
    let a = reduce(a, p);
    if a.is_zero() {
        return 0;
    }
    let exp: BigInt = (p - 1u32) >> 1;
    // Exponent is non-negative so this cannot fail
    match mod_exp(&a, &exp, p) {
        Ok(r) if r.is_one() => 1,
        _ => -1,
    }
}

/// Square root of `a` modulo an odd prime `p`, or `None` for a non-residue.
///
/// Uses `a^((p+1)/4)` when `p ≡ 3 (mod 4)` and Tonelli-Shanks otherwise.
/// Which of the two roots is returned is unspecified; callers that care
/// about parity pick with [`neg`].
pub fn sqrt(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    let a = reduce(a, p);
    if a.is_zero() {
        return Some(a);
    }
    if legendre(&a, p) != 1 {
        return None;
    }

    let four = BigInt::from(4u32);
    let root = if reduce(p, &four) == BigInt::from(3u32) {
        let exp: BigInt = (p + 1u32) >> 2;
        mod_exp(&a, &exp, p).ok()?
    } else {
        tonelli_shanks(&a, p)?
    };

    if mul(&root, &root, p) == a {
        Some(root)
    } else {
        None
    }
}

fn tonelli_shanks(a: &BigInt, p: &BigInt) -> Option<BigInt> {
    // p - 1 = q * 2^s with q odd
    let mut q: BigInt = p - 1u32;
    let mut s = 0u32;
    while is_even(&q) {
        q >>= 1;
        s += 1;
    }

    let mut z = BigInt::from(2u32);
    while legendre(&z, p) != -1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = mod_exp(&z, &q, p).ok()?;
    let mut t = mod_exp(a, &q, p).ok()?;
    let mut r = mod_exp(a, &((&q + 1u32) >> 1), p).ok()?;

    while !t.is_one() {
        // Least i with t^(2^i) = 1
        let mut i = 0u32;
        let mut t2 = t.clone();
        while !t2.is_one() {
            t2 = mul(&t2, &t2, p);
            i += 1;
            if i == m {
                return None;
            }
        }

        let mut b = c.clone();
        for _ in 0..(m - i - 1) {
            b = mul(&b, &b, p);
        }
        m = i;
        c = mul(&b, &b, p);
        t = mul(&t, &c, p);
        r = mul(&r, &b, p);
    }
    Some(r)
}

/// True when the least significant bit of `a` is zero
pub fn is_even(a: &BigInt) -> bool {
    let (_, bytes) = a.to_bytes_le();
    bytes.first().map_or(true, |b| b & 1 == 0)
}

/// Big-endian encoding of a non-negative `a`, left-padded to `width` bytes.
///
/// Callers guarantee `a` fits; values are always reduced field or scalar
/// elements whose width is taken from the modulus.
pub fn to_be_bytes_padded(a: &BigInt, width: usize) -> Vec<u8> {
    debug_assert!(!a.is_negative());
    let (_, bytes) = a.to_bytes_be();
    let bytes: &[u8] = if bytes == [0] { &[] } else { &bytes };
    debug_assert!(bytes.len() <= width);
    let mut out = vec![0u8; width.saturating_sub(bytes.len())];
    out.extend_from_slice(bytes);
    out
}

/// Non-negative integer from big-endian bytes
pub fn from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Number of bytes needed to hold any element of `[0, m-1]`
pub fn byte_len(m: &BigInt) -> usize {
    ((m.bits() + 7) / 8) as usize
}

/// Parse an unsigned big-endian hexadecimal string
pub fn from_hex(hex: &str) -> Result<BigInt> {
    BigInt::parse_bytes(hex.as_bytes(), 16)
        .filter(|v| !v.is_negative())
        .ok_or_else(|| Error::param("hex", "not an unsigned hexadecimal integer"))
}
