//! Key generation from seeded and operating-system randomness

use std::collections::HashSet;

use nodekey::prelude::*;
use nodekey_tests::init_tracing;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_ten_thousand_distinct_secrets() {
    init_tracing();
    let curve = secp256k1();
    let mut rng = ChaCha20Rng::seed_from_u64(0x6e6f_6465);
    let mut seen = HashSet::with_capacity(10_000);
    for _ in 0..10_000 {
        let key = PrivateKey::generate(&mut rng, curve).unwrap();
        let secret = key.secret();
        assert!(secret >= BigInt::from(1));
        assert!(&secret < curve.n());
        assert!(seen.insert(key.secret_bytes().to_vec()), "duplicate secret");
    }
    assert_eq!(seen.len(), 10_000);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    for curve in nodekey::algorithms::ec::curves() {
        let mut a = ChaCha20Rng::seed_from_u64(99);
        let mut b = ChaCha20Rng::seed_from_u64(99);
        for _ in 0..8 {
            let left = PrivateKey::generate(&mut a, curve).unwrap();
            let right = PrivateKey::generate(&mut b, curve).unwrap();
            assert_eq!(left, right);
            assert_eq!(left.public_key(), right.public_key());
        }
    }
}

#[test]
fn test_generated_public_keys_lie_on_curve() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for curve in nodekey::algorithms::ec::curves() {
        for _ in 0..4 {
            let public_key = PrivateKey::generate(&mut rng, curve).unwrap().public_key();
            assert!(public_key.point().is_on_curve());
            assert!(!public_key.point().is_identity());
            assert!(public_key.point().mul(curve.n()).is_identity());
        }
    }
}

#[test]
fn test_generate_default_uses_default_curve() {
    init_tracing();
    let key = PrivateKey::generate_default().unwrap();
    assert!(core::ptr::eq(key.curve(), default_curve()));
    assert_ne!(PrivateKey::generate_default().unwrap(), key);
}
