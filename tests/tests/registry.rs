//! Curve registry lookups through the facade

use nodekey::prelude::*;
use nodekey_params::traditional::curves::{PRIME256V1, SECP256K1};

#[test]
fn test_lookup_by_oid() {
    let curve = lookup(&"1.3.132.0.10".parse().unwrap()).unwrap();
    assert!(core::ptr::eq(curve, secp256k1()));
    let curve = lookup(&"1.2.840.10045.3.1.7".parse().unwrap()).unwrap();
    assert!(core::ptr::eq(curve, prime256v1()));

    let unknown: ObjectIdentifier = "1.3.132.0.35".parse().unwrap();
    let err: Error = lookup(&unknown).unwrap_err().into();
    match err {
        Error::UnknownCurve { identifier, .. } => assert_eq!(identifier, "1.3.132.0.35"),
        other => panic!("expected UnknownCurve, got {:?}", other),
    }
}

#[test]
fn test_lookup_by_name_and_alias() {
    for name in ["secp256k1", "SECP256K1"] {
        assert!(core::ptr::eq(lookup_by_name(name).unwrap(), secp256k1()));
    }
    for name in ["prime256v1", "secp256r1", "P-256", "p-256"] {
        assert!(core::ptr::eq(lookup_by_name(name).unwrap(), prime256v1()));
    }
    assert!(lookup_by_name("secp384r1").is_err());
    assert!(lookup_by_name("").is_err());
}

#[test]
fn test_registered_constants_match_params() {
    assert_eq!(secp256k1().name(), SECP256K1.name);
    assert_eq!(prime256v1().name(), PRIME256V1.name);
    assert!(core::ptr::eq(default_curve(), secp256k1()));

    for curve in nodekey::algorithms::ec::curves() {
        assert_eq!(curve.field_size(), 32);
        assert_eq!(curve.scalar_size(), 32);
        assert!(curve.generator().is_on_curve());
        assert!(curve.verify_order());
    }
}
