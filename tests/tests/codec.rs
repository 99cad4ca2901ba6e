//! DER codec and field arithmetic through the public API

use nodekey::algorithms::der::{self, encode_length, encode_primitive, Field, Tag};
use nodekey::algorithms::field;
use nodekey::prelude::*;
use proptest::prelude::*;

#[test]
fn test_length_boundaries() {
    let cases: [(usize, &str); 6] = [
        (0, "00"),
        (127, "7f"),
        (128, "8180"),
        (255, "81ff"),
        (256, "820100"),
        (65_535, "82ffff"),
    ];
    for (len, expected) in cases {
        assert_eq!(hex::encode(encode_length(len)), expected, "length {}", len);

        let encoded = encode_primitive(Tag::OctetString, &vec![0xA5; len]);
        match der::parse_single(&encoded).unwrap() {
            Field::OctetString(content) => assert_eq!(content.len(), len),
            other => panic!("expected OCTET STRING, got {:?}", other),
        }
    }
}

#[test]
fn test_non_minimal_lengths_rejected() {
    // 5 bytes written with a long-form length
    let mut long_form = vec![0x04, 0x81, 0x05];
    long_form.extend_from_slice(&[0u8; 5]);
    assert!(der::parse_single(&long_form).is_err());

    // Leading zero length octet
    let mut padded = vec![0x04, 0x82, 0x00, 0x80];
    padded.extend_from_slice(&[0u8; 0x80]);
    assert!(der::parse_single(&padded).is_err());

    // Indefinite length
    assert!(der::parse_single(&[0x30, 0x80, 0x00, 0x00]).is_err());
}

#[test]
fn test_curve_oids_encode_as_registered() {
    let encoded = Field::ObjectIdentifier(secp256k1().oid().clone()).encode();
    assert_eq!(hex::encode(encoded), "06052b8104000a");
    let encoded = Field::ObjectIdentifier(prime256v1().oid().clone()).encode();
    assert_eq!(hex::encode(encoded), "06082a8648ce3d030107");
}

#[test]
fn test_nested_sequence_roundtrip() {
    let tree = Field::Sequence(vec![
        Field::Integer(BigInt::from(-129)),
        Field::Integer(BigInt::from(255)),
        Field::Null,
        Field::context(2, vec![Field::OctetString(vec![1, 2, 3])]),
    ]);
    let encoded = tree.encode();
    assert_eq!(der::parse_single(&encoded).unwrap(), tree);
    assert_eq!(
        hex::encode(&encoded),
        "30110202ff7f020200ff0500a2050403010203"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn octet_string_roundtrip(content in prop::collection::vec(any::<u8>(), 0..=500)) {
        let field = Field::OctetString(content.clone());
        let parsed = der::parse_single(&field.encode()).unwrap();
        prop_assert_eq!(parsed.as_octet_string(), Some(&content[..]));
    }

    #[test]
    fn integer_roundtrip(value in any::<i128>()) {
        let field = Field::Integer(BigInt::from(value));
        prop_assert_eq!(der::parse_single(&field.encode()).unwrap(), field);
    }

    #[test]
    fn field_inverse(a in 1u64.., b in any::<u64>()) {
        let p = secp256k1().p();
        let a = BigInt::from(a);
        let inverse = field::mod_inverse(&a, p).unwrap();
        prop_assert_eq!(field::mul(&a, &inverse, p), BigInt::from(1));

        let b = BigInt::from(b);
        let product = field::mul(&a, &b, p);
        prop_assert_eq!(field::mul(&product, &inverse, p), field::reduce(&b, p));
    }

    #[test]
    fn field_sqrt_squares_back(x in any::<u64>()) {
        for curve in nodekey::algorithms::ec::curves() {
            let p = curve.p();
            let square = field::mul(&BigInt::from(x), &BigInt::from(x), p);
            let root = field::sqrt(&square, p).unwrap();
            prop_assert_eq!(field::mul(&root, &root, p), square);
        }
    }
}
