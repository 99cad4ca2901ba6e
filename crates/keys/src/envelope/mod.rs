//! Binary key envelopes
//!
//! Private keys use the SEC1 `ECPrivateKey` layout:
//!
//! ```text
//! ECPrivateKey ::= SEQUENCE {
//!   version        INTEGER (1),
//!   privateKey     OCTET STRING,
//!   parameters [0] OBJECT IDENTIFIER,
//!   publicKey  [1] BIT STRING
//! }
//! ```
//!
//! Public keys use X.509 `SubjectPublicKeyInfo` with `id-ecPublicKey` and a
//! named curve. Both decoders are strict: every field must be present, in
//! order, with the expected kind.

use nodekey_algorithms::der::{self, BitString, Field, ObjectIdentifier};
use nodekey_algorithms::ec::{registry, Curve};
use nodekey_algorithms::BigInt;
use nodekey_api::{Error, Result, ResultExt};
use nodekey_params::traditional::envelope::{
    EC_PRIVATE_KEY_PARAMETERS_TAG, EC_PRIVATE_KEY_PUBLIC_KEY_TAG, EC_PRIVATE_KEY_VERSION,
    EC_PUBLIC_KEY_OID,
};
use tracing::debug;
use zeroize::Zeroizing;

const PRIVATE_CONTEXT: &str = "private key envelope";
const PUBLIC_CONTEXT: &str = "public key envelope";

/// The fields of a structurally valid private key envelope.
///
/// The secret is not yet range-checked and the embedded public key is not
/// yet compared against it. `public_key` is `None` when the embedded bit
/// string has unused bits.
pub(crate) struct PrivateKeyFields {
    pub curve: &'static Curve,
    pub secret: Zeroizing<Vec<u8>>,
    pub public_key: Option<Vec<u8>>,
}

/// Encode an `ECPrivateKey` from the fixed-width secret and the SEC1
/// public point
pub(crate) fn encode_private_key(
    curve: &'static Curve,
    secret: &[u8],
    public_key: &[u8],
) -> Zeroizing<Vec<u8>> {
    let tree = Zeroizing::new(Field::Sequence(vec![
        Field::Integer(BigInt::from(EC_PRIVATE_KEY_VERSION)),
        Field::OctetString(secret.to_vec()),
        Field::context(
            EC_PRIVATE_KEY_PARAMETERS_TAG,
            vec![Field::ObjectIdentifier(curve.oid().clone())],
        ),
        Field::context(
            EC_PRIVATE_KEY_PUBLIC_KEY_TAG,
            vec![Field::BitString(BitString::new(public_key.to_vec()))],
        ),
    ]));
    Zeroizing::new(tree.encode())
}

/// Decode an `ECPrivateKey`, resolving its curve through the registry
pub(crate) fn decode_private_key(bytes: &[u8]) -> Result<PrivateKeyFields> {
    let tree = Zeroizing::new(der::parse_single(bytes).with_context(PRIVATE_CONTEXT)?);

    let fields = sequence(&tree, PRIVATE_CONTEXT)?;
    let [version, secret, parameters, public_key] = fields else {
        return Err(invalid(
            PRIVATE_CONTEXT,
            format!("expected 4 fields, found {}", fields.len()),
        ));
    };

    match version.as_integer() {
        Some(v) if *v == BigInt::from(EC_PRIVATE_KEY_VERSION) => {}
        Some(v) => {
            debug!(version = %v, "rejecting private key envelope version");
            return Err(invalid(
                PRIVATE_CONTEXT,
                format!("unsupported version {}", v),
            ));
        }
        None => {
            return Err(invalid(
                PRIVATE_CONTEXT,
                format!("version must be an INTEGER, found {}", version.kind()),
            ))
        }
    }

    let secret = secret.as_octet_string().ok_or_else(|| {
        invalid(
            PRIVATE_CONTEXT,
            format!("secret must be an OCTET STRING, found {}", secret.kind()),
        )
    })?;

    let oid = curve_identifier(parameters, PRIVATE_CONTEXT)?;

    let public_key = match public_key.as_context(EC_PRIVATE_KEY_PUBLIC_KEY_TAG) {
        // A padded bit string cannot equal any SEC1 point
        Some([Field::BitString(bits)]) if bits.unused_bits() != 0 => {
            debug!(unused_bits = bits.unused_bits(), "embedded public key is not whole octets");
            None
        }
        Some([Field::BitString(bits)]) => Some(bits.as_bytes().to_vec()),
        _ => {
            return Err(invalid(
                PRIVATE_CONTEXT,
                "public key must be a BIT STRING in [1]",
            ))
        }
    };

    let curve = registry::lookup(oid).with_context(PRIVATE_CONTEXT)?;

    Ok(PrivateKeyFields {
        curve,
        secret: Zeroizing::new(secret.to_vec()),
        public_key,
    })
}

/// Encode a `SubjectPublicKeyInfo` for a SEC1 point
pub(crate) fn encode_public_key(curve: &'static Curve, point: &[u8]) -> Vec<u8> {
    Field::Sequence(vec![
        Field::Sequence(vec![
            Field::ObjectIdentifier(ec_public_key_oid()),
            Field::ObjectIdentifier(curve.oid().clone()),
        ]),
        Field::BitString(BitString::new(point.to_vec())),
    ])
    .encode()
}

/// Decode a `SubjectPublicKeyInfo`, returning the curve and SEC1 point bytes
pub(crate) fn decode_public_key(bytes: &[u8]) -> Result<(&'static Curve, Vec<u8>)> {
    let tree = der::parse_single(bytes).with_context(PUBLIC_CONTEXT)?;

    let fields = sequence(&tree, PUBLIC_CONTEXT)?;
    let [algorithm, subject_public_key] = fields else {
        return Err(invalid(
            PUBLIC_CONTEXT,
            format!("expected 2 fields, found {}", fields.len()),
        ));
    };

    let oid = match sequence(algorithm, PUBLIC_CONTEXT)? {
        [Field::ObjectIdentifier(algorithm_oid), Field::ObjectIdentifier(curve_oid)] => {
            if *algorithm_oid != ec_public_key_oid() {
                return Err(invalid(
                    PUBLIC_CONTEXT,
                    format!("unsupported algorithm {}", algorithm_oid),
                ));
            }
            curve_oid
        }
        _ => {
            return Err(invalid(
                PUBLIC_CONTEXT,
                "algorithm must be a SEQUENCE of two OBJECT IDENTIFIERs",
            ))
        }
    };

    let point = match subject_public_key {
        Field::BitString(bits) => point_bytes(bits, PUBLIC_CONTEXT)?,
        other => {
            return Err(invalid(
                PUBLIC_CONTEXT,
                format!("public key must be a BIT STRING, found {}", other.kind()),
            ))
        }
    };

    let curve = registry::lookup(oid).with_context(PUBLIC_CONTEXT)?;
    Ok((curve, point))
}

fn sequence<'a>(field: &'a Field, context: &'static str) -> Result<&'a [Field]> {
    field.as_sequence().ok_or_else(|| {
        invalid(
            context,
            format!("expected SEQUENCE, found {}", field.kind()),
        )
    })
}

fn curve_identifier<'a>(field: &'a Field, context: &'static str) -> Result<&'a ObjectIdentifier> {
    match field.as_context(EC_PRIVATE_KEY_PARAMETERS_TAG) {
        Some([Field::ObjectIdentifier(oid)]) => Ok(oid),
        _ => Err(invalid(
            context,
            "curve identifier must be an OBJECT IDENTIFIER in [0]",
        )),
    }
}

fn point_bytes(bits: &BitString, context: &'static str) -> Result<Vec<u8>> {
    if bits.unused_bits() != 0 {
        return Err(invalid(context, "public key BIT STRING has unused bits"));
    }
    Ok(bits.as_bytes().to_vec())
}

fn ec_public_key_oid() -> ObjectIdentifier {
    ObjectIdentifier::new(EC_PUBLIC_KEY_OID).expect("id-ecPublicKey arcs are valid")
}

fn invalid(context: &'static str, message: impl Into<String>) -> Error {
    Error::InvalidKeyFormat {
        context,
        message: message.into(),
    }
}
