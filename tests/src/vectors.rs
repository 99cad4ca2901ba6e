//! Loads known-answer key vectors from TOML files.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// One private key with its expected encodings, all lowercase hex
#[derive(Debug, Clone, Deserialize)]
pub struct KeyVector {
    /// Registered curve name
    pub curve: String,
    /// Fixed-width big-endian secret scalar
    pub secret: String,
    /// SEC1 compressed public key
    pub public_compressed: String,
    /// SEC1 uncompressed public key
    pub public_uncompressed: String,
    /// ECPrivateKey DER
    pub private_der: String,
    /// SubjectPublicKeyInfo DER
    pub public_der: String,
}

#[derive(Debug, Deserialize)]
struct KeyVectorFile {
    key: Vec<KeyVector>,
}

/// ----------------------------------------------------------------
/// Directory holding the vector files
/// ----------------------------------------------------------------
fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("vectors")
}

/// ----------------------------------------------------------------
/// Load every key vector from a named TOML file
/// ----------------------------------------------------------------
pub fn load_key_vectors(file_name: &str) -> Result<Vec<KeyVector>, String> {
    let path = vectors_dir().join(file_name);
    let text = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let file: KeyVectorFile =
        toml::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    tracing::debug!(file = file_name, count = file.key.len(), "loaded key vectors");
    Ok(file.key)
}

static KEY_VECTORS: Lazy<Vec<KeyVector>> =
    Lazy::new(|| load_key_vectors("keys.toml").expect("keys.toml is readable"));

/// The bundled key vectors, parsed once
pub fn key_vectors() -> &'static [KeyVector] {
    &KEY_VECTORS
}

/// Decode a hex field from a vector
pub fn unhex(field: &str) -> Vec<u8> {
    hex::decode(field).expect("vector fields are valid hex")
}
