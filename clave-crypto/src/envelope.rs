//! Hybrid envelope sealing a payload to a recipient public key.
//!
//! Two-tier scheme:
//!
//! 1. A fresh content key encrypts the payload with ChaCha20-Poly1305
//! 2. The content key is wrapped in a `crypto_box` sealed box for the
//!    recipient
//!
//! The payload can be any size; only the 32-byte content key passes
//! through the asymmetric primitive.

use crate::cipher::{self, ContentKey, EncryptedData, CONTENT_KEY_SIZE};
use crate::error::{CryptoError, CryptoResult};
use crate::key::{PublicKey, SecretKey};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// Size of a sealed content key: 32-byte ephemeral public key plus the
/// boxed 32-byte content key and its 16-byte tag.
pub const SEALED_KEY_SIZE: usize = 80;

/// A sealed artifact envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SealedEnvelope {
    /// Version of the envelope format.
    pub version: u8,
    /// The content key, wrapped in a sealed box for the recipient.
    pub sealed_key: Vec<u8>,
    /// The payload, encrypted with the content key.
    pub content: EncryptedData,
}

impl SealedEnvelope {
    /// Current envelope format version.
    pub const CURRENT_VERSION: u8 = 1;

    /// Encodes the envelope as a single base64 text token.
    pub fn to_base64(&self) -> CryptoResult<String> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Decodes an envelope from base64.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CryptoError::Decryption(format!("invalid base64: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| CryptoError::Decryption(format!("malformed envelope: {e}")))
    }
}

/// Seals `plaintext` to a recipient public key.
///
/// # Process
/// 1. Generate a random content key
/// 2. Encrypt the payload with the content key
/// 3. Wrap the content key in a sealed box for the recipient
pub fn seal(recipient: &PublicKey, plaintext: &[u8]) -> CryptoResult<SealedEnvelope> {
    let content_key = ContentKey::generate();

    let content = cipher::encrypt(&content_key, plaintext)?;
    let sealed_key = recipient
        .0
        .seal(&mut OsRng, content_key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(SealedEnvelope {
        version: SealedEnvelope::CURRENT_VERSION,
        sealed_key,
        content,
    })
}

/// Opens an envelope with the recipient secret key.
///
/// Returns the raw decrypted payload, or a decryption error if the
/// envelope was sealed to a different key or has been tampered with.
pub fn open(secret: &SecretKey, envelope: &SealedEnvelope) -> CryptoResult<Vec<u8>> {
    if envelope.sealed_key.len() != SEALED_KEY_SIZE {
        return Err(CryptoError::Decryption(
            "sealed key has wrong length".to_string(),
        ));
    }

    let key_bytes = secret
        .0
        .unseal(&envelope.sealed_key)
        .map_err(|_| CryptoError::Decryption("sealed key could not be opened".to_string()))?;

    if key_bytes.len() != CONTENT_KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: CONTENT_KEY_SIZE,
            actual: key_bytes.len(),
        });
    }

    let mut key_array = [0u8; CONTENT_KEY_SIZE];
    key_array.copy_from_slice(&key_bytes);
    let content_key = ContentKey::from_bytes(key_array);

    cipher::decrypt(&content_key, &envelope.content)
}
