//! Asymmetric recipient keys for sealing artifacts.
//!
//! Wraps X25519 key material from `crypto_box`. The public key is
//! enough to seal; opening requires the secret key. Secret key bytes
//! never appear in Debug output.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::rngs::OsRng;

/// Size of X25519 keys in bytes.
pub const KEY_SIZE: usize = 32;

/// X25519 public key. Sufficient to seal artifacts.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) crypto_box::PublicKey);

/// X25519 secret key. Required to open artifacts.
#[derive(Clone)]
pub struct SecretKey(pub(crate) crypto_box::SecretKey);

/// A recipient keypair.
pub struct KeyPair {
    pub secret: SecretKey,
    pub public: PublicKey,
}

impl KeyPair {
    /// Generates a new random X25519 keypair.
    #[must_use]
    pub fn generate() -> Self {
        let secret = crypto_box::SecretKey::generate(&mut OsRng);
        let public = secret.public_key();
        Self {
            secret: SecretKey(secret),
            public: PublicKey(public),
        }
    }
}

impl PublicKey {
    /// Creates a public key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(crypto_box::PublicKey::from(bytes))
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        *self.0.as_bytes()
    }

    /// Decodes a public key from base64.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        Ok(Self::from_bytes(decode_key_bytes(encoded)?))
    }

    /// Encodes the key as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }
}

impl SecretKey {
    /// Creates a secret key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(crypto_box::SecretKey::from(bytes))
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_SIZE] {
        self.0.to_bytes()
    }

    /// Decodes a secret key from base64.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        Ok(Self::from_bytes(decode_key_bytes(encoded)?))
    }

    /// Encodes the key as base64.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Returns the corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PublicKey").field(&self.to_base64()).finish()
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

fn decode_key_bytes(encoded: &str) -> CryptoResult<[u8; KEY_SIZE]> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CryptoError::InvalidKey(format!("invalid base64: {e}")))?;

    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual,
        })
}
