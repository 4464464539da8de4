//! Hybrid encryption for Clave license artifacts.
//!
//! Artifacts are sealed to a recipient X25519 public key using a
//! two-tier scheme:
//!
//! 1. Content key: a fresh ChaCha20-Poly1305 key per artifact encrypts
//!    the payload (unbounded size).
//! 2. Sealed key: the content key is wrapped in a `crypto_box` sealed
//!    box for the recipient.
//!
//! Anyone holding the public key can produce an artifact; only the
//! holder of the matching secret key can open it. Tampering with any
//! part of the envelope fails authentication on open.

mod cipher;
mod envelope;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, ContentKey, EncryptedData, NONCE_SIZE, TAG_SIZE};
pub use envelope::{open, seal, SealedEnvelope, SEALED_KEY_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{KeyPair, PublicKey, SecretKey, KEY_SIZE};
