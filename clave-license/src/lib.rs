//! License records and the import/export codec for Clave.
//!
//! A license is a small attribute map — licensee identity, a validity
//! window, notification thresholds, and arbitrary feature restrictions —
//! sealed into an opaque artifact with `clave-crypto`. The codec
//! recovers records from artifacts without trusting the transport:
//! decryption failures, garbage payloads, and unsupported format
//! versions each surface as a distinct [`LicenseError`].
//!
//! # Artifact format
//!
//! [`LicenseCodec::export`] serializes the canonical attribute map to
//! JSON, seals it to the configured public key, and base64-encodes the
//! envelope. An optional PEM-style boundary wraps the artifact for
//! text-only transports:
//!
//! ```text
//! -----BEGIN ACME LICENSE-----
//! eyJ2ZXJzaW9uIjoxLCJzZWFsZWRfa2V5IjpbLi4uXX0=
//! -----END ACME LICENSE-----
//! ```
//!
//! # Trust model
//!
//! [`License::valid`] checks field shape only. Authenticity comes from
//! the sealed envelope — an artifact that opens under the deployment
//! key was produced by a holder of the matching public key and has not
//! been altered in transit.

mod boundary;
mod codec;
mod dates;
mod error;
mod record;

pub use boundary::{add_boundary, remove_boundary};
pub use codec::LicenseCodec;
pub use dates::DateField;
pub use error::{LicenseError, LicenseResult};
pub use record::{License, SUPPORTED_VERSION};

// Key material re-exported so consumers can configure the codec
// without depending on clave-crypto directly.
pub use clave_crypto::{KeyPair, PublicKey, SecretKey};
