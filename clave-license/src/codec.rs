//! Import/export orchestration.
//!
//! The codec owns the key material for one deployment. Construct it
//! once and pass it by reference to call sites; there is no
//! process-global key slot. Rotating keys means building a new codec —
//! the codec itself is immutable after construction, so a validated
//! codec can be shared freely across threads.

use crate::boundary;
use crate::error::{LicenseError, LicenseResult};
use crate::record::License;
use clave_crypto::{open, seal, PublicKey, SealedEnvelope, SecretKey};
use serde_json::Value;
use tracing::debug;

/// Seals license records into opaque artifacts and recovers them.
#[derive(Debug)]
pub struct LicenseCodec {
    public: PublicKey,
    secret: Option<SecretKey>,
}

impl LicenseCodec {
    /// Builds a codec that can both export and import.
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        let public = secret.public_key();
        Self {
            public,
            secret: Some(secret),
        }
    }

    /// Builds an export-only codec from a public key. [`import`]
    /// on such a codec fails with [`LicenseError::Configuration`].
    ///
    /// [`import`]: Self::import
    #[must_use]
    pub fn export_only(public: PublicKey) -> Self {
        Self {
            public,
            secret: None,
        }
    }

    /// Loads a full codec from a base64-encoded secret key.
    pub fn from_secret_base64(encoded: &str) -> LicenseResult<Self> {
        let secret = SecretKey::from_base64(encoded)
            .map_err(|e| LicenseError::Configuration(e.to_string()))?;
        Ok(Self::new(secret))
    }

    /// True when the codec holds a secret key and can import.
    #[must_use]
    pub fn can_import(&self) -> bool {
        self.secret.is_some()
    }

    /// Seals a validated record into an opaque artifact.
    ///
    /// Validation runs first; an invalid record aborts before any
    /// encryption work. With a `boundary_label` the base64 artifact is
    /// wrapped in PEM-style markers for text transports.
    pub fn export(&self, license: &License, boundary_label: Option<&str>) -> LicenseResult<String> {
        license.validate()?;

        let json = license.to_json()?;
        let envelope =
            seal(&self.public, json.as_bytes()).map_err(|e| LicenseError::Seal(e.to_string()))?;
        let mut artifact = envelope
            .to_base64()
            .map_err(|e| LicenseError::Seal(e.to_string()))?;

        if let Some(label) = boundary_label {
            artifact = boundary::add_boundary(&artifact, label);
        }

        debug!(
            bytes = artifact.len(),
            framed = boundary_label.is_some(),
            "license exported"
        );
        Ok(artifact)
    }

    /// Recovers a record from an artifact.
    ///
    /// Boundary framing is stripped when present but never required.
    /// Every failure surfaces as a [`LicenseError`]: an undecryptable
    /// artifact and a bit-valid-but-garbage payload report separately
    /// (both grouped by [`LicenseError::is_import_failure`]), and an
    /// unsupported `version` propagates as
    /// [`LicenseError::UnsupportedVersion`] rather than being wrapped.
    /// Never returns a partially populated record.
    pub fn import(&self, data: &str) -> LicenseResult<License> {
        if data.trim().is_empty() {
            return Err(LicenseError::MissingData);
        }

        let secret = self.secret.as_ref().ok_or_else(|| {
            LicenseError::Configuration("import requires a secret key".to_string())
        })?;

        let body = boundary::remove_boundary(data);

        let envelope =
            SealedEnvelope::from_base64(&body).map_err(|_| LicenseError::Undecryptable)?;
        let plaintext = open(secret, &envelope).map_err(|_| LicenseError::Undecryptable)?;

        let parsed: Value =
            serde_json::from_slice(&plaintext).map_err(|_| LicenseError::InvalidJson)?;
        let Value::Object(attributes) = parsed else {
            return Err(LicenseError::InvalidJson);
        };

        let license = License::from_attributes(&attributes)?;
        debug!("license imported");
        Ok(license)
    }
}
