//! Error types for license handling.

use thiserror::Error;

/// License-handling errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The wire attributes carry a format version this build cannot
    /// read. Raised at construction, before validation is attempted.
    #[error("license format version {0} is not supported")]
    UnsupportedVersion(u64),

    /// The record parsed but its fields fail type or presence rules.
    #[error("license is invalid")]
    Invalid,

    /// `import` was handed an empty artifact.
    #[error("no license data")]
    MissingData,

    /// The artifact could not be decrypted (wrong key, corruption, or
    /// tampering).
    #[error("license data could not be decrypted")]
    Undecryptable,

    /// The decrypted payload is not a JSON attribute map.
    #[error("license data is invalid JSON")]
    InvalidJson,

    /// The codec is missing or was given unusable key material.
    #[error("codec configuration error: {0}")]
    Configuration(String),

    /// Sealing the payload failed.
    #[error("license could not be sealed: {0}")]
    Seal(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LicenseError {
    /// True for any failure of `import` to recover a record from an
    /// artifact, regardless of cause. Callers that only need "this
    /// artifact is unusable" match on this; the message still says
    /// whether decryption or JSON parsing failed.
    #[must_use]
    pub fn is_import_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingData | Self::Undecryptable | Self::InvalidJson
        )
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
