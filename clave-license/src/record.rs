//! The license record: attributes, validity rules, and canonical
//! serialization.

use crate::dates::DateField;
use crate::error::{LicenseError, LicenseResult};
use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};

/// The single wire format version this build reads and writes.
pub const SUPPORTED_VERSION: u64 = 1;

/// A software license record.
///
/// Holds licensee identity, a validity window, notification thresholds,
/// and arbitrary feature restrictions. [`valid`](Self::valid) checks
/// field shape only; authenticity comes from the sealed artifact, never
/// from this record.
#[derive(Clone, Debug, PartialEq)]
pub struct License {
    version: u64,
    licensee: Option<Value>,
    starts_at: DateField,
    expires_at: DateField,
    notify_admins_at: DateField,
    notify_users_at: DateField,
    block_changes_at: DateField,
    restrictions: Option<Map<String, Value>>,
}

impl License {
    /// Creates a record for authoring, ready for export.
    #[must_use]
    pub fn new(licensee: Map<String, Value>, starts_at: NaiveDate) -> Self {
        Self {
            version: SUPPORTED_VERSION,
            licensee: Some(Value::Object(licensee)),
            starts_at: starts_at.into(),
            expires_at: DateField::Unset,
            notify_admins_at: DateField::Unset,
            notify_users_at: DateField::Unset,
            block_changes_at: DateField::Unset,
            restrictions: None,
        }
    }

    /// Reconstructs a record from wire attributes.
    ///
    /// `version` defaults to 1 when absent; any other value is an
    /// [`UnsupportedVersion`](LicenseError::UnsupportedVersion) error,
    /// raised before validation is even attempted. The licensee value
    /// is taken verbatim and type-checked later by
    /// [`valid`](Self::valid). Date fields go through
    /// [`DateField::from_wire`]; `issued_at` is the legacy wire name
    /// for `starts_at` and takes precedence when both appear. A
    /// `restrictions` value that is not an object is dropped, not
    /// rejected.
    pub fn from_attributes(attributes: &Map<String, Value>) -> LicenseResult<Self> {
        let version = match attributes.get("version") {
            None | Some(Value::Null) => SUPPORTED_VERSION,
            Some(value) => match value.as_u64() {
                Some(SUPPORTED_VERSION) => SUPPORTED_VERSION,
                Some(other) => return Err(LicenseError::UnsupportedVersion(other)),
                None => return Err(LicenseError::UnsupportedVersion(0)),
            },
        };

        let starts_at = attributes
            .get("issued_at")
            .or_else(|| attributes.get("starts_at"));

        let restrictions = match attributes.get("restrictions") {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        };

        Ok(Self {
            version,
            licensee: attributes.get("licensee").cloned(),
            starts_at: DateField::from_wire(starts_at),
            expires_at: DateField::from_wire(attributes.get("expires_at")),
            notify_admins_at: DateField::from_wire(attributes.get("notify_admins_at")),
            notify_users_at: DateField::from_wire(attributes.get("notify_users_at")),
            block_changes_at: DateField::from_wire(attributes.get("block_changes_at")),
            restrictions,
        })
    }

    /// Returns the wire format version.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the licensee wire value, if any.
    #[must_use]
    pub fn licensee(&self) -> Option<&Value> {
        self.licensee.as_ref()
    }

    /// Returns the license start date.
    #[must_use]
    pub fn starts_at(&self) -> Option<NaiveDate> {
        self.starts_at.date()
    }

    /// Legacy alias for [`starts_at`](Self::starts_at); `issued_at` is
    /// the wire name for the same slot.
    #[must_use]
    pub fn issued_at(&self) -> Option<NaiveDate> {
        self.starts_at.date()
    }

    /// Returns the expiry threshold.
    #[must_use]
    pub fn expires_at(&self) -> Option<NaiveDate> {
        self.expires_at.date()
    }

    /// Returns the admin-notification threshold.
    #[must_use]
    pub fn notify_admins_at(&self) -> Option<NaiveDate> {
        self.notify_admins_at.date()
    }

    /// Returns the user-notification threshold.
    #[must_use]
    pub fn notify_users_at(&self) -> Option<NaiveDate> {
        self.notify_users_at.date()
    }

    /// Returns the change-blocking threshold.
    #[must_use]
    pub fn block_changes_at(&self) -> Option<NaiveDate> {
        self.block_changes_at.date()
    }

    /// Returns the restrictions map, if any.
    #[must_use]
    pub fn restrictions(&self) -> Option<&Map<String, Value>> {
        self.restrictions.as_ref()
    }

    pub fn set_licensee(&mut self, licensee: Map<String, Value>) {
        self.licensee = Some(Value::Object(licensee));
    }

    pub fn set_starts_at(&mut self, date: NaiveDate) {
        self.starts_at = date.into();
    }

    /// Legacy alias for [`set_starts_at`](Self::set_starts_at).
    pub fn set_issued_at(&mut self, date: NaiveDate) {
        self.starts_at = date.into();
    }

    pub fn set_expires_at(&mut self, date: NaiveDate) {
        self.expires_at = date.into();
    }

    pub fn set_notify_admins_at(&mut self, date: NaiveDate) {
        self.notify_admins_at = date.into();
    }

    pub fn set_notify_users_at(&mut self, date: NaiveDate) {
        self.notify_users_at = date.into();
    }

    pub fn set_block_changes_at(&mut self, date: NaiveDate) {
        self.block_changes_at = date.into();
    }

    pub fn set_restrictions(&mut self, restrictions: Map<String, Value>) {
        self.restrictions = Some(restrictions);
    }

    /// Checks field shape: the licensee must be a non-empty map,
    /// `starts_at` a real date, and every optional threshold either
    /// unset or a real date. Never inspects expiry or authenticity.
    #[must_use]
    pub fn valid(&self) -> bool {
        match &self.licensee {
            Some(Value::Object(map)) if !map.is_empty() => {}
            _ => return false,
        }

        if self.starts_at.date().is_none() {
            return false;
        }

        self.expires_at.is_well_formed()
            && self.notify_admins_at.is_well_formed()
            && self.notify_users_at.is_well_formed()
            && self.block_changes_at.is_well_formed()
    }

    /// Fails with [`LicenseError::Invalid`] unless the record is valid.
    pub fn validate(&self) -> LicenseResult<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(LicenseError::Invalid)
        }
    }

    /// True when an expiry threshold is set, even one already passed.
    #[must_use]
    pub fn will_expire(&self) -> bool {
        self.expires_at.is_set()
    }

    /// True when an admin-notification threshold is set.
    #[must_use]
    pub fn will_notify_admins(&self) -> bool {
        self.notify_admins_at.is_set()
    }

    /// True when a user-notification threshold is set.
    #[must_use]
    pub fn will_notify_users(&self) -> bool {
        self.notify_users_at.is_set()
    }

    /// True when a change-blocking threshold is set.
    #[must_use]
    pub fn will_block_changes(&self) -> bool {
        self.block_changes_at.is_set()
    }

    /// True when the expiry threshold has been reached (inclusive).
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at.reached_by(today())
    }

    /// True when the admin-notification threshold has been reached.
    #[must_use]
    pub fn notify_admins(&self) -> bool {
        self.notify_admins_at.reached_by(today())
    }

    /// True when the user-notification threshold has been reached.
    #[must_use]
    pub fn notify_users(&self) -> bool {
        self.notify_users_at.reached_by(today())
    }

    /// True when the change-blocking threshold has been reached.
    #[must_use]
    pub fn block_changes(&self) -> bool {
        self.block_changes_at.reached_by(today())
    }

    /// True when at least one restriction is present. An empty map
    /// counts as unrestricted.
    #[must_use]
    pub fn restricted(&self) -> bool {
        self.restrictions.as_ref().is_some_and(|map| !map.is_empty())
    }

    /// True when `key` appears among the restrictions.
    #[must_use]
    pub fn restricted_by(&self, key: &str) -> bool {
        self.restrictions
            .as_ref()
            .is_some_and(|map| map.contains_key(key))
    }

    /// Looks up a single restriction value.
    #[must_use]
    pub fn restriction(&self, key: &str) -> Option<&Value> {
        self.restrictions.as_ref()?.get(key)
    }

    /// Builds the canonical attribute map used for serialization.
    ///
    /// `issued_at` is the legacy wire name for `starts_at` and is
    /// always present; it is part of the compatibility contract and
    /// cannot change without a version bump. Optional thresholds and
    /// restrictions are omitted entirely when unset — absence, not
    /// null, means "feature unset".
    #[must_use]
    pub fn attributes(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert("version".to_string(), Value::from(self.version));
        map.insert(
            "licensee".to_string(),
            self.licensee.clone().unwrap_or(Value::Null),
        );
        map.insert(
            "issued_at".to_string(),
            self.starts_at.to_wire().unwrap_or(Value::Null),
        );

        if let Some(value) = self.expires_at.to_wire() {
            map.insert("expires_at".to_string(), value);
        }
        if let Some(value) = self.notify_admins_at.to_wire() {
            map.insert("notify_admins_at".to_string(), value);
        }
        if let Some(value) = self.notify_users_at.to_wire() {
            map.insert("notify_users_at".to_string(), value);
        }
        if let Some(value) = self.block_changes_at.to_wire() {
            map.insert("block_changes_at".to_string(), value);
        }

        if self.restricted() {
            if let Some(restrictions) = &self.restrictions {
                map.insert(
                    "restrictions".to_string(),
                    Value::Object(restrictions.clone()),
                );
            }
        }

        map
    }

    /// Serializes the canonical attributes as JSON text.
    pub fn to_json(&self) -> LicenseResult<String> {
        Ok(serde_json::to_string(&self.attributes())?)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
