//! Shared test helpers for license tests.

#![allow(dead_code)]

use chrono::{Duration, Local, NaiveDate};
use clave_license::{KeyPair, License, LicenseCodec};
use serde_json::{json, Map, Value};

/// A plausible licensee block.
pub fn licensee() -> Map<String, Value> {
    json_object(json!({
        "name": "ACME Corp",
        "email": "licensing@acme.test",
    }))
}

/// Unwraps a `json!` literal into an attribute map.
pub fn json_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// A valid license starting today with a one-year expiry.
pub fn sample_license() -> License {
    let mut license = License::new(licensee(), today());
    license.set_expires_at(days_from_today(365));
    license
}

/// A full codec with a fresh keypair.
pub fn test_codec() -> LicenseCodec {
    LicenseCodec::new(KeyPair::generate().secret)
}
