//! Lenient parsing for wire date fields.
//!
//! Wire input is loosely typed, so an optional date attribute is kept
//! as a tri-state rather than an `Option`. A string that parses as an
//! ISO date becomes [`DateField::Date`]. A string that fails to parse
//! is dropped to [`DateField::Unset`] — legacy leniency: a typo'd date
//! disappears instead of failing the whole import. Any other value is
//! kept verbatim as [`DateField::Invalid`] so validation can reject it
//! later.

use chrono::NaiveDate;
use serde_json::Value;

/// An optional calendar-date attribute as recovered from the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DateField {
    /// Not present on the wire, or present as an unparsable string.
    #[default]
    Unset,
    /// A well-formed calendar date.
    Date(NaiveDate),
    /// A wire value that is neither a date string nor null. Fails
    /// [`License::valid`](crate::License::valid).
    Invalid(Value),
}

impl DateField {
    /// Reads a wire value under the leniency policy described above.
    pub fn from_wire(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Unset,
            Some(Value::String(s)) => match s.parse::<NaiveDate>() {
                Ok(date) => Self::Date(date),
                Err(_) => Self::Unset,
            },
            Some(other) => Self::Invalid(other.clone()),
        }
    }

    /// True when any value is set, including an ill-typed one.
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// True when the field would pass validation: unset, or a real date.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// The date, when one is set.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// True when a date threshold is set and `today` has reached it,
    /// inclusive of the threshold date itself.
    #[must_use]
    pub fn reached_by(&self, today: NaiveDate) -> bool {
        matches!(self, Self::Date(date) if today >= *date)
    }

    /// The wire representation, if any. Dates render as `YYYY-MM-DD`;
    /// ill-typed values round-trip verbatim.
    #[must_use]
    pub fn to_wire(&self) -> Option<Value> {
        match self {
            Self::Unset => None,
            Self::Date(date) => Some(Value::String(date.format("%Y-%m-%d").to_string())),
            Self::Invalid(value) => Some(value.clone()),
        }
    }
}

impl From<NaiveDate> for DateField {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn absent_and_null_are_unset() {
        assert_eq!(DateField::from_wire(None), DateField::Unset);
        assert_eq!(DateField::from_wire(Some(&Value::Null)), DateField::Unset);
    }

    #[test]
    fn iso_string_parses() {
        let field = DateField::from_wire(Some(&json!("2024-01-15")));
        assert_eq!(field, DateField::Date(date(2024, 1, 15)));
    }

    #[test]
    fn unparsable_string_is_swallowed() {
        let field = DateField::from_wire(Some(&json!("not-a-date")));
        assert_eq!(field, DateField::Unset);
        assert!(field.is_well_formed());
    }

    #[test]
    fn non_string_value_kept_as_invalid() {
        let field = DateField::from_wire(Some(&json!(12345)));
        assert_eq!(field, DateField::Invalid(json!(12345)));
        assert!(field.is_set());
        assert!(!field.is_well_formed());
        assert_eq!(field.date(), None);
    }

    #[test]
    fn reached_by_is_inclusive() {
        let field = DateField::Date(date(2024, 6, 1));
        assert!(!field.reached_by(date(2024, 5, 31)));
        assert!(field.reached_by(date(2024, 6, 1)));
        assert!(field.reached_by(date(2024, 6, 2)));
    }

    #[test]
    fn unset_never_reached() {
        assert!(!DateField::Unset.reached_by(date(2999, 1, 1)));
        assert!(!DateField::Invalid(json!(1)).reached_by(date(2999, 1, 1)));
    }

    #[test]
    fn wire_roundtrip() {
        let field = DateField::Date(date(2024, 1, 5));
        assert_eq!(field.to_wire(), Some(json!("2024-01-05")));
        assert_eq!(DateField::from_wire(field.to_wire().as_ref()), field);

        assert_eq!(DateField::Unset.to_wire(), None);
        assert_eq!(DateField::Invalid(json!(true)).to_wire(), Some(json!(true)));
    }
}
