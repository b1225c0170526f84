//! Newtype wrappers around `i64` for all domain entity identifiers.
//!
//! Using distinct types prevents accidentally passing a `PhotoId` where a
//! `PropertyId` is expected. When the `sqlx` feature is enabled, each ID
//! type also implements `sqlx::Type`, `sqlx::Encode`, and `sqlx::Decode`
//! for PostgreSQL `BIGINT` columns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a canonical decimal identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {0:?}")]
pub struct ParseIdError(String);

/// Parse an identifier written as plain ASCII digits with no sign and no
/// leading zeros, so every id has exactly one textual form.
fn parse_canonical(s: &str) -> Result<i64, ParseIdError> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s.len() == 1 || !s.starts_with('0'));
    if !canonical {
        return Err(ParseIdError(s.to_string()));
    }
    s.parse::<i64>().map_err(|_| ParseIdError(s.to_string()))
}

/// Macro to define a newtype ID wrapper around a database `BIGSERIAL` key.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an identifier from a raw key value.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Return the inner key value.
            pub fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_canonical(s).map(Self)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <i64 as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <i64 as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a property listing.
    PropertyId
);

define_id!(
    /// Unique identifier for a photo record.
    PhotoId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_id_display() {
        let id = PropertyId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_property_id_from_str() {
        let id: PropertyId = "17".parse().expect("should parse");
        assert_eq!(id.value(), 17);
    }

    #[test]
    fn test_property_id_rejects_garbage() {
        assert!("abc".parse::<PropertyId>().is_err());
        assert!("1; DROP TABLE photos".parse::<PropertyId>().is_err());
        assert!("".parse::<PropertyId>().is_err());
        assert!("99999999999999999999".parse::<PropertyId>().is_err());
    }

    #[test]
    fn test_property_id_requires_plain_digits() {
        for raw in ["+1", "-1", "01", " 1", "1 ", "1e3", "١"] {
            assert!(raw.parse::<PropertyId>().is_err(), "{raw:?}");
        }
        assert_eq!("0".parse::<PropertyId>().map(PropertyId::value), Ok(0));
        assert_eq!("10".parse::<PhotoId>().map(PhotoId::value), Ok(10));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = PhotoId::new(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
        let parsed: PhotoId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}
