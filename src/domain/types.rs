//! Strongly-typed value objects used by domain entities.
//!
//! Raw strings coming from the marketplace backend are validated and, where
//! they are only ever compared, normalised once here so that resolvers never
//! repeat ad-hoc lower-casing.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Wrapper for strings that are trimmed, non-empty and kept verbatim otherwise.
macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Wrapper for comparison keys: trimmed, non-empty and lower-cased.
///
/// Two keys built from strings that differ only in case or surrounding
/// whitespace are equal.
macro_rules! normalized_key_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a normalised key, rejecting blank input.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(|v| Self(v.to_lowercase()))
            }

            /// Borrow the normalised key.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    CategoryId,
    "Opaque identifier of a category node.",
    "category id"
);
non_empty_string_newtype!(
    CategoryName,
    "Display name of a category, kept exactly as received.",
    "category name"
);
non_empty_string_newtype!(
    UserId,
    "Identifier of the user owning a set of subscriptions.",
    "user id"
);

normalized_key_newtype!(
    CategoryKey,
    "Case-insensitive comparison key for category names.",
    "category"
);
normalized_key_newtype!(
    AdType,
    "Case-insensitive plan/ad type tag such as `ads` or `job`.",
    "type"
);

impl CategoryName {
    /// Comparison key for this name.
    pub fn key(&self) -> CategoryKey {
        // Non-empty by construction, so the key is always valid.
        CategoryKey(self.0.to_lowercase())
    }
}

/// Lifecycle state of a subscription as reported by the billing backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionStatus {
    Active,
    Confirmed,
    Pending,
    Cancelled,
    Expired,
    /// Any state this service does not know about.
    Other(String),
}

impl SubscriptionStatus {
    /// String representation used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::Other(value) => value,
        }
    }

    /// Only `active` and `confirmed` subscriptions may be drawn from. The
    /// backend's spelling is not normalised, so `"ACTIVE"` is not usable.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Active | Self::Confirmed)
    }
}

impl Display for SubscriptionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Statuses are matched exactly; any other spelling is kept as `Other`.
impl From<&str> for SubscriptionStatus {
    fn from(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            "confirmed" => Self::Confirmed,
            "pending" => Self::Pending,
            "cancelled" => Self::Cancelled,
            "expired" => Self::Expired,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for SubscriptionStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<SubscriptionStatus> for String {
    fn from(value: SubscriptionStatus) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_category_names_but_keeps_case() {
        let value = CategoryName::new("  Property for Rent  ").unwrap();
        assert_eq!(value.as_str(), "Property for Rent");
    }

    #[test]
    fn category_keys_ignore_case_and_whitespace() {
        assert_eq!(
            CategoryKey::new(" Real Estate ").unwrap(),
            CategoryKey::new("real estate").unwrap()
        );
        assert_eq!(
            CategoryName::new("Cars").unwrap().key(),
            CategoryKey::new("CARS").unwrap()
        );
    }

    #[test]
    fn rejects_blank_values() {
        assert_eq!(
            CategoryId::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("category id")
        );
        assert_eq!(
            AdType::new("").unwrap_err(),
            TypeConstraintError::EmptyString("type")
        );
    }

    #[test]
    fn ad_type_is_normalised() {
        assert_eq!(AdType::new("Ads").unwrap().as_str(), "ads");
    }

    #[test]
    fn parses_subscription_statuses() {
        assert_eq!(SubscriptionStatus::from("active"), SubscriptionStatus::Active);
        assert_eq!(
            SubscriptionStatus::from("confirmed"),
            SubscriptionStatus::Confirmed
        );
        assert_eq!(
            SubscriptionStatus::from("on_hold"),
            SubscriptionStatus::Other("on_hold".to_string())
        );
        assert!(!SubscriptionStatus::Pending.is_usable());
    }

    #[test]
    fn statuses_are_matched_exactly() {
        for raw in ["ACTIVE", " Confirmed ", "Active"] {
            let status = SubscriptionStatus::from(raw);
            assert_eq!(status, SubscriptionStatus::Other(raw.to_string()));
            assert!(!status.is_usable());
        }
        assert!(SubscriptionStatus::Confirmed.is_usable());
    }

    #[test]
    fn deserializes_newtypes_through_validation() {
        let key: CategoryKey = serde_json::from_str("\"Motors\"").unwrap();
        assert_eq!(key.as_str(), "motors");
        assert!(serde_json::from_str::<CategoryId>("\"  \"").is_err());
    }
}
