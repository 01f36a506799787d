//! Strongly-typed ID wrappers for items and users
//!
//! Newtype wrappers prevent accidentally mixing up item and user identifiers
//! at compile time. Identifiers are plain strings: the CLI generates fresh
//! UUIDv4 strings, but data files may carry any unique string (e.g. "b1").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new random ID (UUIDv4 string)
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// View the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ItemId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ItemId::new();
        let b = ItemId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_arbitrary_string() {
        let id = ItemId::from("b1");
        assert_eq!(id.as_str(), "b1");
        assert_eq!(id.to_string(), "b1");
    }

    #[test]
    fn test_serialization_is_transparent() {
        let id = UserId::from("u1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"u1\"");

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the
        // underlying strings can be compared.
        let item_id = ItemId::from("x");
        let user_id = UserId::from("x");
        assert_eq!(item_id.as_str(), user_id.as_str());
    }
}
