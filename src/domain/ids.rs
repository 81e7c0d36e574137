//! Opaque string identifiers for notes and tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;
use uuid::Uuid;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    value: String,
}

impl ParseIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} id '{}': ids must be non-empty and contain no whitespace",
            self.kind, self.value
        )
    }
}

impl std::error::Error for ParseIdError {}

fn validate(kind: &'static str, s: &str) -> Result<String, ParseIdError> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(ParseIdError {
            kind,
            value: s.to_string(),
        });
    }
    Ok(s.to_string())
}

// Both id types share one shape: a validated string with serde as a bare string.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(\"{}\")", stringify!($name), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate($kind, s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

string_id!(
    /// Identifier of a stored note.
    ///
    /// Assigned by the store when a note is created. The bundled backends use
    /// ULIDs, so ids sort in creation order, but any non-empty string without
    /// whitespace is accepted (fixtures commonly use `"1"`, `"2"`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::domain::NoteId;
    ///
    /// let id = NoteId::generate();
    /// assert_eq!(id.as_str().len(), 26);
    ///
    /// let fixed: NoteId = "note-1".parse().unwrap();
    /// assert_eq!(fixed.to_string(), "note-1");
    /// ```
    NoteId,
    "note"
);

string_id!(
    /// Identifier of a tag in the tag registry.
    ///
    /// Generated client-side as a random UUID when the backend does not assign
    /// one. Two tags may share a label but never an id.
    TagId,
    "tag"
);

impl NoteId {
    /// Generates a fresh store-side id (ULID).
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }
}

impl TagId {
    /// Generates a fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
