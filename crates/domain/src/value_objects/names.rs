//! Validated name newtypes for roster entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Trimmed of leading/trailing whitespace
//! - Within length limits
//!
//! Lengths are counted in characters, not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Minimum length for a toon name
pub const MIN_TOON_NAME_LENGTH: usize = 2;

/// Maximum length for a toon name
pub const MAX_TOON_NAME_LENGTH: usize = 30;

/// Maximum length for a group display name
const MAX_GROUP_NAME_LENGTH: usize = 200;

/// Normalize a display name into the slug used in URLs and lookups.
///
/// Lowercases, drops apostrophes and turns every space into `-`:
/// `"Kel'Thuzad"` becomes `"kelthuzad"`, `"Area 52"` becomes `"area-52"`.
pub fn normalize_slug(display: &str) -> String {
    display
        .trim()
        .to_lowercase()
        .replace('\'', "")
        .replace(' ', "-")
}

// ============================================================================
// ToonName
// ============================================================================

/// A validated toon name (trimmed, 2..=30 characters)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToonName(String);

impl ToonName {
    /// Create a new validated toon name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the trimmed name is shorter than
    /// 2 or longer than 30 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        let length = trimmed.chars().count();
        if !(MIN_TOON_NAME_LENGTH..=MAX_TOON_NAME_LENGTH).contains(&length) {
            return Err(DomainError::validation(format!(
                "Invalid toon name. Must be between {} and {} characters long",
                MIN_TOON_NAME_LENGTH, MAX_TOON_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Parse a name input field. Blank or whitespace-only input is `None`.
    pub fn parse_field(raw: &str) -> Result<Option<Self>, DomainError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::new(raw).map(Some)
    }

    /// Returns the name as entered (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as it is submitted: lowercased, with the first character
    /// uppercased only when it is ASCII. A name starting with a non-ASCII
    /// character stays entirely lowercase.
    pub fn normalized(&self) -> String {
        let lower = self.0.to_lowercase();
        let first = lower.chars().next();
        match first {
            Some(first) if first.is_ascii() => {
                let mut out = String::with_capacity(lower.len());
                out.push(first.to_ascii_uppercase());
                out.push_str(&lower[first.len_utf8()..]);
                out
            }
            _ => lower,
        }
    }
}

impl fmt::Display for ToonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ToonName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ToonName> for String {
    fn from(name: ToonName) -> String {
        name.0
    }
}

// ============================================================================
// GroupName
// ============================================================================

/// A validated group display name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupName(String);

impl GroupName {
    /// Create a new validated group name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Group name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_GROUP_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Group name cannot exceed {} characters",
                MAX_GROUP_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL key for this group.
    pub fn key(&self) -> GroupKey {
        GroupKey(normalize_slug(&self.0))
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GroupName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GroupName> for String {
    fn from(name: GroupName) -> String {
        name.0
    }
}

// ============================================================================
// GroupKey
// ============================================================================

/// Normalized group identifier, the `{group}` segment of `/{realm}/{group}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GroupKey(String);

impl GroupKey {
    /// Wrap a key that is already normalized (e.g. read from a hidden field).
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Group key cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Normalize a display name into a key.
    pub fn from_display(display: &str) -> Result<Self, DomainError> {
        Self::new(normalize_slug(display))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GroupKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GroupKey> for String {
    fn from(key: GroupKey) -> String {
        key.0
    }
}
