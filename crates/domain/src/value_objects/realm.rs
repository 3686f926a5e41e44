//! Realm identifiers and the display-name <-> key mapping.
//!
//! The page lists every realm as an option whose id is the normalized key
//! and whose value is the human readable name. `RealmMap` is built once from
//! that list and must stay a bijection.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::names::normalize_slug;
use crate::error::DomainError;

/// Normalized realm identifier (e.g. `"area-52"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RealmKey(String);

impl RealmKey {
    /// Wrap an already normalized key.
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Realm key cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive the key from a realm's display name.
    pub fn from_display(display: &str) -> Result<Self, DomainError> {
        Self::new(normalize_slug(display))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RealmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RealmKey {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RealmKey> for String {
    fn from(key: RealmKey) -> String {
        key.0
    }
}

/// One entry of the realm selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmOption {
    pub key: RealmKey,
    pub display: String,
}

impl RealmOption {
    pub fn new(key: RealmKey, display: impl Into<String>) -> Self {
        Self {
            key,
            display: display.into(),
        }
    }
}

/// Bijective mapping between realm display names and realm keys.
///
/// Options keep their page order so a selector can list them as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RealmMap {
    options: Vec<RealmOption>,
    display_by_key: HashMap<RealmKey, usize>,
    key_by_display: HashMap<String, usize>,
}

impl RealmMap {
    /// Build the map from the page's realm options.
    ///
    /// # Errors
    ///
    /// - `DomainError::Validation` for an option with a blank display name
    /// - `DomainError::Constraint` if a key or a display name appears twice
    pub fn from_options(
        options: impl IntoIterator<Item = RealmOption>,
    ) -> Result<Self, DomainError> {
        let mut map = Self::default();
        for option in options {
            let display = option.display.trim().to_string();
            if display.is_empty() {
                return Err(DomainError::validation(format!(
                    "Realm {} has no display name",
                    option.key
                )));
            }
            if map.display_by_key.contains_key(&option.key) {
                return Err(DomainError::constraint(format!(
                    "Realm key {} is listed more than once",
                    option.key
                )));
            }
            if map.key_by_display.contains_key(&display) {
                return Err(DomainError::constraint(format!(
                    "Realm name {} is listed more than once",
                    display
                )));
            }
            let index = map.options.len();
            map.display_by_key.insert(option.key.clone(), index);
            map.key_by_display.insert(display.clone(), index);
            map.options.push(RealmOption::new(option.key, display));
        }
        Ok(map)
    }

    /// Display name for a realm key.
    pub fn display_name(&self, key: &RealmKey) -> Option<&str> {
        self.display_by_key
            .get(key)
            .map(|&i| self.options[i].display.as_str())
    }

    /// Realm key for a display name.
    pub fn key_for(&self, display: &str) -> Option<&RealmKey> {
        self.key_by_display
            .get(display.trim())
            .map(|&i| &self.options[i].key)
    }

    /// Like [`RealmMap::key_for`], but unknown names are an error.
    pub fn resolve(&self, display: &str) -> Result<&RealmKey, DomainError> {
        self.key_for(display)
            .ok_or_else(|| DomainError::validation(format!("Unknown realm: {}", display.trim())))
    }

    pub fn contains_key(&self, key: &RealmKey) -> bool {
        self.display_by_key.contains_key(key)
    }

    /// Options in page order.
    pub fn options(&self) -> &[RealmOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
