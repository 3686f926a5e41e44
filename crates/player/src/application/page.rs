//! Page snapshot - the editor page's markup contract as data.
//!
//! The editor needs four things from the page: the realm options (key and
//! display name), the current realm key, the group key and display name, and
//! the existing table rows with their columns in order (name, role, status,
//! realm display name). `PageSnapshot` carries exactly that, as JSON.

use std::path::Path;

use guildroster_domain::{
    DomainError, GroupKey, GroupName, RealmKey, RealmMap, RealmOption, RosterDocument, ToonName,
    ToonRole, ToonRow, ToonStatus,
};
use serde::{Deserialize, Serialize};

use super::state::FormState;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("Failed to read page snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed page snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid page snapshot: {0}")]
    Invalid(#[from] DomainError),
}

/// The editor page as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub realm_options: Vec<RealmOption>,
    pub current_realm: String,
    pub group: String,
    pub group_name: String,
    #[serde(default)]
    pub rows: Vec<RowSnapshot>,
}

/// One table row, columns as the page shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Realm display name; the page's current realm when absent
    #[serde(default)]
    pub realm: Option<String>,
}

impl PageSnapshot {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Validate the snapshot and build the editor state from it.
    ///
    /// Every row goes through the same checks as an edit: names must be
    /// blank or 2..=30 characters, role and status must be known values and
    /// the realm must be one of the options.
    pub fn into_form_state(self) -> Result<FormState, PageError> {
        let realms = RealmMap::from_options(self.realm_options)?;
        let current_realm = RealmKey::new(self.current_realm)?;
        let group = GroupKey::new(self.group)?;
        let group_name = GroupName::new(self.group_name)?;

        let mut document = RosterDocument::new();
        for (index, row) in self.rows.into_iter().enumerate() {
            let row = build_row(&realms, &current_realm, row).map_err(|err| {
                DomainError::validation(format!("row {}: {}", index + 1, err))
            })?;
            document.push(row);
        }

        Ok(FormState::new(
            realms,
            current_realm,
            group,
            group_name,
            document,
        )?)
    }
}

fn build_row(
    realms: &RealmMap,
    current_realm: &RealmKey,
    row: RowSnapshot,
) -> Result<ToonRow, DomainError> {
    let realm = match row.realm.as_deref() {
        Some(display) => realms.resolve(display)?.clone(),
        None => current_realm.clone(),
    };
    let role = match row.role.as_deref() {
        Some(value) => value.parse::<ToonRole>()?,
        None => ToonRole::default(),
    };
    let status = match row.status.as_deref() {
        Some(value) => value.parse::<ToonStatus>()?,
        None => ToonStatus::default(),
    };

    let mut toon = ToonRow::new(realm).with_role(role).with_status(status);
    toon.set_name(ToonName::parse_field(&row.name)?);
    Ok(toon)
}
