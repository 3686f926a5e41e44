//! One row of the roster table.

use crate::ids::RowId;
use crate::types::{ToonRole, ToonStatus};
use crate::value_objects::{RealmKey, ToonName};

/// A toon as edited in the roster table.
///
/// The name is optional: a freshly added row is blank until the officer
/// types a name, and blank rows are never submitted. The realm is stored as
/// its key; the table shows the display name looked up in the `RealmMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToonRow {
    id: RowId,
    name: Option<ToonName>,
    role: ToonRole,
    status: ToonStatus,
    realm: RealmKey,
}

impl ToonRow {
    /// A blank row on `realm` with the default role and status.
    pub fn new(realm: RealmKey) -> Self {
        Self {
            id: RowId::new(),
            name: None,
            role: ToonRole::default(),
            status: ToonStatus::default(),
            realm,
        }
    }

    // Builder methods

    pub fn with_name(mut self, name: ToonName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_role(mut self, role: ToonRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_status(mut self, status: ToonStatus) -> Self {
        self.status = status;
        self
    }

    // Read accessors

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn name(&self) -> Option<&ToonName> {
        self.name.as_ref()
    }

    pub fn role(&self) -> ToonRole {
        self.role
    }

    pub fn status(&self) -> ToonStatus {
        self.status
    }

    pub fn realm(&self) -> &RealmKey {
        &self.realm
    }

    /// True when the name field is empty; such rows are skipped on submit.
    pub fn is_blank(&self) -> bool {
        self.name.is_none()
    }

    // Mutators

    pub fn set_name(&mut self, name: Option<ToonName>) {
        self.name = name;
    }

    pub fn set_role(&mut self, role: ToonRole) {
        self.role = role;
    }

    pub fn set_status(&mut self, status: ToonStatus) {
        self.status = status;
    }

    pub fn set_realm(&mut self, realm: RealmKey) {
        self.realm = realm;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_row_uses_defaults() {
        let realm = RealmKey::new("area-52").expect("valid");
        let row = ToonRow::new(realm.clone());
        assert!(row.is_blank());
        assert_eq!(row.role(), ToonRole::Dps);
        assert_eq!(row.status(), ToonStatus::Main);
        assert_eq!(row.realm(), &realm);
    }

    #[test]
    fn builder_sets_fields() {
        let row = ToonRow::new(RealmKey::new("area-52").expect("valid"))
            .with_name(ToonName::new("Zekk").expect("valid"))
            .with_role(ToonRole::Healer)
            .with_status(ToonStatus::Bench);
        assert!(!row.is_blank());
        assert_eq!(row.name().map(ToonName::as_str), Some("Zekk"));
        assert_eq!(row.role(), ToonRole::Healer);
        assert_eq!(row.status(), ToonStatus::Bench);
    }
}
