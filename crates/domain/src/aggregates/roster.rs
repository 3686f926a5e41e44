//! RosterDocument aggregate - the ordered rows of one group's roster.
//!
//! Row order is the visual order of the table and the order of the
//! submitted payload. Sorting for display goes through
//! [`RosterDocument::display_order`] and never reorders the rows themselves.

use crate::entities::ToonRow;
use crate::error::DomainError;
use crate::ids::RowId;
use crate::types::{ToonRole, ToonStatus};
use crate::value_objects::{RealmKey, ToonName};

/// Ordered, editable collection of toon rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterDocument {
    rows: Vec<ToonRow>,
}

/// Lineup summary: mains counted by role, plus bench and alt totals.
///
/// Blank rows are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterComposition {
    pub tanks: usize,
    pub healers: usize,
    pub melee: usize,
    pub ranged: usize,
    pub bench: usize,
    pub alts: usize,
}

impl RosterComposition {
    /// Number of named toons with `main` status.
    pub fn mains(&self) -> usize {
        self.tanks + self.healers + self.melee + self.ranged
    }
}

impl RosterDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prepared row, returning its id.
    pub fn push(&mut self, row: ToonRow) -> RowId {
        let id = row.id();
        self.rows.push(row);
        id
    }

    /// Append a blank row (role dps, status main) on `realm`.
    pub fn add_row(&mut self, realm: RealmKey) -> RowId {
        self.push(ToonRow::new(realm))
    }

    /// Remove a row. Removing an id that is already gone is a no-op and
    /// returns `None`.
    pub fn remove_row(&mut self, id: RowId) -> Option<ToonRow> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    pub fn get(&self, id: RowId) -> Option<&ToonRow> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.get(id).is_some()
    }

    /// Rows in visual order.
    pub fn rows(&self) -> &[ToonRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that will be submitted (non-blank), in visual order.
    pub fn named_rows(&self) -> impl Iterator<Item = (&ToonRow, &ToonName)> {
        self.rows
            .iter()
            .filter_map(|row| row.name().map(|name| (row, name)))
    }

    pub fn rename(&mut self, id: RowId, name: Option<ToonName>) -> Result<(), DomainError> {
        self.row_mut(id)?.set_name(name);
        Ok(())
    }

    pub fn set_role(&mut self, id: RowId, role: ToonRole) -> Result<(), DomainError> {
        self.row_mut(id)?.set_role(role);
        Ok(())
    }

    pub fn set_status(&mut self, id: RowId, status: ToonStatus) -> Result<(), DomainError> {
        self.row_mut(id)?.set_status(status);
        Ok(())
    }

    pub fn set_realm(&mut self, id: RowId, realm: RealmKey) -> Result<(), DomainError> {
        self.row_mut(id)?.set_realm(realm);
        Ok(())
    }

    /// Count the lineup by role and status.
    pub fn composition(&self) -> RosterComposition {
        let mut summary = RosterComposition::default();
        for (row, _) in self.named_rows() {
            match (row.status(), row.role()) {
                (ToonStatus::Main, ToonRole::Tank) => summary.tanks += 1,
                (ToonStatus::Main, ToonRole::Healer) => summary.healers += 1,
                (ToonStatus::Main, ToonRole::Dps) => summary.melee += 1,
                (ToonStatus::Main, ToonRole::Ranged) => summary.ranged += 1,
                (ToonStatus::Bench, _) => summary.bench += 1,
                (ToonStatus::Alt, _) => summary.alts += 1,
            }
        }
        summary
    }

    /// Row ids in table display order: status first (main, bench, alt),
    /// then name ascending ignoring case, blank rows last within a status.
    /// Ties keep document order.
    pub fn display_order(&self) -> Vec<RowId> {
        let mut keyed: Vec<_> = self
            .rows
            .iter()
            .map(|row| {
                let name = row.name().map(|n| n.as_str().to_lowercase());
                ((row.status().sort_rank(), name.is_none(), name), row.id())
            })
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        keyed.into_iter().map(|(_, id)| id).collect()
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut ToonRow, DomainError> {
        self.rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| DomainError::not_found("ToonRow", id.to_string()))
    }
}
