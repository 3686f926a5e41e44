//! Per-page form state and the submit state machine.
//!
//! ```text
//! Editing ──submit──▶ Authenticating ──ok──▶ Submitted (terminal)
//!    ▲                      │
//!    └──────── error ───────┘
//! ```

use guildroster_domain::{
    DomainError, GroupKey, GroupName, Password, RealmKey, RealmMap, RosterDocument, RowId,
};
use guildroster_shared::{GroupLocator, PasswordCheck};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits. `last_error` holds the message of the most recent
    /// failed submit or delete, if any.
    Editing { last_error: Option<String> },
    /// Waiting on the server; edits are refused.
    Authenticating,
    /// Navigated away to `location`.
    Submitted { location: String },
}

impl Default for FormPhase {
    fn default() -> Self {
        Self::Editing { last_error: None }
    }
}

/// Everything the editor page used to keep in module globals: the current
/// realm and group, the realm lookup tables, the rows, and the row whose
/// realm selector is open.
#[derive(Debug, Clone)]
pub struct FormState {
    realms: RealmMap,
    current_realm: RealmKey,
    group: GroupKey,
    group_name: GroupName,
    document: RosterDocument,
    realm_selection: Option<RowId>,
    phase: FormPhase,
}

impl FormState {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `current_realm` is not one of the
    /// realm options.
    pub fn new(
        realms: RealmMap,
        current_realm: RealmKey,
        group: GroupKey,
        group_name: GroupName,
        document: RosterDocument,
    ) -> Result<Self, DomainError> {
        if !realms.contains_key(&current_realm) {
            return Err(DomainError::validation(format!(
                "Current realm {} is not in the realm list",
                current_realm
            )));
        }
        Ok(Self {
            realms,
            current_realm,
            group,
            group_name,
            document,
            realm_selection: None,
            phase: FormPhase::default(),
        })
    }

    pub fn realms(&self) -> &RealmMap {
        &self.realms
    }

    pub fn current_realm(&self) -> &RealmKey {
        &self.current_realm
    }

    pub fn group(&self) -> &GroupKey {
        &self.group
    }

    pub fn group_name(&self) -> &GroupName {
        &self.group_name
    }

    pub fn set_group_name(&mut self, name: GroupName) {
        self.group_name = name;
    }

    pub fn document(&self) -> &RosterDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut RosterDocument {
        &mut self.document
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.phase, FormPhase::Editing { .. })
    }

    /// The error recorded by the last failed submit, if the form is editing.
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Editing { last_error } => last_error.as_deref(),
            _ => None,
        }
    }

    /// Display name of a row's realm, as shown in the table.
    pub fn realm_display(&self, id: RowId) -> Option<&str> {
        let row = self.document.get(id)?;
        self.realms.display_name(row.realm())
    }

    pub fn locator(&self) -> GroupLocator {
        GroupLocator::new(self.current_realm.clone(), self.group.clone())
    }

    pub fn password_check(&self, password: Password) -> PasswordCheck {
        PasswordCheck {
            group: self.group.clone(),
            realm: self.current_realm.clone(),
            password,
        }
    }

    // -------------------------------------------------------------------------
    // Realm selector
    // -------------------------------------------------------------------------

    /// Row whose realm selector is open, if any.
    pub fn realm_selection(&self) -> Option<RowId> {
        self.realm_selection
    }

    /// Open the selector for `id`, replacing any earlier selection.
    pub fn select_realm_row(&mut self, id: RowId) {
        self.realm_selection = Some(id);
    }

    /// Close the selector, returning the row it was open for.
    pub fn take_realm_selection(&mut self) -> Option<RowId> {
        self.realm_selection.take()
    }

    // -------------------------------------------------------------------------
    // Phase transitions
    // -------------------------------------------------------------------------

    /// Fail unless the form accepts edits.
    pub fn ensure_editable(&self) -> Result<(), DomainError> {
        match &self.phase {
            FormPhase::Editing { .. } => Ok(()),
            FormPhase::Authenticating => Err(DomainError::invalid_state_transition(
                "form is waiting on the server",
            )),
            FormPhase::Submitted { location } => Err(DomainError::invalid_state_transition(
                format!("form was already submitted to {}", location),
            )),
        }
    }

    /// `Editing -> Authenticating`
    pub fn begin_authentication(&mut self) -> Result<(), DomainError> {
        self.ensure_editable()?;
        self.phase = FormPhase::Authenticating;
        Ok(())
    }

    /// `Authenticating -> Editing`, recording why.
    pub fn return_to_editing(&mut self, error: impl Into<String>) {
        self.phase = FormPhase::Editing {
            last_error: Some(error.into()),
        };
    }

    /// `Authenticating -> Submitted`
    pub fn mark_submitted(&mut self, location: impl Into<String>) -> Result<(), DomainError> {
        if self.phase != FormPhase::Authenticating {
            return Err(DomainError::invalid_state_transition(
                "only an authenticated form can be submitted",
            ));
        }
        self.phase = FormPhase::Submitted {
            location: location.into(),
        };
        Ok(())
    }
}
