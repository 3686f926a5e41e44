//! Roster Controller - event handlers for the roster editor page
//!
//! One controller owns one page's `FormState`. Every UI event maps to one
//! `on_*` handler; rendering reads the state back through [`RosterController::state`].
//! Handlers take `&mut self`, so a submit in flight holds the controller
//! exclusively until the server has answered.

use std::sync::Arc;

use guildroster_domain::{
    DomainError, GroupName, Password, RowId, ToonName, ToonRole, ToonStatus,
};
use guildroster_shared::{
    FormBody, GroupLocator, GroupNameCheck, GroupUpdate, RosterPayload, HOME_PATH,
};
use tracing::{debug, error, info, warn};

use crate::application::error::FormError;
use crate::application::state::FormState;
use crate::ports::outbound::{ApiError, PlatformPort, RosterApiPort};

/// Shown when `/val` rejects the password
pub const PASSWORD_INVALID_MESSAGE: &str = "Password is invalid!";

/// Shown when the delete confirmation does not match
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match!";

/// Shown when the server cannot be reached
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Could not reach the roster server. Please try again.";

/// Shown when the roster update fails after the password was accepted
pub const SAVE_FAILED_MESSAGE: &str = "Saving the roster failed. Please try again.";

/// Shown when the group delete fails after the password was accepted
pub const DELETE_FAILED_MESSAGE: &str = "Deleting the group failed. Please try again.";

pub struct RosterController {
    state: FormState,
    api: Arc<dyn RosterApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl RosterController {
    pub fn new(
        state: FormState,
        api: Arc<dyn RosterApiPort>,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        Self {
            state,
            api,
            platform,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    // -------------------------------------------------------------------------
    // Row editing
    // -------------------------------------------------------------------------

    /// Append a blank row (dps, main, current realm).
    pub fn on_add_row(&mut self) -> Result<RowId, FormError> {
        self.state.ensure_editable()?;
        let realm = self.state.current_realm().clone();
        let id = self.state.document_mut().add_row(realm);
        debug!(row = %id, "Added roster row");
        Ok(id)
    }

    /// Remove a row without confirmation. Returns `false` if it was already
    /// gone.
    pub fn on_delete_row(&mut self, id: RowId) -> Result<bool, FormError> {
        self.state.ensure_editable()?;
        let removed = self.state.document_mut().remove_row(id).is_some();
        if removed && self.state.realm_selection() == Some(id) {
            self.state.take_realm_selection();
        }
        debug!(row = %id, removed, "Delete roster row");
        Ok(removed)
    }

    /// Validate and store a name edit.
    ///
    /// Blank input clears the name. A name outside 2..=30 characters raises
    /// a blocking alert and leaves the row as it was.
    pub fn on_name_edit(&mut self, id: RowId, raw: &str) -> Result<(), FormError> {
        self.state.ensure_editable()?;
        let name = match ToonName::parse_field(raw) {
            Ok(name) => name,
            Err(err) => {
                self.platform.alert(&validation_message(&err));
                return Err(err.into());
            }
        };
        self.state.document_mut().rename(id, name)?;
        Ok(())
    }

    pub fn on_role_change(&mut self, id: RowId, value: &str) -> Result<(), FormError> {
        self.state.ensure_editable()?;
        let role = value.parse::<ToonRole>()?;
        self.state.document_mut().set_role(id, role)?;
        Ok(())
    }

    pub fn on_status_change(&mut self, id: RowId, value: &str) -> Result<(), FormError> {
        self.state.ensure_editable()?;
        let status = value.parse::<ToonStatus>()?;
        self.state.document_mut().set_status(id, status)?;
        Ok(())
    }

    /// Edit the group's display name. Invalid names alert like toon names.
    pub fn on_group_name_edit(&mut self, raw: &str) -> Result<(), FormError> {
        self.state.ensure_editable()?;
        match GroupName::new(raw) {
            Ok(name) => {
                self.state.set_group_name(name);
                Ok(())
            }
            Err(err) => {
                self.platform.alert(&validation_message(&err));
                Err(err.into())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Realm selector
    // -------------------------------------------------------------------------

    /// Open the realm selector for a row. The most recent call wins.
    /// Returns `false` for a row that no longer exists.
    pub fn on_realm_change(&mut self, id: RowId) -> Result<bool, FormError> {
        self.state.ensure_editable()?;
        if !self.state.document().contains(id) {
            return Ok(false);
        }
        self.state.select_realm_row(id);
        Ok(true)
    }

    /// Confirm the selector with the chosen realm display name.
    ///
    /// Returns `false` when no row was active (selector never opened, or its
    /// row was deleted meanwhile). An unknown realm is an error and keeps the
    /// selector open on the same row.
    pub fn on_realm_confirm(&mut self, display: &str) -> Result<bool, FormError> {
        self.state.ensure_editable()?;
        let Some(id) = self.state.realm_selection() else {
            return Ok(false);
        };
        let realm = self.state.realms().resolve(display)?.clone();
        self.state.take_realm_selection();
        if !self.state.document().contains(id) {
            return Ok(false);
        }
        debug!(row = %id, realm = %realm, "Realm changed");
        self.state.document_mut().set_realm(id, realm)?;
        Ok(true)
    }

    /// Close the selector without changing anything.
    pub fn on_realm_cancel(&mut self) {
        self.state.take_realm_selection();
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    /// The `{toons: [...]}` payload: named rows top to bottom, names
    /// case-normalized, realms as keys.
    pub fn serialize(&self) -> RosterPayload {
        RosterPayload::from_document(self.state.document())
    }

    pub fn payload_json(&self) -> Result<String, FormError> {
        self.serialize()
            .to_json()
            .map_err(|e| FormError::SubmissionFailed(ApiError::Serialization(e.to_string())))
    }

    // -------------------------------------------------------------------------
    // Server round trips
    // -------------------------------------------------------------------------

    /// Check the password, then save the roster and navigate to the group
    /// page. Returns the location navigated to.
    ///
    /// The update request is only sent after `/val` succeeds. Any failure
    /// puts the form back into editing with the error recorded.
    ///
    /// The future must be driven to completion. Dropping it while a request
    /// is in flight leaves the form in `Authenticating`, and every later
    /// handler returns `FormError::InvalidState`.
    pub async fn on_submit(&mut self, password: Password) -> Result<String, FormError> {
        self.state.begin_authentication()?;
        self.authenticate(password.clone()).await?;

        let json = match self.payload_json() {
            Ok(json) => json,
            Err(err) => {
                self.fail(&err, SAVE_FAILED_MESSAGE);
                return Err(err);
            }
        };
        let locator = self.state.locator();
        let update = GroupUpdate {
            group_name: self.state.group_name().clone(),
            json,
            password,
        };

        info!(
            path = %locator.path(),
            toons = self.state.document().named_rows().count(),
            "Posting group data"
        );
        match self.api.update_group(&locator, &update).await {
            Ok(()) => self.finish(locator.path()),
            Err(api_err) => {
                error!(error = %api_err, path = %locator.path(), "Setting group data failed");
                let err = FormError::SubmissionFailed(api_err);
                self.fail(&err, SAVE_FAILED_MESSAGE);
                Err(err)
            }
        }
    }

    /// Delete the whole group after a double password entry, then navigate
    /// to the front page. Like [`Self::on_submit`], the future must not be
    /// dropped mid-request.
    pub async fn on_delete_group(
        &mut self,
        password: Password,
        confirmation: Password,
    ) -> Result<String, FormError> {
        self.state.ensure_editable()?;
        if password != confirmation {
            self.platform.notify_error(PASSWORD_MISMATCH_MESSAGE);
            return Err(FormError::PasswordMismatch);
        }

        self.state.begin_authentication()?;
        self.authenticate(password.clone()).await?;

        let check = self.state.password_check(password);
        info!(group = %check.group, realm = %check.realm, "Deleting group");
        match self.api.delete_group(&check).await {
            Ok(()) => self.finish(HOME_PATH.to_string()),
            Err(api_err) => {
                error!(error = %api_err, group = %check.group, "Deleting group failed");
                let err = FormError::SubmissionFailed(api_err);
                self.fail(&err, DELETE_FAILED_MESSAGE);
                Err(err)
            }
        }
    }

    /// Ask the server whether a new group name is free on a realm.
    ///
    /// Both inputs are display names from the front page; they are
    /// normalized the same way the group URL is.
    pub async fn on_check_group_name(
        &self,
        realm_display: &str,
        group_display: &str,
    ) -> Result<bool, FormError> {
        let locator = GroupLocator::from_display(realm_display, group_display)?;
        let check = GroupNameCheck {
            group: locator.group,
            realm: locator.realm,
            new_group_name: GroupName::new(group_display)?,
        };
        debug!(body = %check.encode(), "Checking group name");
        match self.api.check_group_name(&check).await {
            Ok(()) => Ok(true),
            Err(err) if err.is_rejection() => Ok(false),
            Err(err) => {
                warn!(error = %err, "Group name check failed");
                Err(FormError::SubmissionFailed(err))
            }
        }
    }

    async fn authenticate(&mut self, password: Password) -> Result<(), FormError> {
        let check = self.state.password_check(password);
        debug!(group = %check.group, realm = %check.realm, "Validating password");
        match self.api.validate_password(&check).await {
            Ok(()) => {
                debug!("Password authentication success");
                Ok(())
            }
            Err(api_err) if api_err.is_rejection() => {
                info!(group = %check.group, "Password authentication failed");
                let err = FormError::AuthenticationFailed;
                self.fail(&err, PASSWORD_INVALID_MESSAGE);
                Err(err)
            }
            Err(api_err) => {
                warn!(error = %api_err, "Password validation request failed");
                let err = FormError::SubmissionFailed(api_err);
                self.fail(&err, SERVER_UNREACHABLE_MESSAGE);
                Err(err)
            }
        }
    }

    fn finish(&mut self, location: String) -> Result<String, FormError> {
        self.state.mark_submitted(location.clone())?;
        info!(location = %location, "Redirecting");
        self.platform.navigate(&location);
        Ok(location)
    }

    fn fail(&mut self, err: &FormError, notice: &str) {
        self.platform.notify_error(notice);
        self.state.return_to_editing(err.to_string());
    }
}

fn validation_message(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
