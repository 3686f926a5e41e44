//! HTTP client for the roster server's form endpoints

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

use guildroster_shared::{
    FormBody, GroupLocator, GroupNameCheck, GroupUpdate, PasswordCheck, DELETE_PATH,
    VALIDATE_PATH,
};

use crate::ports::outbound::{ApiError, RosterApiPort};

/// Default roster server base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `RosterApiPort` over reqwest.
#[derive(Clone)]
pub struct HttpRosterApi {
    client: Client,
    base_url: String,
}

impl HttpRosterApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a server path such as `/val`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, form: &impl FormBody) -> Result<(), ApiError> {
        let url = self.url_for(path);
        tracing::debug!(url = %url, "POST form");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(form.encode())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Roster server refused request");
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(())
    }
}

impl Default for HttpRosterApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl RosterApiPort for HttpRosterApi {
    async fn validate_password(&self, check: &PasswordCheck) -> Result<(), ApiError> {
        self.post_form(VALIDATE_PATH, check).await
    }

    async fn check_group_name(&self, check: &GroupNameCheck) -> Result<(), ApiError> {
        self.post_form(VALIDATE_PATH, check).await
    }

    async fn update_group(
        &self,
        locator: &GroupLocator,
        update: &GroupUpdate,
    ) -> Result<(), ApiError> {
        self.post_form(&locator.path(), update).await
    }

    async fn delete_group(&self, check: &PasswordCheck) -> Result<(), ApiError> {
        self.post_form(DELETE_PATH, check).await
    }
}
