//! Player configuration from environment variables.

use std::path::Path;

use guildroster_domain::Password;

use crate::infrastructure::http_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

pub const BASE_URL_VAR: &str = "ROSTER_BASE_URL";
pub const TIMEOUT_VAR: &str = "ROSTER_HTTP_TIMEOUT_SECS";
pub const PASSWORD_VAR: &str = "ROSTER_PASSWORD";
pub const PASSWORD_CONFIRM_VAR: &str = "ROSTER_PASSWORD_CONFIRM";

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub password: Option<Password>,
    pub password_confirmation: Option<Password>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            password: None,
            password_confirmation: None,
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Invalid values fall back to the defaults
    /// with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = match lookup(BASE_URL_VAR).map(|s| s.trim().to_string()) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => url,
            Some(url) if !url.is_empty() => {
                tracing::warn!(value = %url, "{} is not an http(s) URL, using default", BASE_URL_VAR);
                defaults.base_url
            }
            _ => defaults.base_url,
        };

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    tracing::warn!(value = %raw, "Invalid {}, using default", TIMEOUT_VAR);
                    defaults.timeout_secs
                }
            },
            None => defaults.timeout_secs,
        };

        let secret = |key: &str| {
            lookup(key)
                .filter(|s| !s.is_empty())
                .map(Password::new)
        };

        Self {
            base_url,
            timeout_secs,
            password: secret(PASSWORD_VAR),
            password_confirmation: secret(PASSWORD_CONFIRM_VAR),
        }
    }
}

/// Load `.env.local` then `.env` from the repository root, if present.
/// Variables already set in the environment win.
pub fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> PlayerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PlayerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.password.is_none());
    }

    #[test]
    fn reads_values() {
        let cfg = config(&[
            (BASE_URL_VAR, "https://roster.example.org"),
            (TIMEOUT_VAR, "5"),
            (PASSWORD_VAR, "hunter2"),
            (PASSWORD_CONFIRM_VAR, "hunter2"),
        ]);
        assert_eq!(cfg.base_url, "https://roster.example.org");
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.password.as_ref().map(Password::expose), Some("hunter2"));
        assert_eq!(cfg.password, cfg.password_confirmation);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[(BASE_URL_VAR, "ftp://nope"), (TIMEOUT_VAR, "soon")]);
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.timeout_secs, 30);

        let cfg = config(&[(TIMEOUT_VAR, "0")]);
        assert_eq!(cfg.timeout_secs, 30);
    }
}
