//! Role and status vocabularies for roster rows.
//!
//! Both are parsed from the form's select values. Older pages submitted the
//! option text ("Main", "Bench") rather than a lowercase value, so parsing is
//! case-insensitive. The wire form is always lowercase.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a toon does in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToonRole {
    Tank,
    Healer,
    /// Melee damage (the default for new rows)
    #[default]
    Dps,
    /// Ranged damage
    Ranged,
}

impl ToonRole {
    /// All roles in selector order
    pub fn all() -> &'static [ToonRole] {
        &[
            ToonRole::Tank,
            ToonRole::Healer,
            ToonRole::Dps,
            ToonRole::Ranged,
        ]
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ToonRole::Tank => "tank",
            ToonRole::Healer => "healer",
            ToonRole::Dps => "dps",
            ToonRole::Ranged => "ranged",
        }
    }

    /// Label shown in the role selector
    pub fn label(&self) -> &'static str {
        match self {
            ToonRole::Tank => "Tank",
            ToonRole::Healer => "Healer",
            ToonRole::Dps => "Melee DPS",
            ToonRole::Ranged => "Ranged DPS",
        }
    }
}

impl fmt::Display for ToonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToonRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tank" => Ok(Self::Tank),
            "healer" => Ok(Self::Healer),
            "dps" => Ok(Self::Dps),
            "ranged" => Ok(Self::Ranged),
            _ => Err(DomainError::parse(format!("Unknown toon role: {}", s))),
        }
    }
}

/// Whether a toon is in the active lineup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToonStatus {
    #[default]
    Main,
    Bench,
    Alt,
}

impl ToonStatus {
    /// All statuses in selector order
    pub fn all() -> &'static [ToonStatus] {
        &[ToonStatus::Main, ToonStatus::Bench, ToonStatus::Alt]
    }

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            ToonStatus::Main => "main",
            ToonStatus::Bench => "bench",
            ToonStatus::Alt => "alt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToonStatus::Main => "Main",
            ToonStatus::Bench => "Bench",
            ToonStatus::Alt => "Alt",
        }
    }

    /// Forced sort rank for the roster table: mains on top, alts at the bottom.
    pub fn sort_rank(&self) -> u8 {
        match self {
            ToonStatus::Main => 0,
            ToonStatus::Bench => 1,
            ToonStatus::Alt => 2,
        }
    }
}

impl fmt::Display for ToonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToonStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Self::Main),
            "bench" => Ok(Self::Bench),
            "alt" => Ok(Self::Alt),
            _ => Err(DomainError::parse(format!("Unknown toon status: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Healer".parse::<ToonRole>().expect("valid"), ToonRole::Healer);
        assert_eq!(" RANGED ".parse::<ToonRole>().expect("valid"), ToonRole::Ranged);
        assert!("Melee DPS".parse::<ToonRole>().is_err());
    }

    #[test]
    fn status_parses_option_text() {
        assert_eq!("Main".parse::<ToonStatus>().expect("valid"), ToonStatus::Main);
        assert_eq!("bench".parse::<ToonStatus>().expect("valid"), ToonStatus::Bench);
        assert_eq!("Alt".parse::<ToonStatus>().expect("valid"), ToonStatus::Alt);
        let err = "sub".parse::<ToonStatus>().expect_err("unknown");
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn defaults_match_new_row() {
        assert_eq!(ToonRole::default(), ToonRole::Dps);
        assert_eq!(ToonStatus::default(), ToonStatus::Main);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ToonRole::Dps).expect("ser"), "\"dps\"");
        assert_eq!(serde_json::to_string(&ToonStatus::Bench).expect("ser"), "\"bench\"");
    }

    #[test]
    fn as_str_round_trips() {
        for role in ToonRole::all() {
            assert_eq!(role.as_str().parse::<ToonRole>().expect("valid"), *role);
        }
        for status in ToonStatus::all() {
            assert_eq!(status.to_string().parse::<ToonStatus>().expect("valid"), *status);
        }
    }
}
