//! The roster JSON payload.
//!
//! Shape on the wire:
//!
//! ```json
//! {"toons": [{"name": "Zekk", "role": "healer", "status": "bench", "realm": "area-52"}]}
//! ```

use guildroster_domain::{RealmKey, RosterDocument, ToonRole, ToonStatus};
use serde::{Deserialize, Serialize};

/// Serialized roster, sent as the `json` field of a group update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPayload {
    pub toons: Vec<ToonPayload>,
}

/// One submitted toon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToonPayload {
    /// Case-normalized name
    pub name: String,
    pub role: ToonRole,
    pub status: ToonStatus,
    /// Normalized realm key, not the display name
    pub realm: RealmKey,
}

impl RosterPayload {
    /// Serialize the document top to bottom, skipping blank rows.
    pub fn from_document(document: &RosterDocument) -> Self {
        let toons = document
            .named_rows()
            .map(|(row, name)| ToonPayload {
                name: name.normalized(),
                role: row.role(),
                status: row.status(),
                realm: row.realm().clone(),
            })
            .collect();
        Self { toons }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn len(&self) -> usize {
        self.toons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guildroster_domain::{ToonName, ToonRow};

    fn realm(s: &str) -> RealmKey {
        RealmKey::new(s).expect("valid key")
    }

    fn row(name: &str, realm_key: &str) -> ToonRow {
        ToonRow::new(realm(realm_key)).with_name(ToonName::new(name).expect("valid name"))
    }

    #[test]
    fn serializes_expected_shape() {
        let mut doc = RosterDocument::new();
        doc.push(
            row("zekk", "realm-a")
                .with_role(ToonRole::Healer)
                .with_status(ToonStatus::Bench),
        );

        let json = RosterPayload::from_document(&doc).to_json().expect("serialize");
        assert_eq!(
            json,
            r#"{"toons":[{"name":"Zekk","role":"healer","status":"bench","realm":"realm-a"}]}"#
        );
    }

    #[test]
    fn skips_blank_rows_anywhere() {
        let mut doc = RosterDocument::new();
        doc.add_row(realm("a"));
        doc.push(row("first", "a"));
        doc.add_row(realm("a"));
        doc.push(row("second", "b"));
        doc.add_row(realm("a"));

        let payload = RosterPayload::from_document(&doc);
        let names: Vec<_> = payload.toons.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn one_entry_per_named_row_in_order() {
        let mut doc = RosterDocument::new();
        let names = ["alpha", "BRAVO", "charlie", "délta"];
        for n in names {
            doc.push(row(n, "a"));
        }

        let payload = RosterPayload::from_document(&doc);
        assert_eq!(payload.len(), names.len());
        for (entry, (row, name)) in payload.toons.iter().zip(doc.named_rows()) {
            assert_eq!(entry.name, name.normalized());
            assert_eq!(entry.role, row.role());
            assert_eq!(&entry.realm, row.realm());
        }
        assert_eq!(payload.toons[1].name, "Bravo");
        assert_eq!(payload.toons[3].name, "Délta");
    }

    #[test]
    fn empty_document_serializes_empty_list() {
        let json = RosterPayload::from_document(&RosterDocument::new())
            .to_json()
            .expect("serialize");
        assert_eq!(json, r#"{"toons":[]}"#);
    }

    #[test]
    fn parses_server_shape() {
        let payload: RosterPayload = serde_json::from_str(
            r#"{"toons": [{"name": "Zekk", "role": "tank", "status": "main", "realm": "area-52"}]}"#,
        )
        .expect("parse");
        assert_eq!(payload.toons[0].role, ToonRole::Tank);
        assert_eq!(payload.toons[0].realm.as_str(), "area-52");
    }
}
