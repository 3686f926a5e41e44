//! Form-encoded request bodies.
//!
//! Every roster endpoint takes `application/x-www-form-urlencoded` bodies.
//! Values are escaped by a real encoder, so passwords or group names
//! containing `&`, `=` or spaces survive the trip.

use guildroster_domain::{GroupKey, GroupName, Password, RealmKey};
use url::form_urlencoded;

/// A request body made of ordered key/value pairs.
pub trait FormBody {
    fn pairs(&self) -> Vec<(&'static str, &str)>;

    /// Encode as `application/x-www-form-urlencoded`.
    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

/// `group=<key>&realm=<key>&pw=<password>`
///
/// Sent to `/val` to check the password, and to `/delete` to remove a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    pub group: GroupKey,
    pub realm: RealmKey,
    pub password: Password,
}

impl FormBody for PasswordCheck {
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("group", self.group.as_str()),
            ("realm", self.realm.as_str()),
            ("pw", self.password.expose()),
        ]
    }
}

/// `group=<key>&realm=<key>&newgn=<name>`
///
/// Sent to `/val` before creating a group; 2xx means the name is free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNameCheck {
    pub group: GroupKey,
    pub realm: RealmKey,
    pub new_group_name: GroupName,
}

impl FormBody for GroupNameCheck {
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("group", self.group.as_str()),
            ("realm", self.realm.as_str()),
            ("newgn", self.new_group_name.as_str()),
        ]
    }
}

/// `group=<name>&json=<payload>&pw=<password>`
///
/// Posted to `/{realm}/{group}` to replace the stored roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupUpdate {
    pub group_name: GroupName,
    pub json: String,
    pub password: Password,
}

impl FormBody for GroupUpdate {
    fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("group", self.group_name.as_str()),
            ("json", self.json.as_str()),
            ("pw", self.password.expose()),
        ]
    }
}
