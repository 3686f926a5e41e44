//! Route paths on the roster server.

use guildroster_domain::{DomainError, GroupKey, RealmKey};
use url::form_urlencoded;

/// Password / group-name validation endpoint
pub const VALIDATE_PATH: &str = "/val";

/// Group deletion endpoint
pub const DELETE_PATH: &str = "/delete";

/// Front page, the destination after a delete
pub const HOME_PATH: &str = "/";

/// Identifies one group: the `{realm}/{group}` pair used in every URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupLocator {
    pub realm: RealmKey,
    pub group: GroupKey,
}

impl GroupLocator {
    pub fn new(realm: RealmKey, group: GroupKey) -> Self {
        Self { realm, group }
    }

    /// Normalize the front page's realm and group inputs into a locator.
    pub fn from_display(realm: &str, group: &str) -> Result<Self, DomainError> {
        Ok(Self {
            realm: RealmKey::from_display(realm)?,
            group: GroupKey::from_display(group)?,
        })
    }

    /// `/{realm}/{group}`: the group page, and the update endpoint.
    ///
    /// Each segment is percent-encoded, so keys containing `#`, `?`, `/` or
    /// `%` stay inside their own segment.
    pub fn path(&self) -> String {
        format!(
            "/{}/{}",
            encode_segment(self.realm.as_str()),
            encode_segment(self.group.as_str())
        )
    }
}

fn encode_segment(segment: &str) -> String {
    // The form serializer writes spaces as `+`; a literal `+` is already `%2B`.
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
