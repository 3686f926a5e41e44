//! Value objects for the roster domain.

mod names;
mod password;
mod realm;

pub use names::{
    normalize_slug, GroupKey, GroupName, ToonName, MAX_TOON_NAME_LENGTH, MIN_TOON_NAME_LENGTH,
};
pub use password::Password;
pub use realm::{RealmKey, RealmMap, RealmOption};
