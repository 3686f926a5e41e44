//! GuildRoster domain: the roster row model and its invariants.
//!
//! Nothing in this crate performs I/O.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use aggregates::{RosterComposition, RosterDocument};
pub use entities::ToonRow;
pub use error::DomainError;
pub use ids::RowId;
pub use types::{ToonRole, ToonStatus};
pub use value_objects::{
    normalize_slug, GroupKey, GroupName, Password, RealmKey, RealmMap, RealmOption, ToonName,
    MAX_TOON_NAME_LENGTH, MIN_TOON_NAME_LENGTH,
};
