//! User domain model.
//!
//! # Responsibility
//! - Define the canonical user record held by directory backing collections.
//!
//! # Invariants
//! - `id` is the lookup key but is not required to be unique.
//! - `name` is the uniqueness key for name-keyed collections only.

use serde::{Deserialize, Serialize};

/// Integer identifier used for directory lookups.
pub type UserId = i64;

/// Value record for one directory entry.
///
/// `Default` yields the empty record `{0, ""}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Creates a user record. No validation is performed.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
