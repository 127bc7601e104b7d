//! User repository contracts and in-memory backing collections.
//!
//! # Responsibility
//! - Provide lookup-by-id over every backing shape.
//! - Provide insert-with-name-uniqueness over the name-keyed shape.
//!
//! # Invariants
//! - `find_user` scans every record and returns the first `id` match in scan order.
//! - `add_user` never mutates the collection when it returns an error.
//! - Name uniqueness is enforced at insert time only; seeded collections are
//!   taken as-is.

use crate::model::user::{User, UserId};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for directory lookups and inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No record carries the requested id.
    NotFound(UserId),
    /// A record is already keyed by the requested name.
    AlreadyExists(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "couldn't find user: {id}"),
            Self::AlreadyExists(name) => write!(f, "user already exists: {name}"),
        }
    }
}

impl Error for RepoError {}

/// Read contract shared by all backing shapes.
pub trait UserRepository {
    /// Returns a copy of the first record whose `id` equals `id`.
    fn find_user(&self, id: UserId) -> RepoResult<User>;
    /// Number of stored records.
    fn len(&self) -> usize;

    /// Whether the backing collection holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write contract for shapes that support inserts.
pub trait WritableUserRepository: UserRepository {
    /// Inserts `{id, name}` keyed by `name`.
    ///
    /// # Errors
    /// - `RepoError::AlreadyExists` when `name` is already a key.
    fn add_user(&mut self, id: UserId, name: &str) -> RepoResult<()>;
}

/// Ordered sequence of users, scanned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SequenceUserRepository {
    users: Vec<User>,
}

impl SequenceUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserRepository for SequenceUserRepository {
    fn find_user(&self, id: UserId) -> RepoResult<User> {
        scan_by_id(self.users.iter(), id, "sequence")
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

/// Users keyed by name.
///
/// Lookups still scan values by `id`; the key only drives insert uniqueness.
/// Scan order is the map's key order, so duplicate ids resolve to the entry
/// with the smallest name key.
#[derive(Debug, Clone, Default)]
pub struct NamedUserRepository {
    users: BTreeMap<String, User>,
}

impl NamedUserRepository {
    pub fn new(users: BTreeMap<String, User>) -> Self {
        Self { users }
    }

    /// Keys each user by its own name. Later duplicates replace earlier ones.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.name.clone(), user))
            .collect();
        Self { users }
    }

    /// Whether `name` is already a key. This is the uniqueness check `add_user` applies.
    pub fn contains_name(&self, name: &str) -> bool {
        self.users.contains_key(name)
    }

    pub fn users(&self) -> &BTreeMap<String, User> {
        &self.users
    }
}

impl UserRepository for NamedUserRepository {
    fn find_user(&self, id: UserId) -> RepoResult<User> {
        scan_by_id(self.users.values(), id, "named")
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}

impl WritableUserRepository for NamedUserRepository {
    fn add_user(&mut self, id: UserId, name: &str) -> RepoResult<()> {
        if self.contains_name(name) {
            warn!(
                "event=user_add module=repo status=error error_code=already_exists id={} name={}",
                id, name
            );
            return Err(RepoError::AlreadyExists(name.to_string()));
        }

        self.users.insert(name.to_string(), User::new(id, name));
        debug!(
            "event=user_add module=repo status=ok id={} name={} size={}",
            id,
            name,
            self.users.len()
        );
        Ok(())
    }
}

fn scan_by_id<'a>(
    users: impl Iterator<Item = &'a User>,
    id: UserId,
    shape: &str,
) -> RepoResult<User> {
    let mut scanned = 0usize;
    for user in users {
        scanned += 1;
        if user.id == id {
            debug!(
                "event=user_find module=repo status=ok shape={} id={} scanned={}",
                shape, id, scanned
            );
            return Ok(user.clone());
        }
    }

    debug!(
        "event=user_find module=repo status=error shape={} error_code=not_found id={} scanned={}",
        shape, id, scanned
    );
    Err(RepoError::NotFound(id))
}
