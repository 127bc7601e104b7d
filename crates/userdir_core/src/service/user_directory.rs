//! User directory use-case service.
//!
//! # Responsibility
//! - Provide the `find`/`add` entry points callers use.
//! - Own the backing collection handed over at construction.
//!
//! # Invariants
//! - Construction performs no validation.
//! - `add` is only available over writable (name-keyed) backing collections.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{
    NamedUserRepository, RepoResult, SequenceUserRepository, UserRepository,
    WritableUserRepository,
};
use std::collections::BTreeMap;

/// In-memory user directory over one backing collection.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory<R: UserRepository> {
    repo: R,
}

impl UserDirectory<SequenceUserRepository> {
    /// Wraps an ordered user sequence. Lookups scan in insertion order.
    pub fn from_users(users: Vec<User>) -> Self {
        Self::new(SequenceUserRepository::new(users))
    }
}

impl UserDirectory<NamedUserRepository> {
    /// Wraps a name-keyed mapping as given; keys are not checked against
    /// record names.
    pub fn from_named(users: BTreeMap<String, User>) -> Self {
        Self::new(NamedUserRepository::new(users))
    }

    /// Keys each seed user by its own name.
    pub fn from_named_users(users: impl IntoIterator<Item = User>) -> Self {
        Self::new(NamedUserRepository::from_users(users))
    }
}

impl<R: UserRepository> UserDirectory<R> {
    /// Creates a directory that takes ownership of `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a copy of the first user whose id equals `id`.
    ///
    /// # Errors
    /// - `RepoError::NotFound(id)` when no record matches.
    pub fn find(&self, id: UserId) -> RepoResult<User> {
        self.repo.find_user(id)
    }

    /// Number of records in the backing collection.
    pub fn len(&self) -> usize {
        self.repo.len()
    }

    /// Whether the backing collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Borrows the backing collection read-only.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Gives the backing collection back to the caller.
    pub fn into_inner(self) -> R {
        self.repo
    }
}

impl<R: WritableUserRepository> UserDirectory<R> {
    /// Inserts `{id, name}` unless `name` is already taken.
    ///
    /// # Errors
    /// - `RepoError::AlreadyExists(name)` when `name` is present; the
    ///   directory is left unchanged.
    pub fn add(&mut self, id: UserId, name: &str) -> RepoResult<()> {
        self.repo.add_user(id, name)
    }
}
