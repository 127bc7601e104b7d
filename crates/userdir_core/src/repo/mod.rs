//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define lookup and insert contracts over user backing collections.
//! - Keep collection shape details out of the directory service.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `AlreadyExists`)
//!   instead of sentinel values.

pub mod user_repo;
