//! User directory domain model.
//!
//! # Responsibility
//! - Define the value record stored by every backing collection.
//!
//! # Invariants
//! - Records are plain values; copies handed to callers are independent.

pub mod user;
