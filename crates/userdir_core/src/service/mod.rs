//! Core use-case services.
//!
//! # Responsibility
//! - Expose directory operations over repository implementations.
//! - Keep callers decoupled from backing collection shapes.

pub mod user_directory;
