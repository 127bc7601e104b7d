//! In-memory user directory.
//! Lookup by id over any backing collection, insert with name uniqueness over
//! name-keyed collections.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogLevel, LoggingError, LoggingResult,
};
pub use model::user::{User, UserId};
pub use repo::user_repo::{
    NamedUserRepository, RepoError, RepoResult, SequenceUserRepository, UserRepository,
    WritableUserRepository,
};
pub use service::user_directory::UserDirectory;
