//! Accounts (User Identity) Module
//!
//! User account identity and credential management, independent of any
//! concrete storage technology.
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, policy and repository traits
//! - `application/` - The user manager and its configuration
//! - `infra/` - In-memory repository implementation
//!
//! ## Model
//! - A `User` with a nil id is transient: it has not been persisted yet.
//!   Saving a transient user returns a fresh instance carrying the assigned
//!   id; the caller's instance is never mutated.
//! - Username and password rules are pluggable `Policy` patterns, enforced
//!   by the `UserManager`, never by the entity.
//! - Storage is behind the `UserRepository` trait. Uniqueness of names and
//!   emails is the repository's concern; the manager does not serialize the
//!   check-then-insert sequence.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::{PolicyOptions, UserManagerOptions};
pub use application::manager::UserManager;
pub use domain::entity::user::User;
pub use domain::policy::{PatternPolicy, Policy, Predicate};
pub use domain::repository::UserRepository;
pub use domain::value_object::email::Email;
pub use domain::value_object::user_id::UserId;
pub use error::{UserError, UserResult};
pub use infra::memory::MemoryUserRepository;

// Re-export the digest type exchanged through the repository contract
pub use platform::digest::PasswordDigest;
