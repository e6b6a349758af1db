//! Account Error Types
//!
//! Validation failures are raised at the point of violation. Absence (a
//! lookup that finds nothing) is an `Option`, never an error.

use thiserror::Error;

use crate::domain::value_object::email::EmailError;

/// Account-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Username fails the username policy
    #[error("Username {name:?} does not satisfy the username policy")]
    InvalidUsername { name: String },

    /// Password fails the password policy
    #[error("Password does not satisfy the password policy")]
    InvalidPassword,

    /// Empty or malformed email address
    #[error("Invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Non-mapping data bag or non-serializable data value
    #[error("Invalid user data: {0}")]
    InvalidData(String),

    /// Operation requires a persisted user but got a transient one
    #[error("Cannot set a password for a user that has not been persisted")]
    UnsavedUser,

    /// Insert returned no id
    #[error("Cannot save user {name:?}: storage did not assign an id")]
    Save { name: String },

    /// Password verification attempted with no stored digest
    #[error("User {name:?} does not have a password saved")]
    NoPassword { name: String },

    /// Storage-reported failure
    #[error("Storage error: {0}")]
    Storage(String),
}
