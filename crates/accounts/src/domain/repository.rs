//! Repository Traits
//!
//! Interface for data persistence. Implementations live outside the domain
//! (see `infra/` for the in-memory reference implementation).

use platform::digest::PasswordDigest;

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::UserResult;

/// User repository trait
///
/// Absence is `Ok(None)`, never an error. Uniqueness of usernames and
/// emails is enforced here (e.g. by a unique constraint), not by the
/// manager: two callers can race past `find_by_username` and both attempt
/// an insert.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// Insert a new user, returning the assigned id
    ///
    /// The nil id signals that the insert was not applied.
    async fn insert_user(&self, user: &User) -> UserResult<UserId>;

    /// Update an existing user
    ///
    /// `false` signals a stale or missing record, not an error.
    async fn update_user(&self, user: &User) -> UserResult<bool>;

    /// Store the password digest for a user
    async fn set_password(&self, user: &User, digest: &PasswordDigest) -> UserResult<bool>;

    /// Fetch the stored password digest for a user
    async fn get_password(&self, user: &User) -> UserResult<Option<PasswordDigest>>;
}
