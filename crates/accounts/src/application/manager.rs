//! User Manager
//!
//! Orchestrates lookups, persistence, and credential handling over the
//! repository contract. The manager validates inputs against the
//! configured policies, delegates storage to the repository, and hands
//! back updated or fresh entity instances; the entity never talks to the
//! repository directly.

use std::sync::Arc;

use platform::digest::PasswordDigest;

use crate::application::config::{ManagerConfig, UserManagerOptions};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

/// User manager
pub struct UserManager<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: ManagerConfig,
}

impl<R> UserManager<R>
where
    R: UserRepository,
{
    /// Create a manager with the default policies
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            config: ManagerConfig::default(),
        }
    }

    /// Create a manager with caller options merged over the defaults
    pub fn with_options(repo: Arc<R>, options: UserManagerOptions) -> Self {
        Self {
            repo,
            config: ManagerConfig::from_options(options),
        }
    }

    /// Look up a user by username
    ///
    /// Fails when the username does not satisfy the username policy.
    /// When no record matches, a transient user wrapping the name is
    /// returned: callers always receive a `User`, possibly non-existent.
    pub async fn user_by_username(&self, username: &str) -> UserResult<User> {
        if !self.check_username(username) {
            return Err(UserError::InvalidUsername {
                name: username.to_string(),
            });
        }

        let found = self.repo.find_by_username(username).await?;
        Ok(found.unwrap_or_else(|| User::new(username)))
    }

    /// Look up a user by id; `Ok(None)` when absent
    pub async fn user_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// Check if the given username is taken
    pub async fn username_exists(&self, username: &str) -> UserResult<bool> {
        Ok(self.user_by_username(username).await?.exists())
    }

    /// Check if the given email exists in the system
    pub async fn email_exists(&self, email: &str) -> UserResult<bool> {
        Ok(self.repo.find_by_email(email).await?.is_some())
    }

    /// Persist a user
    ///
    /// An existing user is updated in place; `Ok(None)` signals the update
    /// was not applied (stale or missing record). A transient user is
    /// inserted and a fresh instance carrying the assigned id is returned;
    /// the argument is never mutated.
    pub async fn save_user(&self, user: &User) -> UserResult<Option<User>> {
        if user.exists() {
            if self.repo.update_user(user).await? {
                return Ok(Some(user.clone()));
            }
            tracing::warn!(
                user_id = %user.id(),
                user_name = %user.name(),
                "User update was not applied"
            );
            return Ok(None);
        }

        let id = self.repo.insert_user(user).await?;
        if id.is_nil() {
            return Err(UserError::Save {
                name: user.name().to_string(),
            });
        }

        tracing::info!(user_id = %id, user_name = %user.name(), "User created");
        Ok(Some(user.clone_with_id(id)))
    }

    /// Validate and persist a user password
    ///
    /// The user must already be persisted: a password cannot be attached
    /// to an unpersisted identity. Returns the repository's success flag.
    pub async fn set_user_password(&self, user: &User, password: &str) -> UserResult<bool> {
        if !user.exists() {
            return Err(UserError::UnsavedUser);
        }

        if !self.password_valid(password) {
            return Err(UserError::InvalidPassword);
        }

        let digest = PasswordDigest::of(password);
        let stored = self.repo.set_password(user, &digest).await?;
        if stored {
            tracing::info!(user_id = %user.id(), user_name = %user.name(), "User password updated");
        }
        Ok(stored)
    }

    /// Check if the given password matches the user's stored password
    ///
    /// Fails when no digest is stored. The password policy is re-checked
    /// on every verification: a password that predates a policy tightening
    /// no longer verifies, even when its digest still matches.
    pub async fn verify_password(&self, user: &User, password: &str) -> UserResult<bool> {
        let saved = self
            .repo
            .get_password(user)
            .await?
            .ok_or_else(|| UserError::NoPassword {
                name: user.name().to_string(),
            })?;

        Ok(self.password_valid(password) && PasswordDigest::of(password) == saved)
    }

    /// Check if the given username fulfills the username policy
    pub fn check_username(&self, username: &str) -> bool {
        self.config.username_pattern.matches(username)
    }

    /// Check if the given password fulfills the password policy
    pub fn password_valid(&self, password: &str) -> bool {
        self.config.password_pattern.matches(password)
    }
}
