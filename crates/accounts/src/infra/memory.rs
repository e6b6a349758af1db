//! In-Memory Repository Implementation

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use platform::digest::PasswordDigest;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

#[derive(Default)]
struct Store {
    users: HashMap<u64, User>,
    passwords: HashMap<u64, PasswordDigest>,
    next_id: u64,
    fail_next_insert: bool,
    fail_next_update: bool,
}

/// Hash-map backed user repository
///
/// Assigns sequential ids starting at 1. Enforces nothing beyond the
/// repository contract; in particular, username and email uniqueness are
/// not checked.
#[derive(Default)]
pub struct MemoryUserRepository {
    store: Mutex<Store>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next insert report failure (a nil id)
    pub fn fail_next_insert(&self) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next_insert = true;
        }
    }

    /// Make the next update report failure
    pub fn fail_next_update(&self) {
        if let Ok(mut store) = self.store.lock() {
            store.fail_next_update = true;
        }
    }

    fn lock(&self) -> UserResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| UserError::Storage("memory store poisoned".to_string()))
    }
}

impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> UserResult<Option<User>> {
        let store = self.lock()?;
        Ok(store.users.values().find(|u| u.name() == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.lock()?;
        Ok(store
            .users
            .values()
            .find(|u| u.email().is_some_and(|e| e.as_str() == email))
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let store = self.lock()?;
        Ok(store.users.get(&id.value()).cloned())
    }

    async fn insert_user(&self, user: &User) -> UserResult<UserId> {
        let mut store = self.lock()?;
        if store.fail_next_insert {
            store.fail_next_insert = false;
            return Ok(UserId::nil());
        }

        store.next_id += 1;
        let id = UserId::from(store.next_id);
        store.users.insert(id.value(), user.clone_with_id(id));
        Ok(id)
    }

    async fn update_user(&self, user: &User) -> UserResult<bool> {
        let mut store = self.lock()?;
        if store.fail_next_update {
            store.fail_next_update = false;
            return Ok(false);
        }

        match store.users.get_mut(&user.id().value()) {
            Some(slot) => {
                *slot = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_password(&self, user: &User, digest: &PasswordDigest) -> UserResult<bool> {
        let mut store = self.lock()?;
        if !store.users.contains_key(&user.id().value()) {
            return Ok(false);
        }
        store.passwords.insert(user.id().value(), digest.clone());
        Ok(true)
    }

    async fn get_password(&self, user: &User) -> UserResult<Option<PasswordDigest>> {
        let store = self.lock()?;
        Ok(store.passwords.get(&user.id().value()).cloned())
    }
}
