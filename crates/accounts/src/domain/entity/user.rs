//! User Entity
//!
//! A user identity with an optional verified email and an arbitrary
//! key/value data bag. A user whose id is nil is transient: it has not
//! been persisted yet. Persisting produces a fresh instance via
//! `clone_with_id`; an existing instance's id is never rewritten in place.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::value_object::email::Email;
use crate::domain::value_object::user_id::UserId;
use crate::error::{UserError, UserResult};

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Storage-assigned id; nil for transient users
    id: UserId,
    /// Username; set at construction, uniqueness is the repository's concern
    name: String,
    /// Validated email address, if one has been set
    email: Option<Email>,
    /// Never true while no email is stored
    email_verified: bool,
    /// Arbitrary data attached to the user
    data: Map<String, Value>,
}

impl User {
    /// Create a transient user (not yet persisted)
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(name, UserId::nil())
    }

    /// Rehydrate a user under a known id
    pub fn with_id(name: impl Into<String>, id: UserId) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
            email_verified: false,
            data: Map::new(),
        }
    }

    /// Does the user exist in storage
    pub fn exists(&self) -> bool {
        !self.id.is_nil()
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Arbitrary data attached to the user
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Replace the entire data bag
    ///
    /// The value must be a JSON mapping; anything else is rejected.
    pub fn set_data(&mut self, data: Value) -> UserResult<()> {
        match data {
            Value::Object(map) => {
                self.data = map;
                Ok(())
            }
            other => Err(UserError::InvalidData(format!(
                "user data must be a mapping, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Get a single data item; `None` for a missing key
    pub fn data_item(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Set a single data item
    ///
    /// Accepts anything serializable to a JSON value; opaque values that
    /// fail serialization are rejected.
    pub fn set_data_item(&mut self, key: impl Into<String>, value: impl Serialize) -> UserResult<()> {
        let value = serde_json::to_value(value)
            .map_err(|e| UserError::InvalidData(e.to_string()))?;
        self.data.insert(key.into(), value);
        Ok(())
    }

    /// Set the email address
    ///
    /// Empty or malformed addresses are rejected and the prior address is
    /// left unchanged. The stored form is sanitized.
    pub fn set_email(&mut self, email: &str) -> UserResult<()> {
        self.email = Some(Email::new(email)?);
        Ok(())
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verified
    }

    /// Set the email verification flag
    ///
    /// Turning verification on while no email is stored is silently
    /// ignored. This guard is deliberate: the verified flag must never be
    /// true without a valid address behind it.
    pub fn set_email_verified(&mut self, verified: bool) {
        if verified && self.email.is_none() {
            return;
        }
        self.email_verified = verified;
    }

    /// Produce a new user carrying the given id
    ///
    /// Copies name, email, verification state, and the data bag. Used by
    /// the manager after a successful insert so the caller's transient
    /// instance stays untouched.
    pub fn clone_with_id(&self, id: UserId) -> User {
        let mut user = User::with_id(self.name.clone(), id);
        user.email = self.email.clone();
        user.email_verified = self.email_verified;
        user.data = self.data.clone();
        user
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
