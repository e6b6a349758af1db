//! Manager Configuration
//!
//! Caller-supplied options are merged over the defaults key by key: an
//! override of one policy's pattern leaves every other field at its
//! default.

use crate::domain::policy::{DefaultPasswordPolicy, DefaultUsernamePolicy, Policy};

/// Overrides for a single policy slot
#[derive(Default)]
pub struct PolicyOptions {
    /// Replacement pattern rule; `None` keeps the default
    pub pattern: Option<Box<dyn Policy>>,
}

/// Caller-facing manager options
///
/// Every field is optional; unspecified fields fall back to the defaults.
#[derive(Default)]
pub struct UserManagerOptions {
    pub username_policy: Option<PolicyOptions>,
    pub password_policy: Option<PolicyOptions>,
}

impl UserManagerOptions {
    /// Override the username pattern rule
    pub fn with_username_pattern(mut self, pattern: impl Policy + 'static) -> Self {
        self.username_policy = Some(PolicyOptions {
            pattern: Some(Box::new(pattern)),
        });
        self
    }

    /// Override the password pattern rule
    pub fn with_password_pattern(mut self, pattern: impl Policy + 'static) -> Self {
        self.password_policy = Some(PolicyOptions {
            pattern: Some(Box::new(pattern)),
        });
        self
    }
}

/// Resolved manager configuration
pub struct ManagerConfig {
    pub username_pattern: Box<dyn Policy>,
    pub password_pattern: Box<dyn Policy>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            username_pattern: Box::new(DefaultUsernamePolicy),
            password_pattern: Box::new(DefaultPasswordPolicy),
        }
    }
}

impl ManagerConfig {
    /// Merge caller options over the defaults, key by key
    pub fn from_options(options: UserManagerOptions) -> Self {
        let mut config = Self::default();

        if let Some(policy) = options.username_policy {
            if let Some(pattern) = policy.pattern {
                config.username_pattern = pattern;
            }
        }
        if let Some(policy) = options.password_policy {
            if let Some(pattern) = policy.pattern {
                config.password_pattern = pattern;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::PatternPolicy;

    #[test]
    fn test_defaults() {
        let config = ManagerConfig::default();
        assert!(config.username_pattern.matches("longenoughname"));
        assert!(!config.username_pattern.matches("short"));
        assert!(config.password_pattern.matches("Valid1234"));
        assert!(!config.password_pattern.matches("alllower1"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let options = UserManagerOptions::default()
            .with_password_pattern(PatternPolicy::new("^[0-9]{4}$").unwrap());
        let config = ManagerConfig::from_options(options);

        // Password pattern replaced
        assert!(config.password_pattern.matches("1234"));
        assert!(!config.password_pattern.matches("Valid1234"));

        // Username pattern untouched
        assert!(config.username_pattern.matches("longenoughname"));
        assert!(!config.username_pattern.matches("short"));
    }

    #[test]
    fn test_empty_policy_options_keep_default_pattern() {
        let options = UserManagerOptions {
            password_policy: Some(PolicyOptions::default()),
            ..Default::default()
        };
        let config = ManagerConfig::from_options(options);
        assert!(config.password_pattern.matches("Valid1234"));
        assert!(!config.password_pattern.matches("alllower1"));
    }
}
