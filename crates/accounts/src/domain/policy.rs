//! Policy Rules
//!
//! A policy is a pattern rule a candidate string (username/password) must
//! satisfy. Policies are pluggable: the default rules below, a regex via
//! [`PatternPolicy`], or a plain closure via [`Predicate`].
//!
//! The default rules are conjunctions a regex would need lookaheads to
//! express, and the `regex` crate has no lookaheads, so they are predicate
//! types instead. Custom patterns stay pluggable.

use regex::Regex;

/// Minimum username length (in characters)
pub const MIN_USERNAME_LENGTH: usize = 8;

/// Minimum password length (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A pattern rule a candidate string must satisfy
pub trait Policy: Send + Sync {
    fn matches(&self, candidate: &str) -> bool;
}

/// Regex-backed pattern rule
#[derive(Debug, Clone)]
pub struct PatternPolicy(Regex);

impl PatternPolicy {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(Regex::new(pattern)?))
    }
}

impl From<Regex> for PatternPolicy {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl Policy for PatternPolicy {
    fn matches(&self, candidate: &str) -> bool {
        self.0.is_match(candidate)
    }
}

/// Closure-backed rule
pub struct Predicate<F>(F);

impl<F> Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F> Policy for Predicate<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn matches(&self, candidate: &str) -> bool {
        (self.0)(candidate)
    }
}

/// Default username rule: at least MIN_USERNAME_LENGTH characters
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUsernamePolicy;

impl Policy for DefaultUsernamePolicy {
    fn matches(&self, candidate: &str) -> bool {
        candidate.chars().count() >= MIN_USERNAME_LENGTH
    }
}

/// Default password rule: at least MIN_PASSWORD_LENGTH characters and at
/// least one ASCII uppercase letter
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPasswordPolicy;

impl Policy for DefaultPasswordPolicy {
    fn matches(&self, candidate: &str) -> bool {
        candidate.chars().count() >= MIN_PASSWORD_LENGTH
            && candidate.chars().any(|c| c.is_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_username_policy() {
        let policy = DefaultUsernamePolicy;
        assert!(!policy.matches("short"));
        assert!(policy.matches("longenoughname"));
        assert!(policy.matches("exactly8"));
        assert!(!policy.matches("seven77"));
    }

    #[test]
    fn test_default_password_policy() {
        let policy = DefaultPasswordPolicy;
        assert!(!policy.matches("alllower1"));
        assert!(policy.matches("Valid1234"));
        assert!(!policy.matches("Short1"));
        assert!(!policy.matches(""));
    }

    #[test]
    fn test_pattern_policy() {
        let policy = PatternPolicy::new("^[0-9]{4}$").unwrap();
        assert!(policy.matches("1234"));
        assert!(!policy.matches("12345"));
        assert!(!policy.matches("abcd"));
    }

    #[test]
    fn test_pattern_policy_invalid_pattern() {
        assert!(PatternPolicy::new("(unclosed").is_err());
    }

    #[test]
    fn test_predicate_policy() {
        let policy = Predicate::new(|candidate: &str| candidate.ends_with('x'));
        assert!(policy.matches("suffix"));
        assert!(!policy.matches("prefix_y"));
    }
}
