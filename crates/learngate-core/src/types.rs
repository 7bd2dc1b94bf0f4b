//! Strong type definitions for the learngate engine.
//!
//! Identifiers and levels are newtypes to prevent misuse at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role name for platform administrators.
pub const ADMIN: &str = "admin";

/// Role name for course authors.
pub const TEACHER: &str = "teacher";

/// Role name for content moderators.
pub const MODERATOR: &str = "moderator";

/// Role name for enrolled learners.
pub const STUDENT: &str = "student";

/// An integer privilege level, totally ordering users for threshold checks.
///
/// Higher means more privileged. Independent of named roles: a user's
/// level participates only in "at least level N" style gates.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoleLevel(pub i32);

impl RoleLevel {
    /// Create a level from a raw integer.
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    /// Get the raw integer.
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// True iff this level is at or above `min`.
    pub const fn at_least(&self, min: RoleLevel) -> bool {
        self.0 >= min.0
    }

    /// True iff this level is at or below `max`.
    pub const fn at_most(&self, max: RoleLevel) -> bool {
        self.0 <= max.0
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RoleLevel {
    fn from(level: i32) -> Self {
        Self(level)
    }
}

/// A user identifier, as issued by the backend's profile store.
///
/// Used by ownership-sensitive policies to compare a content item's
/// recorded owner against the acting user. The engine treats identifiers
/// as opaque strings; an empty string counts as "no owner recorded".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a user ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True iff the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_level_thresholds() {
        let level = RoleLevel::new(5);
        assert!(level.at_least(RoleLevel::new(5)));
        assert!(level.at_least(RoleLevel::new(3)));
        assert!(!level.at_least(RoleLevel::new(6)));
        assert!(level.at_most(RoleLevel::new(5)));
        assert!(!level.at_most(RoleLevel::new(4)));
    }

    #[test]
    fn test_role_level_ordering() {
        assert!(RoleLevel::new(10) > RoleLevel::new(2));
        assert_eq!(RoleLevel::new(0), RoleLevel::default());
    }

    #[test]
    fn test_role_level_serde_transparent() {
        let level: RoleLevel = serde_json::from_str("7").unwrap();
        assert_eq!(level, RoleLevel::new(7));
        assert_eq!(serde_json::to_string(&level).unwrap(), "7");
    }

    #[test]
    fn test_user_id_empty() {
        assert!(UserId::new("").is_empty());
        assert!(!UserId::new("user-1").is_empty());
    }

    #[test]
    fn test_user_id_display() {
        let id = UserId::new("owner123");
        assert_eq!(format!("{}", id), "owner123");
        assert_eq!(id.as_str(), "owner123");
    }
}
