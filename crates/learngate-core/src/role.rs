//! Role sets and role predicates.
//!
//! A user's roles are a mapping from role name to boolean membership.
//! Roles are not mutually exclusive: a user may hold zero, one, or many
//! roles at once. A flag that is present but `false` is equivalent to an
//! absent flag.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named role flags for one user.
///
/// Deserializes directly from the backend's profile shape, e.g.
/// `{"admin": false, "teacher": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(HashMap<String, bool>);

impl RoleSet {
    /// Create an empty role set (no memberships).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a role flag, returning the updated set.
    pub fn with_role(mut self, name: impl Into<String>, member: bool) -> Self {
        self.0.insert(name.into(), member);
        self
    }

    /// Set a role flag in place.
    pub fn set(&mut self, name: impl Into<String>, member: bool) {
        self.0.insert(name.into(), member);
    }

    /// True iff the named flag is present and exactly `true`.
    pub fn has(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(true))
    }

    /// Iterate over the role names currently granted.
    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, &member)| member)
            .map(|(name, _)| name.as_str())
    }

    /// True iff no role is granted.
    pub fn is_empty(&self) -> bool {
        self.granted().next().is_none()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for RoleSet {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// True iff `roles` grants the named role.
pub fn has_role(roles: &RoleSet, name: &str) -> bool {
    roles.has(name)
}

/// True iff at least one of `names` is granted. Empty `names` is `false`.
pub fn has_any_role(roles: &RoleSet, names: &[&str]) -> bool {
    names.iter().any(|name| roles.has(name))
}

/// True iff every one of `names` is granted. Empty `names` is `true`.
pub fn has_all_roles(roles: &RoleSet, names: &[&str]) -> bool {
    names.iter().all(|name| roles.has(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ADMIN, MODERATOR, STUDENT, TEACHER};

    #[test]
    fn test_has_role_exact() {
        let roles = RoleSet::new()
            .with_role(ADMIN, true)
            .with_role(TEACHER, false);

        assert!(has_role(&roles, ADMIN));
        assert!(!has_role(&roles, TEACHER)); // present but false
        assert!(!has_role(&roles, STUDENT)); // absent
    }

    #[test]
    fn test_multiple_roles() {
        let roles = RoleSet::new()
            .with_role(TEACHER, true)
            .with_role(STUDENT, true);

        assert!(has_role(&roles, TEACHER));
        assert!(has_role(&roles, STUDENT));
    }

    #[test]
    fn test_any_role_empty_names_is_false() {
        let roles = RoleSet::new().with_role(ADMIN, true);
        assert!(!has_any_role(&roles, &[]));
    }

    #[test]
    fn test_all_roles_empty_names_is_true() {
        let roles = RoleSet::new();
        assert!(has_all_roles(&roles, &[]));
    }

    #[test]
    fn test_any_and_all_quantifiers() {
        let roles = RoleSet::new()
            .with_role(TEACHER, true)
            .with_role(MODERATOR, true);

        assert!(has_any_role(&roles, &[ADMIN, TEACHER]));
        assert!(!has_any_role(&roles, &[ADMIN, STUDENT]));
        assert!(has_all_roles(&roles, &[TEACHER, MODERATOR]));
        assert!(!has_all_roles(&roles, &[TEACHER, ADMIN]));
    }

    #[test]
    fn test_serde_roundtrip_backend_shape() {
        let json = r#"{"admin":false,"teacher":true}"#;
        let roles: RoleSet = serde_json::from_str(json).unwrap();

        assert!(roles.has("teacher"));
        assert!(!roles.has("admin"));

        let back = serde_json::to_value(&roles).unwrap();
        let recovered: RoleSet = serde_json::from_value(back).unwrap();
        assert_eq!(roles, recovered);
    }

    #[test]
    fn test_granted_iterator() {
        let roles = RoleSet::new()
            .with_role(ADMIN, true)
            .with_role(TEACHER, false);

        let granted: Vec<&str> = roles.granted().collect();
        assert_eq!(granted, vec![ADMIN]);
        assert!(!roles.is_empty());
        assert!(RoleSet::new().is_empty());
    }
}
