//! Subject fixtures.
//!
//! Ready-made users for tests: one per platform archetype, each carrying
//! the permission document the backend's role-to-permissions table would
//! hand that role.

use learngate::Condition;
use learngate_core::{PermissionNode, RoleLevel, RoleSet, ADMIN, MODERATOR, STUDENT, TEACHER};

/// A test subject: one user's role set, level, and permission document.
#[derive(Debug, Clone)]
pub struct SubjectFixture {
    pub roles: RoleSet,
    pub level: RoleLevel,
    pub permissions: PermissionNode,
}

impl SubjectFixture {
    /// A platform administrator with the full grant catalog.
    pub fn admin() -> Self {
        Self {
            roles: RoleSet::new().with_role(ADMIN, true),
            level: RoleLevel::new(10),
            permissions: parse_doc(
                r#"{
                    "dashboard": {"view": true},
                    "users": {"manage": true, "suspend": true},
                    "analytics": {"view": true, "export": true, "generate_reports": true},
                    "content": {"approve": true, "delete": true, "publish": true},
                    "courses": {"view": true, "create": true, "edit": true, "delete": true},
                    "payments": {"view": true, "refund": true}
                }"#,
            ),
        }
    }

    /// A course author: dashboard and analytics, own-content editing.
    pub fn teacher() -> Self {
        Self {
            roles: RoleSet::new().with_role(TEACHER, true),
            level: RoleLevel::new(5),
            permissions: parse_doc(
                r#"{
                    "dashboard": {"view": true},
                    "analytics": {"view": true},
                    "courses": {"view": true, "create": true, "edit": true},
                    "content": {"delete": true},
                    "webinars": {"schedule": true}
                }"#,
            ),
        }
    }

    /// A content moderator: approval and moderation grants only.
    pub fn moderator() -> Self {
        Self {
            roles: RoleSet::new().with_role(MODERATOR, true),
            level: RoleLevel::new(4),
            permissions: parse_doc(
                r#"{
                    "content": {"approve": true, "moderate": true},
                    "knowledge_base": {"view": true}
                }"#,
            ),
        }
    }

    /// An enrolled learner: view-only grants.
    pub fn student() -> Self {
        Self {
            roles: RoleSet::new().with_role(STUDENT, true),
            level: RoleLevel::new(1),
            permissions: parse_doc(
                r#"{
                    "courses": {"view": true},
                    "books": {"view": true},
                    "events": {"view": true}
                }"#,
            ),
        }
    }

    /// An unauthenticated or unprovisioned user: nothing granted.
    pub fn anonymous() -> Self {
        Self {
            roles: RoleSet::new(),
            level: RoleLevel::new(0),
            permissions: PermissionNode::empty(),
        }
    }

    /// Bind this subject into a [`Condition`].
    pub fn condition(&self) -> Condition {
        Condition::new(self.roles.clone(), self.level, self.permissions.clone())
    }

    /// Replace the permission document, keeping roles and level.
    pub fn with_permissions(mut self, permissions: PermissionNode) -> Self {
        self.permissions = permissions;
        self
    }
}

/// Parse a strict JSON permission document, panicking on bad fixtures.
fn parse_doc(json: &str) -> PermissionNode {
    PermissionNode::from_json_str(json).expect("fixture document must parse")
}
