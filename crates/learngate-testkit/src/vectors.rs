//! Golden decision vectors.
//!
//! Each vector fixes one access decision: a subject (roles JSON, level,
//! permissions JSON), the policy under test, and the expected verdict.
//! The vectors pin the tie-breaks the UI depends on — admin ownership
//! bypass, the level-5 visibility boundary, fail-closed path resolution —
//! so a refactor that flips one of them fails loudly by name.

use serde::Serialize;

use learngate::{
    can_approve_content, can_manage_course, can_manage_users, can_view_analytics,
    is_content_deletable, is_content_editable, is_content_visible, Condition, VisibilityMode,
};
use learngate_core::{PermissionNode, RoleLevel, RoleSet, UserId};

/// A golden decision vector.
///
/// Serializable so the catalog can be exported for implementations in
/// other languages to replay.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Subject roles, backend JSON shape.
    pub roles: &'static str,
    /// Subject privilege level.
    pub level: i32,
    /// Subject permission document, backend JSON shape.
    pub permissions: &'static str,
    /// The policy question being asked.
    pub check: PolicyCheck,
    /// The expected verdict.
    pub expected: bool,
}

/// The policy question a vector asks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyCheck {
    ManageCourse {
        owner: Option<&'static str>,
        acting: Option<&'static str>,
    },
    ViewAnalytics,
    ManageUsers,
    ApproveContent,
    ContentVisible {
        mode: &'static str,
        allowed_roles: Option<&'static [&'static str]>,
    },
    ContentEditable {
        owner: Option<&'static str>,
        acting: Option<&'static str>,
    },
    ContentDeletable {
        owner: Option<&'static str>,
        acting: Option<&'static str>,
    },
    Permission {
        path: &'static str,
    },
    AccessAdminPanel,
    AccessTeacherPanel,
}

/// Get all golden decision vectors.
pub fn all_vectors() -> Vec<DecisionVector> {
    vec![
        DecisionVector {
            name: "admin manages a course owned by someone else",
            roles: r#"{"admin":true}"#,
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ManageCourse {
                owner: Some("owner123"),
                acting: Some("other456"),
            },
            expected: true,
        },
        DecisionVector {
            name: "teacher blocked by a foreign course owner",
            roles: r#"{"teacher":true}"#,
            level: 9,
            permissions: "{}",
            check: PolicyCheck::ManageCourse {
                owner: Some("owner123"),
                acting: Some("other456"),
            },
            expected: false,
        },
        DecisionVector {
            name: "teacher manages their own course",
            roles: r#"{"teacher":true}"#,
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ManageCourse {
                owner: Some("owner123"),
                acting: Some("owner123"),
            },
            expected: true,
        },
        DecisionVector {
            name: "teacher manages a course with no recorded owner",
            roles: r#"{"teacher":true}"#,
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ManageCourse {
                owner: None,
                acting: Some("anyone"),
            },
            expected: true,
        },
        DecisionVector {
            name: "student cannot manage any course",
            roles: r#"{"student":true}"#,
            level: 20,
            permissions: "{}",
            check: PolicyCheck::ManageCourse {
                owner: None,
                acting: None,
            },
            expected: false,
        },
        DecisionVector {
            name: "teacher denied analytics without the grant",
            roles: r#"{"teacher":true}"#,
            level: 5,
            permissions: r#"{"analytics":{"view":false}}"#,
            check: PolicyCheck::ViewAnalytics,
            expected: false,
        },
        DecisionVector {
            name: "teacher granted analytics",
            roles: r#"{"teacher":true}"#,
            level: 5,
            permissions: r#"{"analytics":{"view":true}}"#,
            check: PolicyCheck::ViewAnalytics,
            expected: true,
        },
        DecisionVector {
            name: "admin views analytics with an empty document",
            roles: r#"{"admin":true}"#,
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ViewAnalytics,
            expected: true,
        },
        DecisionVector {
            name: "admin without users.manage cannot administer users",
            roles: r#"{"admin":true}"#,
            level: 10,
            permissions: "{}",
            check: PolicyCheck::ManageUsers,
            expected: false,
        },
        DecisionVector {
            name: "admin with users.manage administers users",
            roles: r#"{"admin":true}"#,
            level: 10,
            permissions: r#"{"users":{"manage":true}}"#,
            check: PolicyCheck::ManageUsers,
            expected: true,
        },
        DecisionVector {
            name: "moderator approves content with the grant",
            roles: r#"{"moderator":true}"#,
            level: 4,
            permissions: r#"{"content":{"approve":true}}"#,
            check: PolicyCheck::ApproveContent,
            expected: true,
        },
        DecisionVector {
            name: "public content is visible to an anonymous user",
            roles: "{}",
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ContentVisible {
                mode: "public",
                allowed_roles: None,
            },
            expected: true,
        },
        DecisionVector {
            name: "level-gated content hidden at level 4",
            roles: "{}",
            level: 4,
            permissions: "{}",
            check: PolicyCheck::ContentVisible {
                mode: "level-based",
                allowed_roles: None,
            },
            expected: false,
        },
        DecisionVector {
            name: "level-gated content visible at exactly level 5",
            roles: "{}",
            level: 5,
            permissions: "{}",
            check: PolicyCheck::ContentVisible {
                mode: "level-based",
                allowed_roles: None,
            },
            expected: true,
        },
        DecisionVector {
            name: "role-gated content checks the allowed list",
            roles: r#"{"student":true}"#,
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ContentVisible {
                mode: "role-based",
                allowed_roles: Some(&["admin", "teacher"]),
            },
            expected: false,
        },
        DecisionVector {
            name: "unrecognized visibility mode stays visible",
            roles: "{}",
            level: 0,
            permissions: "{}",
            check: PolicyCheck::ContentVisible {
                mode: "members-only",
                allowed_roles: Some(&["admin"]),
            },
            expected: true,
        },
        DecisionVector {
            name: "deletion denied without content.delete despite editability",
            roles: r#"{"admin":true}"#,
            level: 10,
            permissions: "{}",
            check: PolicyCheck::ContentDeletable {
                owner: None,
                acting: None,
            },
            expected: false,
        },
        DecisionVector {
            name: "teacher deletes their own content with the grant",
            roles: r#"{"teacher":true}"#,
            level: 5,
            permissions: r#"{"content":{"delete":true}}"#,
            check: PolicyCheck::ContentDeletable {
                owner: Some("me"),
                acting: Some("me"),
            },
            expected: true,
        },
        DecisionVector {
            name: "non-boolean leaf resolves to false",
            roles: "{}",
            level: 0,
            permissions: r#"{"analytics":{"view":"true"}}"#,
            check: PolicyCheck::Permission {
                path: "analytics.view",
            },
            expected: false,
        },
        DecisionVector {
            name: "path through a leaf resolves to false",
            roles: "{}",
            level: 0,
            permissions: r#"{"analytics":true}"#,
            check: PolicyCheck::Permission {
                path: "analytics.view",
            },
            expected: false,
        },
        DecisionVector {
            name: "admin panel needs the dashboard grant",
            roles: r#"{"admin":true}"#,
            level: 10,
            permissions: "{}",
            check: PolicyCheck::AccessAdminPanel,
            expected: false,
        },
        DecisionVector {
            name: "teacher panel opens for a granted teacher",
            roles: r#"{"teacher":true}"#,
            level: 3,
            permissions: r#"{"dashboard":{"view":true}}"#,
            check: PolicyCheck::AccessTeacherPanel,
            expected: true,
        },
    ]
}

/// Evaluate one vector against the real policy functions.
pub fn evaluate_vector(vector: &DecisionVector) -> bool {
    let roles: RoleSet =
        serde_json::from_str(vector.roles).expect("vector roles must be valid JSON");
    let level = RoleLevel::new(vector.level);

    // Vectors deliberately include loosely-typed documents, so use the
    // lenient reading the client applies to backend rows.
    let value: serde_json::Value =
        serde_json::from_str(vector.permissions).expect("vector permissions must be valid JSON");
    let permissions = PermissionNode::from_value(&value);

    let user = |id: Option<&str>| id.map(UserId::new);

    match &vector.check {
        PolicyCheck::ManageCourse { owner, acting } => can_manage_course(
            &roles,
            level,
            user(*owner).as_ref(),
            user(*acting).as_ref(),
        ),
        PolicyCheck::ViewAnalytics => can_view_analytics(&roles, &permissions),
        PolicyCheck::ManageUsers => can_manage_users(&roles, &permissions),
        PolicyCheck::ApproveContent => can_approve_content(&roles, &permissions),
        PolicyCheck::ContentVisible {
            mode,
            allowed_roles,
        } => {
            let mode: VisibilityMode = mode.parse().expect("mode parsing is infallible");
            is_content_visible(&roles, level, mode, *allowed_roles)
        }
        PolicyCheck::ContentEditable { owner, acting } => {
            is_content_editable(&roles, user(*owner).as_ref(), user(*acting).as_ref())
        }
        PolicyCheck::ContentDeletable { owner, acting } => is_content_deletable(
            &roles,
            &permissions,
            user(*owner).as_ref(),
            user(*acting).as_ref(),
        ),
        PolicyCheck::Permission { path } => permissions.resolve(path),
        PolicyCheck::AccessAdminPanel => {
            Condition::new(roles, level, permissions).can_access_admin_panel()
        }
        PolicyCheck::AccessTeacherPanel => {
            Condition::new(roles, level, permissions).can_access_teacher_panel()
        }
    }
}

/// Evaluate every vector, collecting the names of any that disagree.
pub fn verify_all_vectors() -> Result<(), Vec<String>> {
    let failures: Vec<String> = all_vectors()
        .iter()
        .filter(|vector| evaluate_vector(vector) != vector.expected)
        .map(|vector| vector.name.to_string())
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        if let Err(failures) = verify_all_vectors() {
            panic!("vectors disagree with the engine: {:?}", failures);
        }
    }

    #[test]
    fn test_catalog_serializes_for_export() {
        let json = serde_json::to_string_pretty(&all_vectors()).unwrap();
        assert!(json.contains("admin manages a course owned by someone else"));
    }

    #[test]
    fn test_vector_names_are_unique() {
        let vectors = all_vectors();
        let mut names: Vec<&str> = vectors.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), vectors.len());
    }
}
