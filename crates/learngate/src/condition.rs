//! Per-user bound conditions.
//!
//! A [`Condition`] binds one user's `(roles, level, permissions)` snapshot
//! so call sites can ask named questions without re-threading the triple
//! through every check. Construction is cheap and pure, and each query
//! agrees exactly with the corresponding free function over the same
//! inputs.

use learngate_core::{
    has_permission, has_role, PermissionNode, RoleLevel, RoleSet, UserId, ADMIN, MODERATOR,
    STUDENT, TEACHER,
};

use crate::paths;
use crate::policy::{self, FeatureGate};
use crate::visibility::{self, VisibilityMode};

/// One user's access attributes, bound for repeated queries.
///
/// The snapshot is immutable for the lifetime of the condition; fetch a
/// fresh one when the session's profile changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Condition {
    roles: RoleSet,
    level: RoleLevel,
    permissions: PermissionNode,
}

impl Condition {
    /// Bind a user's role set, privilege level, and permission document.
    pub fn new(roles: RoleSet, level: RoleLevel, permissions: PermissionNode) -> Self {
        Self {
            roles,
            level,
            permissions,
        }
    }

    /// The bound role set.
    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    /// The bound privilege level.
    pub fn level(&self) -> RoleLevel {
        self.level
    }

    /// The bound permission document.
    pub fn permissions(&self) -> &PermissionNode {
        &self.permissions
    }

    /// True iff the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        has_role(&self.roles, ADMIN)
    }

    /// True iff the user holds the teacher role.
    pub fn is_teacher(&self) -> bool {
        has_role(&self.roles, TEACHER)
    }

    /// True iff the user holds the moderator role.
    pub fn is_moderator(&self) -> bool {
        has_role(&self.roles, MODERATOR)
    }

    /// True iff the user holds the student role.
    pub fn is_student(&self) -> bool {
        has_role(&self.roles, STUDENT)
    }

    /// True iff the user's level is at or above `min`.
    pub fn has_minimum_level(&self, min: impl Into<RoleLevel>) -> bool {
        self.level.at_least(min.into())
    }

    /// Resolve a permission path against the bound document.
    pub fn has_permission(&self, path: &str) -> bool {
        has_permission(&self.permissions, path)
    }

    /// See [`policy::can_manage_course`].
    pub fn can_manage_course(
        &self,
        course_owner: Option<&UserId>,
        acting_user: Option<&UserId>,
    ) -> bool {
        policy::can_manage_course(&self.roles, self.level, course_owner, acting_user)
    }

    /// See [`policy::can_view_analytics`].
    pub fn can_view_analytics(&self) -> bool {
        policy::can_view_analytics(&self.roles, &self.permissions)
    }

    /// See [`policy::can_manage_users`].
    pub fn can_manage_users(&self) -> bool {
        policy::can_manage_users(&self.roles, &self.permissions)
    }

    /// See [`policy::can_approve_content`].
    pub fn can_approve_content(&self) -> bool {
        policy::can_approve_content(&self.roles, &self.permissions)
    }

    /// See [`policy::can_access_feature`].
    pub fn can_access_feature(&self, gate: &FeatureGate) -> bool {
        policy::can_access_feature(&self.roles, self.level, &self.permissions, gate)
    }

    /// See [`policy::can_perform_action`].
    pub fn can_perform_action(&self, action: &str, resource: &str) -> bool {
        policy::can_perform_action(&self.permissions, action, resource)
    }

    /// See [`visibility::is_content_visible`].
    pub fn is_content_visible(&self, mode: VisibilityMode, allowed_roles: Option<&[&str]>) -> bool {
        visibility::is_content_visible(&self.roles, self.level, mode, allowed_roles)
    }

    /// See [`policy::is_content_editable`].
    pub fn is_content_editable(
        &self,
        content_owner: Option<&UserId>,
        acting_user: Option<&UserId>,
    ) -> bool {
        policy::is_content_editable(&self.roles, content_owner, acting_user)
    }

    /// See [`policy::is_content_deletable`].
    pub fn is_content_deletable(
        &self,
        content_owner: Option<&UserId>,
        acting_user: Option<&UserId>,
    ) -> bool {
        policy::is_content_deletable(&self.roles, &self.permissions, content_owner, acting_user)
    }

    /// Can the user open the admin panel? Admin role plus the
    /// `dashboard.view` grant.
    pub fn can_access_admin_panel(&self) -> bool {
        self.is_admin() && self.has_permission(paths::DASHBOARD_VIEW)
    }

    /// Can the user open the teacher panel? Admins always; teachers with
    /// the `dashboard.view` grant.
    pub fn can_access_teacher_panel(&self) -> bool {
        self.is_admin() || (self.is_teacher() && self.has_permission(paths::DASHBOARD_VIEW))
    }
}
