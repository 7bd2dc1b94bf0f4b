//! Composite access policies.
//!
//! Each function here is one fixed boolean formula over the core
//! predicates, answering one business question. All of them are total and
//! pure: missing optional inputs mean "no constraint", malformed
//! permission paths resolve to `false`, and nothing here raises.

use learngate_core::logic;
use learngate_core::{
    has_all_permissions, has_any_role, has_permission, has_role, PermissionNode, RoleLevel,
    RoleSet, UserId, ADMIN, MODERATOR, TEACHER,
};

use crate::paths;

/// True when no owner is recorded for a content item.
///
/// Backend rows sometimes carry an empty string instead of a null owner;
/// both count as unrecorded.
fn owner_unrecorded(owner: Option<&UserId>) -> bool {
    owner.map_or(true, UserId::is_empty)
}

/// True when both an owner and an acting user are known and they match.
fn owner_matches(owner: Option<&UserId>, acting_user: Option<&UserId>) -> bool {
    match (owner, acting_user) {
        (Some(owner), Some(acting)) => owner == acting,
        _ => false,
    }
}

/// Can the user manage (create/edit/delete) a course?
///
/// Admins always can. Teachers can when the course has no recorded owner
/// or when they own it themselves. Everyone else cannot.
///
/// The `_level` parameter is accepted alongside the other course policies
/// but does not currently participate in the verdict.
pub fn can_manage_course(
    roles: &RoleSet,
    _level: RoleLevel,
    course_owner: Option<&UserId>,
    acting_user: Option<&UserId>,
) -> bool {
    let verdict = if has_role(roles, ADMIN) {
        true
    } else if has_role(roles, TEACHER) {
        logic::or(
            owner_unrecorded(course_owner),
            owner_matches(course_owner, acting_user),
        )
    } else {
        false
    };
    tracing::trace!("course management verdict: {}", verdict);
    verdict
}

/// Can the user open the analytics dashboards?
///
/// Admins unconditionally; teachers only with the `analytics.view` grant.
/// The formula is assembled from [`logic`] combinators, so both operands
/// are evaluated eagerly; every predicate here is pure and cheap.
pub fn can_view_analytics(roles: &RoleSet, permissions: &PermissionNode) -> bool {
    logic::or(
        has_role(roles, ADMIN),
        logic::and(
            has_role(roles, TEACHER),
            has_permission(permissions, paths::ANALYTICS_VIEW),
        ),
    )
}

/// Can the user administer other users?
///
/// Requires both the admin role and the `users.manage` grant.
pub fn can_manage_users(roles: &RoleSet, permissions: &PermissionNode) -> bool {
    logic::and(
        has_role(roles, ADMIN),
        has_permission(permissions, paths::USERS_MANAGE),
    )
}

/// Can the user approve submitted content?
///
/// Admins unconditionally; moderators only with the `content.approve`
/// grant.
pub fn can_approve_content(roles: &RoleSet, permissions: &PermissionNode) -> bool {
    logic::or(
        has_role(roles, ADMIN),
        logic::and(
            has_role(roles, MODERATOR),
            has_permission(permissions, paths::CONTENT_APPROVE),
        ),
    )
}

/// Requirements for a gated feature.
///
/// Each gate is optional and independently combinable: an absent gate does
/// not constrain the verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureGate {
    required_role: Option<String>,
    required_level: Option<RoleLevel>,
    required_permissions: Vec<String>,
}

impl FeatureGate {
    /// A gate with no requirements; every user passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a named role.
    pub fn role(mut self, name: impl Into<String>) -> Self {
        self.required_role = Some(name.into());
        self
    }

    /// Require a minimum privilege level.
    pub fn min_level(mut self, level: impl Into<RoleLevel>) -> Self {
        self.required_level = Some(level.into());
        self
    }

    /// Require a permission path. May be called repeatedly; all collected
    /// paths must be granted.
    pub fn permission(mut self, path: impl Into<String>) -> Self {
        self.required_permissions.push(path.into());
        self
    }
}

/// Can the user access a feature behind the given gate?
///
/// Starts from `true` and conjoins each requirement the gate carries: the
/// named role, the minimum level, and every listed permission path.
pub fn can_access_feature(
    roles: &RoleSet,
    level: RoleLevel,
    permissions: &PermissionNode,
    gate: &FeatureGate,
) -> bool {
    let mut checks = Vec::new();

    if let Some(ref name) = gate.required_role {
        checks.push(has_role(roles, name));
    }
    if let Some(min) = gate.required_level {
        checks.push(level.at_least(min));
    }
    if !gate.required_permissions.is_empty() {
        let required: Vec<&str> = gate.required_permissions.iter().map(String::as_str).collect();
        checks.push(has_all_permissions(permissions, &required));
    }

    // An empty gate conjoins nothing and passes everyone.
    let verdict = logic::all(&checks);
    tracing::trace!("feature gate verdict: {}", verdict);
    verdict
}

/// Can the user perform `action` on `resource`?
///
/// Shorthand for resolving the `resource.action` path.
pub fn can_perform_action(permissions: &PermissionNode, action: &str, resource: &str) -> bool {
    has_permission(permissions, &format!("{}.{}", resource, action))
}

/// Should a navigation item be rendered for this user?
///
/// The user must hold at least one of `allowed_roles` and every path in
/// `required_permissions` (an empty list does not constrain).
pub fn should_show_navigation_item(
    roles: &RoleSet,
    permissions: &PermissionNode,
    allowed_roles: &[&str],
    required_permissions: &[&str],
) -> bool {
    logic::and(
        has_any_role(roles, allowed_roles),
        has_all_permissions(permissions, required_permissions),
    )
}

/// Should a navigation item be hidden from this user?
///
/// Hidden when the user holds any of `hidden_roles`.
pub fn should_hide_navigation_item(roles: &RoleSet, hidden_roles: &[&str]) -> bool {
    has_any_role(roles, hidden_roles)
}

/// Can the user edit a content item?
///
/// Admins always; teachers when the item has no recorded owner or they
/// own it themselves.
pub fn is_content_editable(
    roles: &RoleSet,
    content_owner: Option<&UserId>,
    acting_user: Option<&UserId>,
) -> bool {
    logic::or(
        has_role(roles, ADMIN),
        logic::and(
            has_role(roles, TEACHER),
            logic::or(
                owner_unrecorded(content_owner),
                owner_matches(content_owner, acting_user),
            ),
        ),
    )
}

/// Can the user delete a content item?
///
/// Deletion requires the `content.delete` grant on top of editability, so
/// it can never hold where [`is_content_editable`] does not.
pub fn is_content_deletable(
    roles: &RoleSet,
    permissions: &PermissionNode,
    content_owner: Option<&UserId>,
    acting_user: Option<&UserId>,
) -> bool {
    logic::and(
        has_permission(permissions, paths::CONTENT_DELETE),
        is_content_editable(roles, content_owner, acting_user),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use learngate_core::STUDENT;

    fn admin() -> RoleSet {
        RoleSet::new().with_role(ADMIN, true)
    }

    fn teacher() -> RoleSet {
        RoleSet::new().with_role(TEACHER, true)
    }

    fn owner(id: &str) -> Option<UserId> {
        Some(UserId::new(id))
    }

    #[test]
    fn test_admin_manages_any_course() {
        let verdict = can_manage_course(
            &admin(),
            RoleLevel::new(0),
            owner("owner123").as_ref(),
            owner("other456").as_ref(),
        );
        assert!(verdict);
    }

    #[test]
    fn test_teacher_blocked_by_foreign_owner() {
        let verdict = can_manage_course(
            &teacher(),
            RoleLevel::new(9),
            owner("owner123").as_ref(),
            owner("other456").as_ref(),
        );
        assert!(!verdict);
    }

    #[test]
    fn test_teacher_manages_own_course() {
        let verdict = can_manage_course(
            &teacher(),
            RoleLevel::new(0),
            owner("owner123").as_ref(),
            owner("owner123").as_ref(),
        );
        assert!(verdict);
    }

    #[test]
    fn test_teacher_manages_unowned_course() {
        assert!(can_manage_course(
            &teacher(),
            RoleLevel::new(0),
            None,
            owner("anyone").as_ref(),
        ));
        // Empty-string owner counts as unrecorded.
        assert!(can_manage_course(
            &teacher(),
            RoleLevel::new(0),
            owner("").as_ref(),
            owner("anyone").as_ref(),
        ));
    }

    #[test]
    fn test_teacher_without_acting_user_blocked_by_owner() {
        let verdict = can_manage_course(
            &teacher(),
            RoleLevel::new(0),
            owner("owner123").as_ref(),
            None,
        );
        assert!(!verdict);
    }

    #[test]
    fn test_student_never_manages_courses() {
        let roles = RoleSet::new().with_role(STUDENT, true);
        assert!(!can_manage_course(&roles, RoleLevel::new(100), None, None));
    }

    #[test]
    fn test_analytics_teacher_needs_grant() {
        let denied = PermissionNode::empty().grant(paths::ANALYTICS_VIEW, false);
        let granted = PermissionNode::empty().grant(paths::ANALYTICS_VIEW, true);

        assert!(!can_view_analytics(&teacher(), &denied));
        assert!(can_view_analytics(&teacher(), &granted));
    }

    #[test]
    fn test_analytics_admin_unconditional() {
        assert!(can_view_analytics(&admin(), &PermissionNode::empty()));
    }

    #[test]
    fn test_manage_users_needs_both_role_and_grant() {
        let granted = PermissionNode::empty().grant(paths::USERS_MANAGE, true);

        assert!(can_manage_users(&admin(), &granted));
        assert!(!can_manage_users(&admin(), &PermissionNode::empty()));
        assert!(!can_manage_users(&teacher(), &granted));
    }

    #[test]
    fn test_approve_content() {
        let moderator = RoleSet::new().with_role(MODERATOR, true);
        let granted = PermissionNode::empty().grant(paths::CONTENT_APPROVE, true);

        assert!(can_approve_content(&admin(), &PermissionNode::empty()));
        assert!(can_approve_content(&moderator, &granted));
        assert!(!can_approve_content(&moderator, &PermissionNode::empty()));
        assert!(!can_approve_content(&teacher(), &granted));
    }

    #[test]
    fn test_feature_gate_empty_passes_everyone() {
        let gate = FeatureGate::new();
        let verdict = can_access_feature(
            &RoleSet::new(),
            RoleLevel::new(0),
            &PermissionNode::empty(),
            &gate,
        );
        assert!(verdict);
    }

    #[test]
    fn test_feature_gate_combines_requirements() {
        let gate = FeatureGate::new()
            .role(TEACHER)
            .min_level(3)
            .permission("webinars.schedule");
        let permissions = PermissionNode::empty().grant("webinars.schedule", true);

        assert!(can_access_feature(
            &teacher(),
            RoleLevel::new(3),
            &permissions,
            &gate
        ));
        // Each requirement independently blocks.
        assert!(!can_access_feature(
            &admin(),
            RoleLevel::new(3),
            &permissions,
            &gate
        ));
        assert!(!can_access_feature(
            &teacher(),
            RoleLevel::new(2),
            &permissions,
            &gate
        ));
        assert!(!can_access_feature(
            &teacher(),
            RoleLevel::new(3),
            &PermissionNode::empty(),
            &gate
        ));
    }

    #[test]
    fn test_perform_action_joins_resource_and_action() {
        let permissions = PermissionNode::empty().grant("jobs.create", true);

        assert!(can_perform_action(&permissions, "create", "jobs"));
        assert!(!can_perform_action(&permissions, "delete", "jobs"));
        assert!(!can_perform_action(&permissions, "create", "events"));
    }

    #[test]
    fn test_navigation_show_and_hide() {
        let roles = teacher();
        let permissions = PermissionNode::empty().grant("courses.view", true);

        assert!(should_show_navigation_item(
            &roles,
            &permissions,
            &[ADMIN, TEACHER],
            &["courses.view"],
        ));
        assert!(!should_show_navigation_item(
            &roles,
            &permissions,
            &[ADMIN],
            &["courses.view"],
        ));
        assert!(!should_show_navigation_item(
            &roles,
            &permissions,
            &[TEACHER],
            &["courses.export"],
        ));
        // No required permissions means the role check alone decides.
        assert!(should_show_navigation_item(
            &roles,
            &PermissionNode::empty(),
            &[TEACHER],
            &[],
        ));

        assert!(should_hide_navigation_item(&roles, &[TEACHER]));
        assert!(!should_hide_navigation_item(&roles, &[STUDENT]));
        assert!(!should_hide_navigation_item(&roles, &[]));
    }

    #[test]
    fn test_content_editable_mirrors_course_rules() {
        assert!(is_content_editable(
            &admin(),
            owner("owner123").as_ref(),
            owner("other456").as_ref(),
        ));
        assert!(is_content_editable(
            &teacher(),
            None,
            owner("anyone").as_ref()
        ));
        assert!(!is_content_editable(
            &teacher(),
            owner("owner123").as_ref(),
            owner("other456").as_ref(),
        ));
    }

    #[test]
    fn test_deletable_requires_grant_and_editability() {
        let granted = PermissionNode::empty().grant(paths::CONTENT_DELETE, true);

        assert!(is_content_deletable(&admin(), &granted, None, None));
        assert!(!is_content_deletable(
            &admin(),
            &PermissionNode::empty(),
            None,
            None
        ));
        assert!(!is_content_deletable(
            &teacher(),
            &granted,
            owner("owner123").as_ref(),
            owner("other456").as_ref(),
        ));
    }
}
