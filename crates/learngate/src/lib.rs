//! # Learngate
//!
//! Role and permission evaluation for the learning platform client.
//!
//! ## Overview
//!
//! The platform backend hands each authenticated user three attributes: a
//! set of named role flags, an integer privilege level, and a nested
//! boolean permission document. Screens ask this crate yes/no questions
//! against that snapshot before rendering a control or allowing an action.
//!
//! Every verdict here is an advisory UI gate. The backend enforces the
//! real boundary with row-level security; a `true` from this crate only
//! decides what the client shows and attempts.
//!
//! ## Layers
//!
//! - [`learngate_core`] (re-exported): boolean combinators, role
//!   predicates, and fail-closed permission-path resolution
//! - [`policy`]: composite policies, one fixed formula per business rule
//! - [`visibility`]: content visibility modes
//! - [`condition`]: per-user [`Condition`] binding one user's attributes
//!   so call sites stop re-threading the triple through every check
//!
//! ## Usage
//!
//! ```rust
//! use learngate::{Condition, PermissionNode, RoleLevel, RoleSet, TEACHER};
//!
//! let roles = RoleSet::new().with_role(TEACHER, true);
//! let permissions = PermissionNode::empty().grant("analytics.view", true);
//!
//! let user = Condition::new(roles, RoleLevel::new(3), permissions);
//! assert!(user.can_view_analytics());
//! assert!(!user.can_manage_users());
//! ```

pub mod condition;
pub mod paths;
pub mod policy;
pub mod visibility;

pub use condition::Condition;
pub use policy::{
    can_access_feature, can_approve_content, can_manage_course, can_manage_users,
    can_perform_action, can_view_analytics, is_content_deletable, is_content_editable,
    should_hide_navigation_item, should_show_navigation_item, FeatureGate,
};
pub use visibility::{is_content_visible, VisibilityMode, LEVEL_VISIBILITY_THRESHOLD};

// Re-export the core primitives so consumers need a single dependency.
pub use learngate_core::logic;
pub use learngate_core::{
    has_all_permissions, has_all_roles, has_any_permission, has_any_role, has_permission,
    has_role, DocumentError, PermissionNode, RoleLevel, RoleSet, UserId, ADMIN, MODERATOR,
    STUDENT, TEACHER,
};
