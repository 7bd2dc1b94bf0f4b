//! Well-known permission paths.
//!
//! The composite policies hard-code a handful of paths into their formulas.
//! They are named here so call sites and tests share one spelling.

/// Grants the analytics dashboards to non-admins.
pub const ANALYTICS_VIEW: &str = "analytics.view";

/// Grants user administration to admins.
pub const USERS_MANAGE: &str = "users.manage";

/// Grants content approval to moderators.
pub const CONTENT_APPROVE: &str = "content.approve";

/// Required on top of editability for content deletion.
pub const CONTENT_DELETE: &str = "content.delete";

/// Gates both the admin and teacher panels.
pub const DASHBOARD_VIEW: &str = "dashboard.view";
