//! Content visibility modes.
//!
//! Content rows carry a visibility mode string that decides which users a
//! piece of content is rendered for. Unknown mode strings parse to
//! [`VisibilityMode::Unknown`] and stay visible; this permissive default
//! is inherited behavior and is the one place the engine does not fail
//! closed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use learngate_core::{has_any_role, RoleLevel, RoleSet};

/// Minimum privilege level for level-gated content.
pub const LEVEL_VISIBILITY_THRESHOLD: RoleLevel = RoleLevel::new(5);

/// How a content item decides who sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisibilityMode {
    /// Visible to everyone.
    Public,

    /// Visible to users holding one of the item's allowed roles.
    RoleBased,

    /// Visible to users at or above [`LEVEL_VISIBILITY_THRESHOLD`].
    LevelBased,

    /// Unrecognized mode string; treated as visible.
    #[serde(other)]
    Unknown,
}

impl FromStr for VisibilityMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "public" => VisibilityMode::Public,
            "role-based" => VisibilityMode::RoleBased,
            "level-based" => VisibilityMode::LevelBased,
            _ => VisibilityMode::Unknown,
        })
    }
}

/// Is a content item visible to this user?
///
/// `allowed_roles` only participates in [`VisibilityMode::RoleBased`];
/// when the item records no allowed roles, role-based content is visible
/// to everyone.
pub fn is_content_visible(
    roles: &RoleSet,
    level: RoleLevel,
    mode: VisibilityMode,
    allowed_roles: Option<&[&str]>,
) -> bool {
    match mode {
        VisibilityMode::Public => true,
        VisibilityMode::RoleBased => {
            allowed_roles.map_or(true, |allowed| has_any_role(roles, allowed))
        }
        VisibilityMode::LevelBased => level.at_least(LEVEL_VISIBILITY_THRESHOLD),
        VisibilityMode::Unknown => true,
    }
}
