//! # Learngate Core
//!
//! Pure primitives for the learngate access engine: role sets, permission
//! trees, and boolean combinators.
//!
//! This crate contains no I/O, no storage, no networking. It is pure
//! computation over a user's access attributes.
//!
//! ## Key Types
//!
//! - [`RoleSet`] - Named role flags for one user (non-exclusive membership)
//! - [`RoleLevel`] - Integer privilege level for threshold checks
//! - [`PermissionNode`] - Nested boolean tree addressed by dot-separated paths
//! - [`UserId`] - Identifier used by ownership-sensitive policies
//!
//! ## Fail-Closed Resolution
//!
//! Every query in this crate is total: malformed paths, absent keys, and
//! non-boolean terminals all resolve to `false`. An absent permission is
//! never an error and never `true`. See [`document`] for the resolution
//! rules.

pub mod document;
pub mod error;
pub mod logic;
pub mod role;
pub mod types;

pub use document::{has_all_permissions, has_any_permission, has_permission, PermissionNode};
pub use error::DocumentError;
pub use role::{has_all_roles, has_any_role, has_role, RoleSet};
pub use types::{RoleLevel, UserId, ADMIN, MODERATOR, STUDENT, TEACHER};
