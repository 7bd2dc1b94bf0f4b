//! Proptest generators for property-based testing.

use proptest::prelude::*;

use learngate_core::{PermissionNode, RoleLevel, RoleSet};

/// Role and resource names the platform actually uses, mixed with
/// arbitrary identifiers so properties do not overfit the known catalog.
pub fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("admin".to_string()),
        Just("teacher".to_string()),
        Just("moderator".to_string()),
        Just("student".to_string()),
        Just("courses".to_string()),
        Just("content".to_string()),
        Just("analytics".to_string()),
        Just("view".to_string()),
        Just("manage".to_string()),
        "[a-z][a-z_]{0,11}".prop_map(String::from),
    ]
}

/// Generate a role set of up to eight flags, granted or not.
pub fn role_set() -> impl Strategy<Value = RoleSet> {
    prop::collection::vec((key(), any::<bool>()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

/// Generate a privilege level in a realistic band.
pub fn role_level() -> impl Strategy<Value = RoleLevel> {
    (-10i32..=20).prop_map(RoleLevel::new)
}

/// Generate a permission tree up to three levels deep.
pub fn permission_node() -> impl Strategy<Value = PermissionNode> {
    let leaf = any::<bool>().prop_map(PermissionNode::Allow);
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop::collection::hash_map(key(), inner, 0..6).prop_map(PermissionNode::Scope)
    })
}

/// Generate a dot-separated path of one to four segments.
pub fn dot_path() -> impl Strategy<Value = String> {
    prop::collection::vec(key(), 1..=4).prop_map(|segments| segments.join("."))
}

/// Generate a document together with a path that is granted in it, for
/// properties over known-resolvable paths.
pub fn document_with_granted_path() -> impl Strategy<Value = (PermissionNode, String)> {
    (permission_node(), dot_path()).prop_map(|(doc, path)| {
        let doc = doc.grant(&path, true);
        (doc, path)
    })
}
