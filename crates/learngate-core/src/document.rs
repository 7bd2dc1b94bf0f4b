//! Permission documents and fail-closed path resolution.
//!
//! A permission document is a tree of boolean leaves keyed by resource and
//! action names, addressed by dot-separated paths such as `"jobs.create"`
//! or `"content.approve"`. Resolution is total: an absent path, a path that
//! walks through a leaf, or a terminal that is not exactly `true` all
//! resolve to `false`. A malformed permission must never resolve to `true`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DocumentError;

/// One node of a permission document: a boolean leaf or a nested scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionNode {
    /// A terminal verdict for one action.
    Allow(bool),

    /// A nested scope of further resource or action keys.
    Scope(HashMap<String, PermissionNode>),
}

impl PermissionNode {
    /// An empty document: every path resolves to `false`.
    pub fn empty() -> Self {
        PermissionNode::Scope(HashMap::new())
    }

    /// Build a scope node from key/node pairs.
    pub fn scope<S, I>(entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, PermissionNode)>,
    {
        PermissionNode::Scope(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Insert a boolean leaf at a dot-separated path, creating scopes as
    /// needed. A leaf along the way is replaced by a scope.
    pub fn grant(mut self, path: &str, allow: bool) -> Self {
        let mut node = &mut self;
        for key in path.split('.') {
            if !matches!(node, PermissionNode::Scope(_)) {
                *node = PermissionNode::empty();
            }
            let PermissionNode::Scope(children) = node else {
                unreachable!("node was just replaced by a scope");
            };
            node = children
                .entry(key.to_string())
                .or_insert_with(PermissionNode::empty);
        }
        *node = PermissionNode::Allow(allow);
        self
    }

    /// Resolve a dot-separated path to a verdict.
    ///
    /// Walks the tree one key at a time. Resolution yields `true` only when
    /// the walk completes and lands on `Allow(true)`; every failure mode
    /// (absent key, traversal through a leaf, terminal scope) yields `false`.
    pub fn resolve(&self, path: &str) -> bool {
        let mut node = self;
        for key in path.split('.') {
            match node {
                PermissionNode::Scope(children) => match children.get(key) {
                    Some(child) => node = child,
                    None => return false,
                },
                PermissionNode::Allow(_) => return false,
            }
        }
        matches!(node, PermissionNode::Allow(true))
    }

    /// Parse a strict document from JSON text.
    ///
    /// Strict means every leaf must be a JSON boolean; anything else is a
    /// [`DocumentError::Malformed`] rather than a silent coercion. Use
    /// [`PermissionNode::from_value`] for loosely-typed documents.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let node: PermissionNode = serde_json::from_str(json)?;
        if matches!(node, PermissionNode::Allow(_)) {
            return Err(DocumentError::NotAnObject);
        }
        Ok(node)
    }

    /// Convert a loosely-typed JSON value into a typed document.
    ///
    /// Lenient counterpart of [`PermissionNode::from_json_str`]: objects
    /// become scopes, booleans become leaves, and every other value
    /// (strings, numbers, null, arrays) becomes `Allow(false)`. This is the
    /// fail-closed reading of the documents the backend actually stores,
    /// where a stray `"true"` or `1` must not grant anything.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Bool(allow) => PermissionNode::Allow(*allow),
            Value::Object(map) => PermissionNode::Scope(
                map.iter()
                    .map(|(k, v)| (k.clone(), PermissionNode::from_value(v)))
                    .collect(),
            ),
            _ => PermissionNode::Allow(false),
        }
    }
}

impl Default for PermissionNode {
    fn default() -> Self {
        Self::empty()
    }
}

/// True iff `doc` resolves `path` to an explicit grant.
pub fn has_permission(doc: &PermissionNode, path: &str) -> bool {
    doc.resolve(path)
}

/// True iff at least one of `paths` is granted. Empty `paths` is `false`.
pub fn has_any_permission(doc: &PermissionNode, paths: &[&str]) -> bool {
    paths.iter().any(|path| doc.resolve(path))
}

/// True iff every one of `paths` is granted. Empty `paths` is `true`.
pub fn has_all_permissions(doc: &PermissionNode, paths: &[&str]) -> bool {
    paths.iter().all(|path| doc.resolve(path))
}
