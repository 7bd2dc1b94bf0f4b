//! # Learngate Testkit
//!
//! Testing utilities for the learngate engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: named access decisions with expected verdicts,
//!   exercised against the real policy functions
//! - **Generators**: proptest strategies for role sets, levels, permission
//!   trees, and dot paths
//! - **Fixtures**: per-archetype subjects (admin, teacher, moderator,
//!   student) with realistic permission documents
//!
//! ## Golden Vectors
//!
//! ```rust
//! use learngate_testkit::vectors::{all_vectors, evaluate_vector};
//!
//! for vector in all_vectors() {
//!     assert_eq!(evaluate_vector(&vector), vector.expected, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use learngate_testkit::generators::{dot_path, permission_node};
//!
//! proptest! {
//!     #[test]
//!     fn resolution_is_deterministic(doc in permission_node(), path in dot_path()) {
//!         prop_assert_eq!(doc.resolve(&path), doc.resolve(&path));
//!     }
//! }
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use learngate_testkit::fixtures::SubjectFixture;
//!
//! let teacher = SubjectFixture::teacher();
//! assert!(teacher.condition().can_view_analytics());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::SubjectFixture;
pub use generators::{dot_path, permission_node, role_level, role_set};
pub use vectors::{all_vectors, evaluate_vector, verify_all_vectors, DecisionVector, PolicyCheck};
