//! Boolean combinators.
//!
//! Two-valued logic gates used to assemble policy formulas. All functions
//! here operate on already-evaluated booleans: there is no laziness and no
//! short-circuiting, so callers must not rely on a right-hand side being
//! skipped for its side effects.

/// Logical conjunction.
pub const fn and(a: bool, b: bool) -> bool {
    a & b
}

/// Logical disjunction.
pub const fn or(a: bool, b: bool) -> bool {
    a | b
}

/// Logical negation.
pub const fn not(a: bool) -> bool {
    !a
}

/// Exclusive or: true iff exactly one input is true.
pub const fn xor(a: bool, b: bool) -> bool {
    a ^ b
}

/// Negated conjunction.
pub const fn nand(a: bool, b: bool) -> bool {
    !(a & b)
}

/// Negated disjunction.
pub const fn nor(a: bool, b: bool) -> bool {
    !(a | b)
}

/// Equivalence: true iff both inputs agree.
pub const fn xnor(a: bool, b: bool) -> bool {
    !(a ^ b)
}

/// Variadic conjunction. The empty sequence is `true`.
pub fn all(values: &[bool]) -> bool {
    values.iter().all(|&v| v)
}

/// Variadic disjunction. The empty sequence is `false`.
pub fn any(values: &[bool]) -> bool {
    values.iter().any(|&v| v)
}
