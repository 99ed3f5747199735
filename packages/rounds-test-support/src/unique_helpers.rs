//! Helpers for generating unique test data.
//!
//! Conversation and participant identifiers are opaque strings in the
//! engine, so tests generate fresh ones per run to stay isolated from each
//! other regardless of execution order.

use uuid::Uuid;

/// Generate a unique string with the given prefix.
///
/// # Examples
/// ```
/// use rounds_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("conv");
/// let b = unique_str("conv");
/// assert_ne!(a, b);
/// assert!(a.starts_with("conv-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

/// Generate a unique participant identifier.
///
/// # Examples
/// ```
/// use rounds_test_support::unique_helpers::unique_participant;
///
/// let p = unique_participant("alice");
/// assert!(p.starts_with("alice-"));
/// ```
pub fn unique_participant(name: &str) -> String {
    format!("{}-{}", name, Uuid::new_v4())
}
