//! Unique player identities for tests that share one session registry.

use ulid::Ulid;

/// `{prefix}-{ulid}`; distinct on every call.
///
/// ```
/// use backend_test_support::unique_helpers::unique_player;
///
/// let a = unique_player("white");
/// let b = unique_player("white");
/// assert_ne!(a, b);
/// assert!(a.starts_with("white-"));
/// ```
pub fn unique_player(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A pair of distinct identities for the two seats.
pub fn unique_pair() -> (String, String) {
    (unique_player("white"), unique_player("black"))
}
