//! Join codes for sessions.
//!
//! Join codes are 10-character strings over Crockford's Base32 alphabet and
//! serve as the key a second player uses to find a session.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

pub const JOIN_CODE_LEN: usize = 10;

/// Generate a random join code.
///
/// Uniqueness is not guaranteed here; the session registry checks for
/// collisions before handing a code out.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..JOIN_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}

/// Normalize user-typed input: trim, uppercase, and map the ambiguous
/// letters `I`/`L` to `1` and `O` to `0`.
pub fn normalize_join_code(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'I' | 'L' => '1',
            'O' => '0',
            other => other,
        })
        .collect()
}
