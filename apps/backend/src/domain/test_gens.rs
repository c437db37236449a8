// Proptest generators for session-level domain types.

use proptest::prelude::*;

use crate::domain::{PlayerId, Square};

/// Generate a short alphanumeric player identity
pub fn player_id() -> impl Strategy<Value = PlayerId> {
    "[a-z][a-z0-9]{0,11}".prop_map(PlayerId::from)
}

/// Generate two distinct player identities
pub fn player_pair() -> impl Strategy<Value = (PlayerId, PlayerId)> {
    (player_id(), player_id()).prop_filter("identities must differ", |(a, b)| a != b)
}

/// Generate any square on the board
pub fn square() -> impl Strategy<Value = Square> {
    (0u8..8, 0u8..8).prop_filter_map("on board", |(f, r)| Square::new(f, r))
}

/// Generate a sequence of move picks; each pick is reduced modulo the number
/// of legal moves at the time it is used.
pub fn move_picks(max_len: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(any::<usize>(), 0..=max_len)
}
