use std::fmt::Debug;
use std::hash::Hash;

/// A game position. Hashable so agents can key caches by position identity.
pub trait GameState: Hash + Clone + Debug {
    /// The position at the start of a game, before any move has been made.
    fn initial() -> Self;
}
