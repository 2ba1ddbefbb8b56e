use crate::cards::Card;

/// What a knowledge store reports back after mutating itself.
///
/// Stores never touch each other. The notebook turns these into cross-holder
/// consequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// the card moved into the known set
    Gained(Card),
    /// the card moved into the ruled-out set
    Ruled(Card),
    /// a pending set collapsed to this one card, which must therefore be held
    Deduced(Card),
    /// every card in the hand is now known
    Solved,
}
