/// A card is its position in the [`Registry`](super::Registry).
///
/// Positions are in bijection with (category, description) pairs, so equality
/// and hashing by position is equality by identity. The position doubles as the
/// bit index inside a [`Hand`](super::Hand), which caps a registry at 64 cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(u8);

impl Card {
    pub const MAX: usize = 64;
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// u8 isomorphism
/// registry position
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < Self::MAX);
        Self(n)
    }
}
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// u64 isomorphism
/// each card is just one bit turned on
/// Candlestick (position 7)
/// xxxxxxxx 0000000000000000000000000000000000000000000000000000000010000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}
impl From<u64> for Card {
    fn from(n: u64) -> Self {
        assert!(n.count_ones() == 1);
        Self(n.trailing_zeros() as u8)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "#{}", self.0)
    }
}

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_per_card() {
        let card = Card::from(7u8);
        assert_eq!(u64::from(card), 0b1000_0000);
        assert_eq!(card, Card::from(u64::from(card)));
    }
}
