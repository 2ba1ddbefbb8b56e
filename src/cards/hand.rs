use super::card::Card;

/// Hand represents an unordered set of Cards, one bit per registry position.
/// It is used for everything set-shaped in a notebook: the cards a player is
/// known to hold, the cards ruled out for them, and every pending "holds one
/// of these" clause. Iteration always comes out in registry order, which keeps
/// reports deterministic.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    /// the first `n` registry positions
    pub fn full(n: usize) -> Self {
        assert!(n <= Card::MAX);
        match n {
            Card::MAX => Self(u64::MAX),
            n => Self((1 << n) - 1),
        }
    }

    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }

    pub fn add(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0 & other.0)
    }
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// the lowest card, if any
    pub fn first(&self) -> Option<Card> {
        match self.0 {
            0 => None,
            n => Some(Card::from(n & n.wrapping_neg())),
        }
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        let card = self.first()?;
        self.remove(card);
        Some(card)
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n)
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        cards.iter().copied().collect()
    }
}
impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", cards.join(" "))
    }
}
