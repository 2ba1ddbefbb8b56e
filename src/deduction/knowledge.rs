use super::change::Change;
use super::status::CardStatus;
use crate::cards::Card;
use crate::cards::Hand;

/// One column of the detective's notebook: everything established about the
/// cards a single holder (a player or the envelope) has.
///
/// Every card of the universe is in exactly one of three places: `known`,
/// `ruled`, or still open. Pending sets record "holds at least one of these"
/// facts that have not been resolved yet; each has at least two open cards.
///
/// The store only ever mutates itself. Each mutation returns the list of
/// [`Change`]s it caused so the notebook can propagate them to other holders.
#[derive(Debug, Clone)]
pub struct Knowledge {
    name: String,
    capacity: usize,
    universe: Hand,
    known: Hand,
    ruled: Hand,
    pending: Vec<Hand>,
    solved: bool,
}

impl Knowledge {
    pub fn new(name: impl Into<String>, capacity: usize, universe: Hand) -> Self {
        Self {
            name: name.into(),
            capacity,
            universe,
            known: Hand::empty(),
            ruled: Hand::empty(),
            pending: Vec::new(),
            solved: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn known(&self) -> Hand {
        self.known
    }
    pub fn ruled(&self) -> Hand {
        self.ruled
    }
    pub fn pending(&self) -> &[Hand] {
        &self.pending
    }
    pub fn is_solved(&self) -> bool {
        self.solved
    }
    /// cards neither known nor ruled out
    pub fn open(&self) -> Hand {
        self.universe.minus(&self.known).minus(&self.ruled)
    }

    pub fn status(&self, card: Card) -> CardStatus {
        if self.known.contains(&card) {
            CardStatus::Known
        } else if self.ruled.contains(&card) {
            CardStatus::NotPossible
        } else if self.pending.iter().any(|set| set.contains(&card)) {
            CardStatus::Possible
        } else {
            CardStatus::Unknown
        }
    }

    /// The holder definitely has `card`.
    ///
    /// Satisfied pending sets are discarded. Filling the hand rules out every
    /// other card.
    pub fn mark_known(&mut self, card: Card) -> Vec<Change> {
        if self.known.contains(&card) {
            return Vec::new();
        }
        if self.ruled.contains(&card) {
            log::warn!("{}: refusing to hold ruled-out card {}", self.name, card);
            return Vec::new();
        }
        let mut changes = vec![Change::Gained(card)];
        self.known.add(card);
        self.pending.retain(|set| !set.contains(&card));
        self.fill(&mut changes);
        changes
    }

    /// The holder definitely does not have `card`. Known cards are never
    /// downgraded.
    pub fn mark_not_possible(&mut self, card: Card) -> Vec<Change> {
        if self.known.contains(&card) || self.ruled.contains(&card) {
            return Vec::new();
        }
        let mut changes = vec![Change::Ruled(card)];
        self.ruled.add(card);
        self.pending.iter_mut().for_each(|set| set.remove(card));
        self.settle(&mut changes);
        changes
    }

    /// The holder has at least one of `candidates`.
    pub fn consider(&mut self, candidates: Hand) -> Vec<Change> {
        if candidates.intersects(&self.known) {
            log::debug!("{}: already holds one of {}", self.name, candidates);
            return Vec::new();
        }
        let mut changes = Vec::new();
        let remaining = candidates.minus(&self.ruled);
        match remaining.size() {
            0 => log::warn!(
                "{}: empty ambiguous set, none of {} can be held",
                self.name,
                candidates
            ),
            1 => changes.extend(remaining.first().map(Change::Deduced)),
            _ => {
                if !self.pending.contains(&remaining) {
                    self.pending.push(remaining);
                }
            }
        }
        self.settle(&mut changes);
        changes
    }

    /// Complete the hand if every card is accounted for. Also covers a
    /// zero-capacity hand, which is complete before any move.
    pub fn fill(&mut self, changes: &mut Vec<Change>) {
        if self.solved || self.known.size() < self.capacity {
            return;
        }
        if !self.pending.is_empty() {
            log::warn!(
                "{}: hand is full but {} pending sets are unsatisfied",
                self.name,
                self.pending.len()
            );
            self.pending.clear();
        }
        for card in self.open() {
            self.ruled.add(card);
            changes.push(Change::Ruled(card));
        }
        self.solved = true;
        changes.push(Change::Solved);
    }

    /// Drop pending sets that no longer carry an open question: singletons
    /// become deductions, empties are contradictions, duplicates collapse.
    fn settle(&mut self, changes: &mut Vec<Change>) {
        let mut kept: Vec<Hand> = Vec::with_capacity(self.pending.len());
        for set in self.pending.drain(..) {
            match set.size() {
                0 => log::warn!("{}: pending set emptied out", self.name),
                1 => changes.extend(set.first().map(Change::Deduced)),
                _ if kept.contains(&set) => {}
                _ => kept.push(set),
            }
        }
        self.pending = kept;
    }
}
