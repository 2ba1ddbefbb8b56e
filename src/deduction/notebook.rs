use super::change::Change;
use super::holder::Holder;
use super::knowledge::Knowledge;
use super::report::Report;
use super::report::Summary;
use super::status::CardStatus;
use super::status::Mark;
use crate::cards::Card;
use crate::cards::Category;
use crate::cards::Hand;
use crate::cards::Registry;
use crate::cards::Suggestion;
use crate::setup::Setup;
use crate::Error;
use crate::ENVELOPE;
use std::collections::VecDeque;

/// A single fact waiting to be applied to one holder.
#[derive(Debug, Clone, Copy)]
enum Fact {
    Holds(Holder, Card),
    Lacks(Holder, Card),
    HoldsOneOf(Holder, Hand),
}

/// The deduction coordinator.
///
/// Owns the card registry and one [`Knowledge`] column per holder. It is the
/// only place a card is declared known globally, because that has to rule the
/// card out for everyone else. Every command runs a worklist of [`Fact`]s to a
/// fixpoint before returning, so callers never observe a half-propagated
/// notebook.
///
/// Cross-holder rules, applied as stores report their [`Change`]s:
/// - a gained card is ruled out for every other holder;
/// - a card ruled out for every player is in the envelope;
/// - the last unclaimed card of a category is in the envelope, unless the
///   envelope already holds one of that category;
/// - the envelope holds one card per category, so gaining one rules out the
///   rest of that category for it.
#[derive(Debug, Clone)]
pub struct Notebook {
    registry: Registry,
    players: Vec<Knowledge>,
    envelope: Knowledge,
}

impl Notebook {
    pub fn new(setup: &Setup) -> crate::Result<Self> {
        setup.validate()?;
        let registry = Registry::try_from(&setup.catalog)?;
        let universe = registry.all();
        let players = setup
            .seats
            .iter()
            .map(|seat| Knowledge::new(seat.name.as_str(), seat.cards, universe))
            .collect();
        let envelope = Knowledge::new("Solution", ENVELOPE, universe);
        let mut notebook = Self {
            registry,
            players,
            envelope,
        };
        notebook.fill();
        Ok(notebook)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(Knowledge::name).collect()
    }
    /// players in turn order, then the envelope
    pub fn holders(&self) -> impl Iterator<Item = Holder> + use<> {
        (0..self.players.len())
            .map(Holder::Player)
            .chain(std::iter::once(Holder::Envelope))
    }
    pub fn knowledge(&self, holder: Holder) -> crate::Result<&Knowledge> {
        match holder {
            Holder::Envelope => Ok(&self.envelope),
            Holder::Player(seat) => self.players.get(seat).ok_or(Error::UnknownSeat(seat)),
        }
    }
    pub fn label(&self, holder: Holder) -> &str {
        self.knowledge(holder).map(Knowledge::name).unwrap_or("?")
    }
    pub fn status(&self, holder: Holder, card: Card) -> crate::Result<CardStatus> {
        Ok(self.knowledge(holder)?.status(card))
    }
    /// who is confirmed to hold `card`, if anyone
    pub fn holder_of(&self, card: Card) -> Option<Holder> {
        self.holders().find(|h| self.entity(*h).known().contains(&card))
    }
    /// the envelope's card in each category, once deduced
    pub fn solution(&self) -> Vec<(Category, Option<Card>)> {
        Category::all()
            .iter()
            .map(|c| {
                let card = self
                    .envelope
                    .known()
                    .intersection(&self.registry.of(*c))
                    .first();
                (*c, card)
            })
            .collect()
    }
    pub fn is_solved(&self) -> bool {
        self.envelope.is_solved()
    }

    /// Every card of `category` as seen from `viewpoint`.
    pub fn marks(&self, viewpoint: Holder, category: Category) -> crate::Result<Vec<(Card, Mark)>> {
        let knowledge = self.knowledge(viewpoint)?;
        Ok(self
            .registry
            .of(category)
            .map(|card| {
                if knowledge.known().contains(&card) {
                    (card, Mark::Mine)
                } else if self.registry.is_known(card) {
                    (card, Mark::Elsewhere)
                } else {
                    (card, Mark::Unknown)
                }
            })
            .collect())
    }

    pub fn summary(&self, holder: Holder) -> crate::Result<Summary> {
        let k = self.knowledge(holder)?;
        Ok(Summary {
            holder,
            name: k.name().to_string(),
            capacity: k.capacity(),
            known: self.registry.describe(k.known()),
            ruled: self.registry.describe(k.ruled()),
            pending: k
                .pending()
                .iter()
                .map(|set| self.registry.describe(*set))
                .collect(),
            solved: k.is_solved(),
        })
    }

    pub fn report(&self) -> Report {
        Report {
            entities: self
                .holders()
                .filter_map(|h| self.summary(h).ok())
                .collect(),
        }
    }

    /// The operator was dealt `card`.
    pub fn apply_start_card(&mut self, card: Card) -> crate::Result<()> {
        self.apply_learned_card(card, Holder::OPERATOR)
    }

    /// `holder` is now known to have `card`.
    pub fn apply_learned_card(&mut self, card: Card, holder: Holder) -> crate::Result<()> {
        self.check_card(card)?;
        let k = self.knowledge(holder)?;
        if let Some(owner) = self.holder_of(card) {
            return Err(Error::AlreadyKnown {
                card: self.registry.name(card).to_string(),
                holder: self.label(owner).to_string(),
            });
        }
        if k.ruled().contains(&card) {
            return Err(Error::RuledOut {
                card: self.registry.name(card).to_string(),
                holder: k.name().to_string(),
            });
        }
        log::info!(
            "{} holds {}",
            self.label(holder),
            self.registry.name(card)
        );
        self.run([Fact::Holds(holder, card)]);
        Ok(())
    }

    /// Walk the table from the seat after `suggester` until `resolver`.
    ///
    /// Every seat passed could not disprove, so holds none of the three cards.
    /// The resolver holds at least one of them. No resolver, or a resolver
    /// equal to the suggester, means nobody could disprove: every other seat
    /// is passed and nothing is recorded for the suggester.
    pub fn apply_suggestion(
        &mut self,
        suggester: usize,
        suggestion: Suggestion,
        resolver: Option<usize>,
    ) -> crate::Result<()> {
        self.check_seat(suggester)?;
        if let Some(seat) = resolver {
            self.check_seat(seat)?;
        }
        let suggestion = Suggestion::new(
            &self.registry,
            suggestion.room(),
            suggestion.suspect(),
            suggestion.weapon(),
        )?;
        let resolver = resolver.filter(|r| *r != suggester);
        log::info!(
            "{} suggests {}, disproved by {}",
            self.label(Holder::Player(suggester)),
            suggestion.describe(&self.registry),
            resolver
                .map(|r| self.label(Holder::Player(r)))
                .unwrap_or("nobody")
        );
        let mut facts = Vec::new();
        let mut seat = self.after(suggester);
        while seat != suggester {
            if Some(seat) == resolver {
                facts.push(Fact::HoldsOneOf(Holder::Player(seat), Hand::from(suggestion)));
                break;
            }
            facts.extend(
                suggestion
                    .cards()
                    .map(|card| Fact::Lacks(Holder::Player(seat), card)),
            );
            seat = self.after(seat);
        }
        self.run(facts);
        Ok(())
    }

    fn after(&self, seat: usize) -> usize {
        (seat + 1) % self.players.len()
    }
    fn check_seat(&self, seat: usize) -> crate::Result<()> {
        self.knowledge(Holder::Player(seat)).map(|_| ())
    }
    fn check_card(&self, card: Card) -> crate::Result<()> {
        match card.index() < self.registry.len() {
            true => Ok(()),
            false => Err(Error::UnknownCard(card.to_string())),
        }
    }

    fn entity(&self, holder: Holder) -> &Knowledge {
        match holder {
            Holder::Envelope => &self.envelope,
            Holder::Player(seat) => &self.players[seat],
        }
    }
    fn entity_mut(&mut self, holder: Holder) -> &mut Knowledge {
        match holder {
            Holder::Envelope => &mut self.envelope,
            Holder::Player(seat) => &mut self.players[seat],
        }
    }

    /// deductions available before the first move: empty hands, and
    /// categories with a single card
    fn fill(&mut self) {
        let mut queue = VecDeque::new();
        for holder in self.holders() {
            let mut changes = Vec::new();
            self.entity_mut(holder).fill(&mut changes);
            for change in changes {
                self.react(holder, change, &mut queue);
            }
        }
        for category in Category::all() {
            self.check_if_last_card(*category, &mut queue);
        }
        self.drain(queue);
    }

    fn run(&mut self, facts: impl IntoIterator<Item = Fact>) {
        self.drain(facts.into_iter().collect());
    }

    /// Apply facts until nothing changes. Every step only strengthens a
    /// status, so the queue empties.
    fn drain(&mut self, mut queue: VecDeque<Fact>) {
        while let Some(fact) = queue.pop_front() {
            log::trace!("applying {:?}", fact);
            let (holder, changes) = match fact {
                Fact::Holds(holder, card) => match self.holder_of(card) {
                    Some(owner) if owner != holder => {
                        log::warn!(
                            "{} would hold {} but {} already does",
                            self.label(holder),
                            self.registry.name(card),
                            self.label(owner)
                        );
                        continue;
                    }
                    _ => (holder, self.entity_mut(holder).mark_known(card)),
                },
                Fact::Lacks(holder, card) => (holder, self.entity_mut(holder).mark_not_possible(card)),
                Fact::HoldsOneOf(holder, cards) => (holder, self.entity_mut(holder).consider(cards)),
            };
            for change in changes {
                self.react(holder, change, &mut queue);
            }
        }
    }

    fn react(&mut self, holder: Holder, change: Change, queue: &mut VecDeque<Fact>) {
        match change {
            Change::Gained(card) => self.gained(holder, card, queue),
            Change::Ruled(card) => {
                log::debug!(
                    "{} cannot hold {}",
                    self.label(holder),
                    self.registry.name(card)
                );
                self.check_if_unowned(card, queue);
            }
            Change::Deduced(card) => {
                log::debug!(
                    "{} must hold {}",
                    self.label(holder),
                    self.registry.name(card)
                );
                queue.push_back(Fact::Holds(holder, card));
            }
            Change::Solved => log::info!("{}: every card known", self.label(holder)),
        }
    }

    fn gained(&mut self, holder: Holder, card: Card, queue: &mut VecDeque<Fact>) {
        log::debug!("{} holds {}", self.label(holder), self.registry.name(card));
        self.registry.claim(card);
        queue.extend(
            self.holders()
                .filter(|h| *h != holder)
                .map(|h| Fact::Lacks(h, card)),
        );
        let category = self.registry.category(card);
        if holder.is_envelope() {
            log::info!("solution {}: {}", category, self.registry.name(card));
            let mut others = self.registry.of(category);
            others.remove(card);
            queue.extend(others.map(|c| Fact::Lacks(Holder::Envelope, c)));
        }
        self.check_if_last_card(category, queue);
    }

    /// Nobody at the table can hold `card`, so it is in the envelope.
    fn check_if_unowned(&self, card: Card, queue: &mut VecDeque<Fact>) {
        if self.registry.is_known(card) {
            return;
        }
        if !self.players.iter().all(|p| p.ruled().contains(&card)) {
            return;
        }
        match self.envelope.ruled().contains(&card) {
            true => log::warn!("nobody can hold {}", self.registry.name(card)),
            false => queue.push_back(Fact::Holds(Holder::Envelope, card)),
        }
    }

    /// Every other card of `category` has an owner, so the last one is in the
    /// envelope. Skipped once the envelope has its card for the category: the
    /// last one then belongs to some player.
    fn check_if_last_card(&self, category: Category, queue: &mut VecDeque<Fact>) {
        let cards = self.registry.of(category);
        if self.envelope.known().intersects(&cards) {
            return;
        }
        let unclaimed = self.registry.unclaimed(category);
        if unclaimed.size() == 1 {
            queue.extend(unclaimed.first().map(|c| Fact::Holds(Holder::Envelope, c)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;

    fn notebook() -> Notebook {
        let setup = Setup::dealt(Catalog::classic(), ["Ann", "Bob", "Cat"]).unwrap();
        Notebook::new(&setup).unwrap()
    }
    fn card(notebook: &Notebook, name: &str) -> Card {
        notebook.registry().find(name).unwrap()
    }
    fn suggestion(notebook: &Notebook, room: &str, suspect: &str, weapon: &str) -> Suggestion {
        Suggestion::new(
            notebook.registry(),
            card(notebook, room),
            card(notebook, suspect),
            card(notebook, weapon),
        )
        .unwrap()
    }
    fn status(notebook: &Notebook, holder: Holder, name: &str) -> CardStatus {
        notebook.status(holder, card(notebook, name)).unwrap()
    }

    const HAND: [&str; 6] = [
        "Professor Plum",
        "Knife",
        "Hall",
        "Colonel Mustard",
        "Candlestick",
        "Conservatory",
    ];

    #[test]
    fn opening_hand_is_ruled_out_for_everyone_else() {
        let mut nb = notebook();
        for name in HAND {
            nb.apply_start_card(card(&nb, name)).unwrap();
        }
        for name in HAND {
            assert_eq!(status(&nb, Holder::Player(0), name), CardStatus::Known);
            assert_eq!(status(&nb, Holder::Player(1), name), CardStatus::NotPossible);
            assert_eq!(status(&nb, Holder::Player(2), name), CardStatus::NotPossible);
            assert_eq!(status(&nb, Holder::Envelope, name), CardStatus::NotPossible);
        }
        let operator = nb.knowledge(Holder::OPERATOR).unwrap();
        assert!(operator.is_solved());
        assert_eq!(operator.ruled().size(), 15);
        assert!(nb.knowledge(Holder::Envelope).unwrap().known().is_empty());
    }

    #[test]
    fn passed_seats_lack_and_resolver_holds_one() {
        let mut nb = notebook();
        let before = nb.report();
        let s = suggestion(&nb, "Study", "Mr. Green", "Rope");
        nb.apply_suggestion(0, s, Some(2)).unwrap();
        for name in ["Study", "Mr. Green", "Rope"] {
            assert_eq!(status(&nb, Holder::Player(1), name), CardStatus::NotPossible);
            assert_eq!(status(&nb, Holder::Player(2), name), CardStatus::Possible);
        }
        let after = nb.report();
        assert_eq!(
            after.entities[2].pending,
            vec![vec![
                "Mr. Green".to_string(),
                "Rope".to_string(),
                "Study".to_string()
            ]]
        );
        assert_eq!(before.entities[0], after.entities[0]);
        assert_eq!(before.entities[3], after.entities[3]);
    }

    #[test]
    fn learning_a_card_collapses_the_pending_set() {
        let mut nb = notebook();
        let s = suggestion(&nb, "Study", "Mr. Green", "Rope");
        nb.apply_suggestion(0, s, Some(2)).unwrap();
        nb.apply_learned_card(card(&nb, "Mr. Green"), Holder::Player(2))
            .unwrap();
        let cat = nb.knowledge(Holder::Player(2)).unwrap();
        assert!(cat.pending().is_empty());
        assert_eq!(status(&nb, Holder::Player(2), "Mr. Green"), CardStatus::Known);
        assert_eq!(status(&nb, Holder::Player(2), "Study"), CardStatus::Unknown);
        assert_eq!(status(&nb, Holder::Player(2), "Rope"), CardStatus::Unknown);
        assert_eq!(status(&nb, Holder::Player(0), "Mr. Green"), CardStatus::NotPossible);
    }

    #[test]
    fn last_unclaimed_suspect_is_the_solution() {
        let mut nb = notebook();
        let owners = [
            ("Professor Plum", 1),
            ("Colonel Mustard", 1),
            ("Miss Scarlet", 2),
            ("Ms. White", 2),
            ("Mrs. Peacock", 0),
        ];
        for (name, seat) in owners {
            assert_eq!(nb.solution()[0], (Category::Suspect, None));
            nb.apply_learned_card(card(&nb, name), Holder::Player(seat))
                .unwrap();
        }
        let green = card(&nb, "Mr. Green");
        assert_eq!(nb.solution()[0], (Category::Suspect, Some(green)));
        assert_eq!(nb.holder_of(green), Some(Holder::Envelope));
        for seat in 0..3 {
            assert_eq!(status(&nb, Holder::Player(seat), "Mr. Green"), CardStatus::NotPossible);
        }
        for (name, _) in owners {
            assert_eq!(status(&nb, Holder::Envelope, name), CardStatus::NotPossible);
        }
        assert_eq!(nb.solution()[1], (Category::Weapon, None));
    }

    #[test]
    fn last_card_rule_waits_for_an_empty_envelope_slot() {
        let mut nb = notebook();
        nb.apply_learned_card(card(&nb, "Mr. Green"), Holder::Envelope)
            .unwrap();
        for (name, seat) in [
            ("Professor Plum", 1),
            ("Colonel Mustard", 1),
            ("Miss Scarlet", 2),
            ("Ms. White", 2),
        ] {
            nb.apply_learned_card(card(&nb, name), Holder::Player(seat))
                .unwrap();
        }
        let peacock = card(&nb, "Mrs. Peacock");
        assert_eq!(nb.holder_of(peacock), None);
        assert_eq!(status(&nb, Holder::Envelope, "Mrs. Peacock"), CardStatus::NotPossible);
    }

    #[test]
    fn envelope_holds_one_card_per_category() {
        let mut nb = notebook();
        nb.apply_learned_card(card(&nb, "Lounge"), Holder::Envelope)
            .unwrap();
        let envelope = nb.knowledge(Holder::Envelope).unwrap();
        let rooms = nb.registry().of(Category::Room);
        assert_eq!(envelope.known().intersection(&rooms).size(), 1);
        assert_eq!(envelope.ruled().intersection(&rooms).size(), 8);
        assert!(matches!(
            nb.apply_learned_card(card(&nb, "Study"), Holder::Envelope),
            Err(Error::RuledOut { .. })
        ));
    }

    #[test]
    fn nobody_disproving_rules_out_the_other_seats_only() {
        let mut nb = notebook();
        let before = nb.report();
        let s = suggestion(&nb, "Hall", "Professor Plum", "Knife");
        nb.apply_suggestion(1, s, None).unwrap();
        let after = nb.report();
        assert_ne!(before, after);
        assert_eq!(before.entities[1], after.entities[1]);
        assert_eq!(before.entities[3], after.entities[3]);
        for seat in [0, 2] {
            for name in ["Hall", "Professor Plum", "Knife"] {
                assert_eq!(status(&nb, Holder::Player(seat), name), CardStatus::NotPossible);
            }
        }
        let mut same = notebook();
        same.apply_suggestion(1, s, Some(1)).unwrap();
        assert_eq!(same.report(), after);
    }

    #[test]
    fn resolver_already_holding_a_card_learns_nothing() {
        let mut nb = notebook();
        nb.apply_learned_card(card(&nb, "Rope"), Holder::Player(2))
            .unwrap();
        let before = nb.report();
        let s = suggestion(&nb, "Study", "Mr. Green", "Rope");
        nb.apply_suggestion(1, s, Some(2)).unwrap();
        assert_eq!(before.entities[2], nb.report().entities[2]);
    }

    #[test]
    fn unanswered_suggestion_plus_full_hand_solves_the_case() {
        let mut nb = notebook();
        let s = suggestion(&nb, "Lounge", "Mrs. Peacock", "Wrench");
        nb.apply_suggestion(0, s, None).unwrap();
        assert!(!nb.is_solved());
        for name in HAND {
            nb.apply_start_card(card(&nb, name)).unwrap();
        }
        assert!(nb.is_solved());
        assert_eq!(
            nb.solution(),
            vec![
                (Category::Suspect, Some(card(&nb, "Mrs. Peacock"))),
                (Category::Weapon, Some(card(&nb, "Wrench"))),
                (Category::Room, Some(card(&nb, "Lounge"))),
            ]
        );
        let envelope = nb.knowledge(Holder::Envelope).unwrap();
        assert_eq!(envelope.ruled().size(), 18);
    }

    #[test]
    fn ruling_out_resolves_a_pending_set_across_holders() {
        let mut nb = notebook();
        let first = suggestion(&nb, "Study", "Mr. Green", "Rope");
        nb.apply_suggestion(1, first, Some(2)).unwrap();
        nb.apply_learned_card(card(&nb, "Study"), Holder::Player(0))
            .unwrap();
        assert_eq!(status(&nb, Holder::Player(2), "Rope"), CardStatus::Possible);
        nb.apply_learned_card(card(&nb, "Mr. Green"), Holder::Player(1))
            .unwrap();
        assert_eq!(status(&nb, Holder::Player(2), "Rope"), CardStatus::Known);
        assert_eq!(status(&nb, Holder::Envelope, "Rope"), CardStatus::NotPossible);
        assert!(nb.knowledge(Holder::Player(2)).unwrap().pending().is_empty());
    }

    #[test]
    fn duplicate_claims_are_rejected() {
        let mut nb = notebook();
        let rope = card(&nb, "Rope");
        nb.apply_start_card(rope).unwrap();
        assert!(matches!(
            nb.apply_start_card(rope),
            Err(Error::AlreadyKnown { .. })
        ));
        assert!(matches!(
            nb.apply_learned_card(rope, Holder::Player(1)),
            Err(Error::AlreadyKnown { .. })
        ));
        assert!(matches!(
            nb.apply_learned_card(card(&nb, "Knife"), Holder::Player(7)),
            Err(Error::UnknownSeat(7))
        ));
    }

    #[test]
    fn marks_from_a_viewpoint() {
        let mut nb = notebook();
        nb.apply_start_card(card(&nb, "Knife")).unwrap();
        nb.apply_learned_card(card(&nb, "Rope"), Holder::Player(1))
            .unwrap();
        let marks = nb.marks(Holder::OPERATOR, Category::Weapon).unwrap();
        assert_eq!(marks.len(), 6);
        assert!(marks.contains(&(card(&nb, "Knife"), Mark::Mine)));
        assert!(marks.contains(&(card(&nb, "Rope"), Mark::Elsewhere)));
        assert!(marks.contains(&(card(&nb, "Wrench"), Mark::Unknown)));
    }

    #[test]
    fn single_card_category_starts_solved() {
        let catalog = Catalog {
            suspects: vec!["Only".to_string()],
            weapons: vec!["W1".to_string(), "W2".to_string()],
            rooms: vec!["R1".to_string(), "R2".to_string(), "R3".to_string()],
        };
        let setup = Setup::dealt(catalog, ["A", "B", "C"]).unwrap();
        let nb = Notebook::new(&setup).unwrap();
        assert_eq!(nb.solution()[0].1, Some(card(&nb, "Only")));
    }
}
