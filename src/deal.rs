use crate::cards::Card;
use crate::cards::Category;
use crate::cards::Catalog;
use crate::cards::Hand;
use crate::cards::Registry;
use crate::cards::Suggestion;
use crate::deduction::Holder;
use crate::ledger::Ledger;
use crate::ledger::Move;
use crate::setup::Setup;
use crate::Arbitrary;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use rand::Rng;
use rand::seq::SliceRandom;

/// The truth behind a game: who really holds every card.
///
/// Generates only truthful moves, so it can drive a notebook through a whole
/// game and every deduction can be checked against the real hands.
#[derive(Debug, Clone)]
pub struct Deal {
    setup: Setup,
    registry: Registry,
    owners: Vec<Holder>,
}

impl Deal {
    /// Pick one card per category for the envelope, shuffle the rest round the
    /// table according to each seat's hand size.
    pub fn new<R: Rng>(setup: Setup, rng: &mut R) -> crate::Result<Self> {
        setup.validate()?;
        let registry = Registry::try_from(&setup.catalog)?;
        let mut owners = vec![Holder::Envelope; registry.len()];
        let mut deck = Vec::with_capacity(registry.len());
        for category in Category::all() {
            let mut cards = Vec::<Card>::from(registry.of(*category));
            cards.shuffle(rng);
            deck.extend(cards.into_iter().skip(1));
        }
        deck.shuffle(rng);
        let mut deck = deck.into_iter();
        for (seat, s) in setup.seats.iter().enumerate() {
            for card in deck.by_ref().take(s.cards) {
                owners[card.index()] = Holder::Player(seat);
            }
        }
        Ok(Self {
            setup,
            registry,
            owners,
        })
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
    pub fn owner(&self, card: Card) -> Holder {
        self.owners[card.index()]
    }
    pub fn hand(&self, holder: Holder) -> Hand {
        self.registry
            .cards()
            .filter(|c| self.owner(*c) == holder)
            .collect()
    }
    pub fn solution(&self) -> Hand {
        self.hand(Holder::Envelope)
    }

    /// the operator's opening hand
    pub fn opening(&self) -> Vec<Move> {
        self.hand(Holder::OPERATOR).map(Move::StartCard).collect()
    }

    /// A random suggestion, resolved by the first seat after the suggester
    /// that holds one of the three cards.
    pub fn suggest<R: Rng>(&self, rng: &mut R) -> Move {
        let seats = self.setup.seats.len();
        let suggester = rng.random_range(0..seats);
        let pick = |category: Category, rng: &mut R| {
            let cards = Vec::<Card>::from(self.registry.of(category));
            cards[rng.random_range(0..cards.len())]
        };
        let room = pick(Category::Room, rng);
        let suspect = pick(Category::Suspect, rng);
        let weapon = pick(Category::Weapon, rng);
        let suggestion = Suggestion::new(&self.registry, room, suspect, weapon)
            .expect("categories picked per slot");
        let cards = Hand::from(suggestion);
        let resolver = (1..seats)
            .map(|i| (suggester + i) % seats)
            .find(|seat| self.hand(Holder::Player(*seat)).intersects(&cards));
        Move::Suggestion {
            suggester,
            suggestion,
            resolver,
        }
    }

    /// A random player shows one of their cards.
    pub fn reveal<R: Rng>(&self, rng: &mut R) -> Option<Move> {
        let seat = rng.random_range(0..self.setup.seats.len());
        let hand = Vec::<Card>::from(self.hand(Holder::Player(seat)));
        match hand.len() {
            0 => None,
            n => Some(Move::LearnedCard {
                card: hand[rng.random_range(0..n)],
                holder: Holder::Player(seat),
            }),
        }
    }

    /// The opening hand followed by up to `n` random events, mostly
    /// suggestions. Reveals of cards the notebook already places are dropped,
    /// so the whole list replays without rejection.
    pub fn moves<R: Rng>(&self, rng: &mut R, n: usize) -> crate::Result<Vec<Move>> {
        let mut ledger = Ledger::replay(self.setup.clone(), self.opening())?;
        for _ in 0..n {
            let mv = match rng.random_range(0..4) {
                0 => match self.reveal(rng) {
                    Some(Move::LearnedCard { card, .. })
                        if ledger.notebook().registry().is_known(card) =>
                    {
                        continue;
                    }
                    Some(mv) => mv,
                    None => continue,
                },
                _ => self.suggest(rng),
            };
            ledger.record(mv)?;
        }
        Ok(ledger.moves().to_vec())
    }
}

/// A classic board with a random table size, dealt at random.
impl Arbitrary for Setup {
    fn random() -> Self {
        let players = rand::rng().random_range(MIN_PLAYERS..=MAX_PLAYERS);
        let names = (1..=players).map(|i| format!("P{}", i));
        Setup::dealt(Catalog::classic(), names).expect("classic board deals to any table")
    }
}
impl Arbitrary for Deal {
    fn random() -> Self {
        Deal::new(Setup::random(), &mut rand::rng()).expect("dealt setups are valid")
    }
}
