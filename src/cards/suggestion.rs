use super::card::Card;
use super::category::Category;
use super::hand::Hand;
use super::registry::Registry;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;

/// A proposed (room, suspect, weapon) triple. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    room: Card,
    suspect: Card,
    weapon: Card,
}

impl Suggestion {
    /// checks each card sits in the slot its category demands
    pub fn new(registry: &Registry, room: Card, suspect: Card, weapon: Card) -> crate::Result<Self> {
        for (card, expected) in [
            (room, Category::Room),
            (suspect, Category::Suspect),
            (weapon, Category::Weapon),
        ] {
            if card.index() >= registry.len() {
                return Err(Error::UnknownCard(card.to_string()));
            }
            if registry.category(card) != expected {
                return Err(Error::Category {
                    card: registry.name(card).to_string(),
                    expected,
                });
            }
        }
        Ok(Self {
            room,
            suspect,
            weapon,
        })
    }

    pub fn room(&self) -> Card {
        self.room
    }
    pub fn suspect(&self) -> Card {
        self.suspect
    }
    pub fn weapon(&self) -> Card {
        self.weapon
    }
    pub fn cards(&self) -> [Card; 3] {
        [self.room, self.suspect, self.weapon]
    }

    pub fn describe(&self, registry: &Registry) -> String {
        format!(
            "{} and {} and {}",
            registry.name(self.room),
            registry.name(self.suspect),
            registry.name(self.weapon)
        )
    }
}

impl From<Suggestion> for Hand {
    fn from(s: Suggestion) -> Self {
        Hand::from(&s.cards()[..])
    }
}
