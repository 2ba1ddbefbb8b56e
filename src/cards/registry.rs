use super::card::Card;
use super::catalog::Catalog;
use super::category::Category;
use super::hand::Hand;
use crate::Error;

/// Registry is the immutable catalog of every card in play, plus the one
/// mutable per-card datum: whether some holder is confirmed to have it.
///
/// A registry is constructed per notebook and owned by it. Rebuilding a
/// notebook (undo) starts from a fresh registry with every bit clear.
#[derive(Debug, Clone)]
pub struct Registry {
    names: Vec<String>,
    categories: Vec<Category>,
    known: Hand,
}

impl Registry {
    pub fn len(&self) -> usize {
        self.names.len()
    }
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
    pub fn all(&self) -> Hand {
        Hand::full(self.len())
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> {
        (0..self.len() as u8).map(Card::from)
    }

    pub fn name(&self, card: Card) -> &str {
        &self.names[card.index()]
    }
    pub fn category(&self, card: Card) -> Category {
        self.categories[card.index()]
    }
    /// every card of one category
    pub fn of(&self, category: Category) -> Hand {
        self.cards()
            .filter(|c| self.category(*c) == category)
            .collect()
    }
    /// the `n`th card of one category, in catalog order
    pub fn nth(&self, category: Category, n: usize) -> Option<Card> {
        self.of(category).nth(n)
    }
    /// case-insensitive lookup by description
    pub fn find(&self, name: &str) -> crate::Result<Card> {
        self.names
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name.trim()))
            .map(|i| Card::from(i as u8))
            .ok_or_else(|| Error::UnknownCard(name.to_string()))
    }

    pub fn is_known(&self, card: Card) -> bool {
        self.known.contains(&card)
    }
    pub fn known(&self) -> Hand {
        self.known
    }
    /// cards of `category` nobody is confirmed to hold yet
    pub fn unclaimed(&self, category: Category) -> Hand {
        self.of(category).minus(&self.known)
    }
    /// set the global bit. returns false if it was already set
    pub(crate) fn claim(&mut self, card: Card) -> bool {
        match self.is_known(card) {
            true => false,
            false => {
                self.known.add(card);
                true
            }
        }
    }

    /// render a set of cards by description
    pub fn describe(&self, hand: Hand) -> Vec<String> {
        hand.map(|c| self.name(c).to_string()).collect()
    }
}

impl TryFrom<&Catalog> for Registry {
    type Error = Error;
    fn try_from(catalog: &Catalog) -> Result<Self, Self::Error> {
        if catalog.len() > Card::MAX {
            return Err(Error::Setup(format!(
                "{} cards exceed the limit of {}",
                catalog.len(),
                Card::MAX
            )));
        }
        if let Some(c) = Category::all()
            .iter()
            .find(|c| catalog.names(**c).is_empty())
        {
            return Err(Error::Setup(format!("no {} in catalog", c.plural())));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some((_, name)) = catalog
            .entries()
            .find(|(_, n)| !seen.insert(n.to_lowercase()))
        {
            return Err(Error::Setup(format!("duplicate card {}", name)));
        }
        Ok(Self {
            names: catalog.entries().map(|(_, n)| n.to_string()).collect(),
            categories: catalog.entries().map(|(c, _)| c).collect(),
            known: Hand::empty(),
        })
    }
}
