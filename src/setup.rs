use crate::cards::Catalog;
use crate::cards::Registry;
use crate::Error;
use crate::ENVELOPE;
use serde::Deserialize;
use serde::Serialize;

/// One player at the table, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub name: String,
    pub cards: usize,
}

impl Seat {
    pub fn new(name: impl Into<String>, cards: usize) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }
}

/// Everything a notebook needs before the first move: the card catalog and
/// the seats in turn order (seat 0 is the operator).
///
/// Hand capacities must account for every card outside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    pub catalog: Catalog,
    pub seats: Vec<Seat>,
}

impl Setup {
    pub fn new(catalog: Catalog, seats: Vec<Seat>) -> crate::Result<Self> {
        let setup = Self { catalog, seats };
        setup.validate()?;
        Ok(setup)
    }

    /// Deal the catalog round the table: everyone gets the same share and the
    /// remainder goes one apiece to the earliest seats.
    pub fn dealt<S: Into<String>>(
        catalog: Catalog,
        names: impl IntoIterator<Item = S>,
    ) -> crate::Result<Self> {
        let names = names.into_iter().map(Into::into).collect::<Vec<String>>();
        let (base, extra) = Self::hand_sizes(catalog.len(), names.len())?;
        let seats = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Seat::new(name, base + usize::from(i < extra)))
            .collect();
        Self::new(catalog, seats)
    }

    /// Minimum hand size, and how many players hold one card more.
    pub fn hand_sizes(total: usize, players: usize) -> crate::Result<(usize, usize)> {
        if players == 0 {
            return Err(Error::Setup("no players".to_string()));
        }
        let dealt = total
            .checked_sub(ENVELOPE)
            .ok_or_else(|| Error::Setup(format!("{} cards cannot fill the envelope", total)))?;
        Ok((dealt / players, dealt % players))
    }

    pub fn validate(&self) -> crate::Result<()> {
        Registry::try_from(&self.catalog)?;
        if self.seats.is_empty() {
            return Err(Error::Setup("no players".to_string()));
        }
        let held = self.seats.iter().map(|s| s.cards).sum::<usize>();
        if held + ENVELOPE != self.catalog.len() {
            return Err(Error::Setup(format!(
                "hands hold {} cards but {} are dealt",
                held,
                self.catalog.len() - ENVELOPE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hand_sizes_match_the_board() {
        assert_eq!(Setup::hand_sizes(21, 3).unwrap(), (6, 0));
        assert_eq!(Setup::hand_sizes(21, 4).unwrap(), (4, 2));
        assert_eq!(Setup::hand_sizes(21, 5).unwrap(), (3, 3));
        assert_eq!(Setup::hand_sizes(21, 6).unwrap(), (3, 0));
        assert!(Setup::hand_sizes(2, 3).is_err());
    }

    #[test]
    fn dealt_gives_extras_to_early_seats() {
        let setup = Setup::dealt(Catalog::classic(), ["A", "B", "C", "D"]).unwrap();
        let cards = setup.seats.iter().map(|s| s.cards).collect::<Vec<_>>();
        assert_eq!(cards, vec![5, 5, 4, 4]);
    }

    #[test]
    fn capacities_must_add_up() {
        let seats = vec![Seat::new("A", 6), Seat::new("B", 6), Seat::new("C", 5)];
        assert!(matches!(
            Setup::new(Catalog::classic(), seats),
            Err(Error::Setup(_))
        ));
    }
}
