use super::ledger::Ledger;
use super::moves::Move;
use crate::setup::Setup;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// A saved session: the setup plus every committed move. Loading replays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub setup: Setup,
    pub moves: Vec<Move>,
}

impl Transcript {
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }
    pub fn save(&self, path: impl AsRef<Path>) -> crate::Result<()> {
        let file = std::fs::File::create(path)?;
        Ok(serde_json::to_writer_pretty(file, self)?)
    }
}

impl From<&Ledger> for Transcript {
    fn from(ledger: &Ledger) -> Self {
        Self {
            setup: ledger.setup().clone(),
            moves: ledger.moves().to_vec(),
        }
    }
}

impl TryFrom<Transcript> for Ledger {
    type Error = crate::Error;
    fn try_from(transcript: Transcript) -> Result<Self, Self::Error> {
        Ledger::replay(transcript.setup, transcript.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Catalog;
    use crate::deduction::Holder;

    #[test]
    fn json_roundtrip_replays_the_session() {
        let setup = Setup::dealt(Catalog::classic(), ["Ann", "Bob", "Cat", "Dan"]).unwrap();
        let mut ledger = Ledger::new(setup).unwrap();
        let registry = ledger.notebook().registry().clone();
        ledger
            .record(Move::StartCard(registry.find("Rope").unwrap()))
            .unwrap();
        ledger
            .record(Move::LearnedCard {
                card: registry.find("Study").unwrap(),
                holder: Holder::Player(3),
            })
            .unwrap();
        let json = serde_json::to_string(&Transcript::from(&ledger)).unwrap();
        let loaded = Ledger::try_from(serde_json::from_str::<Transcript>(&json).unwrap()).unwrap();
        assert_eq!(loaded.moves(), ledger.moves());
        assert_eq!(loaded.notebook().report(), ledger.notebook().report());
    }

    #[test]
    fn undo_entries_in_a_transcript_are_applied() {
        let setup = Setup::dealt(Catalog::classic(), ["Ann", "Bob", "Cat"]).unwrap();
        let rope = Ledger::new(setup.clone())
            .unwrap()
            .notebook()
            .registry()
            .find("Rope")
            .unwrap();
        let transcript = Transcript {
            setup,
            moves: vec![Move::StartCard(rope), Move::Undo(0)],
        };
        let ledger = Ledger::try_from(transcript).unwrap();
        assert!(ledger.moves().is_empty());
    }
}
