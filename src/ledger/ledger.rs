use super::moves::Move;
use crate::deduction::Notebook;
use crate::setup::Setup;
use crate::Error;

/// The move log: every committed move in order, and the notebook they built.
///
/// Cascades touch arbitrarily many holders, so nothing is undone in place.
/// Undo drops the move and replays the rest into a fresh notebook.
#[derive(Debug, Clone)]
pub struct Ledger {
    setup: Setup,
    moves: Vec<Move>,
    notebook: Notebook,
}

impl Ledger {
    pub fn new(setup: Setup) -> crate::Result<Self> {
        let notebook = Notebook::new(&setup)?;
        Ok(Self {
            setup,
            moves: Vec::new(),
            notebook,
        })
    }

    pub fn setup(&self) -> &Setup {
        &self.setup
    }
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Apply a move and commit it. Rejected moves are not committed.
    pub fn record(&mut self, mv: Move) -> crate::Result<()> {
        let applied = match mv {
            Move::Undo(index) => return self.undo(index).map(drop),
            Move::StartCard(card) => self.notebook.apply_start_card(card),
            Move::LearnedCard { card, holder } => self.notebook.apply_learned_card(card, holder),
            Move::Suggestion {
                suggester,
                suggestion,
                resolver,
            } => self
                .notebook
                .apply_suggestion(suggester, suggestion, resolver),
        };
        match applied {
            Ok(()) => {
                log::debug!("committed move {}: {}", self.moves.len() + 1, mv.describe(&self.notebook));
                self.moves.push(mv);
                Ok(())
            }
            Err(e) => {
                log::debug!("rejected {:?}: {}", mv, e);
                Err(e)
            }
        }
    }

    /// Remove the committed move at `index` and rebuild from scratch.
    /// On failure the ledger is left as it was.
    pub fn undo(&mut self, index: usize) -> crate::Result<Move> {
        if index >= self.moves.len() {
            return Err(Error::InvalidUndoTarget {
                index,
                len: self.moves.len(),
            });
        }
        let mut moves = self.moves.clone();
        let undone = moves.remove(index);
        let rebuilt = Self::replay(self.setup.clone(), moves)?;
        log::info!("{}", Move::Undo(index).describe(&self.notebook));
        *self = rebuilt;
        Ok(undone)
    }

    /// A fresh ledger with `moves` recorded in order.
    pub fn replay(setup: Setup, moves: impl IntoIterator<Item = Move>) -> crate::Result<Self> {
        let mut ledger = Self::new(setup)?;
        for mv in moves {
            ledger.record(mv)?;
        }
        Ok(ledger)
    }

    /// Committed moves in order, for picking an undo target.
    pub fn describe(&self) -> Vec<String> {
        self.moves
            .iter()
            .map(|mv| mv.describe(&self.notebook))
            .collect()
    }
}
