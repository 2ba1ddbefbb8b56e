use crate::cards::Card;
use crate::cards::Suggestion;
use crate::deduction::Holder;
use crate::deduction::Notebook;
use serde::Deserialize;
use serde::Serialize;

/// One observed event at the table. Never mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// the operator was dealt this card
    StartCard(Card),
    /// `resolver` is the first seat after `suggester` able to disprove,
    /// `None` when nobody could
    Suggestion {
        suggester: usize,
        suggestion: Suggestion,
        resolver: Option<usize>,
    },
    /// a holder was shown to have a card
    LearnedCard { card: Card, holder: Holder },
    /// take back the committed move at this position
    Undo(usize),
}

impl Move {
    pub fn describe(&self, notebook: &Notebook) -> String {
        let registry = notebook.registry();
        match self {
            Move::StartCard(card) => format!("Added start card [{}]", registry.name(*card)),
            Move::Suggestion {
                suggester,
                suggestion,
                resolver,
            } => format!(
                "Suggestion by [{}] of [{}] resolved by [{}]",
                notebook.label(Holder::Player(*suggester)),
                suggestion.describe(registry),
                resolver
                    .filter(|r| r != suggester)
                    .map(|r| notebook.label(Holder::Player(r)))
                    .unwrap_or("Nobody")
            ),
            Move::LearnedCard { card, holder } => format!(
                "[{}] has card [{}]",
                notebook.label(*holder),
                registry.name(*card)
            ),
            Move::Undo(index) => format!("Undid move {}", index + 1),
        }
    }
}
