use serde::Deserialize;
use serde::Serialize;

/// Anything that holds cards: a seat at the table, or the solution envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Holder {
    Player(usize),
    Envelope,
}

impl Holder {
    /// the operator's own seat
    pub const OPERATOR: Self = Self::Player(0);

    pub fn is_envelope(&self) -> bool {
        matches!(self, Self::Envelope)
    }
}

impl std::fmt::Display for Holder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player(seat) => write!(f, "P{}", seat),
            Self::Envelope => write!(f, "envelope"),
        }
    }
}
