/// What one holder's notebook column says about one card.
///
/// `Known` and `NotPossible` are final. `Possible` and `Unknown` are soft: a
/// card is `Possible` while it sits in a pending "holds one of" set, and falls
/// back to `Unknown` when that set is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStatus {
    Known,
    NotPossible,
    Possible,
    Unknown,
}

impl CardStatus {
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Known | Self::NotPossible)
    }
}

impl Display for CardStatus {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Known => write!(f, "known"),
            Self::NotPossible => write!(f, "not possible"),
            Self::Possible => write!(f, "possible"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// How a card looks from one holder's seat, for rendering card pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// the viewpoint holds it
    Mine,
    /// someone else is confirmed to hold it
    Elsewhere,
    Unknown,
}

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
