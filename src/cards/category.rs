/// The three kinds of card. Each contributes exactly one card to the envelope.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Suspect = 0,
    Weapon = 1,
    Room = 2,
}

impl Category {
    pub const fn all() -> &'static [Self] {
        &[Self::Suspect, Self::Weapon, Self::Room]
    }
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Suspect => "suspects",
            Self::Weapon => "weapons",
            Self::Room => "rooms",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Category {
    fn from(n: u8) -> Category {
        match n {
            0 => Category::Suspect,
            1 => Category::Weapon,
            2 => Category::Room,
            _ => panic!("invalid category"),
        }
    }
}
impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match self {
                Category::Suspect => "suspect",
                Category::Weapon => "weapon",
                Category::Room => "room",
            }
        )
    }
}

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
