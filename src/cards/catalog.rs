use super::category::Category;
use serde::Deserialize;
use serde::Serialize;

/// The static card definitions of one edition of the game.
///
/// Category sizes are data, not constants: any catalog whose cards fit in a
/// [`Hand`](super::Hand) is accepted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub suspects: Vec<String>,
    pub weapons: Vec<String>,
    pub rooms: Vec<String>,
}

impl Catalog {
    /// The classic board: 6 suspects, 6 weapons, 9 rooms.
    pub fn classic() -> Self {
        let strings = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            suspects: strings(&[
                "Professor Plum",
                "Colonel Mustard",
                "Mr. Green",
                "Miss Scarlet",
                "Ms. White",
                "Mrs. Peacock",
            ]),
            weapons: strings(&[
                "Knife",
                "Candlestick",
                "Revolver",
                "Lead Pipe",
                "Rope",
                "Wrench",
            ]),
            rooms: strings(&[
                "Hall",
                "Conservatory",
                "Dining Room",
                "Kitchen",
                "Study",
                "Library",
                "Ballroom",
                "Lounge",
                "Billiards Room",
            ]),
        }
    }

    pub fn names(&self, category: Category) -> &[String] {
        match category {
            Category::Suspect => &self.suspects,
            Category::Weapon => &self.weapons,
            Category::Room => &self.rooms,
        }
    }

    pub fn len(&self) -> usize {
        self.suspects.len() + self.weapons.len() + self.rooms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// every (category, name) pair in registry order
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        Category::all()
            .iter()
            .flat_map(move |c| self.names(*c).iter().map(move |n| (*c, n.as_str())))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_counts() {
        let catalog = Catalog::classic();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.names(Category::Suspect).len(), 6);
        assert_eq!(catalog.names(Category::Weapon).len(), 6);
        assert_eq!(catalog.names(Category::Room).len(), 9);
    }

    #[test]
    fn entries_are_suspects_weapons_rooms() {
        let catalog = Catalog::classic();
        let entries = catalog.entries().collect::<Vec<_>>();
        assert_eq!(entries[0], (Category::Suspect, "Professor Plum"));
        assert_eq!(entries[6], (Category::Weapon, "Knife"));
        assert_eq!(entries[20], (Category::Room, "Billiards Room"));
    }

    #[test]
    fn json_catalog() {
        let json = r#"{"suspects":["A","B"],"weapons":["C","D"],"rooms":["E","F","G"]}"#;
        let catalog = serde_json::from_str::<Catalog>(json).unwrap();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.names(Category::Room)[2], "G");
    }
}
