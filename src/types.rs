use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Seat index, 0..player_count.
pub type PlayerId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    #[inline]
    pub fn all() -> [Category; 3] {
        [Category::Suspect, Category::Weapon, Category::Room]
    }

    #[inline]
    pub fn plural(self) -> &'static str {
        match self {
            Category::Suspect => "Suspects",
            Category::Weapon => "Weapons",
            Category::Room => "Rooms",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Suspect => "suspect",
            Category::Weapon => "weapon",
            Category::Room => "room",
        };
        f.write_str(s)
    }
}

/// One item name per category. Used for the secret solution as well as for
/// suggestions and accusations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub suspect: String,
    pub weapon: String,
    pub room: String,
}

pub type Solution = Triple;
pub type Suggestion = Triple;
pub type Accusation = Triple;

impl Triple {
    pub fn new(suspect: impl Into<String>, weapon: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            suspect: suspect.into(),
            weapon: weapon.into(),
            room: room.into(),
        }
    }

    #[inline]
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Suspect => &self.suspect,
            Category::Weapon => &self.weapon,
            Category::Room => &self.room,
        }
    }

    /// True when the card names this triple's item for the card's own category.
    #[inline]
    pub fn contains(&self, card: &Card) -> bool {
        self.get(card.category) == card.name
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.suspect, self.weapon, self.room)
    }
}

/// Where a player's token stands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Starting spot around the board center, before the first move.
    Start { seat: PlayerId },
    Room(String),
}

impl Position {
    #[inline]
    pub fn room(&self) -> Option<&str> {
        match self {
            Position::Room(r) => Some(r),
            Position::Start { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinKind {
    Accusation,
    Elimination,
}
