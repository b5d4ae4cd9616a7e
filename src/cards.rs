use crate::error::DeckError;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const REFERENCE_SUSPECTS: [&str; 6] = ["Luis", "Pablo", "Jhoel", "White", "Dennis", "Jean"];
pub const REFERENCE_WEAPONS: [&str; 6] = [
    "Cuchillo",
    "Candelabro",
    "Revolver",
    "Cuerda",
    "Tuberia",
    "Llave Inglesa",
];
pub const REFERENCE_ROOMS: [&str; 9] = [
    "Biblioteca",
    "Cocina",
    "Salon de Baile",
    "Estudio",
    "Sala",
    "Comedor",
    "Invernadero",
    "Salon de Billar",
    "Vestibulo",
];

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub category: Category,
    pub name: String,
}

impl Card {
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

/// On-disk shape of a deck: three ordered name lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckFile {
    pub suspects: Vec<String>,
    pub weapons: Vec<String>,
    pub rooms: Vec<String>,
}

/// The item vocabulary. Cards are kept in category order (suspects, weapons,
/// rooms), each category in its declared order; that order is the global card index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckFile", into = "DeckFile")]
pub struct Deck {
    cards: Vec<Card>,
    name_to_idx: HashMap<String, usize>, // names are unique across categories
}

impl Deck {
    /// The built-in six suspects, six weapons and nine rooms.
    pub fn reference() -> Self {
        let file = DeckFile {
            suspects: REFERENCE_SUSPECTS.iter().map(|s| s.to_string()).collect(),
            weapons: REFERENCE_WEAPONS.iter().map(|s| s.to_string()).collect(),
            rooms: REFERENCE_ROOMS.iter().map(|s| s.to_string()).collect(),
        };
        Self::build(file)
    }

    /// Validate a deck file and index it.
    pub fn from_file(file: DeckFile) -> Result<Self, DeckError> {
        for (category, items) in [
            (Category::Suspect, &file.suspects),
            (Category::Weapon, &file.weapons),
            (Category::Room, &file.rooms),
        ] {
            if items.is_empty() {
                return Err(DeckError::EmptyCategory(category));
            }
            if items.iter().any(|n| n.trim().is_empty()) {
                return Err(DeckError::BlankName(category));
            }
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for name in file.suspects.iter().chain(&file.weapons).chain(&file.rooms) {
            if !seen.insert(name.as_str()) {
                return Err(DeckError::Duplicate(name.clone()));
            }
        }
        Ok(Self::build(file))
    }

    fn build(file: DeckFile) -> Self {
        let mut cards = Vec::with_capacity(file.suspects.len() + file.weapons.len() + file.rooms.len());
        cards.extend(file.suspects.into_iter().map(|n| Card::new(Category::Suspect, n)));
        cards.extend(file.weapons.into_iter().map(|n| Card::new(Category::Weapon, n)));
        cards.extend(file.rooms.into_iter().map(|n| Card::new(Category::Room, n)));
        let name_to_idx = cards
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self { cards, name_to_idx }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[inline]
    pub fn card_at(&self, idx: usize) -> Option<&Card> {
        self.cards.get(idx)
    }

    /// Global index of an item name (case-sensitive, exact).
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_idx.get(name).copied()
    }

    #[inline]
    pub fn card(&self, name: &str) -> Option<&Card> {
        self.index_of(name).and_then(|i| self.cards.get(i))
    }

    /// Look up a name, accepting it only if it belongs to `category`.
    #[inline]
    pub fn lookup(&self, category: Category, name: &str) -> Option<&Card> {
        self.card(name).filter(|c| c.category == category)
    }

    pub fn items(&self, category: Category) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.category == category)
            .map(|c| c.name.as_str())
            .collect()
    }

    #[inline]
    pub fn count(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<DeckFile> for Deck {
    type Error = DeckError;

    fn try_from(file: DeckFile) -> Result<Self, Self::Error> {
        Deck::from_file(file)
    }
}

impl From<Deck> for DeckFile {
    fn from(deck: Deck) -> Self {
        let mut file = DeckFile {
            suspects: Vec::new(),
            weapons: Vec::new(),
            rooms: Vec::new(),
        };
        for c in deck.cards {
            match c.category {
                Category::Suspect => file.suspects.push(c.name),
                Category::Weapon => file.weapons.push(c.name),
                Category::Room => file.rooms.push(c.name),
            }
        }
        file
    }
}

/// Load a deck vocabulary from a JSON file of the form
/// `{"suspects": [...], "weapons": [...], "rooms": [...]}`.
pub fn load_deck_from_json<P: AsRef<Path>>(path: P) -> Result<Deck, DeckError> {
    let data = fs::read_to_string(path.as_ref())?;
    let file: DeckFile = serde_json::from_str(&data)?;
    Deck::from_file(file)
}
