use thiserror::Error;

use crate::types::{Category, PlayerId};

/// Setup problems. Raised before any game state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported player count {got} (supported {min}..={max})")]
    PlayerCount { got: usize, min: usize, max: usize },

    #[error("need {needed} player names, got {got}")]
    PlayerNames { needed: usize, got: usize },

    #[error("deck has {cards} cards to deal, not enough for {players} players")]
    DeckTooSmall { cards: usize, players: usize },

    #[error("solution names unknown {category} '{name}'")]
    UnknownSolutionItem { category: Category, name: String },
}

/// Rejected player actions. Always recoverable: the state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown {category} '{name}'")]
    UnknownItem { category: Category, name: String },

    #[error("unknown item '{0}'")]
    UnknownName(String),

    #[error("missing {0}")]
    MissingField(Category),

    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("it is player {current}'s turn, not player {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("player {player} must be in room '{room}' to suggest it")]
    NotInRoom { player: PlayerId, room: String },

    #[error("no suggestion is on offer")]
    NoSuggestionOffered,

    #[error("cannot {action} at this point of the turn")]
    WrongPhase { action: &'static str },

    #[error("the game is over")]
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl GameError {
    #[inline]
    pub fn invariant(msg: impl Into<String>) -> Self {
        GameError::InvariantViolation(msg.into())
    }

    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidInput(_))
    }
}

/// Deck vocabulary loading and validation.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse deck JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deck has no {0} items")]
    EmptyCategory(Category),

    #[error("duplicate item name '{0}'")]
    Duplicate(String),

    #[error("blank item name in {0} list")]
    BlankName(Category),
}

/// Save file problems.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("save file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save file JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save file format version {found}, expected {expected}")]
    Version { found: u32, expected: u32 },

    #[error("save file holds an inconsistent game: {0}")]
    Invalid(#[from] GameError),
}
