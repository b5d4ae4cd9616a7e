#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod error;
pub mod rules;
pub mod cards;
pub mod board;
pub mod knowledge;
pub mod journal;
pub mod state;
pub mod rng;
pub mod report;
pub mod persist;
pub mod assets;

pub mod engine {
    pub mod deal;
    pub mod suggest;
    pub mod accuse;
    pub mod turn;
}

// Re-exports: stable minimal API surface for front ends
pub use crate::cards::{load_deck_from_json, Card, Deck};
pub use crate::engine::accuse::judge_accusation;
pub use crate::engine::deal::{deal, generate_solution};
pub use crate::engine::suggest::{resolve_suggestion, Refutation};
pub use crate::engine::turn::{
    decline_suggestion, end_turn, get_hand, knowledge_snapshot, knowledge_snapshot_for,
    make_accusation, make_suggestion, move_player, restart_game, start_game,
    start_game_with_solution, toggle_checklist, AccusationOutcome, MoveOutcome, SuggestionOutcome,
};
pub use crate::error::{ConfigError, GameError, InputError};
pub use crate::knowledge::{KnowledgeBase, KnowledgeSnapshot, Status};
pub use crate::rng::rng_for_event;
pub use crate::rules::{GameConfig, Rules, MAX_PLAYERS, MIN_PLAYERS};
pub use crate::state::{GameState, InputRequest, Phase, Player};
pub use crate::types::{Accusation, Category, PlayerId, Position, Solution, Suggestion, Triple, WinKind};
