use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::error::{GameError, InputError};
use crate::journal::Journal;
use crate::knowledge::KnowledgeBase;
use crate::rules::{check_player_count, Rules};
use crate::types::{Category, PlayerId, Position, Solution, WinKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub position: Position,
    pub active: bool,
    /// Private notebook: what this player has learned from refutations.
    pub notes: KnowledgeBase,
    /// Manual checklist marks, free for the player to toggle.
    pub checklist: BTreeSet<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: PlayerId, hand: Vec<Card>, deck: &Deck) -> Self {
        Self {
            name: name.into(),
            hand,
            position: Position::Start { seat },
            active: true,
            notes: KnowledgeBase::new(deck),
            checklist: BTreeSet::new(),
        }
    }
}

/// Where the current turn stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove,
    /// The player just entered `room` and may suggest there.
    AwaitingSuggestionDecision { room: String },
    TurnComplete,
    GameWon { winner: PlayerId, kind: WinKind },
}

/// What the engine needs next from the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "snake_case")]
pub enum InputRequest {
    ChooseRoom { player: PlayerId },
    /// Yes/no plus suspect and weapon; the room is bound.
    OfferSuggestion { player: PlayerId, room: String },
    EndTurn { player: PlayerId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub deck: Deck,
    pub rules: Rules,
    pub seed: u64,
    solution: Solution,
    pub players: Vec<Player>,
    pub current: PlayerId,
    pub phase: Phase,
    pub journal: Journal,
    /// Suggestions resolved so far; also the RNG event counter.
    pub suggestions_made: u64,
}

impl GameState {
    pub fn new(deck: Deck, rules: Rules, seed: u64, solution: Solution, players: Vec<Player>) -> Self {
        Self {
            deck,
            rules,
            seed,
            solution,
            players,
            current: 0,
            phase: Phase::AwaitingMove,
            journal: Journal::default(),
            suggestions_made: 0,
        }
    }

    #[inline]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    #[inline]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> Result<&Player, InputError> {
        self.players.get(id).ok_or(InputError::UnknownPlayer(id))
    }

    #[inline]
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, InputError> {
        self.players.get_mut(id).ok_or(InputError::UnknownPlayer(id))
    }

    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.active)
            .map(|(i, _)| i)
            .collect()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameWon { .. })
    }

    #[inline]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::GameWon { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Next active seat after `from` in round-robin order. Wraps, so a lone
    /// active player finds themself.
    pub fn next_active_after(&self, from: PlayerId) -> Option<PlayerId> {
        let n = self.players.len();
        (1..=n)
            .map(|k| (from + k) % n)
            .find(|&p| self.players[p].active)
    }

    pub fn pending_request(&self) -> Option<InputRequest> {
        let player = self.current;
        match &self.phase {
            Phase::AwaitingMove => Some(InputRequest::ChooseRoom { player }),
            Phase::AwaitingSuggestionDecision { room } => Some(InputRequest::OfferSuggestion {
                player,
                room: room.clone(),
            }),
            Phase::TurnComplete => Some(InputRequest::EndTurn { player }),
            Phase::GameWon { .. } => None,
        }
    }

    /// Check the dealing, position and turn invariants. Used on loaded saves.
    pub fn validate(&self) -> Result<(), GameError> {
        check_player_count(self.players.len())?;
        for category in Category::all() {
            let name = self.solution.get(category);
            if self.deck.lookup(category, name).is_none() {
                return Err(GameError::invariant(format!(
                    "solution {category} '{name}' is not in the deck"
                )));
            }
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for (i, p) in self.players.iter().enumerate() {
            if p.notes.len() != self.deck.len() {
                return Err(GameError::invariant(format!(
                    "player {i} notes cover {} items, deck has {}",
                    p.notes.len(),
                    self.deck.len()
                )));
            }
            if p.active == p.hand.is_empty() {
                return Err(GameError::invariant(format!(
                    "player {i} is {} but holds {} cards",
                    if p.active { "active" } else { "eliminated" },
                    p.hand.len()
                )));
            }
            for card in &p.hand {
                if self.deck.lookup(card.category, &card.name).is_none() {
                    return Err(GameError::invariant(format!(
                        "player {i} holds unknown card '{}'",
                        card.name
                    )));
                }
                if self.solution.contains(card) {
                    return Err(GameError::invariant(format!(
                        "player {i} holds solution card '{}'",
                        card.name
                    )));
                }
                if !seen.insert(card.name.as_str()) {
                    return Err(GameError::invariant(format!(
                        "card '{}' dealt twice",
                        card.name
                    )));
                }
            }
        }

        for (i, p) in self.players.iter().enumerate() {
            if let Position::Room(room) = &p.position {
                if self.deck.lookup(Category::Room, room).is_none() {
                    return Err(GameError::invariant(format!(
                        "player {i} stands in unknown room '{room}'"
                    )));
                }
            }
        }
        self.validate_phase()?;

        match self.players.get(self.current) {
            None => Err(GameError::invariant(format!(
                "current player {} out of range",
                self.current
            ))),
            Some(p) if !p.active && !self.is_over() => Err(GameError::invariant(format!(
                "current player {} is eliminated",
                self.current
            ))),
            Some(_) => Ok(()),
        }
    }

    fn validate_phase(&self) -> Result<(), GameError> {
        match &self.phase {
            Phase::AwaitingMove | Phase::TurnComplete => Ok(()),
            Phase::AwaitingSuggestionDecision { room } => {
                if self.deck.lookup(Category::Room, room).is_none() {
                    return Err(GameError::invariant(format!(
                        "suggestion offered in unknown room '{room}'"
                    )));
                }
                match self.players.get(self.current) {
                    Some(p) if p.position.room() == Some(room.as_str()) => Ok(()),
                    _ => Err(GameError::invariant(format!(
                        "suggestion offered in '{room}' but player {} is not there",
                        self.current
                    ))),
                }
            }
            Phase::GameWon { winner, kind } => match self.players.get(*winner) {
                None => Err(GameError::invariant(format!("winner {winner} out of range"))),
                Some(p) if !p.active => Err(GameError::invariant(format!(
                    "winner {winner} is eliminated"
                ))),
                Some(_) if *kind == WinKind::Elimination && self.active_players().len() != 1 => {
                    Err(GameError::invariant(format!(
                        "player {winner} won by elimination with {} players still active",
                        self.active_players().len()
                    )))
                }
                Some(_) => Ok(()),
            },
        }
    }
}
