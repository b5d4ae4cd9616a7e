use serde::{Deserialize, Serialize};

use crate::cards::Deck;
use crate::error::ConfigError;

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 6;

pub const DEFAULT_PLAYER_NAMES: [&str; MAX_PLAYERS] =
    ["Rojo", "Morado", "Verde", "Azul", "Blanco", "Amarillo"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rules {
    /// Every reveal is written into every player's notes instead of only the suggester's.
    pub shared_notes: bool,
    /// A suggestion must name the room the suggester currently stands in.
    pub suggest_from_room_only: bool,
}

impl Rules {
    #[inline]
    pub const fn new(shared_notes: bool, suggest_from_room_only: bool) -> Self {
        Self {
            shared_notes,
            suggest_from_room_only,
        }
    }

    /// Table behaviour of the tabletop adaptation this engine grew out of:
    /// one public notebook, suggestions from anywhere.
    #[inline]
    pub const fn classic() -> Self {
        Self {
            shared_notes: true,
            suggest_from_room_only: false,
        }
    }

    #[inline]
    pub const fn strict() -> Self {
        Self {
            shared_notes: false,
            suggest_from_room_only: true,
        }
    }
}

/// Everything `start_game` needs.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub player_count: usize,
    /// `None` draws a fresh seed per game.
    pub seed: Option<u64>,
    pub rules: Rules,
    /// `None` uses the first `player_count` of `DEFAULT_PLAYER_NAMES`.
    pub player_names: Option<Vec<String>>,
    pub deck: Deck,
}

impl GameConfig {
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            seed: None,
            rules: Rules::default(),
            player_names: None,
            deck: Deck::reference(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_player_count(self.player_count)?;
        if let Some(names) = &self.player_names {
            if names.len() < self.player_count {
                return Err(ConfigError::PlayerNames {
                    needed: self.player_count,
                    got: names.len(),
                });
            }
        }
        // Three cards go to the solution; everyone else needs at least one.
        let dealable = self.deck.len().saturating_sub(3);
        if dealable < self.player_count {
            return Err(ConfigError::DeckTooSmall {
                cards: dealable,
                players: self.player_count,
            });
        }
        Ok(())
    }

    pub fn names(&self) -> Vec<String> {
        match &self.player_names {
            Some(names) => names.iter().take(self.player_count).cloned().collect(),
            None => DEFAULT_PLAYER_NAMES
                .iter()
                .take(self.player_count)
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[inline]
pub fn check_player_count(player_count: usize) -> Result<(), ConfigError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(ConfigError::PlayerCount {
            got: player_count,
            min: MIN_PLAYERS,
            max: MAX_PLAYERS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_bounds() {
        assert!(check_player_count(2).is_err());
        assert!(check_player_count(3).is_ok());
        assert!(check_player_count(6).is_ok());
        assert_eq!(
            check_player_count(7),
            Err(ConfigError::PlayerCount { got: 7, min: 3, max: 6 })
        );
    }

    #[test]
    fn default_names_follow_seat_order() {
        let cfg = GameConfig::new(4);
        assert_eq!(cfg.names(), vec!["Rojo", "Morado", "Verde", "Azul"]);
    }

    #[test]
    fn too_few_names_rejected() {
        let cfg = GameConfig::new(4).with_player_names(["Ana", "Beto"]);
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::PlayerNames { needed: 4, got: 2 })
        );
    }
}
