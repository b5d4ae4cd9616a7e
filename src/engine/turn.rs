use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::engine::accuse::judge_accusation;
use crate::engine::deal::{deal, generate_solution};
use crate::engine::suggest::{resolve_suggestion, Refutation};
use crate::error::{ConfigError, GameError, InputError};
use crate::journal::TableEvent;
use crate::knowledge::KnowledgeSnapshot;
use crate::rng::{fresh_seed, rng_for_event, SETUP_EVENT};
use crate::rules::GameConfig;
use crate::state::{GameState, InputRequest, Phase, Player};
use crate::types::{Accusation, Category, PlayerId, Position, Solution, Suggestion, WinKind};

// Event index used to derive the seed of a restarted game.
const RESTART_EVENT: u64 = u64::MAX;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    pub room: String,
    /// Always an `OfferSuggestion` bound to `room`.
    pub request: InputRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionOutcome {
    pub suggester: PlayerId,
    pub suggestion: Suggestion,
    pub refuter: Option<PlayerId>,
    /// Shown to the suggester only.
    pub revealed: Option<Card>,
    pub unrefuted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccusationOutcome {
    pub player: PlayerId,
    pub correct: bool,
    pub winner: Option<PlayerId>,
    pub eliminated: Option<PlayerId>,
    /// Whose turn it is now, when the game goes on.
    pub next_player: Option<PlayerId>,
}

#[inline]
fn rejected<T>(err: impl Into<GameError>) -> Result<T, GameError> {
    let err = err.into();
    warn!("rejected: {err}");
    Err(err)
}

fn ensure_turn(state: &GameState, player: PlayerId) -> Result<(), GameError> {
    if state.is_over() {
        return rejected(InputError::GameOver);
    }
    if player >= state.player_count() {
        return rejected(InputError::UnknownPlayer(player));
    }
    if player != state.current {
        return rejected(InputError::NotYourTurn {
            player,
            current: state.current,
        });
    }
    Ok(())
}

/// Resolve one free-text field against the deck vocabulary.
fn field<'d>(deck: &'d Deck, category: Category, raw: &str) -> Result<&'d Card, GameError> {
    let name = raw.trim();
    if name.is_empty() {
        return rejected(InputError::MissingField(category));
    }
    match deck.lookup(category, name) {
        Some(card) => Ok(card),
        None => rejected(InputError::UnknownItem {
            category,
            name: name.to_string(),
        }),
    }
}

/// New game with a random solution. Uses `config.seed` when given.
pub fn start_game(config: &GameConfig) -> Result<GameState, GameError> {
    setup(config, None)
}

/// New game with a fixed solution; dealing still follows the seed.
pub fn start_game_with_solution(config: &GameConfig, solution: Solution) -> Result<GameState, GameError> {
    setup(config, Some(solution))
}

fn setup(config: &GameConfig, fixed: Option<Solution>) -> Result<GameState, GameError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(fresh_seed);
    let mut rng = rng_for_event(seed, SETUP_EVENT);

    let solution = match fixed {
        Some(sol) => {
            for category in Category::all() {
                let name = sol.get(category);
                if config.deck.lookup(category, name).is_none() {
                    return Err(ConfigError::UnknownSolutionItem {
                        category,
                        name: name.to_string(),
                    }
                    .into());
                }
            }
            sol
        }
        None => generate_solution(&config.deck, &mut rng)?,
    };
    let hands = deal(&config.deck, &solution, config.player_count, &mut rng)?;

    let players: Vec<Player> = config
        .names()
        .into_iter()
        .zip(hands)
        .enumerate()
        .map(|(seat, (name, hand))| Player::new(name, seat, hand, &config.deck))
        .collect();

    let state = GameState::new(config.deck.clone(), config.rules, seed, solution, players);
    info!(
        "new game: {} players, seed {seed:#018x}, rules {:?}",
        state.player_count(),
        state.rules
    );
    debug!("solution: {}", state.solution());
    Ok(state)
}

/// Same table, same rules, a fresh deal. The new seed is derived from the old one.
pub fn restart_game(state: &GameState) -> Result<GameState, GameError> {
    let seed: u64 = rng_for_event(state.seed, RESTART_EVENT).gen();
    let config = GameConfig {
        player_count: state.player_count(),
        seed: Some(seed),
        rules: state.rules,
        player_names: Some(state.players.iter().map(|p| p.name.clone()).collect()),
        deck: state.deck.clone(),
    };
    start_game(&config)
}

/// Put the player's token in a room and offer a suggestion there. One move per turn.
pub fn move_player(state: &mut GameState, player: PlayerId, room: &str) -> Result<MoveOutcome, GameError> {
    ensure_turn(state, player)?;
    if state.phase != Phase::AwaitingMove {
        return rejected(InputError::WrongPhase { action: "move" });
    }
    let room = field(&state.deck, Category::Room, room)?.name.clone();

    state.player_mut(player)?.position = Position::Room(room.clone());
    state.phase = Phase::AwaitingSuggestionDecision { room: room.clone() };
    state.journal.push(TableEvent::Moved {
        player,
        room: room.clone(),
    });
    debug!("player {player} moved to {room}");

    Ok(MoveOutcome {
        player,
        room: room.clone(),
        request: InputRequest::OfferSuggestion { player, room },
    })
}

/// Answer "no" to the suggestion offered after a move.
pub fn decline_suggestion(state: &mut GameState, player: PlayerId) -> Result<(), GameError> {
    ensure_turn(state, player)?;
    if !matches!(state.phase, Phase::AwaitingSuggestionDecision { .. }) {
        return rejected(InputError::NoSuggestionOffered);
    }
    state.phase = Phase::TurnComplete;
    state.journal.push(TableEvent::SuggestionDeclined { player });
    debug!("player {player} declined to suggest");
    Ok(())
}

/// Suggest a (suspect, weapon, room) triple, at most once per turn. While a
/// suggestion is on offer after a move, an empty `room` means the room just entered.
pub fn make_suggestion(
    state: &mut GameState,
    player: PlayerId,
    suspect: &str,
    weapon: &str,
    room: &str,
) -> Result<SuggestionOutcome, GameError> {
    ensure_turn(state, player)?;
    if state.phase == Phase::TurnComplete {
        return rejected(InputError::WrongPhase { action: "suggest" });
    }

    let suspect = field(&state.deck, Category::Suspect, suspect)?.name.clone();
    let weapon = field(&state.deck, Category::Weapon, weapon)?.name.clone();
    let room = match &state.phase {
        Phase::AwaitingSuggestionDecision { room: bound } if room.trim().is_empty() => bound.clone(),
        _ => field(&state.deck, Category::Room, room)?.name.clone(),
    };
    if state.rules.suggest_from_room_only && state.players[player].position.room() != Some(room.as_str()) {
        return rejected(InputError::NotInRoom { player, room });
    }
    let suggestion = Suggestion::new(suspect, weapon, room);

    let event = state.suggestions_made + 1;
    let mut rng = rng_for_event(state.seed, event);
    let refutation = {
        let hands: Vec<&[Card]> = state.players.iter().map(|p| p.hand.as_slice()).collect();
        resolve_suggestion(player, &suggestion, &hands, &mut rng)
    };

    if let Refutation::Refuted { card, .. } = &refutation {
        record_reveal(state, player, card)?;
    }
    state.suggestions_made = event;
    state.journal.push(TableEvent::Suggested {
        player,
        suggestion: suggestion.clone(),
    });
    state.journal.push(match &refutation {
        Refutation::Refuted { refuter, .. } => TableEvent::Refuted {
            suggester: player,
            refuter: *refuter,
        },
        Refutation::Unrefuted => TableEvent::Unrefuted { suggester: player },
    });
    state.phase = Phase::TurnComplete;

    debug!(
        "player {player} suggested {suggestion}: refuted by {:?}",
        refutation.refuter()
    );
    debug!(
        "notes of player {player}:\n{}",
        state.players[player].notes.snapshot(&state.deck)
    );

    Ok(match refutation {
        Refutation::Refuted { refuter, card } => SuggestionOutcome {
            suggester: player,
            suggestion,
            refuter: Some(refuter),
            revealed: Some(card),
            unrefuted: false,
        },
        Refutation::Unrefuted => SuggestionOutcome {
            suggester: player,
            suggestion,
            refuter: None,
            revealed: None,
            unrefuted: true,
        },
    })
}

// The suggester always learns the card; with shared notes everyone does.
fn record_reveal(state: &mut GameState, suggester: PlayerId, card: &Card) -> Result<(), GameError> {
    let shared = state.rules.shared_notes;
    let deck = &state.deck;
    for (seat, p) in state.players.iter_mut().enumerate() {
        if shared || seat == suggester {
            p.notes
                .mark_cleared(deck, card)
                .map_err(|e| GameError::invariant(format!("revealed card outside the deck: {e}")))?;
        }
    }
    Ok(())
}

/// Binding accusation. Right: the accuser wins. Wrong: the accuser is out,
/// and either the last player standing wins or play passes on.
pub fn make_accusation(
    state: &mut GameState,
    player: PlayerId,
    suspect: &str,
    weapon: &str,
    room: &str,
) -> Result<AccusationOutcome, GameError> {
    ensure_turn(state, player)?;
    let accusation = Accusation::new(
        field(&state.deck, Category::Suspect, suspect)?.name.clone(),
        field(&state.deck, Category::Weapon, weapon)?.name.clone(),
        field(&state.deck, Category::Room, room)?.name.clone(),
    );

    let correct = judge_accusation(&accusation, state.solution());
    state.journal.push(TableEvent::Accused { player, correct });

    if correct {
        declare_winner(state, player, WinKind::Accusation);
        return Ok(AccusationOutcome {
            player,
            correct,
            winner: Some(player),
            eliminated: None,
            next_player: None,
        });
    }

    eliminate(state, player)?;
    match state.active_players().as_slice() {
        [] => Err(GameError::invariant("no active players left after elimination")),
        [last] => {
            let last = *last;
            state.current = last;
            declare_winner(state, last, WinKind::Elimination);
            Ok(AccusationOutcome {
                player,
                correct,
                winner: Some(last),
                eliminated: Some(player),
                next_player: None,
            })
        }
        _ => {
            let next = advance_turn(state)?;
            Ok(AccusationOutcome {
                player,
                correct,
                winner: None,
                eliminated: Some(player),
                next_player: Some(next),
            })
        }
    }
}

fn eliminate(state: &mut GameState, player: PlayerId) -> Result<(), GameError> {
    let p = state.player_mut(player)?;
    p.hand.clear();
    p.active = false;
    state.journal.push(TableEvent::Eliminated { player });
    info!("player {player} eliminated");
    Ok(())
}

fn declare_winner(state: &mut GameState, winner: PlayerId, kind: WinKind) {
    state.phase = Phase::GameWon { winner, kind };
    state.journal.push(TableEvent::Won { player: winner, kind });
    info!("player {winner} wins by {kind:?}; solution was {}", state.solution());
}

fn advance_turn(state: &mut GameState) -> Result<PlayerId, GameError> {
    let from = state.current;
    let next = state
        .next_active_after(from)
        .ok_or_else(|| GameError::invariant("no active players left to take a turn"))?;
    state.current = next;
    state.phase = Phase::AwaitingMove;
    state.journal.push(TableEvent::TurnPassed { from, to: next });
    debug!("turn passes from {from} to {next}");
    Ok(next)
}

/// Pass the turn to the next active player, skipping eliminated seats.
pub fn end_turn(state: &mut GameState) -> Result<PlayerId, GameError> {
    if state.is_over() {
        return rejected(InputError::GameOver);
    }
    advance_turn(state)
}

/// Card names in a player's hand, in dealt order.
pub fn get_hand(state: &GameState, player: PlayerId) -> Result<Vec<String>, GameError> {
    Ok(state
        .player(player)?
        .hand
        .iter()
        .map(|c| c.name.clone())
        .collect())
}

/// Notes of the player whose turn it is.
pub fn knowledge_snapshot(state: &GameState) -> Result<KnowledgeSnapshot, GameError> {
    knowledge_snapshot_for(state, state.current)
}

pub fn knowledge_snapshot_for(state: &GameState, player: PlayerId) -> Result<KnowledgeSnapshot, GameError> {
    let p = state.player(player)?;
    Ok(p.notes.snapshot_with_checklist(&state.deck, &p.checklist))
}

/// Flip a manual checklist mark. Returns whether the item is now checked.
pub fn toggle_checklist(state: &mut GameState, player: PlayerId, item: &str) -> Result<bool, GameError> {
    if player >= state.player_count() {
        return rejected(InputError::UnknownPlayer(player));
    }
    let name = item.trim();
    if state.deck.card(name).is_none() {
        return rejected(InputError::UnknownName(name.to_string()));
    }
    let p = state.player_mut(player)?;
    let checked = if p.checklist.remove(name) {
        false
    } else {
        p.checklist.insert(name.to_string());
        true
    };
    Ok(checked)
}
