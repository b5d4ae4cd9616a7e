use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use flexi_logger::Logger;
use serde_json::{json, Value};
use thiserror::Error;

use cluedeck::assets::{AssetLookup, DirAssets};
use cluedeck::error::PersistError;
use cluedeck::persist::{load_game, save_game};
use cluedeck::report::rules_text;
use cluedeck::{
    decline_suggestion, end_turn, get_hand, knowledge_snapshot, load_deck_from_json,
    make_accusation, make_suggestion, move_player, restart_game, start_game,
    start_game_with_solution, toggle_checklist, GameConfig, GameError, GameState, Rules, Solution,
};

#[derive(Debug, Parser)]
#[command(name = "cluedeck", about = "Hot-seat deduction game driven by line commands on stdin")]
struct Args {
    /// Number of players (3..=6)
    #[arg(long, default_value_t = 3)]
    players: usize,

    /// Game seed; omitted means a fresh random game
    #[arg(long)]
    seed: Option<u64>,

    /// Deck vocabulary JSON (defaults to the built-in deck)
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Write every revealed card into every player's notes
    #[arg(long, default_value_t = false)]
    shared_notes: bool,

    /// Only allow suggesting the room the player stands in
    #[arg(long, default_value_t = false)]
    room_only: bool,

    /// Fix the solution as "suspect|weapon|room" (reproducible sessions)
    #[arg(long)]
    solution: Option<String>,

    /// Resume a game written by the `save` command
    #[arg(long)]
    resume: Option<PathBuf>,

    /// Directory of item images for the `asset` command
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log spec used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Error)]
enum CommandError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error("encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

impl CommandError {
    fn kind(&self) -> &'static str {
        match self {
            CommandError::Game(GameError::InvalidInput(_)) => "invalid_input",
            CommandError::Game(GameError::Configuration(_)) => "configuration",
            CommandError::Game(GameError::InvariantViolation(_)) => "invariant_violation",
            CommandError::Persist(_) => "persist",
            CommandError::Json(_) => "encoding",
            CommandError::Usage(_) => "usage",
        }
    }
}

fn parse_solution(s: &str) -> Result<Solution, String> {
    let parts: Vec<&str> = s.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [suspect, weapon, room] => Ok(Solution::new(*suspect, *weapon, *room)),
        _ => Err(format!("Invalid --solution '{s}', expected \"suspect|weapon|room\"")),
    }
}

fn new_game(args: &Args) -> Result<GameState, Box<dyn std::error::Error>> {
    let mut config = GameConfig::new(args.players).with_rules(Rules::new(args.shared_notes, args.room_only));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(path) = &args.deck {
        config = config.with_deck(load_deck_from_json(path)?);
    }
    let state = match &args.solution {
        Some(s) => start_game_with_solution(&config, parse_solution(s)?)?,
        None => start_game(&config)?,
    };
    Ok(state)
}

/// Fields after the command word, separated by '|'. Missing trailing fields are empty.
fn fields(rest: &str, max: usize) -> Result<Vec<&str>, CommandError> {
    let mut parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    if parts.len() > max {
        return Err(CommandError::Usage(format!(
            "expected at most {max} '|'-separated fields, got {}",
            parts.len()
        )));
    }
    parts.resize(max, "");
    Ok(parts)
}

fn run_command(state: &mut GameState, line: &str, assets: Option<&DirAssets>) -> Result<Value, CommandError> {
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let player = state.current;

    let reply = match cmd {
        "move" => serde_json::to_value(move_player(state, player, rest)?)?,
        "decline" => {
            decline_suggestion(state, player)?;
            json!({ "ok": true, "request": state.pending_request() })
        }
        "suggest" => {
            let f = fields(rest, 3)?;
            serde_json::to_value(make_suggestion(state, player, f[0], f[1], f[2])?)?
        }
        "accuse" => {
            let f = fields(rest, 3)?;
            serde_json::to_value(make_accusation(state, player, f[0], f[1], f[2])?)?
        }
        "end" => {
            let next = end_turn(state)?;
            json!({ "current": next, "name": state.players[next].name })
        }
        "hand" => json!({ "player": player, "hand": get_hand(state, player)? }),
        "notes" => json!({ "player": player, "notes": knowledge_snapshot(state)? }),
        "check" => json!({ "item": rest, "checked": toggle_checklist(state, player, rest)? }),
        "journal" => json!({ "journal": state.journal.events() }),
        "pending" => json!({
            "current": state.current,
            "request": state.pending_request(),
            "winner": state.winner(),
        }),
        "save" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("save needs a path".into()));
            }
            save_game(rest, state)?;
            json!({ "ok": true, "saved": rest })
        }
        "restart" => {
            *state = restart_game(state)?;
            json!({ "ok": true, "current": state.current, "players": state.player_count() })
        }
        "rules" => json!({ "rules": rules_text() }),
        "asset" => match assets {
            Some(a) => json!({ "item": rest, "asset": a.lookup(rest) }),
            None => return Err(CommandError::Usage("no --assets directory given".into())),
        },
        other => return Err(CommandError::Usage(format!("unknown command '{other}'"))),
    };
    Ok(reply)
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("[cluedeck] {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let _logger = Logger::try_with_env_or_str(&args.log_level)?
        .log_to_stderr()
        .start()?;

    let mut state = match &args.resume {
        Some(path) => load_game(path)?,
        None => new_game(args)?,
    };
    let assets = args.assets.as_ref().map(DirAssets::new);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "quit" {
            break;
        }
        let reply = run_command(&mut state, line, assets.as_ref()).unwrap_or_else(|e| {
            json!({ "error": e.to_string(), "kind": e.kind() })
        });
        writeln!(out, "{reply}")?;
    }
    out.flush()?;
    Ok(())
}
