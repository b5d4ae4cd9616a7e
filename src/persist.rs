use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PersistError;
use crate::state::GameState;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SavedGameRef<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct SavedGame {
    version: u32,
    state: GameState,
}

/// Save a game as a single JSON document with a format version header.
/// The file contains the hidden solution; front ends must not show it.
pub fn save_game<P: AsRef<Path>>(path: P, state: &GameState) -> Result<(), PersistError> {
    let file = fs::File::create(path.as_ref())?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(
        &mut w,
        &SavedGameRef {
            version: FORMAT_VERSION,
            state,
        },
    )?;
    w.write_all(b"\n")?;
    w.flush()?;
    log::info!("saved game to {}", path.as_ref().display());
    Ok(())
}

/// Load a game written by `save_game`, checking version and invariants.
pub fn load_game<P: AsRef<Path>>(path: P) -> Result<GameState, PersistError> {
    let data = fs::read_to_string(path.as_ref())?;
    let saved: SavedGame = serde_json::from_str(&data)?;
    if saved.version != FORMAT_VERSION {
        return Err(PersistError::Version {
            found: saved.version,
            expected: FORMAT_VERSION,
        });
    }
    saved.state.validate()?;
    log::info!("loaded game from {}", path.as_ref().display());
    Ok(saved.state)
}
