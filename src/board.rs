use crate::types::{PlayerId, Position};

/// The board is a square grid of `GRID_SIZE` x `GRID_SIZE` cells.
pub const GRID_SIZE: u8 = 25;

const CENTER: (u8, u8) = (12, 12);
const START_RADIUS: f64 = 3.0;

// (room, column, row) of each reference room's center cell.
const ROOM_CENTERS: [(&str, u8, u8); 9] = [
    ("Estudio", 3, 2),
    ("Vestibulo", 12, 3),
    ("Biblioteca", 21, 2),
    ("Sala", 3, 8),
    ("Salon de Billar", 21, 9),
    ("Invernadero", 2, 21),
    ("Comedor", 12, 21),
    ("Salon de Baile", 20, 21),
    ("Cocina", 3, 15),
];

/// Grid cell at the center of a reference room. `None` for rooms the
/// built-in layout does not know (custom decks).
#[inline]
pub fn room_center(room: &str) -> Option<(u8, u8)> {
    ROOM_CENTERS
        .iter()
        .find(|(name, _, _)| *name == room)
        .map(|&(_, c, r)| (c, r))
}

/// Starting cell of a seat: players are spread evenly on a small circle
/// around the board center.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn start_cell(seat: PlayerId, player_count: usize) -> (u8, u8) {
    let n = player_count.max(1) as f64;
    let angle = std::f64::consts::TAU * (seat as f64) / n;
    let c = (f64::from(CENTER.0) + START_RADIUS * angle.cos()).round();
    let r = (f64::from(CENTER.1) + START_RADIUS * angle.sin()).round();
    let clamp = |v: f64| v.clamp(0.0, f64::from(GRID_SIZE - 1)) as u8;
    (clamp(c), clamp(r))
}

/// Grid cell a front end should draw a token at.
pub fn cell_for(position: &Position, player_count: usize) -> Option<(u8, u8)> {
    match position {
        Position::Start { seat } => Some(start_cell(*seat, player_count)),
        Position::Room(room) => room_center(room),
    }
}
