use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Event index reserved for game setup (solution draw and shuffle).
pub const SETUP_EVENT: u64 = 0;

/// Deterministic RNG factory for a given (seed, event) pair.
///
/// - Event 0 is game setup; event n (n >= 1) is the n-th suggestion of the game.
/// - Derives a per-event 64-bit seed by spreading `event` with the golden-ratio
///   constant and xoring it into `seed`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
#[inline]
pub fn rng_for_event(seed: u64, event: u64) -> impl Rng {
    let derived: u64 = seed ^ event.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    Pcg64::seed_from_u64(derived)
}

/// A fresh seed from the thread RNG, for production play.
#[inline]
pub fn fresh_seed() -> u64 {
    rand::random()
}
