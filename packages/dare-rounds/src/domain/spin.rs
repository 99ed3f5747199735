//! Deterministic spin randomness.
//!
//! The chooser for each round is drawn uniformly over the two seats from a
//! seed derived from the game's base seed and the round number. Same game +
//! round always lands on the same chooser, so a demo-mode store and a
//! remote-backed store replay identical spin sequences. There is no forced
//! alternation across rounds.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::state::Seat;

/// Derive the RNG seed for one round's spin.
///
/// * `game_seed` - base seed fixed at game creation
/// * `round_no` - 0-based resolved-round counter
///
/// Unique per (game, round); wrapping arithmetic keeps it deterministic for
/// extreme base seeds.
pub fn derive_spin_seed(game_seed: i64, round_no: u32) -> u64 {
    let base = game_seed as u64;
    base.wrapping_add((round_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(1)
}

/// Uniform choice of the chooser seat for a spin seed.
pub fn chooser_for_seed(seed: u64) -> Seat {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.random_range(0..2u8)
}
