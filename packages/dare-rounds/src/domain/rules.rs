pub const SEATS: usize = 2;

/// Skips each participant starts the game with. The budget never refills.
pub const SKIP_BUDGET: u8 = 3;

/// Rounds each seat must resolve as responder before the mandatory
/// opening phase of the game is considered finished.
pub const MANDATORY_ROUNDS_PER_SEAT: u32 = 1;

/// Total resolved rounds required before `mandatory_done` can flip.
pub fn mandatory_rounds_required() -> u32 {
    MANDATORY_ROUNDS_PER_SEAT * SEATS as u32
}
