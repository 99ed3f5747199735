//! Domain layer: pure truth-or-dare round logic.

pub mod errors;
pub mod game_transition;
pub mod rounds;
pub mod rules;
pub mod snapshot;
pub mod spin;
pub mod state;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_rounds;
#[cfg(test)]
mod tests_skips;

// Re-exports for ergonomics
pub use errors::GameError;
pub use game_transition::{derive_transitions, GameFlowView, GameTransition};
pub use rounds::{
    choose_kind, commit_spin, end_game, init_game, set_prompt, spin, submit_answer, use_skip,
};
pub use rules::{mandatory_rounds_required, SKIP_BUDGET};
pub use snapshot::{legal_actions, snapshot, ActionKind, GameSnapshot, PhaseSnapshot};
pub use spin::{chooser_for_seed, derive_spin_seed};
pub use state::{
    is_mandatory_complete, other_seat, seat_of, skips_remaining, AnswerBody, AnswerRecord,
    GameState, Phase, PromptKind, Seat,
};
