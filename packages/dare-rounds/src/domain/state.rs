use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::errors::GameError;
use crate::domain::rules::{SEATS, SKIP_BUDGET};

pub type Seat = u8; // 0..=1

/// Phases of one truth-or-dare round, in order of progression.
///
/// "Uninitialized" is not a variant: a conversation with no game simply has
/// no `GameState` in the store.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Game created, no chooser assigned; waiting for a spin.
    AwaitingSpin,
    /// Chooser selection is in flight; committed by `commit_spin`.
    Spinning,
    /// The chooser must pick truth or dare.
    ChoosingType,
    /// Prompt kind chosen; waiting for the prompt text.
    AwaitingPrompt,
    /// Prompt set; waiting for the responder to answer or skip.
    AwaitingAnswer,
    /// A turn just resolved; transient, immediately advanced to
    /// `AwaitingSpin`. Never observed in a persisted state.
    RoundResolved,
    /// Terminal; only read accessors are accepted.
    Complete,
}

/// What the responder turned in, tagged by answer kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnswerBody {
    Text { text: String },
    Media { media_ref: String },
    Timed { seconds: u32 },
}

/// The most recently submitted answer, with who gave it and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub seat: Seat,
    /// Round number the answer resolved (pre-increment value).
    pub round_no: u32,
    pub body: AnswerBody,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Truth,
    Dare,
}

/// Entire per-conversation game container, sufficient for pure domain
/// operations. Mutated exclusively through `domain::rounds` functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Opaque conversation identifier, stable for the game's lifetime.
    pub conversation_id: String,
    /// The two participants, fixed at creation. Seat N is `participants[N]`.
    pub participants: [String; 2],
    /// Seat currently choosing truth or dare.
    /// - Some(seat) from ChoosingType through AwaitingAnswer
    /// - None between rounds and before the first spin
    pub chooser: Option<Seat>,
    /// Seat obligated to answer the active prompt. When both chooser and
    /// responder are set they differ.
    pub responder: Option<Seat>,
    pub prompt_kind: Option<PromptKind>,
    pub prompt_text: Option<String>,
    /// Remaining skips per seat; starts at `SKIP_BUDGET`, never refills.
    pub skips: [u8; 2],
    /// Resolved-turn counter, 0-based. Incremented when an answer lands or
    /// a skip ends the turn.
    pub round_no: u32,
    pub phase: Phase,
    /// Rounds each seat has resolved as responder (answer or skipped).
    pub resolved_as_responder: [u32; 2],
    /// Monotonic: once true, never reverts.
    pub mandatory_done: bool,
    pub last_answer: Option<AnswerRecord>,
    /// Base seed fixed at init; per-round spin seeds derive from it so
    /// demo and live providers replay the same chooser sequence.
    pub rng_seed: i64,
    /// Optimistic concurrency token; bumped by the service on every
    /// successful mutation.
    pub lock_version: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// The other seat in a two-party game (0 ↔ 1).
#[inline]
pub fn other_seat(seat: Seat) -> Seat {
    debug_assert!((seat as usize) < SEATS);
    seat ^ 1
}

/// Resolve a participant identifier to its seat.
pub fn seat_of(state: &GameState, participant_id: &str) -> Result<Seat, GameError> {
    state
        .participants
        .iter()
        .position(|p| p == participant_id)
        .map(|i| i as Seat)
        .ok_or_else(|| {
            GameError::InvalidParticipants(format!(
                "'{participant_id}' is not part of this game"
            ))
        })
}

/// Remaining skips for a seat; total over both seats never exceeds
/// `2 * SKIP_BUDGET`.
pub fn skips_remaining(state: &GameState, seat: Seat) -> u8 {
    state
        .skips
        .get(seat as usize)
        .copied()
        .unwrap_or(SKIP_BUDGET)
}

pub fn is_mandatory_complete(state: &GameState) -> bool {
    state.mandatory_done
}

pub fn require_chooser(state: &GameState, ctx: &'static str) -> Result<Seat, GameError> {
    state.chooser.ok_or_else(|| {
        GameError::Other(format!("Invariant violated: chooser must be set ({ctx})"))
    })
}

pub fn require_responder(state: &GameState, ctx: &'static str) -> Result<Seat, GameError> {
    state.responder.ok_or_else(|| {
        GameError::Other(format!("Invariant violated: responder must be set ({ctx})"))
    })
}
