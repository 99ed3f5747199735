//! Pure round transition logic.
//!
//! Every function here is a synchronous, in-place transition over
//! `GameState` with no I/O. Phase and turn checks happen on every call;
//! callers (including the UI) are never trusted to have pre-validated.

use time::OffsetDateTime;

use crate::domain::errors::GameError;
use crate::domain::rules::{MANDATORY_ROUNDS_PER_SEAT, SKIP_BUDGET};
use crate::domain::spin::{chooser_for_seed, derive_spin_seed};
use crate::domain::state::{
    other_seat, require_chooser, require_responder, AnswerBody, AnswerRecord, GameState, Phase,
    PromptKind, Seat,
};

/// Build a fresh game in `AwaitingSpin`.
///
/// Participant ids must be two distinct, non-blank strings. This only
/// constructs the state; duplicate-init detection against an existing game
/// is the service layer's job (it owns the store lookup).
pub fn init_game(
    conversation_id: impl Into<String>,
    participants: [String; 2],
    rng_seed: i64,
    now: OffsetDateTime,
) -> Result<GameState, GameError> {
    let [a, b] = &participants;
    if a.trim().is_empty() || b.trim().is_empty() {
        return Err(GameError::InvalidParticipants(
            "participant ids must be non-empty".into(),
        ));
    }
    if a == b {
        return Err(GameError::InvalidParticipants(format!(
            "participants must be distinct, got '{a}' twice"
        )));
    }

    Ok(GameState {
        conversation_id: conversation_id.into(),
        participants,
        chooser: None,
        responder: None,
        prompt_kind: None,
        prompt_text: None,
        skips: [SKIP_BUDGET; 2],
        round_no: 0,
        phase: Phase::AwaitingSpin,
        resolved_as_responder: [0; 2],
        mandatory_done: false,
        last_answer: None,
        rng_seed,
        lock_version: 0,
        created_at: now,
        updated_at: now,
    })
}

/// Spin for the round's chooser: `AwaitingSpin` → `Spinning` →
/// `ChoosingType` in one call, with the chooser drawn from the game's
/// per-round seed.
pub fn spin(state: &mut GameState) -> Result<(), GameError> {
    if state.phase != Phase::AwaitingSpin {
        return Err(GameError::InvalidPhase {
            op: "spin",
            found: state.phase,
        });
    }
    state.phase = Phase::Spinning;

    let seed = derive_spin_seed(state.rng_seed, state.round_no);
    commit_spin(state, chooser_for_seed(seed))
}

/// Commit a spin result: assigns chooser/responder and moves to
/// `ChoosingType`. Split out of `spin` so a host that animates the wheel
/// (or replays a recorded spin) can commit an externally chosen seat.
pub fn commit_spin(state: &mut GameState, chooser: Seat) -> Result<(), GameError> {
    if state.phase != Phase::Spinning {
        return Err(GameError::InvalidPhase {
            op: "commit_spin",
            found: state.phase,
        });
    }
    if (chooser as usize) >= 2 {
        return Err(GameError::Other(format!("invalid chooser seat {chooser}")));
    }
    state.chooser = Some(chooser);
    state.responder = Some(other_seat(chooser));
    state.phase = Phase::ChoosingType;
    Ok(())
}

/// The chooser picks truth or dare.
pub fn choose_kind(state: &mut GameState, actor: Seat, kind: PromptKind) -> Result<(), GameError> {
    if state.phase != Phase::ChoosingType {
        return Err(GameError::InvalidPhase {
            op: "choose_kind",
            found: state.phase,
        });
    }
    let chooser = require_chooser(state, "choose_kind")?;
    if actor != chooser {
        return Err(GameError::NotYourTurn { expected: chooser });
    }
    state.prompt_kind = Some(kind);
    state.phase = Phase::AwaitingPrompt;
    Ok(())
}

/// Supply the prompt text. Either party (or an external content source)
/// may set it, so there is no actor check; moderation of the text belongs
/// to the host's content filter, not this engine.
pub fn set_prompt(state: &mut GameState, text: &str) -> Result<(), GameError> {
    if state.phase != Phase::AwaitingPrompt {
        return Err(GameError::InvalidPhase {
            op: "set_prompt",
            found: state.phase,
        });
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GameError::EmptyPrompt);
    }
    state.prompt_text = Some(trimmed.to_string());
    state.phase = Phase::AwaitingAnswer;
    Ok(())
}

/// The responder answers the active prompt; the round resolves and the
/// game returns to `AwaitingSpin`.
pub fn submit_answer(
    state: &mut GameState,
    actor: Seat,
    body: AnswerBody,
) -> Result<(), GameError> {
    if state.phase != Phase::AwaitingAnswer {
        return Err(GameError::InvalidPhase {
            op: "submit_answer",
            found: state.phase,
        });
    }
    let responder = require_responder(state, "submit_answer")?;
    if actor != responder {
        return Err(GameError::NotYourTurn {
            expected: responder,
        });
    }
    state.last_answer = Some(AnswerRecord {
        seat: responder,
        round_no: state.round_no,
        body,
    });
    resolve_round(state)
}

/// Spend a skip to end the current turn without an answer.
///
/// Only the seat currently on the hook may skip: the chooser while
/// choosing, the responder while answering. An exhausted budget is a
/// recoverable, caller-checked condition; the state is left untouched.
pub fn use_skip(state: &mut GameState, actor: Seat) -> Result<(), GameError> {
    let on_the_hook = match state.phase {
        Phase::ChoosingType => require_chooser(state, "use_skip")?,
        Phase::AwaitingAnswer => require_responder(state, "use_skip")?,
        found => {
            return Err(GameError::InvalidPhase {
                op: "use_skip",
                found,
            })
        }
    };
    if actor != on_the_hook {
        return Err(GameError::NotYourTurn {
            expected: on_the_hook,
        });
    }
    if state.skips[actor as usize] == 0 {
        return Err(GameError::SkipExhausted);
    }
    state.skips[actor as usize] -= 1;
    resolve_round(state)
}

/// Explicit end-of-game trigger, accepted between rounds only.
pub fn end_game(state: &mut GameState) -> Result<(), GameError> {
    if state.phase != Phase::AwaitingSpin {
        return Err(GameError::InvalidPhase {
            op: "end_game",
            found: state.phase,
        });
    }
    state.phase = Phase::Complete;
    Ok(())
}

/// Book a resolved turn: credit the responder, bump the round counter,
/// re-evaluate mandatory completion, and open the next round.
///
/// A skipped turn counts the same as an answered one here; `last_answer`
/// is whatever the caller left in place (set for answers, prior value for
/// skips).
fn resolve_round(state: &mut GameState) -> Result<(), GameError> {
    let responder = require_responder(state, "resolve_round")?;
    state.phase = Phase::RoundResolved;

    state.round_no += 1;
    state.resolved_as_responder[responder as usize] += 1;
    if !state.mandatory_done
        && state
            .resolved_as_responder
            .iter()
            .all(|&n| n >= MANDATORY_ROUNDS_PER_SEAT)
    {
        state.mandatory_done = true;
    }

    begin_next_round(state);
    Ok(())
}

/// Clear per-turn fields and return to `AwaitingSpin`.
fn begin_next_round(state: &mut GameState) {
    state.chooser = None;
    state.responder = None;
    state.prompt_kind = None;
    state.prompt_text = None;
    state.phase = Phase::AwaitingSpin;
}
