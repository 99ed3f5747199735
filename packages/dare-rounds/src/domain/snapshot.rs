//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::state::{
    skips_remaining, AnswerRecord, GameState, Phase, PromptKind, Seat,
};

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub conversation_id: String,
    pub participants: [String; 2],
    pub round_no: u32,
    pub skips: [u8; 2],
    pub mandatory_done: bool,
    pub lock_version: i32,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    AwaitingSpin(AwaitingSpinSnapshot),
    Spinning,
    ChoosingType(ChoosingTypeSnapshot),
    AwaitingPrompt(AwaitingPromptSnapshot),
    AwaitingAnswer(AwaitingAnswerSnapshot),
    RoundResolved,
    Complete(CompleteSnapshot),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwaitingSpinSnapshot {
    /// Previous round's answer, for display between rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_answer: Option<AnswerRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChoosingTypeSnapshot {
    pub chooser: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwaitingPromptSnapshot {
    pub chooser: String,
    pub prompt_kind: PromptKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AwaitingAnswerSnapshot {
    pub responder: String,
    pub prompt_kind: PromptKind,
    pub prompt_text: String,
    pub responder_skips_left: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompleteSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_answer: Option<AnswerRecord>,
}

/// Actions a seat could take right now; used by the UI to enable or
/// disable controls without re-implementing the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Spin,
    ChooseKind,
    SetPrompt,
    SubmitAnswer,
    UseSkip,
    EndGame,
}

fn participant(state: &GameState, seat: Seat) -> String {
    state.participants[seat as usize].clone()
}

/// Build the UI-facing snapshot for the current phase.
///
/// Fields that are set but not meaningful in the current phase are simply
/// not surfaced, so consumers cannot depend on stale per-turn data.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let game = GameHeader {
        conversation_id: state.conversation_id.clone(),
        participants: state.participants.clone(),
        round_no: state.round_no,
        skips: state.skips,
        mandatory_done: state.mandatory_done,
        lock_version: state.lock_version,
    };

    let phase = match state.phase {
        Phase::AwaitingSpin => PhaseSnapshot::AwaitingSpin(AwaitingSpinSnapshot {
            last_answer: state.last_answer.clone(),
        }),
        Phase::Spinning => PhaseSnapshot::Spinning,
        Phase::ChoosingType => PhaseSnapshot::ChoosingType(ChoosingTypeSnapshot {
            chooser: state.chooser.map(|s| participant(state, s)).unwrap_or_default(),
        }),
        Phase::AwaitingPrompt => PhaseSnapshot::AwaitingPrompt(AwaitingPromptSnapshot {
            chooser: state.chooser.map(|s| participant(state, s)).unwrap_or_default(),
            prompt_kind: state.prompt_kind.unwrap_or(PromptKind::Truth),
        }),
        Phase::AwaitingAnswer => {
            let responder = state.responder.unwrap_or(0);
            PhaseSnapshot::AwaitingAnswer(AwaitingAnswerSnapshot {
                responder: participant(state, responder),
                prompt_kind: state.prompt_kind.unwrap_or(PromptKind::Truth),
                prompt_text: state.prompt_text.clone().unwrap_or_default(),
                responder_skips_left: skips_remaining(state, responder),
            })
        }
        Phase::RoundResolved => PhaseSnapshot::RoundResolved,
        Phase::Complete => PhaseSnapshot::Complete(CompleteSnapshot {
            last_answer: state.last_answer.clone(),
        }),
    };

    GameSnapshot { game, phase }
}

/// Actions `seat` may legally take in the current phase.
pub fn legal_actions(state: &GameState, seat: Seat) -> Vec<ActionKind> {
    let mut actions = Vec::new();
    match state.phase {
        Phase::AwaitingSpin => {
            actions.push(ActionKind::Spin);
            actions.push(ActionKind::EndGame);
        }
        Phase::ChoosingType => {
            if state.chooser == Some(seat) {
                actions.push(ActionKind::ChooseKind);
                if skips_remaining(state, seat) > 0 {
                    actions.push(ActionKind::UseSkip);
                }
            }
        }
        Phase::AwaitingPrompt => {
            actions.push(ActionKind::SetPrompt);
        }
        Phase::AwaitingAnswer => {
            if state.responder == Some(seat) {
                actions.push(ActionKind::SubmitAnswer);
                if skips_remaining(state, seat) > 0 {
                    actions.push(ActionKind::UseSkip);
                }
            }
        }
        Phase::Spinning | Phase::RoundResolved | Phase::Complete => {}
    }
    actions
}
