//! Builders for hand-crafting `GameState` values in unit tests.

use time::macros::datetime;

use crate::domain::rules::SKIP_BUDGET;
use crate::domain::state::{AnswerRecord, GameState, Phase, PromptKind, Seat};

pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub chooser: Option<Seat>,
    pub responder: Option<Seat>,
    pub prompt_kind: Option<PromptKind>,
    pub prompt_text: Option<String>,
    pub skips: [u8; 2],
    pub round_no: u32,
    pub resolved_as_responder: [u32; 2],
    pub mandatory_done: bool,
    pub last_answer: Option<AnswerRecord>,
    pub rng_seed: i64,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::AwaitingSpin,
            chooser: None,
            responder: None,
            prompt_kind: None,
            prompt_text: None,
            skips: [SKIP_BUDGET; 2],
            round_no: 0,
            resolved_as_responder: [0; 2],
            mandatory_done: false,
            last_answer: None,
            rng_seed: 42,
        }
    }
}

pub fn make_game_state(participants: [&str; 2], args: MakeGameStateArgs) -> GameState {
    let now = datetime!(2026-01-01 00:00:00 UTC);
    GameState {
        conversation_id: "conv-test".to_string(),
        participants: [participants[0].to_string(), participants[1].to_string()],
        chooser: args.chooser,
        responder: args.responder,
        prompt_kind: args.prompt_kind,
        prompt_text: args.prompt_text,
        skips: args.skips,
        round_no: args.round_no,
        phase: args.phase,
        resolved_as_responder: args.resolved_as_responder,
        mandatory_done: args.mandatory_done,
        last_answer: args.last_answer,
        rng_seed: args.rng_seed,
        lock_version: 0,
        created_at: now,
        updated_at: now,
    }
}
