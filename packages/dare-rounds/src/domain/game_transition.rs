use crate::domain::state::{GameState, Phase, Seat};

/// The slice of game state needed to derive edge transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFlowView {
    pub phase: Phase,
    pub round_no: u32,
    pub chooser: Option<Seat>,
    pub skips: [u8; 2],
    pub mandatory_done: bool,
}

impl From<&GameState> for GameFlowView {
    fn from(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            round_no: state.round_no,
            chooser: state.chooser,
            skips: state.skips,
            mandatory_done: state.mandatory_done,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the spin landed and a seat became the chooser.
    TurnBecame { chooser: Seat },

    /// Edge-triggered: a turn resolved (answer or skip); `round_no` is the
    /// post-resolution counter.
    RoundResolved { round_no: u32 },

    /// Explicit: a seat spent one skip.
    SkipSpent { seat: Seat },

    /// Edge-triggered: both seats have now cleared their mandatory round.
    MandatoryComplete,

    /// Edge-triggered: the game reached its terminal phase.
    GameEnded,
}

/// Derive domain transitions from before/after flow views.
///
/// The service layer logs these and hands them to callers so notification
/// fan-out never has to diff raw state itself.
pub fn derive_transitions(before: &GameFlowView, after: &GameFlowView) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Chooser assignment
    if let Some(chooser) = after.chooser {
        if before.chooser != Some(chooser) {
            transitions.push(GameTransition::TurnBecame { chooser });
        }
    }

    // 2. Turn resolution
    if after.round_no > before.round_no {
        transitions.push(GameTransition::RoundResolved {
            round_no: after.round_no,
        });
    }

    // 3. Skip spend (at most one seat per mutation)
    for seat in 0..2u8 {
        if after.skips[seat as usize] < before.skips[seat as usize] {
            transitions.push(GameTransition::SkipSpent { seat });
        }
    }

    // 4. Mandatory opening rounds cleared (monotonic, fires once)
    if !before.mandatory_done && after.mandatory_done {
        transitions.push(GameTransition::MandatoryComplete);
    }

    // 5. Game end (!Complete -> Complete)
    if before.phase != Phase::Complete && after.phase == Phase::Complete {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
