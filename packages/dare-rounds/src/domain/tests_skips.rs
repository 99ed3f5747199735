use crate::domain::errors::GameError;
use crate::domain::rounds::use_skip;
use crate::domain::state::{Phase, PromptKind};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};

#[test]
fn skip_decrements_by_exactly_one() {
    let mut state = make_game_state(
        ["alice", "bob"],
        MakeGameStateArgs {
            phase: Phase::ChoosingType,
            chooser: Some(0),
            responder: Some(1),
            ..Default::default()
        },
    );

    use_skip(&mut state, 0).unwrap();
    assert_eq!(state.skips, [2, 3]);
    assert_eq!(state.phase, Phase::AwaitingSpin);
    assert_eq!(state.round_no, 1);
}

#[test]
fn fourth_skip_fails_with_skip_exhausted() {
    let mut state = make_game_state(
        ["alice", "bob"],
        MakeGameStateArgs {
            phase: Phase::ChoosingType,
            chooser: Some(1),
            responder: Some(0),
            ..Default::default()
        },
    );

    for expected_left in [2u8, 1, 0] {
        use_skip(&mut state, 1).unwrap();
        assert_eq!(state.skips[1], expected_left);
        // Re-arm the same turn shape for the next attempt.
        state.phase = Phase::ChoosingType;
        state.chooser = Some(1);
        state.responder = Some(0);
    }

    let err = use_skip(&mut state, 1).unwrap_err();
    assert_eq!(err, GameError::SkipExhausted);
    assert_eq!(state.skips[1], 0, "budget never goes below zero");
    assert_eq!(state.phase, Phase::ChoosingType, "state untouched on failure");
}

#[test]
fn responder_may_skip_answering() {
    let mut state = make_game_state(
        ["alice", "bob"],
        MakeGameStateArgs {
            phase: Phase::AwaitingAnswer,
            chooser: Some(0),
            responder: Some(1),
            prompt_kind: Some(PromptKind::Dare),
            prompt_text: Some("Do the thing".to_string()),
            ..Default::default()
        },
    );

    use_skip(&mut state, 1).unwrap();
    assert_eq!(state.skips, [3, 2]);
    assert_eq!(state.round_no, 1);
    // Skip still credits the responder's mandatory round.
    assert_eq!(state.resolved_as_responder, [0, 1]);
}

#[test]
fn only_the_seat_on_the_hook_may_skip() {
    let mut state = make_game_state(
        ["alice", "bob"],
        MakeGameStateArgs {
            phase: Phase::AwaitingAnswer,
            chooser: Some(0),
            responder: Some(1),
            prompt_kind: Some(PromptKind::Truth),
            prompt_text: Some("prompt".to_string()),
            ..Default::default()
        },
    );

    // The chooser cannot burn the responder's turn.
    let err = use_skip(&mut state, 0).unwrap_err();
    assert_eq!(err, GameError::NotYourTurn { expected: 1 });
    assert_eq!(state.skips, [3, 3]);
}

#[test]
fn skip_is_invalid_between_rounds() {
    let mut state = make_game_state(["alice", "bob"], MakeGameStateArgs::default());
    assert!(matches!(
        use_skip(&mut state, 0),
        Err(GameError::InvalidPhase {
            op: "use_skip",
            found: Phase::AwaitingSpin
        })
    ));
}
