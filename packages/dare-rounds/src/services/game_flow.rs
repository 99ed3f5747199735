//! Game flow orchestration service - bridges pure domain logic with the
//! configured store.
//!
//! Every mutating call loads the current state, re-validates through the
//! domain functions (the UI is never trusted to have pre-validated),
//! persists with a lock-version bump, and reports the edge transitions the
//! mutation caused.

use std::sync::Arc;

use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::domain::{
    self, derive_transitions, legal_actions, seat_of, snapshot, ActionKind, AnswerBody,
    GameFlowView, GameSnapshot, GameState, GameTransition, PromptKind, SKIP_BUDGET,
};
use crate::error::AppError;
use crate::store::{GameStore, MemoryStore};

/// Outcome of a successful mutation: the fresh snapshot plus the edge
/// transitions it caused, for notification fan-out.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    pub snapshot: GameSnapshot,
    pub transitions: Vec<GameTransition>,
}

pub struct GameFlowService {
    store: Arc<dyn GameStore>,
    config: EngineConfig,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn GameStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Demo-mode service over a fresh in-memory store.
    pub fn demo() -> Self {
        Self::new(Arc::new(MemoryStore::new()), EngineConfig::demo())
    }

    /// Create the game for a conversation. Idempotence contract: a second
    /// init for the same conversation fails with `ALREADY_INITIALIZED` and
    /// leaves the stored game untouched; it never silently resets.
    pub async fn init_game(
        &self,
        conversation_id: &str,
        participants: [&str; 2],
    ) -> Result<GameSnapshot, AppError> {
        if conversation_id.trim().is_empty() {
            return Err(AppError::invalid(
                "INVALID_CONVERSATION",
                "conversation id must be non-empty".to_string(),
            ));
        }
        if self.store.find(conversation_id).await?.is_some() {
            return Err(domain::GameError::AlreadyInitialized.into());
        }

        let rng_seed = self
            .config
            .rng_seed
            .unwrap_or_else(|| rand::rng().random::<i64>());
        let state = domain::init_game(
            conversation_id,
            [participants[0].to_string(), participants[1].to_string()],
            rng_seed,
            OffsetDateTime::now_utc(),
        )?;

        // A concurrent init can still lose the race here; the store's
        // insert is the authoritative duplicate check.
        self.store.insert(state.clone()).await?;
        info!(
            conversation_id,
            participant_a = participants[0],
            participant_b = participants[1],
            "game initialized"
        );
        Ok(snapshot(&state))
    }

    /// Spin for this round's chooser.
    pub async fn spin(
        &self,
        conversation_id: &str,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        debug!(conversation_id, "spinning for chooser");
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        domain::spin(&mut state)?;

        self.persist(before, state).await
    }

    /// The chooser picks truth or dare.
    pub async fn choose_kind(
        &self,
        conversation_id: &str,
        participant_id: &str,
        kind: PromptKind,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        debug!(conversation_id, participant_id, kind = ?kind, "choosing prompt kind");
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        let actor = seat_of(&state, participant_id)?;
        domain::choose_kind(&mut state, actor, kind)?;

        self.persist(before, state).await
    }

    /// Supply the prompt text for the active round.
    pub async fn set_prompt(
        &self,
        conversation_id: &str,
        text: &str,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        debug!(conversation_id, "setting prompt");
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        domain::set_prompt(&mut state, text)?;

        self.persist(before, state).await
    }

    /// The responder submits their answer; the round resolves.
    pub async fn submit_answer(
        &self,
        conversation_id: &str,
        participant_id: &str,
        body: AnswerBody,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        debug!(conversation_id, participant_id, "submitting answer");
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        let actor = seat_of(&state, participant_id)?;
        domain::submit_answer(&mut state, actor, body)?;

        info!(
            conversation_id,
            participant_id,
            round_no = state.round_no,
            "answer recorded, round resolved"
        );
        self.persist(before, state).await
    }

    /// Spend a skip to end the current turn without an answer.
    pub async fn use_skip(
        &self,
        conversation_id: &str,
        participant_id: &str,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        debug!(conversation_id, participant_id, "using skip");
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        let actor = seat_of(&state, participant_id)?;
        domain::use_skip(&mut state, actor)?;

        info!(
            conversation_id,
            participant_id,
            skips_left = state.skips[actor as usize],
            round_no = state.round_no,
            "skip consumed, round resolved"
        );
        self.persist(before, state).await
    }

    /// Explicitly end the game. Accepted between rounds only.
    pub async fn end_game(
        &self,
        conversation_id: &str,
        expected_lock_version: Option<i32>,
    ) -> Result<MutationResult, AppError> {
        let mut state = self.require_game(conversation_id).await?;
        check_lock(&state, expected_lock_version)?;
        let before = GameFlowView::from(&state);

        domain::end_game(&mut state)?;

        info!(conversation_id, round_no = state.round_no, "game ended");
        self.persist(before, state).await
    }

    /// Remaining skips for a participant.
    ///
    /// Never fails: unknown conversations and unknown participants read as
    /// the full budget so UI reads stay crash-free. Production turn logic
    /// must not rely on this default masking an uninitialized game.
    pub async fn skips_remaining(&self, conversation_id: &str, participant_id: &str) -> u8 {
        match self.store.find(conversation_id).await {
            Ok(Some(state)) => match seat_of(&state, participant_id) {
                Ok(seat) => domain::skips_remaining(&state, seat),
                Err(_) => SKIP_BUDGET,
            },
            Ok(None) => SKIP_BUDGET,
            Err(err) => {
                warn!(conversation_id, error = %err, "skip read fell back to default");
                SKIP_BUDGET
            }
        }
    }

    /// Whether both participants have cleared their mandatory opening
    /// round. Unknown conversations read as `false`.
    pub async fn is_mandatory_complete(&self, conversation_id: &str) -> bool {
        match self.store.find(conversation_id).await {
            Ok(Some(state)) => domain::is_mandatory_complete(&state),
            Ok(None) => false,
            Err(err) => {
                warn!(conversation_id, error = %err, "mandatory read fell back to default");
                false
            }
        }
    }

    /// Current UI-facing snapshot for the conversation's game.
    pub async fn snapshot(&self, conversation_id: &str) -> Result<GameSnapshot, AppError> {
        let state = self.require_game(conversation_id).await?;
        Ok(snapshot(&state))
    }

    /// Actions the participant may take right now; empty for unknown
    /// games/participants.
    pub async fn legal_actions(
        &self,
        conversation_id: &str,
        participant_id: &str,
    ) -> Vec<ActionKind> {
        match self.store.find(conversation_id).await {
            Ok(Some(state)) => match seat_of(&state, participant_id) {
                Ok(seat) => legal_actions(&state, seat),
                Err(_) => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    async fn require_game(&self, conversation_id: &str) -> Result<GameState, AppError> {
        self.store
            .find(conversation_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "GAME_NOT_FOUND",
                    format!("no game for conversation '{conversation_id}'"),
                )
            })
    }

    /// Bump the lock version, stamp the update time, write through the
    /// store, and derive the edge transitions the mutation caused.
    async fn persist(
        &self,
        before: GameFlowView,
        mut state: GameState,
    ) -> Result<MutationResult, AppError> {
        state.lock_version += 1;
        state.updated_at = OffsetDateTime::now_utc();

        let after = GameFlowView::from(&state);
        let transitions = derive_transitions(&before, &after);

        self.store.update(state.clone()).await?;

        for transition in &transitions {
            debug!(
                conversation_id = %state.conversation_id,
                transition = ?transition,
                "game transition"
            );
        }

        Ok(MutationResult {
            snapshot: snapshot(&state),
            transitions,
        })
    }
}

/// Optimistic concurrency check against the caller's last-seen version.
fn check_lock(state: &GameState, expected_lock_version: Option<i32>) -> Result<(), AppError> {
    if let Some(expected) = expected_lock_version {
        if state.lock_version != expected {
            return Err(AppError::conflict(
                "OPTIMISTIC_LOCK",
                format!(
                    "game was modified concurrently (expected version {expected}, actual version {}); refresh and retry",
                    state.lock_version
                ),
            ));
        }
    }
    Ok(())
}
