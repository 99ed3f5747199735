//! Persistence seam for game state.
//!
//! The engine never talks to a concrete backend; it reads and writes whole
//! `GameState` records through `GameStore`. Demo mode is served by the
//! in-memory provider in this crate; a remote-backed provider is supplied
//! by the host app and must meet the same contract: `find` returns `None`
//! for an uninitialized conversation, and `update` applies the whole
//! record atomically with a lock-version compare-and-set.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::GameState;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game already exists for conversation {conversation_id}")]
    AlreadyExists { conversation_id: String },

    #[error("no game for conversation {conversation_id}")]
    NotFound { conversation_id: String },

    #[error("stale write for conversation {conversation_id}: expected version {expected}, found {found}")]
    VersionConflict {
        conversation_id: String,
        expected: i32,
        found: i32,
    },

    #[error("store backend error: {detail}")]
    Backend { detail: String },
}

/// Uniform read/write contract over whatever holds game state.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Read the full state for a conversation; `None` means no game has
    /// been initialized.
    async fn find(&self, conversation_id: &str) -> Result<Option<GameState>, StoreError>;

    /// Create the game record. Fails with `AlreadyExists` if the
    /// conversation already has one; never silently resets.
    async fn insert(&self, state: GameState) -> Result<(), StoreError>;

    /// Replace the stored record. The incoming `lock_version` must be
    /// exactly one ahead of the stored one, otherwise `VersionConflict`.
    async fn update(&self, state: GameState) -> Result<(), StoreError>;
}
