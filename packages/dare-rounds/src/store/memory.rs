//! In-memory game store: the demo-mode provider.
//!
//! Holds every game in a concurrent map and serializes writes per
//! conversation through the map's per-entry locking plus the lock-version
//! compare-and-set. Suitable for demo/offline mode and tests; contents do
//! not survive the process.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{GameStore, StoreError};
use crate::domain::GameState;

#[derive(Default)]
pub struct MemoryStore {
    games: DashMap<String, GameState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of games currently held. Test/diagnostic helper.
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn find(&self, conversation_id: &str) -> Result<Option<GameState>, StoreError> {
        Ok(self.games.get(conversation_id).map(|g| g.clone()))
    }

    async fn insert(&self, state: GameState) -> Result<(), StoreError> {
        let conversation_id = state.conversation_id.clone();
        match self.games.entry(conversation_id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(StoreError::AlreadyExists { conversation_id })
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                debug!(%conversation_id, "game created in memory store");
                entry.insert(state);
                Ok(())
            }
        }
    }

    async fn update(&self, state: GameState) -> Result<(), StoreError> {
        let conversation_id = state.conversation_id.clone();
        match self.games.entry(conversation_id.clone()) {
            dashmap::mapref::entry::Entry::Vacant(_) => {
                Err(StoreError::NotFound { conversation_id })
            }
            dashmap::mapref::entry::Entry::Occupied(mut entry) => {
                let stored = entry.get();
                if state.lock_version != stored.lock_version + 1 {
                    return Err(StoreError::VersionConflict {
                        conversation_id,
                        expected: stored.lock_version + 1,
                        found: state.lock_version,
                    });
                }
                debug!(
                    %conversation_id,
                    lock_version = state.lock_version,
                    "game updated in memory store"
                );
                entry.insert(state);
                Ok(())
            }
        }
    }
}
