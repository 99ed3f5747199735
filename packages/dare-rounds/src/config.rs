//! Engine configuration, injected at construction time.
//!
//! Demo-vs-live selection happens exactly once, when the store is built;
//! nothing deeper in the engine branches on the mode.

use std::env;
use std::sync::Arc;

use crate::error::AppError;
use crate::store::{GameStore, MemoryStore};

/// Which provider backs game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// All state held and mutated locally, no backend round-trip.
    Demo,
    /// A host-supplied remote-backed store.
    Remote,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub store_mode: StoreMode,
    /// Fixed base seed for spin randomness. `None` draws a fresh seed per
    /// game; set it for reproducible demo sessions.
    pub rng_seed: Option<i64>,
}

impl EngineConfig {
    pub fn demo() -> Self {
        Self {
            store_mode: StoreMode::Demo,
            rng_seed: None,
        }
    }

    /// Build configuration from environment variables.
    ///
    /// - `DARE_STORE_MODE`: `demo` (default) or `remote`
    /// - `DARE_RNG_SEED`: optional i64 for reproducible spins
    pub fn from_env() -> Result<Self, AppError> {
        let store_mode = match env::var("DARE_STORE_MODE") {
            Err(_) => StoreMode::Demo,
            Ok(v) => match v.to_ascii_lowercase().as_str() {
                "demo" => StoreMode::Demo,
                "remote" => StoreMode::Remote,
                other => {
                    return Err(AppError::config(format!(
                        "DARE_STORE_MODE must be 'demo' or 'remote', got '{other}'"
                    )))
                }
            },
        };

        let rng_seed = match env::var("DARE_RNG_SEED") {
            Err(_) => None,
            Ok(v) => Some(v.parse::<i64>().map_err(|_| {
                AppError::config(format!("DARE_RNG_SEED must be an integer, got '{v}'"))
            })?),
        };

        Ok(Self {
            store_mode,
            rng_seed,
        })
    }
}

/// Provider factory: the one place the store mode is consulted.
///
/// Remote mode has no in-crate implementation; the host app owns its
/// backend client and passes its own `GameStore` straight to
/// `GameFlowService::new`.
pub fn store_for(config: &EngineConfig) -> Result<Arc<dyn GameStore>, AppError> {
    match config.store_mode {
        StoreMode::Demo => Ok(Arc::new(MemoryStore::new())),
        StoreMode::Remote => Err(AppError::config(
            "remote store mode requires a host-supplied GameStore".to_string(),
        )),
    }
}
