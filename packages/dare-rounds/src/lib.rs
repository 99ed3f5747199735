//! Truth-or-dare round engine for two-party conversations.
//!
//! The pure state machine lives in [`domain`]; persistence goes through
//! the [`store::GameStore`] seam (in-memory for demo mode, host-supplied
//! for live mode); [`services::GameFlowService`] ties the two together and
//! is the API hosts are expected to call.

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;

// Re-exports for public API
pub use config::{store_for, EngineConfig, StoreMode};
pub use domain::{
    AnswerBody, AnswerRecord, GameError, GameSnapshot, GameState, GameTransition, Phase,
    PromptKind, Seat, SKIP_BUDGET,
};
pub use error::AppError;
pub use services::{GameFlowService, MutationResult};
pub use store::{GameStore, MemoryStore, StoreError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rounds_test_support::logging::init();
}
