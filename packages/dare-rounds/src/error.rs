//! App-level error type returned by the service layer.
//!
//! Domain and store errors are converted here with stable string codes so
//! hosts can branch on `code()` without matching on internals. All domain
//! conditions are recoverable; nothing in this engine panics for expected
//! input.

use thiserror::Error;

use crate::domain::GameError;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Store error: {detail}")]
    Store { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Conflict { code, .. } => code,
            AppError::Store { .. } => "STORE_ERROR",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        let detail = err.to_string();
        match err {
            GameError::InvalidParticipants(_) => {
                AppError::invalid("INVALID_PARTICIPANTS", detail)
            }
            GameError::AlreadyInitialized => {
                AppError::conflict("ALREADY_INITIALIZED", detail)
            }
            GameError::InvalidPhase { .. } => AppError::invalid("INVALID_PHASE", detail),
            GameError::NotYourTurn { .. } => AppError::invalid("NOT_YOUR_TURN", detail),
            GameError::EmptyPrompt => AppError::invalid("EMPTY_PROMPT", detail),
            GameError::SkipExhausted => AppError::invalid("SKIP_EXHAUSTED", detail),
            GameError::Other(_) => AppError::internal(detail),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists { .. } => {
                AppError::conflict("ALREADY_INITIALIZED", err.to_string())
            }
            StoreError::NotFound { .. } => {
                AppError::not_found("GAME_NOT_FOUND", err.to_string())
            }
            StoreError::VersionConflict { .. } => {
                AppError::conflict("OPTIMISTIC_LOCK", err.to_string())
            }
            StoreError::Backend { detail } => AppError::Store { detail },
        }
    }
}
