use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::state::{Phase, Seat};

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    InvalidParticipants(String),
    AlreadyInitialized,
    InvalidPhase { op: &'static str, found: Phase },
    NotYourTurn { expected: Seat },
    EmptyPrompt,
    SkipExhausted,
    Other(String),
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            GameError::InvalidParticipants(s) => write!(f, "invalid participants: {s}"),
            GameError::AlreadyInitialized => write!(f, "game already initialized"),
            GameError::InvalidPhase { op, found } => {
                write!(f, "{op} not permitted in phase {found:?}")
            }
            GameError::NotYourTurn { expected } => {
                write!(f, "not your turn (seat {expected} must act)")
            }
            GameError::EmptyPrompt => write!(f, "prompt text must not be blank"),
            GameError::SkipExhausted => write!(f, "no skips remaining"),
            GameError::Other(s) => write!(f, "game error: {s}"),
        }
    }
}

impl Error for GameError {}
