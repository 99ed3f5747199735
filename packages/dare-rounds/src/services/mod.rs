//! Service layer: orchestrates pure domain logic over the store seam.

pub mod game_flow;

pub use game_flow::{GameFlowService, MutationResult};
