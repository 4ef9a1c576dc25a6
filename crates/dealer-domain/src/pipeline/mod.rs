//! The deals pipeline: stages, deal cards, and the Kanban board.

mod board;
mod deal;

pub use board::PipelineBoard;
pub use deal::{Deal, DealStage};
