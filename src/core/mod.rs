//! Core game logic: board, pieces, generator, line clearing and the
//! turn controller. Pure and synchronous; no I/O beyond diagnostics.

pub mod board;
pub mod clear;
pub mod engine;
pub mod generator;
pub mod pieces;
pub mod snapshot;

pub use board::Board;
pub use clear::ClearResult;
pub use engine::{GameConfig, GameEngine, TurnError, TurnOutcome, TurnPhase};
pub use generator::PieceGenerator;
pub use pieces::{shape, Piece, Shape};
pub use snapshot::{build_request, piece_text, DecisionRequest};
