//! Deterministic falling-block engine driven by an external decision source.
//!
//! The engine plays a standard 10x20 falling-block game, but instead of a
//! human on a keyboard the falling piece is steered by a decision source
//! (typically a text-generation service) that is asked for exactly one
//! action per turn. The engine owns all rules: collision, gravity, line
//! clearing, scoring and game over. The decision source sees only a
//! textual snapshot of the board and answers with a JSON function call;
//! anything illegal or malformed degrades into a single auto-drop step, so
//! a misbehaving source can never wedge the game.
//!
//! Seeded piece generation makes whole games replayable: same seed plus
//! same decisions gives the same board, turn for turn.

pub mod ai;
pub mod core;
pub mod types;

pub use crate::ai::{AsyncSourceBridge, DecisionError, DecisionSource, MockSource};
pub use crate::core::{
    Board, ClearResult, DecisionRequest, GameConfig, GameEngine, TurnError, TurnOutcome, TurnPhase,
};
pub use crate::types::{Action, PieceKind, Position, Rotation};
