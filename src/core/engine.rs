//! Turn controller - the per-turn state machine
//!
//! Accepts exactly one external action per turn, validates it against the
//! board, and guarantees monotonic downward progress: an illegal action, a
//! failed decision call or a malformed response all degrade into a single
//! auto-drop step instead of an error, so the game can never stall on a
//! misbehaving decision source. The only terminal condition is the
//! explicit `GameOver` phase, which is a normal outcome, not an error.

use crate::ai::source::DecisionSource;
use crate::core::board::Board;
use crate::core::clear::{level_for, ClearResult};
use crate::core::generator::PieceGenerator;
use crate::core::pieces::Piece;
use crate::core::snapshot::build_request;
use crate::types::{Action, PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, MAX_MOVE_STEPS};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// RNG seed for the piece generator (deterministic replay)
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Read configuration from `TETRIS_WIDTH`, `TETRIS_HEIGHT` and
    /// `TETRIS_SEED`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let parse = |key: &str, fallback: usize| {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(fallback)
        };
        Self {
            width: parse("TETRIS_WIDTH", defaults.width),
            height: parse("TETRIS_HEIGHT", defaults.height),
            seed: std::env::var("TETRIS_SEED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.seed),
        }
    }
}

/// Per-turn phase. `Waiting` is the only phase from which a turn may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Waiting,
    Processing,
    GameOver,
}

/// Precondition and invariant failures surfaced to the caller.
/// None of these mutate the game.
#[derive(thiserror::Error, Debug)]
pub enum TurnError {
    #[error("engine is not running")]
    NotRunning,
    #[error("a turn is already in progress or the game is over")]
    NotWaiting,
    #[error("no active piece")]
    NoActivePiece,
    #[error("decision source is not ready")]
    SourceNotReady,
    #[error("piece could not be placed")]
    PlacementFailed,
}

/// The single synchronous result of one turn. Carries everything the
/// caller needs to dispatch notifications: no observer callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Human-readable description of what was applied, fallback paths
    /// composed with ` → `
    pub action: String,
    /// Present when the placement cleared at least one line
    pub clear: Option<ClearResult>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub game_over: bool,
}

/// One independent game instance: board, generator and turn state.
/// Constructible and disposable by the caller; no process-wide state.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    generator: PieceGenerator,
    active: Option<Piece>,
    phase: TurnPhase,
    running: bool,
    score: u32,
    lines: u32,
    level: u32,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.width, config.height);
        let generator = PieceGenerator::new(config.seed);
        Self {
            config,
            board,
            generator,
            active: None,
            phase: TurnPhase::Waiting,
            running: false,
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    /// Reset everything and spawn the first piece. The generator is
    /// re-seeded from the config, so every start replays the same piece
    /// sequence for a given seed.
    pub fn start(&mut self) {
        self.reset();
        self.generator = PieceGenerator::new(self.config.seed);
        self.running = true;
        let anchor = self.board.spawn_anchor();
        self.active = Some(self.generator.spawn_next(anchor));
    }

    /// Stop accepting turns without touching the board
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Return to the initial state: empty board, fresh stats, no active piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.generator.reset();
        self.active = None;
        self.phase = TurnPhase::Waiting;
        self.running = false;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn lookahead(&self) -> &[PieceKind] {
        self.generator.lookahead()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Run one turn: ask the decision source for an action, validate and
    /// apply it, then resolve landing, clears, spawning and game over.
    ///
    /// Precondition violations fail fast without mutating anything. Once a
    /// turn is accepted it always completes: decision failures and illegal
    /// actions fall back to a single auto-drop step.
    pub fn execute_turn<S: DecisionSource>(
        &mut self,
        source: &mut S,
    ) -> Result<TurnOutcome, TurnError> {
        if !self.running {
            return Err(TurnError::NotRunning);
        }
        if self.phase != TurnPhase::Waiting {
            return Err(TurnError::NotWaiting);
        }
        let Some(piece) = self.active else {
            return Err(TurnError::NoActivePiece);
        };
        if !source.is_ready() {
            return Err(TurnError::SourceNotReady);
        }

        self.phase = TurnPhase::Processing;
        let request = build_request(&self.board, &piece, &self.generator, source.policy());

        let result = match source.decide(&request) {
            Ok(action) => self.apply_action(action),
            Err(err) => self.auto_drop_step(format!("decision failed ({}) → auto drop", err)),
        };

        // Every resolution returns to Waiting unless the game ended
        if self.phase != TurnPhase::GameOver {
            self.phase = TurnPhase::Waiting;
        }
        result
    }

    fn apply_action(&mut self, action: Action) -> Result<TurnOutcome, TurnError> {
        let piece = self.active.ok_or(TurnError::NoActivePiece)?;
        let description = action.describe();

        // The protocol layer validates ranges, but a custom source can
        // hand over any Action; out-of-range steps are illegal here too
        // (and must not reach the i32 cast below).
        if let Action::MoveLeft { steps } | Action::MoveRight { steps } = action {
            if steps == 0 || steps > MAX_MOVE_STEPS {
                return self
                    .auto_drop_step(format!("illegal action ({}) → auto drop", description));
            }
        }

        let candidate = match action {
            Action::Rotate { degrees } => piece.rotated_by(degrees),
            Action::MoveLeft { steps } => piece.shifted(-(steps as i32), 0),
            Action::MoveRight { steps } => piece.shifted(steps as i32, 0),
            Action::Drop => {
                let mut target = piece.at(self.board.find_drop_position(&piece));
                if !self.board.can_place(&target) {
                    // Drop search is clamped, never surfaced as an error
                    eprintln!("[Engine] drop position invalid, keeping current position");
                    target = piece;
                }
                self.active = Some(target);
                return self.lock_active(description);
            }
        };

        // Illegal but non-fatal: discard the candidate and take one
        // gravity step with the original piece instead.
        if !self.board.can_place(&candidate) {
            return self.auto_drop_step(format!("illegal action ({}) → auto drop", description));
        }

        self.active = Some(candidate);
        if self.board.has_landed(&candidate) {
            return self.lock_active(description);
        }

        // Every legal non-drop action is followed by exactly one gravity tick
        self.auto_drop_step(format!("{} → gravity", description))
    }

    /// Advance the active piece one row down, locking it in place when it
    /// cannot move. Used as the fallback for illegal actions and failed
    /// decisions, and as the gravity tick after legal actions.
    fn auto_drop_step(&mut self, description: String) -> Result<TurnOutcome, TurnError> {
        let piece = self.active.ok_or(TurnError::NoActivePiece)?;

        if !self.board.can_place(&piece) {
            // Current position itself is invalid; lock where it stands
            return self.lock_active(format!("{} + landed in place", description));
        }

        let down = piece.shifted(0, 1);
        if !self.board.can_place(&down) {
            return self.lock_active(format!("{} + landed", description));
        }

        self.active = Some(down);
        if self.board.has_landed(&down) {
            return self.lock_active(format!("{} + landed", description));
        }

        Ok(self.outcome(description, None))
    }

    /// Place the active piece, score the clear, spawn the next piece and
    /// check for game over at the spawn anchor.
    fn lock_active(&mut self, description: String) -> Result<TurnOutcome, TurnError> {
        let piece = self.active.take().ok_or(TurnError::NoActivePiece)?;

        let Some(clear) = self.board.place_piece(&piece) else {
            self.active = Some(piece);
            return Err(TurnError::PlacementFailed);
        };

        if clear.lines_cleared > 0 {
            self.score += clear.points;
            self.lines += clear.lines_cleared;
            self.level = level_for(self.lines);
        }
        let clear = (clear.lines_cleared > 0).then_some(clear);

        let next = self.generator.spawn_next(self.board.spawn_anchor());
        if self.board.is_game_over(&next) {
            self.running = false;
            self.phase = TurnPhase::GameOver;
            let mut outcome = self.outcome(description, clear);
            outcome.game_over = true;
            return Ok(outcome);
        }

        self.active = Some(next);
        Ok(self.outcome(description, clear))
    }

    fn outcome(&self, action: String, clear: Option<ClearResult>) -> TurnOutcome {
        TurnOutcome {
            action,
            clear,
            score: self.score,
            lines: self.lines,
            level: self.level,
            game_over: false,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
