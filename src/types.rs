//! Core types shared across the crate.
//! This module contains pure data types with no external dependencies.

/// Default board dimensions (cells)
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Number of upcoming pieces exposed to the decision source
pub const LOOKAHEAD: usize = 3;

/// Points per simultaneous line clear, indexed by line count (1..=4)
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines required per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Maximum horizontal steps a single move action may request
pub const MAX_MOVE_STEPS: u32 = 20;

/// Snapshot characters for the textual board/piece representation.
/// These are the wire format consumed by the decision source and must
/// stay stable.
pub const CELL_EMPTY: char = '.';
pub const CELL_FILLED: char = '+';
pub const CELL_ACTIVE: char = '×';

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in canonical order (one bag's worth)
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states, indexed 0..3 (R0 = spawn orientation).
/// A 90 degree clockwise turn advances the index by one, modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn index(&self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Rotation from an index (taken modulo 4)
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::R0,
            1 => Rotation::R90,
            2 => Rotation::R180,
            _ => Rotation::R270,
        }
    }

    /// Advance clockwise by a multiple of 90 degrees
    pub fn advanced_by_degrees(&self, degrees: u16) -> Self {
        Self::from_index(self.index() + (degrees as usize) / 90)
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Grid position (top-left anchor of a piece's 4x4 mask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One validated action supplied by the decision source per turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Clockwise rotation by 90, 180 or 270 degrees
    Rotate { degrees: u16 },
    /// Horizontal shift, 1..=20 cells
    MoveLeft { steps: u32 },
    MoveRight { steps: u32 },
    /// Drop straight to the lowest reachable position
    Drop,
}

impl Action {
    /// Human-readable label used in turn results
    pub fn describe(&self) -> String {
        match self {
            Action::Rotate { degrees } => format!("rotate {}°", degrees),
            Action::MoveLeft { steps } => format!("move left {}", steps),
            Action::MoveRight { steps } => format!("move right {}", steps),
            Action::Drop => "drop".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_index_roundtrip() {
        for i in 0..4 {
            assert_eq!(Rotation::from_index(i).index(), i);
        }
        assert_eq!(Rotation::from_index(5), Rotation::R90);
    }

    #[test]
    fn test_rotation_advance_by_degrees() {
        assert_eq!(Rotation::R0.advanced_by_degrees(90), Rotation::R90);
        assert_eq!(Rotation::R0.advanced_by_degrees(180), Rotation::R180);
        assert_eq!(Rotation::R90.advanced_by_degrees(270), Rotation::R0);
        assert_eq!(Rotation::R270.advanced_by_degrees(90), Rotation::R0);
    }

    #[test]
    fn test_piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn test_action_describe() {
        assert_eq!(Action::Rotate { degrees: 90 }.describe(), "rotate 90°");
        assert_eq!(Action::MoveLeft { steps: 2 }.describe(), "move left 2");
        assert_eq!(Action::Drop.describe(), "drop");
    }
}
