//! Piece catalog - the 7 tetromino kinds with 4 precomputed rotation masks each
//!
//! Every rotation state is a canonical 4x4 occupancy constant. Shapes are
//! never derived at runtime by matrix rotation: only these states are valid
//! (there are no wall-kick variants in this rule set).

use crate::types::{PieceKind, Position, Rotation};

/// 4x4 occupancy mask for one rotation state of one piece kind.
///
/// Row `y` is stored as a 4-bit value read left to right, so the binary
/// literals below line up visually with the shape (`0b0110` = columns 1, 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [u8; 4],
}

impl Shape {
    /// Side length of the mask
    pub const SIZE: usize = 4;

    const fn new(rows: [u8; 4]) -> Self {
        Self { rows }
    }

    /// Whether cell (x, y) of the mask is occupied
    #[inline]
    pub fn occupied(&self, x: usize, y: usize) -> bool {
        x < Self::SIZE && y < Self::SIZE && self.rows[y] & (0b1000 >> x) != 0
    }

    /// Iterate the occupied cells of the mask as (x, y) offsets
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..Self::SIZE).flat_map(move |y| {
            (0..Self::SIZE)
                .filter(move |&x| self.occupied(x, y))
                .map(move |x| (x as i32, y as i32))
        })
    }
}

const I_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b1111, 0b0000, 0b0000]),
    Shape::new([0b0010, 0b0010, 0b0010, 0b0010]),
    Shape::new([0b0000, 0b0000, 0b1111, 0b0000]),
    Shape::new([0b0100, 0b0100, 0b0100, 0b0100]),
];

// O does not change under rotation
const O_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b0110, 0b0110, 0b0000]),
    Shape::new([0b0000, 0b0110, 0b0110, 0b0000]),
    Shape::new([0b0000, 0b0110, 0b0110, 0b0000]),
    Shape::new([0b0000, 0b0110, 0b0110, 0b0000]),
];

const T_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b0100, 0b1110, 0b0000]),
    Shape::new([0b0000, 0b0100, 0b0110, 0b0100]),
    Shape::new([0b0000, 0b0000, 0b1110, 0b0100]),
    Shape::new([0b0000, 0b0100, 0b1100, 0b0100]),
];

const S_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b0110, 0b1100, 0b0000]),
    Shape::new([0b0000, 0b0100, 0b0110, 0b0010]),
    Shape::new([0b0000, 0b0000, 0b0110, 0b1100]),
    Shape::new([0b0000, 0b1000, 0b1100, 0b0100]),
];

const Z_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b1100, 0b0110, 0b0000]),
    Shape::new([0b0000, 0b0010, 0b0110, 0b0100]),
    Shape::new([0b0000, 0b0000, 0b1100, 0b0110]),
    Shape::new([0b0000, 0b0100, 0b1100, 0b1000]),
];

const J_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b1000, 0b1110, 0b0000]),
    Shape::new([0b0000, 0b0110, 0b0100, 0b0100]),
    Shape::new([0b0000, 0b0000, 0b1110, 0b0010]),
    Shape::new([0b0000, 0b0100, 0b0100, 0b1100]),
];

const L_SHAPES: [Shape; 4] = [
    Shape::new([0b0000, 0b0010, 0b1110, 0b0000]),
    Shape::new([0b0000, 0b0100, 0b0100, 0b0110]),
    Shape::new([0b0000, 0b0000, 0b1110, 0b1000]),
    Shape::new([0b0000, 0b1100, 0b0100, 0b0100]),
];

/// Look up the mask for a piece kind and rotation. Infallible.
pub fn shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    let table = match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    };
    &table[rotation.index()]
}

/// Active falling piece: a catalog entry plus board position.
///
/// Owned by the turn controller from spawn until lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece in spawn orientation at the given anchor
    pub fn new(kind: PieceKind, anchor: Position) -> Self {
        Self {
            kind,
            rotation: Rotation::R0,
            x: anchor.x,
            y: anchor.y,
        }
    }

    /// The mask for the current rotation
    pub fn shape(&self) -> &'static Shape {
        shape(self.kind, self.rotation)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Candidate piece rotated clockwise by the given degrees, same position
    pub fn rotated_by(&self, degrees: u16) -> Self {
        Self {
            rotation: self.rotation.advanced_by_degrees(degrees),
            ..*self
        }
    }

    /// Candidate piece shifted by (dx, dy), same rotation
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece moved to an absolute anchor
    pub fn at(&self, position: Position) -> Self {
        Self {
            x: position.x,
            y: position.y,
            ..*self
        }
    }

    /// Iterate the occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape().cells().map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for i in 0..4 {
                let s = shape(kind, Rotation::from_index(i));
                assert_eq!(s.cells().count(), 4, "{:?} rotation {}", kind, i);
            }
        }
    }

    #[test]
    fn test_o_piece_rotation_invariant() {
        let base = shape(PieceKind::O, Rotation::R0);
        for i in 1..4 {
            assert_eq!(shape(PieceKind::O, Rotation::from_index(i)), base);
        }
    }

    #[test]
    fn test_i_piece_spawn_row() {
        let s = shape(PieceKind::I, Rotation::R0);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_i_piece_vertical() {
        let s = shape(PieceKind::I, Rotation::R90);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_piece_cells_offset_by_position() {
        let piece = Piece::new(PieceKind::O, Position::new(4, 0));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 1), (6, 1), (5, 2), (6, 2)]);
    }

    #[test]
    fn test_rotated_by_keeps_position() {
        let piece = Piece::new(PieceKind::T, Position::new(4, 0));
        let rotated = piece.rotated_by(180);
        assert_eq!(rotated.rotation, Rotation::R180);
        assert_eq!(rotated.position(), piece.position());
    }
}
