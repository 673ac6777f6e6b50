//! Decision-request snapshot assembly
//!
//! The decision source sees the game only through an opaque textual
//! snapshot: the board grid with the falling piece overlaid, the active
//! piece's 4x4 mask, and the lookahead masks. The format is a deliberate
//! narrow interface; internal representation must not leak past it.

use crate::core::board::Board;
use crate::core::generator::PieceGenerator;
use crate::core::pieces::{shape, Piece};
use crate::types::{PieceKind, Rotation, CELL_ACTIVE, CELL_EMPTY, LOOKAHEAD};

/// Everything the decision source receives for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionRequest {
    /// `height` lines of `width` chars, active piece overlaid
    pub board: String,
    /// 4 lines of 4 chars for the active piece's current rotation
    pub active_piece: String,
    /// One 4x4 mask per upcoming piece, spawn orientation
    pub lookahead: Vec<String>,
    /// Caller-authored strategy text, passed through verbatim
    pub policy: String,
}

/// Render a piece mask as 4 lines of 4 characters
pub fn piece_text(kind: PieceKind, rotation: Rotation) -> String {
    let mask = shape(kind, rotation);
    let mut out = String::with_capacity(20);
    for y in 0..4 {
        for x in 0..4 {
            out.push(if mask.occupied(x, y) {
                CELL_ACTIVE
            } else {
                CELL_EMPTY
            });
        }
        if y < 3 {
            out.push('\n');
        }
    }
    out
}

/// Build the full request for one turn
pub fn build_request(
    board: &Board,
    active: &Piece,
    generator: &PieceGenerator,
    policy: &str,
) -> DecisionRequest {
    let lookahead: Vec<String> = generator
        .lookahead()
        .iter()
        .map(|&kind| piece_text(kind, Rotation::R0))
        .collect();
    debug_assert_eq!(lookahead.len(), LOOKAHEAD);

    DecisionRequest {
        board: board.serialize(Some(active)),
        active_piece: piece_text(active.kind, active.rotation),
        lookahead,
        policy: policy.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn test_piece_text_dimensions() {
        for kind in PieceKind::ALL {
            let text = piece_text(kind, Rotation::R0);
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(lines.len(), 4);
            for line in lines {
                assert_eq!(line.chars().count(), 4);
            }
            assert_eq!(text.chars().filter(|&c| c == CELL_ACTIVE).count(), 4);
        }
    }

    #[test]
    fn test_piece_text_o_mask() {
        let text = piece_text(PieceKind::O, Rotation::R0);
        assert_eq!(text, "....\n.××.\n.××.\n....");
    }

    #[test]
    fn test_build_request_shapes() {
        let board = Board::default();
        let generator = PieceGenerator::new(11);
        let active = Piece::new(PieceKind::T, Position::new(4, 0));
        let request = build_request(&board, &active, &generator, "stack flat");

        assert_eq!(request.lookahead.len(), LOOKAHEAD);
        assert_eq!(request.policy, "stack flat");
        let lines: Vec<_> = request.board.lines().collect();
        assert_eq!(lines.len(), board.height());
        for line in lines {
            assert_eq!(line.chars().count(), board.width());
        }
        // The active piece is visible in the overlay
        assert_eq!(
            request.board.chars().filter(|&c| c == CELL_ACTIVE).count(),
            4
        );
    }
}
