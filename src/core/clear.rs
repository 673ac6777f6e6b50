//! Line clearer - detects full rows, compacts the stack and scores the clear
//!
//! Scoring uses the fixed standard table (1 -> 100, 2 -> 300, 3 -> 500,
//! 4 -> 800); any other count scores zero. A single piece spans at most
//! four rows, so more than four lines in one clear cannot occur.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::{LINES_PER_LEVEL, LINE_POINTS};

/// Result of one placement's clear pass, consumed immediately by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub lines_cleared: u32,
    pub points: u32,
    /// Cleared row indices, bottom to top (descending)
    pub cleared_rows: ArrayVec<usize, 4>,
}

/// Points for clearing `lines` rows at once
pub fn points_for(lines: usize) -> u32 {
    if lines < LINE_POINTS.len() {
        LINE_POINTS[lines]
    } else {
        0
    }
}

/// Level for a total line count (level 1 at the start, +1 every 10 lines)
pub fn level_for(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Detect and remove all full rows, shifting the rows above each cleared
/// row down by one and blanking the freed rows at the top.
///
/// Uses a bottom-up two-pointer pass: every surviving row is copied to the
/// lowest unwritten row, so the grid is compacted in a single sweep.
pub fn clear_lines(board: &mut Board) -> ClearResult {
    let height = board.height();
    let mut cleared_rows: ArrayVec<usize, 4> = ArrayVec::new();
    let mut write_y = height;

    for read_y in (0..height).rev() {
        if board.is_row_full(read_y) {
            cleared_rows.push(read_y);
        } else {
            write_y -= 1;
            if write_y != read_y {
                board.copy_row(read_y, write_y);
            }
        }
    }

    for y in 0..write_y {
        board.blank_row(y);
    }

    let lines_cleared = cleared_rows.len() as u32;
    ClearResult {
        lines_cleared,
        points: points_for(cleared_rows.len()),
        cleared_rows,
    }
}
