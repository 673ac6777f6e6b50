//! Piece generator - 7-bag randomization with a fixed lookahead window
//!
//! Each bag holds one of every kind (I, O, T, S, Z, J, L), uniformly
//! shuffled; draws empty the bag before a new one is generated, so a kind
//! can never repeat within a single bag. A three-piece lookahead queue is
//! backfilled immediately after every draw and therefore holds exactly
//! [`LOOKAHEAD`] kinds at all observable points.
//!
//! The RNG is injected as a seed so piece sequences replay
//! deterministically in tests.

use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::pieces::Piece;
use crate::types::{PieceKind, Position, LOOKAHEAD};

/// 7-bag piece generator with lookahead
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    /// Current bag, drained from the back
    bag: ArrayVec<PieceKind, 7>,
    /// Upcoming pieces, front first
    queue: ArrayVec<PieceKind, LOOKAHEAD>,
    rng: ChaCha8Rng,
}

impl PieceGenerator {
    /// Create a generator seeded for deterministic replay
    pub fn new(seed: u64) -> Self {
        let mut generator = Self {
            bag: ArrayVec::new(),
            queue: ArrayVec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        generator.refill_bag();
        generator.backfill_queue();
        generator
    }

    /// Reset the bag to all 7 kinds in a fresh uniform permutation
    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.bag.as_mut_slice().shuffle(&mut self.rng);
    }

    fn draw_from_bag(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill_bag();
        }
        // The bag was just refilled if it was empty
        self.bag.pop().expect("bag holds at least one kind")
    }

    fn backfill_queue(&mut self) {
        while self.queue.len() < LOOKAHEAD {
            let kind = self.draw_from_bag();
            self.queue.push(kind);
        }
    }

    /// Pop the next pending piece, backfill the queue and return the piece
    /// positioned at the given spawn anchor. Never fails.
    pub fn spawn_next(&mut self, anchor: Position) -> Piece {
        debug_assert_eq!(self.queue.len(), LOOKAHEAD);
        let kind = self.queue.remove(0);
        self.backfill_queue();
        Piece::new(kind, anchor)
    }

    /// Read-only snapshot of the upcoming kinds (always [`LOOKAHEAD`] long)
    pub fn lookahead(&self) -> &[PieceKind] {
        &self.queue
    }

    /// Clear bag and queue and reinitialize to the startup invariant.
    /// The RNG stream continues from its current state.
    pub fn reset(&mut self) {
        self.bag.clear();
        self.queue.clear();
        self.refill_bag();
        self.backfill_queue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Position = Position::new(4, 0);

    #[test]
    fn test_queue_always_full() {
        let mut generator = PieceGenerator::new(7);
        assert_eq!(generator.lookahead().len(), LOOKAHEAD);
        for _ in 0..30 {
            generator.spawn_next(ANCHOR);
            assert_eq!(generator.lookahead().len(), LOOKAHEAD);
        }
    }

    #[test]
    fn test_first_bag_is_a_permutation() {
        let mut generator = PieceGenerator::new(42);
        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(generator.spawn_next(ANCHOR).kind);
        }
        for kind in PieceKind::ALL {
            assert_eq!(
                drawn.iter().filter(|&&k| k == kind).count(),
                1,
                "kind {:?} should appear exactly once per bag",
                kind
            );
        }
    }

    #[test]
    fn test_no_duplicate_within_any_bag() {
        let mut generator = PieceGenerator::new(9);
        let drawn: Vec<_> = (0..70).map(|_| generator.spawn_next(ANCHOR).kind).collect();
        for bag in drawn.chunks(7) {
            for kind in PieceKind::ALL {
                assert_eq!(bag.iter().filter(|&&k| k == kind).count(), 1);
            }
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGenerator::new(1234);
        let mut b = PieceGenerator::new(1234);
        for _ in 0..40 {
            assert_eq!(a.spawn_next(ANCHOR).kind, b.spawn_next(ANCHOR).kind);
        }
    }

    #[test]
    fn test_lookahead_matches_spawn_order() {
        let mut generator = PieceGenerator::new(5);
        let preview: Vec<_> = generator.lookahead().to_vec();
        for expected in preview {
            assert_eq!(generator.spawn_next(ANCHOR).kind, expected);
        }
    }

    #[test]
    fn test_spawn_position() {
        let mut generator = PieceGenerator::new(1);
        let piece = generator.spawn_next(ANCHOR);
        assert_eq!(piece.position(), ANCHOR);
        assert_eq!(piece.rotation.index(), 0);
    }

    #[test]
    fn test_reset_restores_invariant() {
        let mut generator = PieceGenerator::new(3);
        for _ in 0..5 {
            generator.spawn_next(ANCHOR);
        }
        generator.reset();
        assert_eq!(generator.lookahead().len(), LOOKAHEAD);
        // A full bag after reset still drains as a permutation
        let drawn: Vec<_> = (0..7).map(|_| generator.spawn_next(ANCHOR).kind).collect();
        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind));
        }
    }
}
