//! Pieces held in hand.

use shogi_core::PieceKind;

/// Counts of captured pieces a player may drop, one slot per kind in
/// [`PieceKind::HAND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand([u8; 7]);

impl Hand {
    /// A hand holding nothing.
    pub const EMPTY: Hand = Hand([0; 7]);

    /// Returns how many pieces of `kind` are held. Kinds that can never be
    /// held (the king, promoted kinds) always report zero.
    #[inline]
    pub fn count(&self, kind: PieceKind) -> u8 {
        kind.hand_index().map_or(0, |i| self.0[i])
    }

    /// Sets the count for `kind`. Returns false if `kind` cannot be held.
    pub fn set(&mut self, kind: PieceKind, count: u8) -> bool {
        match kind.hand_index() {
            Some(i) => {
                self.0[i] = count;
                true
            }
            None => false,
        }
    }

    /// Adds one piece of `kind`. Returns false if `kind` cannot be held.
    /// The count stops at `u8::MAX`.
    pub fn add(&mut self, kind: PieceKind) -> bool {
        match kind.hand_index() {
            Some(i) => {
                self.0[i] = self.0[i].saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one piece of `kind`. Returns false if none is held.
    pub fn take(&mut self, kind: PieceKind) -> bool {
        match kind.hand_index() {
            Some(i) if self.0[i] > 0 => {
                self.0[i] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns the total number of pieces held.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Iterates over the held pieces in hand order (pawn, lance, knight,
    /// silver, gold, bishop, rook), each kind repeated by its count.
    pub fn pieces(&self) -> impl Iterator<Item = PieceKind> + '_ {
        PieceKind::HAND
            .iter()
            .zip(self.0.iter())
            .flat_map(|(&kind, &n)| std::iter::repeat(kind).take(usize::from(n)))
    }
}
