//! [`CellSet`]: a set of grid cells, stored as a fixed-size multi-word bitmask.
//!
//! A 9x9 grid's 81 cells fit in a `u128` (the style this crate's lineage uses for
//! fixed 9x9 boards), but a 35x35 grid has up to 1225 cells, so one word is not
//! enough. [`CellSet`] generalizes the same bitset idiom to an array of words sized
//! for [`crate::grid::MAX_N`].

use crate::grid::{Cell, MAX_N};
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

const MAX_CELLS: usize = MAX_N * MAX_N;
const WORD_BITS: usize = 64;
const WORDS: usize = (MAX_CELLS + WORD_BITS - 1) / WORD_BITS;

/// A set of cells, addressed by linear index, backed by `WORDS` `u64` words.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet {
    words: [u64; WORDS],
}

impl CellSet {
    pub const fn empty() -> Self {
        CellSet { words: [0; WORDS] }
    }

    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::empty();
        for i in indices {
            set.add_index(i);
        }
        set
    }

    pub fn add_index(&mut self, index: usize) {
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    pub fn remove_index(&mut self, index: usize) {
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    pub fn has_index(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn size(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_subset_of(&self, other: &CellSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(&a, &b)| a & b == a)
    }

    pub fn union_multiple<'a>(sets: impl IntoIterator<Item = &'a CellSet>) -> CellSet {
        let mut out = CellSet::empty();
        for s in sets {
            out = &out | s;
        }
        out
    }

    /// Ascending iterator over linear cell indices in this set.
    pub fn iter_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &w)| {
            let mut w = w;
            std::iter::from_fn(move || {
                if w == 0 {
                    return None;
                }
                let bit = w.trailing_zeros() as usize;
                w &= w - 1;
                Some(word_idx * WORD_BITS + bit)
            })
        })
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_indices()).finish()
    }
}

impl BitOr for &CellSet {
    type Output = CellSet;
    fn bitor(self, rhs: Self) -> CellSet {
        let mut out = CellSet::empty();
        for i in 0..WORDS {
            out.words[i] = self.words[i] | rhs.words[i];
        }
        out
    }
}

impl BitAnd for &CellSet {
    type Output = CellSet;
    fn bitand(self, rhs: Self) -> CellSet {
        let mut out = CellSet::empty();
        for i in 0..WORDS {
            out.words[i] = self.words[i] & rhs.words[i];
        }
        out
    }
}

impl Sub for &CellSet {
    type Output = CellSet;
    fn sub(self, rhs: Self) -> CellSet {
        let mut out = CellSet::empty();
        for i in 0..WORDS {
            out.words[i] = self.words[i] & !rhs.words[i];
        }
        out
    }
}

/// A [`CellSet`] paired with a helper to convert linear indices back to [`Cell`]s.
/// Most call sites only need [`CellSet`]; this exists for display code that wants
/// `rXcY`-style names without re-deriving the grid's `n`.
pub fn cells_of(set: &CellSet, n: u8) -> impl Iterator<Item = Cell> + '_ {
    let n = n as usize;
    set.iter_indices().map(move |i| Cell::new((i / n) as u8, (i % n) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_set_ops() {
        let mut a = CellSet::empty();
        a.add_index(0);
        a.add_index(70);
        a.add_index(1224);
        assert_eq!(a.size(), 3);
        assert!(a.has_index(1224));

        let mut b = CellSet::empty();
        b.add_index(70);
        let union = &a | &b;
        assert_eq!(union.size(), 3);
        let inter = &a & &b;
        assert_eq!(inter.size(), 1);
        let diff = &a - &b;
        assert_eq!(diff.size(), 2);
        assert!(!diff.has_index(70));
    }

    #[test]
    fn iter_indices_is_ascending() {
        let set = CellSet::from_indices([500, 3, 200, 3]);
        let collected: Vec<_> = set.iter_indices().collect();
        assert_eq!(collected, vec![3, 200, 500]);
    }
}
