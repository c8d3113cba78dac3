//! [`Puzzle`]: a per-cell array of [`CandidateSet`]s plus the mutation primitives
//! the rule families and the searcher use to narrow them.

use crate::candidate_set::{CandidateSet, Value};
use crate::grid::{Cell, Grid};
use std::rc::Rc;

/// A mutation record: the values actually removed from one cell by a single
/// mutation call. Built by every [`Puzzle`] mutation primitive and used to
/// assemble step transcripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variation {
    pub cell: Cell,
    pub removed: CandidateSet,
}

/// An `N x N` grid's worth of candidate sets, addressed through its [`Grid`].
///
/// The puzzle owns its cell candidates exclusively; [`Puzzle::clone`] performs a
/// deep copy, which is what lets the searcher fork a branch without disturbing
/// its siblings. The backing [`Grid`] is reference-counted rather than copied,
/// since it is immutable and shared by every clone along a search stack.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Rc<Grid>,
    candidates: Vec<CandidateSet>,
}

impl Puzzle {
    /// A puzzle over `grid` with every cell holding all `N` candidates.
    pub fn new(grid: Rc<Grid>) -> Self {
        let full = CandidateSet::full(grid.n());
        let candidates = vec![full; grid.num_cells()];
        Puzzle { grid, candidates }
    }

    pub fn grid(&self) -> &Rc<Grid> {
        &self.grid
    }

    pub fn candidates(&self, cell: Cell) -> &CandidateSet {
        &self.candidates[self.grid.index_of(cell)]
    }

    /// Directly overwrite a cell's candidates, bypassing the diff bookkeeping.
    /// Used only to seed a puzzle from externally known values/candidates (e.g.
    /// parsing); rule routines and the searcher always go through
    /// [`Puzzle::retain_candidates`] / [`Puzzle::remove_candidates`].
    pub fn set_candidates(&mut self, cell: Cell, candidates: CandidateSet) {
        let idx = self.grid.index_of(cell);
        self.candidates[idx] = candidates;
    }

    /// For each cell in `cells`, keeps only the values in `values`. Returns one
    /// [`Variation`] per cell that actually lost a candidate.
    pub fn retain_candidates(
        &mut self,
        values: &CandidateSet,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Vec<Variation> {
        let mut variations = Vec::new();
        for cell in cells {
            let idx = self.grid.index_of(cell);
            let removed = self.candidates[idx].retain(values);
            if !removed.is_empty() {
                variations.push(Variation { cell, removed });
            }
        }
        variations
    }

    /// For each cell in `cells`, removes the values in `values`. Returns one
    /// [`Variation`] per cell that actually lost a candidate.
    pub fn remove_candidates(
        &mut self,
        values: &CandidateSet,
        cells: impl IntoIterator<Item = Cell>,
    ) -> Vec<Variation> {
        let mut variations = Vec::new();
        for cell in cells {
            let idx = self.grid.index_of(cell);
            let removed = self.candidates[idx].remove(values);
            if !removed.is_empty() {
                variations.push(Variation { cell, removed });
            }
        }
        variations
    }

    /// True if every cell is solved (holds exactly one candidate).
    pub fn fulfilled(&self) -> bool {
        self.candidates.iter().all(|c| c.size() == 1)
    }

    /// True if some house contains two solved cells with the same value, or some
    /// cell has no candidates left.
    pub fn paradoxical(&self) -> bool {
        if self.candidates.iter().any(|c| c.is_empty()) {
            return true;
        }
        for house in self.grid.iter_houses(None) {
            let mut seen = CandidateSet::empty();
            for cell in self.grid.iter_cells(Some(house), None) {
                let candidates = self.candidates(cell);
                if candidates.size() != 1 {
                    continue;
                }
                if seen.contains_any(candidates) {
                    return true;
                }
                seen.merge(candidates);
            }
        }
        false
    }

    /// Fulfilled and not paradoxical.
    pub fn solved(&self) -> bool {
        self.fulfilled() && !self.paradoxical()
    }

    /// If some house holds two solved cells sharing a value, names that pair.
    /// The rule families only ever touch cells with more than one remaining
    /// candidate, so a clash between two already-solved cells — the kind a
    /// guess can introduce — is never caught by [`crate::rules`] and has to be
    /// checked for directly.
    pub fn duplicate_solved_pair(&self) -> Option<(Cell, Cell, Value)> {
        for house in self.grid.iter_houses(None) {
            let mut seen: Vec<(Value, Cell)> = Vec::new();
            for cell in self.grid.iter_cells(Some(house), None) {
                let candidates = self.candidates(cell);
                if candidates.size() != 1 {
                    continue;
                }
                let value = candidates.peek().unwrap();
                if let Some(&(_, other)) = seen.iter().find(|&&(v, _)| v == value) {
                    return Some((other, cell, value));
                }
                seen.push((value, cell));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::HouseKind;

    fn grid(bh: u8, bw: u8) -> Rc<Grid> {
        Rc::new(Grid::new(bh, bw).unwrap())
    }

    #[test]
    fn new_puzzle_has_all_candidates_everywhere() {
        let g = grid(3, 3);
        let puzzle = Puzzle::new(g.clone());
        for cell in g.iter_cells(None, None) {
            assert_eq!(puzzle.candidates(cell).size(), 9);
        }
    }

    #[test]
    fn retain_and_remove_report_exact_diffs() {
        let g = grid(3, 3);
        let mut puzzle = Puzzle::new(g.clone());
        let cell = Cell::new(0, 0);

        let variations = puzzle.retain_candidates(
            &CandidateSet::from_iter([0, 1, 2]),
            std::iter::once(cell),
        );
        assert_eq!(variations.len(), 1);
        assert_eq!(variations[0].removed.size(), 6);
        assert_eq!(puzzle.candidates(cell).size(), 3);

        // Retaining a superset of what's left changes nothing -> no variation.
        let variations = puzzle.retain_candidates(
            &CandidateSet::from_iter([0, 1, 2, 3]),
            std::iter::once(cell),
        );
        assert!(variations.is_empty());

        let variations =
            puzzle.remove_candidates(&CandidateSet::from_iter([1]), std::iter::once(cell));
        assert_eq!(variations.len(), 1);
        assert_eq!(variations[0].removed, CandidateSet::from_iter([1]));
    }

    #[test]
    fn paradoxical_detects_duplicate_solved_cells_in_a_house() {
        let g = grid(2, 2);
        let mut puzzle = Puzzle::new(g.clone());
        for cell in g.iter_cells(None, None) {
            puzzle.set_candidates(cell, CandidateSet::single(0));
        }
        assert!(puzzle.paradoxical());
    }

    #[test]
    fn duplicate_solved_pair_names_the_offending_cells() {
        let g = grid(2, 2);
        let mut puzzle = Puzzle::new(g.clone());
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::single(2));
        puzzle.set_candidates(Cell::new(1, 1), CandidateSet::single(2));
        let (a, b, value) = puzzle.duplicate_solved_pair().expect("expected a clash");
        assert_eq!(value, 2);
        assert!((a, b) == (Cell::new(0, 0), Cell::new(1, 1)) || (b, a) == (Cell::new(0, 0), Cell::new(1, 1)));
    }

    #[test]
    fn paradoxical_detects_empty_cell() {
        let g = grid(2, 2);
        let mut puzzle = Puzzle::new(g.clone());
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::empty());
        assert!(puzzle.paradoxical());
    }

    #[test]
    fn solved_requires_fulfilled_and_not_paradoxical() {
        let g = grid(2, 2);
        let mut puzzle = Puzzle::new(g.clone());
        let values = [0u8, 1, 2, 3, 2, 3, 0, 1, 1, 0, 3, 2, 3, 2, 1, 0];
        for (i, &v) in values.iter().enumerate() {
            let cell = g.cell_at(i);
            puzzle.set_candidates(cell, CandidateSet::single(v));
        }
        assert!(puzzle.fulfilled());
        assert!(!puzzle.paradoxical());
        assert!(puzzle.solved());
        let _ = HouseKind::Row;
    }
}
