//! Naked-`k`: `k` cells in a house whose candidates, pooled together, contain
//! exactly `k` values. Those values can be removed from every other cell that
//! shares a house with all `k` of them.

use crate::candidate_set::CandidateSet;
use crate::cell_set::CellSet;
use crate::combinator::combinations;
use crate::error::{Error, Result};
use crate::evidence::{Evidence, NakedEvidence, SolvingStep};
use crate::grid::Cell;
use crate::puzzle::Puzzle;

/// Scans every house for a naked `level`-subset, firing (mutating `puzzle`
/// and returning the step) on the first one that eliminates at least one
/// candidate. Returns `Err(Error::Paradox(..))` if `level` cells are found to
/// share fewer than `level` candidates between them, which is unsatisfiable.
pub fn deduce(puzzle: &mut Puzzle, level: u8) -> Result<Option<SolvingStep>> {
    let grid = puzzle.grid().clone();
    let k = level as usize;

    for house in grid.iter_houses(None) {
        // Every cell of the house, solved or not: `S` ranges over all size-`k`
        // subsets of the house's cells, so a solved cell is itself a valid
        // `k=1` subset — that's what makes naked@1 the classical sole-candidate
        // propagation, stripping a just-placed value from its peers.
        let cells: Vec<Cell> = grid.iter_cells(Some(house), None).collect();
        if cells.len() < k {
            continue;
        }

        for combo in combinations(&cells, k) {
            let mut union = CandidateSet::empty();
            for &c in &combo {
                union.merge(puzzle.candidates(c));
            }

            if union.size() < k {
                let evidence = Evidence::Naked(NakedEvidence {
                    level,
                    cells: combo,
                    values: union,
                    houses: vec![house],
                });
                return Err(Error::Paradox(evidence));
            }
            if union.size() != k {
                continue;
            }

            let exclude = CellSet::from_indices(combo.iter().map(|&c| grid.index_of(c)));
            let houses = grid.common_houses_of(&combo, None);
            let mut eliminations = Vec::new();
            for h in &houses {
                let targets: Vec<Cell> = grid.iter_cells(Some(*h), Some(&exclude)).collect();
                eliminations.extend(puzzle.remove_candidates(&union, targets));
            }
            if eliminations.is_empty() {
                continue;
            }

            let evidence = Evidence::Naked(NakedEvidence {
                level,
                cells: combo,
                values: union,
                houses: houses.to_vec(),
            });
            return Ok(Some(SolvingStep::new(evidence, eliminations)));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use std::rc::Rc;

    #[test]
    fn finds_naked_pair_and_eliminates_from_rest_of_row() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let mut puzzle = Puzzle::new(grid.clone());
        // Pin cells (0,0) and (0,1) to exactly {0,1}; the rest of row 0
        // should lose those two candidates.
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::from_iter([0, 1]));
        puzzle.set_candidates(Cell::new(0, 1), CandidateSet::from_iter([0, 1]));

        let step = deduce(&mut puzzle, 2).unwrap().expect("expected a step");
        assert!(matches!(step.evidence, Evidence::Naked(_)));
        assert!(puzzle.candidates(Cell::new(0, 2)).is_empty() == false);
        assert!(!puzzle.candidates(Cell::new(0, 2)).contains(0));
        assert!(!puzzle.candidates(Cell::new(0, 2)).contains(1));
        assert!(puzzle.candidates(Cell::new(0, 2)).contains(2));
    }

    #[test]
    fn detects_pigeonhole_paradox() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let mut puzzle = Puzzle::new(grid.clone());
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::from_iter([0, 1]));
        puzzle.set_candidates(Cell::new(0, 1), CandidateSet::from_iter([0, 1]));
        puzzle.set_candidates(Cell::new(0, 2), CandidateSet::from_iter([0, 1]));

        let err = deduce(&mut puzzle, 2).unwrap_err();
        assert!(matches!(err, Error::Paradox(_)));
    }

    #[test]
    fn detects_an_emptied_cell_as_a_level_one_paradox() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let mut puzzle = Puzzle::new(grid);
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::empty());

        let err = deduce(&mut puzzle, 1).unwrap_err();
        assert!(matches!(err, Error::Paradox(_)));
    }

    #[test]
    fn no_step_when_nothing_to_eliminate() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let mut puzzle = Puzzle::new(grid);
        // Every cell still holds all 4 candidates; no naked pair exists yet.
        assert!(deduce(&mut puzzle, 2).unwrap().is_none());
    }
}
