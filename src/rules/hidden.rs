//! Hidden-`k`: `k` values confined to exactly `k` cells within a single
//! house. Those cells may hold no other candidate, and — via
//! [`crate::grid::Grid::common_houses_of`] — the same `k` values can also be
//! removed from any other house all `k` cells happen to share (the
//! "pointing"/"claiming" interaction generalizes out of this for free).

use crate::candidate_set::{CandidateSet, Value};
use crate::combinator::combinations;
use crate::error::{Error, Result};
use crate::evidence::{Evidence, HiddenEvidence, SolvingStep};
use crate::grid::Cell;
use crate::puzzle::Puzzle;

pub fn deduce(puzzle: &mut Puzzle, level: u8) -> Result<Option<SolvingStep>> {
    let grid = puzzle.grid().clone();
    let k = level as usize;

    for house in grid.iter_houses(None) {
        let cells: Vec<Cell> = grid.iter_cells(Some(house), None).collect();

        // Every cell of the house counts toward who "holds" a value, including
        // cells already solved to it — a solved cell is as much a holder of its
        // own value as an unsolved cell still considering it, and omitting it
        // undercounts `holder_cells` against the values the house has already
        // placed, which both miscounts the pigeonhole check below and can
        // exclude that solved cell from the cross-house elimination's own
        // `exclude` set.
        let mut present = CandidateSet::empty();
        for &c in &cells {
            present.merge(puzzle.candidates(c));
        }
        let values: Vec<Value> = present.iter().collect();
        if values.len() < k {
            continue;
        }

        for combo in combinations(&values, k) {
            let combo_set: CandidateSet = combo.iter().copied().collect();

            let holder_cells: Vec<Cell> = cells
                .iter()
                .filter(|&&c| puzzle.candidates(c).contains_any(&combo_set))
                .copied()
                .collect();

            if holder_cells.len() < k {
                let evidence = Evidence::Hidden(HiddenEvidence {
                    level,
                    house,
                    values: combo_set,
                    cells: holder_cells,
                });
                return Err(Error::Paradox(evidence));
            }

            // `holder_cells` may hold more than `k` cells (some other value in
            // `combo_set` might not actually be hidden here yet) — the
            // cross-house elimination only needs that every holder lies
            // together in another house, not that there are exactly `k` of
            // them. Only the in-house retain below requires the exact count.
            let exclude =
                crate::cell_set::CellSet::from_indices(holder_cells.iter().map(|&c| grid.index_of(c)));
            let mut eliminations = Vec::new();
            for h in grid.common_houses_of(&holder_cells, None) {
                if h == house {
                    continue;
                }
                let targets: Vec<Cell> = grid.iter_cells(Some(h), Some(&exclude)).collect();
                eliminations.extend(puzzle.remove_candidates(&combo_set, targets));
            }

            if holder_cells.len() == k {
                eliminations.extend(
                    puzzle.retain_candidates(&combo_set, holder_cells.iter().copied()),
                );
            }

            if eliminations.is_empty() {
                continue;
            }

            let evidence = Evidence::Hidden(HiddenEvidence {
                level,
                house,
                values: combo_set,
                cells: holder_cells,
            });
            return Ok(Some(SolvingStep::new(evidence, eliminations)));
        }
    }

    Ok(None)
}
