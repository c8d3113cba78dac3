//! Linked-`k` ("fish"): a single value is confined, within `k` houses of one
//! kind (the base houses), to cells that altogether span no more than `k`
//! houses of the orthogonal kind (the cover houses). The value can then be
//! removed from every cell of the cover houses outside that span — the
//! generalization of X-Wing (`k=2`), Swordfish (`k=3`), Jellyfish (`k=4`), and
//! so on to an arbitrary base/cover kind pair and size.

use crate::candidate_set::{CandidateSet, Value};
use crate::cell_set::{cells_of, CellSet};
use crate::combinator::combinations;
use crate::error::{Error, Result};
use crate::evidence::{Evidence, LinkedEvidence, SolvingStep};
use crate::grid::{Cell, House, HouseKind};
use crate::puzzle::Puzzle;
use std::collections::BTreeSet;

pub fn deduce(puzzle: &mut Puzzle, level: u8) -> Result<Option<SolvingStep>> {
    // A single house is naked/hidden-single territory, not a fish.
    if level < 2 {
        return Ok(None);
    }
    let grid = puzzle.grid().clone();
    let k = level as usize;
    let n = grid.n();

    for &(base_kind, cover_kind) in &[
        (HouseKind::Row, HouseKind::Column),
        (HouseKind::Column, HouseKind::Row),
    ] {
        for value in 0..n {
            let candidate_base_houses: Vec<(House, CellSet)> = grid
                .iter_houses(Some(base_kind))
                .filter_map(|h| {
                    let cells = CellSet::from_indices(
                        grid.iter_cells(Some(h), None)
                            .filter(|&c| puzzle.candidates(c).contains(value))
                            .map(|c| grid.index_of(c)),
                    );
                    let count = cells.size();
                    if count >= 1 && count <= k {
                        Some((h, cells))
                    } else {
                        None
                    }
                })
                .collect();

            if candidate_base_houses.len() < k {
                continue;
            }

            for combo in combinations(&candidate_base_houses, k) {
                let union = CellSet::union_multiple(combo.iter().map(|(_, cs)| cs));

                let cover_indices: BTreeSet<u8> = union
                    .iter_indices()
                    .map(|i| {
                        let cell = grid.cell_at(i);
                        if cover_kind == HouseKind::Column {
                            cell.col
                        } else {
                            cell.row
                        }
                    })
                    .collect();
                if cover_indices.len() < k {
                    // Fewer than `k` orthogonal lines can hold `value` for `k`
                    // base lines that each still need it somewhere: pigeonhole.
                    let base_houses: Vec<House> = combo.iter().map(|&(h, _)| h).collect();
                    let base_cells: Vec<Cell> = cells_of(&union, n).collect();
                    let cover_houses: Vec<House> = cover_indices
                        .iter()
                        .map(|&idx| House::new(cover_kind, idx))
                        .collect();
                    let evidence = Evidence::Linked(LinkedEvidence {
                        level,
                        value,
                        base_houses,
                        cover_houses,
                        base_cells,
                    });
                    return Err(Error::Paradox(evidence));
                }
                if cover_indices.len() > k {
                    continue;
                }

                let cover_houses: Vec<House> = cover_indices
                    .iter()
                    .map(|&idx| House::new(cover_kind, idx))
                    .collect();

                let mut eliminations = Vec::new();
                for h in &cover_houses {
                    let targets: Vec<Cell> = grid
                        .iter_cells(Some(*h), None)
                        .filter(|&c| {
                            !union.has_index(grid.index_of(c)) && puzzle.candidates(c).contains(value)
                        })
                        .collect();
                    eliminations
                        .extend(puzzle.remove_candidates(&CandidateSet::single(value), targets));
                }
                if eliminations.is_empty() {
                    continue;
                }

                let base_houses: Vec<House> = combo.iter().map(|&(h, _)| h).collect();
                let base_cells: Vec<Cell> = cells_of(&union, n).collect();
                let evidence = Evidence::Linked(LinkedEvidence {
                    level,
                    value,
                    base_houses,
                    cover_houses,
                    base_cells,
                });
                return Ok(Some(SolvingStep::new(evidence, eliminations)));
            }
        }
    }

    Ok(None)
}
