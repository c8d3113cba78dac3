//! Pure, immutable grid geometry: cells, houses, and the queries the rule
//! families need to reason about them (`commonHousesOf` is the one load-bearing
//! helper — see its doc comment).

use crate::cell_set::CellSet;
use crate::error::{Error, Result};
use arrayvec::ArrayVec;

/// Largest supported side length. A [`crate::candidate_set::CandidateSet`] is a
/// single `u64`, so `N` can be at most 64 in principle; the spec caps it at 35.
pub const MAX_N: usize = 35;

/// One square of the grid, addressed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Cell { row, col }
    }
}

/// The three kinds of house a grid has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseKind {
    Row,
    Column,
    Block,
}

impl HouseKind {
    /// Row <-> Column. Panics for [`HouseKind::Block`], which has no orthogonal
    /// counterpart.
    pub fn orthogonal(self) -> HouseKind {
        match self {
            HouseKind::Row => HouseKind::Column,
            HouseKind::Column => HouseKind::Row,
            HouseKind::Block => panic!("HouseKind::Block has no orthogonal kind"),
        }
    }
}

/// A house: a row, column, or block, identified by its index in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct House {
    pub kind: HouseKind,
    pub index: u8,
}

impl House {
    pub const fn new(kind: HouseKind, index: u8) -> Self {
        House { kind, index }
    }
}

/// The pure geometry of an `N = block_height * block_width` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    block_height: u8,
    block_width: u8,
    n: u8,
}

impl Grid {
    /// Builds a grid of side `block_height * block_width`, which must not exceed
    /// [`MAX_N`].
    pub fn new(block_height: u8, block_width: u8) -> Result<Self> {
        if block_height == 0 || block_width == 0 {
            return Err(Error::InvalidInput(
                "block height and width must be positive".into(),
            ));
        }
        let n = block_height as usize * block_width as usize;
        if n > MAX_N {
            return Err(Error::InvalidInput(format!(
                "grid side {n} exceeds the maximum supported size of {MAX_N}"
            )));
        }
        Ok(Grid {
            block_height,
            block_width,
            n: n as u8,
        })
    }

    pub fn block_height(&self) -> u8 {
        self.block_height
    }

    pub fn block_width(&self) -> u8 {
        self.block_width
    }

    /// The side length `N`.
    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn num_cells(&self) -> usize {
        self.n as usize * self.n as usize
    }

    /// `row * N + col`.
    pub fn index_of(&self, cell: Cell) -> usize {
        cell.row as usize * self.n as usize + cell.col as usize
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        let n = self.n as usize;
        Cell::new((index / n) as u8, (index % n) as u8)
    }

    /// The index of the block containing `cell`, tiling the grid in
    /// `block_height x block_width` rectangles.
    pub fn block_index_of(&self, cell: Cell) -> u8 {
        let bh = self.block_height as usize;
        let bw = self.block_width as usize;
        let blocks_per_band = self.n as usize / bw;
        let band = cell.row as usize / bh;
        let block_in_band = cell.col as usize / bw;
        (band * blocks_per_band + block_in_band) as u8
    }

    pub fn house_of(&self, cell: Cell, kind: HouseKind) -> House {
        let index = match kind {
            HouseKind::Row => cell.row,
            HouseKind::Column => cell.col,
            HouseKind::Block => self.block_index_of(cell),
        };
        House::new(kind, index)
    }

    /// For `Row`, returns `(index, orth_index)`; for `Column`, `(orth_index,
    /// index)`. [`HouseKind::Block`] has no well-defined intersection cell.
    pub fn intersect_cell_of(&self, kind: HouseKind, index: u8, orth_index: u8) -> Result<Cell> {
        match kind {
            HouseKind::Row => Ok(Cell::new(index, orth_index)),
            HouseKind::Column => Ok(Cell::new(orth_index, index)),
            HouseKind::Block => Err(Error::InvalidInput(
                "blocks have no single intersection cell along an axis".into(),
            )),
        }
    }

    /// Cells of `house`, or every cell of the grid if `house` is `None`, omitting
    /// any cell in `excludes`. Deterministic row-major order.
    pub fn iter_cells<'a>(
        &'a self,
        house: Option<House>,
        excludes: Option<&'a CellSet>,
    ) -> impl Iterator<Item = Cell> + 'a {
        let n = self.n;
        let in_house = move |cell: Cell| -> bool {
            match house {
                None => true,
                Some(h) => match h.kind {
                    HouseKind::Row => cell.row == h.index,
                    HouseKind::Column => cell.col == h.index,
                    HouseKind::Block => self.block_index_of(cell) == h.index,
                },
            }
        };
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| {
                let cell = Cell::new(row, col);
                if !in_house(cell) {
                    return None;
                }
                if let Some(ex) = excludes {
                    if ex.has_index(self.index_of(cell)) {
                        return None;
                    }
                }
                Some(cell)
            })
        })
    }

    /// Houses in the order `Row(0..N)`, `Column(0..N)`, `Block(0..N)`, or
    /// restricted to a single kind.
    pub fn iter_houses(&self, kind: Option<HouseKind>) -> impl Iterator<Item = House> + '_ {
        let n = self.n;
        let kinds: &[HouseKind] = match kind {
            Some(k) => match k {
                HouseKind::Row => &[HouseKind::Row],
                HouseKind::Column => &[HouseKind::Column],
                HouseKind::Block => &[HouseKind::Block],
            },
            None => &[HouseKind::Row, HouseKind::Column, HouseKind::Block],
        };
        kinds
            .iter()
            .flat_map(move |&k| (0..n).map(move |i| House::new(k, i)))
    }

    /// The cells of `house` as a [`CellSet`].
    pub fn cell_set_of(&self, house: House) -> CellSet {
        CellSet::from_indices(self.iter_cells(Some(house), None).map(|c| self.index_of(c)))
    }

    /// The houses containing *every* cell of `cells`. At most one per
    /// [`HouseKind`] (three total), in `Row, Column, Block` order. `exclude`, if
    /// given, is skipped.
    ///
    /// This is the helper both `NakedDeduce` and `HiddenDeduce` lean on to express
    /// block/line interactions ("pointing"/"claiming") as a side effect of the
    /// general rule rather than a separate technique: a caller that only checks the
    /// house it selected `cells` from, and skips this helper, will never find those
    /// eliminations.
    pub fn common_houses_of(&self, cells: &[Cell], exclude: Option<HouseKind>) -> ArrayVec<House, 3> {
        let mut out = ArrayVec::new();
        if cells.is_empty() {
            return out;
        }
        for kind in [HouseKind::Row, HouseKind::Column, HouseKind::Block] {
            if Some(kind) == exclude {
                continue;
            }
            let first = self.house_of(cells[0], kind);
            if cells[1..].iter().all(|&c| self.house_of(c, kind) == first) {
                out.push(first);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_block_geometry() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.n(), 9);
        assert_eq!(grid.block_index_of(Cell::new(0, 0)), 0);
        assert_eq!(grid.block_index_of(Cell::new(4, 4)), 4);
        assert_eq!(grid.block_index_of(Cell::new(8, 8)), 8);
    }

    #[test]
    fn non_square_block_geometry_2x3() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.n(), 6);
        // Block 0 is rows 0..2, cols 0..3.
        assert_eq!(grid.block_index_of(Cell::new(0, 0)), 0);
        assert_eq!(grid.block_index_of(Cell::new(1, 2)), 0);
        // Block 1 is rows 0..2, cols 3..6.
        assert_eq!(grid.block_index_of(Cell::new(0, 3)), 1);
        // Block 2 is rows 2..4, cols 0..3.
        assert_eq!(grid.block_index_of(Cell::new(2, 0)), 2);
    }

    #[test]
    fn non_square_block_geometry_3x4() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.n(), 12);
        assert_eq!(grid.block_index_of(Cell::new(0, 0)), 0);
        assert_eq!(grid.block_index_of(Cell::new(0, 4)), 1);
        assert_eq!(grid.block_index_of(Cell::new(3, 0)), 3);
        assert_eq!(grid.block_index_of(Cell::new(11, 11)), 8);
    }

    #[test]
    fn rejects_oversized_grids() {
        assert!(Grid::new(6, 6).is_err());
    }

    #[test]
    fn common_houses_of_finds_block_when_cells_share_only_a_block() {
        let grid = Grid::new(3, 3).unwrap();
        let cells = [Cell::new(0, 0), Cell::new(1, 1)];
        let houses = grid.common_houses_of(&cells, None);
        assert_eq!(houses.len(), 1);
        assert_eq!(houses[0].kind, HouseKind::Block);
    }

    #[test]
    fn common_houses_of_finds_row_and_block() {
        let grid = Grid::new(3, 3).unwrap();
        let cells = [Cell::new(0, 0), Cell::new(0, 1)];
        let houses = grid.common_houses_of(&cells, None);
        let kinds: Vec<_> = houses.iter().map(|h| h.kind).collect();
        assert!(kinds.contains(&HouseKind::Row));
        assert!(kinds.contains(&HouseKind::Block));
        assert!(!kinds.contains(&HouseKind::Column));
    }

    #[test]
    fn iter_houses_order_is_row_then_column_then_block() {
        let grid = Grid::new(2, 2).unwrap();
        let kinds: Vec<_> = grid.iter_houses(None).map(|h| h.kind).collect();
        assert_eq!(&kinds[0..4], &[HouseKind::Row; 4]);
        assert_eq!(&kinds[4..8], &[HouseKind::Column; 4]);
        assert_eq!(&kinds[8..12], &[HouseKind::Block; 4]);
    }
}
