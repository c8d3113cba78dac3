//! The evidence taxonomy: one variant per family of deduction, plus the guess
//! evidence the searcher attaches to a branching step. Where the solver this
//! crate's lineage descends from used one class per technique connected by
//! inheritance, [`Evidence`] is a closed, tagged enum — every rule family
//! still produces a value whose shape is dictated by what it actually found,
//! but callers match on it instead of downcasting.

use crate::candidate_set::{CandidateSet, Value};
use crate::grid::{Cell, House};
use crate::puzzle::Variation;

/// `k` naked candidates confined to `cells`: no other cell sharing a house
/// with all of `cells` may hold any value in `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NakedEvidence {
    pub level: u8,
    pub cells: Vec<Cell>,
    pub values: CandidateSet,
    /// The houses the elimination was driven from (row/column/block, per
    /// [`crate::grid::Grid::common_houses_of`]).
    pub houses: Vec<House>,
}

/// `k` values confined to `cells` within a single `house`: those cells may
/// hold no value outside `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenEvidence {
    pub level: u8,
    pub house: House,
    pub values: CandidateSet,
    pub cells: Vec<Cell>,
}

/// A fish: `value` is confined to `base_cells` across `base_houses`, and every
/// one of those cells lies in one of `cover_houses` — so `value` can be
/// eliminated from every cell of `cover_houses` outside `base_cells`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedEvidence {
    pub level: u8,
    pub value: Value,
    pub base_houses: Vec<House>,
    pub cover_houses: Vec<House>,
    pub base_cells: Vec<Cell>,
}

/// A branch taken by the searcher: `cell` was assigned `value` as the
/// `branch_index`-th of `branch_count` remaining candidates, purely to make
/// search progress rather than because logic forced it. `level` is the
/// nesting depth of this guess (1 for a branch off the original puzzle, 2 for
/// a branch taken inside that branch, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvidence {
    pub level: u8,
    pub cell: Cell,
    pub value: Value,
    pub branch_index: usize,
    pub branch_count: usize,
}

/// The reason a [`crate::puzzle::Puzzle`] mutation happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Naked(NakedEvidence),
    Hidden(HiddenEvidence),
    Linked(LinkedEvidence),
    Guess(GuessEvidence),
}

impl Evidence {
    /// The deduction level (or branch depth, for a guess) this evidence was
    /// produced at.
    pub fn level(&self) -> u8 {
        match self {
            Evidence::Naked(e) => e.level,
            Evidence::Hidden(e) => e.level,
            Evidence::Linked(e) => e.level,
            Evidence::Guess(e) => e.level,
        }
    }

    /// A short, level-sensitive name for the technique, in the style this
    /// crate's lineage names its singles/pairs/triples and X-Wing/Swordfish
    /// fish sizes.
    pub fn name(&self) -> String {
        fn sized(prefix: &str, level: u8) -> String {
            match level {
                1 => format!("{prefix} Single"),
                2 => format!("{prefix} Pair"),
                3 => format!("{prefix} Triple"),
                4 => format!("{prefix} Quad"),
                k => format!("{prefix} {k}-tuple"),
            }
        }
        match self {
            Evidence::Naked(e) => sized("Naked", e.level),
            Evidence::Hidden(e) => sized("Hidden", e.level),
            Evidence::Linked(e) => match e.level {
                2 => "X-Wing".to_string(),
                3 => "Swordfish".to_string(),
                4 => "Jellyfish".to_string(),
                k => format!("{k}-Fish"),
            },
            Evidence::Guess(_) => "Guess".to_string(),
        }
    }
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One fired deduction or guess: the evidence that explains it, and the
/// candidate eliminations (or the single assignment, for a guess) it caused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvingStep {
    pub evidence: Evidence,
    pub eliminations: Vec<Variation>,
}

impl SolvingStep {
    pub fn new(evidence: Evidence, eliminations: Vec<Variation>) -> Self {
        SolvingStep {
            evidence,
            eliminations,
        }
    }
}
