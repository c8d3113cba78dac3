//! A solver core for sudoku-like puzzles of arbitrary block geometry.
//!
//! The crate combines logical deduction over candidate sets ([`deducer`],
//! [`rules`]) with depth-first guessing ([`searcher`]) for puzzles deduction
//! alone cannot close. [`Solver`] is the single configuration surface over
//! both layers; [`Grid`] and [`Puzzle`] are the geometry and state the rest
//! of the crate operates on.
//!
//! Parsing puzzle files, formatting step transcripts, and any other
//! user-facing presentation are deliberately left to callers; this crate's
//! surface is the grid/candidate model plus the deduction and search
//! algorithms over it.

pub mod candidate_set;
pub mod cell_set;
pub mod combinator;
pub mod deducer;
pub mod error;
pub mod evidence;
pub mod grid;
pub mod puzzle;
pub mod rules;
pub mod searcher;
mod solver;

pub use candidate_set::CandidateSet;
pub use deducer::{Deducer, DeducerConfig, MaxLevel, Rule};
pub use error::{Error, Result};
pub use evidence::{Evidence, SolvingStep};
pub use grid::{Cell, Grid, House, HouseKind};
pub use puzzle::Puzzle;
pub use searcher::{SearchConfig, Solution};
pub use solver::Solver;
