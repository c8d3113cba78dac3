//! Error and control-flow signals raised by the core.
//!
//! [`Error::Paradox`] and [`Error::StopSearching`] are not "errors" in the usual sense:
//! they are typed control-flow signals threaded through `Result` so that `?` can unwind
//! a deduction or search cleanly. [`Error::InvalidInput`] is the only variant that can
//! reach a caller outside this crate; it only arises at the boundary with a puzzle
//! file parser, which lives outside this crate.

use crate::evidence::Evidence;

/// Errors and control-flow signals produced by the solver core.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A rule proved the current puzzle inconsistent. Carries the evidence that
    /// uncovered the contradiction.
    #[error("paradox detected: {0}")]
    Paradox(Evidence),

    /// Internal signal used by [`crate::searcher::search`] to unwind once the
    /// requested number of solutions has been found. Never observed outside the
    /// searcher's own `?` propagation.
    #[error("search stopped after reaching the solution limit")]
    StopSearching,

    /// A grid or puzzle description given by a collaborator (parser, CLI) was
    /// invalid. Never raised by the deduction or search core itself.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;
