//! [`Solver`]: the library's single configuration surface over the
//! [`crate::deducer`] and [`crate::searcher`] modules, matching the stable
//! external contract described in the crate's design notes — per-rule level
//! caps, the `lowerLevelFirst` restart policy, `disable_all_rules`, and the
//! `deduce`/`search` entry points.

use crate::deducer::{Deducer, DeducerConfig, MaxLevel, Rule};
use crate::puzzle::Puzzle;
use crate::searcher::{self, SearchConfig, Solution};
use crate::evidence::SolvingStep;

/// Configures and drives both the deduction and search layers over a
/// [`Puzzle`]. Cloning a `Solver` is cheap; it holds no puzzle state of its
/// own.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    config: DeducerConfig,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    /// The current level cap for `rule`.
    pub fn max_level(&self, rule: Rule) -> MaxLevel {
        match rule {
            Rule::Naked => self.config.naked_max_level,
            Rule::Hidden => self.config.hidden_max_level,
            Rule::Linked => self.config.linked_max_level,
        }
    }

    /// Sets the level cap for `rule`. `MaxLevel::DISABLED` turns the family
    /// off; `MaxLevel::UNLIMITED` removes its cap entirely.
    pub fn set_max_level(&mut self, rule: Rule, level: MaxLevel) {
        *self.config.max_level_mut(rule) = level;
    }

    pub fn lower_level_first(&self) -> bool {
        self.config.lower_level_first
    }

    pub fn set_lower_level_first(&mut self, value: bool) {
        self.config.lower_level_first = value;
    }

    /// Disables every rule family; [`Solver::deduce`] will then immediately
    /// report the puzzle unchanged (a fixpoint of zero steps).
    pub fn disable_all_rules(&mut self) {
        self.config.disable_all_rules();
    }

    /// Drives logical deduction over `puzzle` to a fixpoint (or until a
    /// paradox is found), mutating it in place and yielding one
    /// [`SolvingStep`] per `next()` call.
    pub fn deduce<'p>(&self, puzzle: &'p mut Puzzle) -> Deducer<'p> {
        Deducer::new(puzzle, self.config)
    }

    /// Runs deduction to a fixpoint, then depth-first guessing, collecting
    /// up to `max_count` solutions from a clone of `puzzle`. `puzzle` itself
    /// is never mutated.
    pub fn search(&self, puzzle: &Puzzle, max_count: usize) -> Vec<Solution> {
        searcher::search(
            puzzle,
            SearchConfig {
                max_count,
                deducer_config: self.config,
            },
        )
    }

    /// Like [`Solver::search`], but `on_step` is called for every step of
    /// the search (deductions, guesses, and paradoxes) in pre-order across
    /// the whole guess tree, not just the steps on accepted branches — the
    /// callback form of the step stream (see [`crate::searcher`]).
    pub fn search_with(
        &self,
        puzzle: &Puzzle,
        max_count: usize,
        on_step: impl FnMut(&SolvingStep),
    ) -> Vec<Solution> {
        searcher::search_with(
            puzzle,
            SearchConfig {
                max_count,
                deducer_config: self.config,
            },
            on_step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate_set::CandidateSet;
    use crate::evidence::Evidence;
    use crate::grid::{Cell, Grid};
    use std::rc::Rc;

    #[test]
    fn disable_all_rules_leaves_deduce_a_no_op() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let mut puzzle = Puzzle::new(grid);
        puzzle.set_candidates(Cell::new(0, 0), CandidateSet::single(0));
        puzzle.set_candidates(Cell::new(0, 1), CandidateSet::single(1));
        puzzle.set_candidates(Cell::new(0, 2), CandidateSet::single(2));
        // (0,3) is left with all four candidates: a naked single, except
        // every rule has been disabled.

        let mut solver = Solver::new();
        solver.disable_all_rules();
        let mut deducer = solver.deduce(&mut puzzle);
        assert!(deducer.next().is_none());
        assert_eq!(puzzle.candidates(Cell::new(0, 3)).size(), 4);
    }

    #[test]
    fn max_level_round_trips() {
        let mut solver = Solver::new();
        solver.set_max_level(Rule::Linked, MaxLevel::capped(3));
        assert_eq!(solver.max_level(Rule::Linked), MaxLevel::capped(3));
        assert_eq!(solver.max_level(Rule::Naked), DeducerConfig::default().naked_max_level);
    }

    #[test]
    fn search_reaches_a_solved_fulfilled_puzzle() {
        let grid = Rc::new(Grid::new(2, 2).unwrap());
        let puzzle = Puzzle::new(grid);
        let solver = Solver::new();
        let solutions = solver.search(&puzzle, 1);
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].puzzle.solved());
        assert!(solutions[0]
            .steps
            .iter()
            .all(|s| !matches!(s.evidence, Evidence::Naked(_)) || s.evidence.level() >= 1));
    }
}
