//! The deduction round: drives the [`crate::rules`] families across
//! increasing levels `k`, exposing the fired steps as a lazy stream.
//!
//! Rust has no native generators, so where this crate's lineage would yield
//! steps one at a time from a coroutine, [`Deducer`] is instead an
//! [`Iterator`] over `&mut Puzzle`: each `next()` call resumes the scan,
//! mutates the puzzle in place the moment it finds something, and returns
//! just that one step.

use crate::error::Result;
use crate::evidence::SolvingStep;
use crate::puzzle::Puzzle;
use crate::rules::{hidden, linked, naked};

/// The three deduction rule families. The stable external vocabulary used in
/// [`DeducerConfig::max_levels`] and in step transcripts (`[naked@2]`, and so
/// on); `guess` is the searcher's own fourth member of this vocabulary (see
/// [`crate::evidence::GuessEvidence`]) but never appears here since it has no
/// per-level cap to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Naked,
    Hidden,
    Linked,
}

impl Rule {
    const ALL: [Rule; 3] = [Rule::Naked, Rule::Hidden, Rule::Linked];

    fn deduce_fn(self) -> fn(&mut Puzzle, u8) -> Result<Option<SolvingStep>> {
        match self {
            Rule::Naked => naked::deduce,
            Rule::Hidden => hidden::deduce,
            Rule::Linked => linked::deduce,
        }
    }
}

/// A rule family's level cap: `-1` means unlimited, `0` disables the family
/// entirely, and any positive value caps the highest `k` it may run at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxLevel(i16);

impl MaxLevel {
    pub const UNLIMITED: MaxLevel = MaxLevel(-1);
    pub const DISABLED: MaxLevel = MaxLevel(0);

    pub fn capped(level: u8) -> MaxLevel {
        MaxLevel(level as i16)
    }

    fn allows(self, level: u8) -> bool {
        self.0 < 0 || self.0 as u32 >= level as u32
    }
}

/// Behavior knobs for [`Deducer`]. Mirrors the library contract's `Solver`:
/// independent per-[`Rule`] level caps plus the `lowerLevelFirst` restart
/// policy.
#[derive(Debug, Clone, Copy)]
pub struct DeducerConfig {
    pub naked_max_level: MaxLevel,
    pub hidden_max_level: MaxLevel,
    pub linked_max_level: MaxLevel,
    /// When a step fires at level `k`, restart the next scan from level 1
    /// instead of resuming at `k`. Thorough but slower: a rescan from the
    /// bottom after every single elimination tends to prefer the simplest
    /// available technique at each step, at the cost of redoing low-level
    /// scans that usually find nothing new.
    pub lower_level_first: bool,
}

impl DeducerConfig {
    fn max_level_for(&self, rule: Rule) -> MaxLevel {
        match rule {
            Rule::Naked => self.naked_max_level,
            Rule::Hidden => self.hidden_max_level,
            Rule::Linked => self.linked_max_level,
        }
    }

    pub fn max_level_mut(&mut self, rule: Rule) -> &mut MaxLevel {
        match rule {
            Rule::Naked => &mut self.naked_max_level,
            Rule::Hidden => &mut self.hidden_max_level,
            Rule::Linked => &mut self.linked_max_level,
        }
    }

    /// Disables every rule family, leaving nothing for [`Deducer`] to do.
    /// Matches the library contract's `disableAllRules()`.
    pub fn disable_all_rules(&mut self) {
        self.naked_max_level = MaxLevel::DISABLED;
        self.hidden_max_level = MaxLevel::DISABLED;
        self.linked_max_level = MaxLevel::DISABLED;
    }
}

impl Default for DeducerConfig {
    fn default() -> Self {
        DeducerConfig {
            naked_max_level: MaxLevel::capped(4),
            hidden_max_level: MaxLevel::capped(4),
            linked_max_level: MaxLevel::capped(4),
            lower_level_first: true,
        }
    }
}

/// Lazily drives [`crate::rules`] over a puzzle, one fired step per
/// [`Iterator::next`] call, until a full pass finds nothing left to deduce.
pub struct Deducer<'p> {
    puzzle: &'p mut Puzzle,
    config: DeducerConfig,
    resume_level: u8,
}

impl<'p> Deducer<'p> {
    pub fn new(puzzle: &'p mut Puzzle, config: DeducerConfig) -> Self {
        Deducer {
            puzzle,
            config,
            resume_level: 1,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        self.puzzle
    }

    fn top_level(&self) -> u8 {
        self.puzzle.grid().n().saturating_sub(1).max(1)
    }
}

impl<'p> Iterator for Deducer<'p> {
    type Item = Result<SolvingStep>;

    fn next(&mut self) -> Option<Result<SolvingStep>> {
        if self.puzzle.fulfilled() {
            return None;
        }

        let top_level = self.top_level();
        let mut level = self.resume_level.max(1);
        while level <= top_level {
            // `Linked` (fish) is meaningless below k=2; see `LinkedDeduce`.
            let rules: &[Rule] = if level >= 2 {
                &Rule::ALL
            } else {
                &Rule::ALL[..2]
            };
            for &rule in rules {
                if !self.config.max_level_for(rule).allows(level) {
                    continue;
                }
                match (rule.deduce_fn())(self.puzzle, level) {
                    Ok(Some(step)) => {
                        log::trace!("{}@{level} fired: {} elimination(s)", rule_name(rule), step.eliminations.len());
                        self.resume_level = if self.config.lower_level_first {
                            1
                        } else {
                            level
                        };
                        return Some(Ok(step));
                    }
                    Ok(None) => continue,
                    Err(e) => return Some(Err(e)),
                }
            }
            level += 1;
        }

        None
    }
}

fn rule_name(rule: Rule) -> &'static str {
    match rule {
        Rule::Naked => "naked",
        Rule::Hidden => "hidden",
        Rule::Linked => "linked",
    }
}
