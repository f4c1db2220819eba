//! Statue orientation tracking for the sunny room puzzle.

use std::collections::BTreeMap;

use crate::statue::StatueId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("{0} is not part of the puzzle")]
    UnknownStatue(StatueId),
}

/// How the solved predicate changed after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleTransition {
    /// Unsolved before, solved now.
    Solved,
    /// Solved before, unsolved now.
    Regressed,
    Unchanged,
}

/// Remembers the latest orientation report of every registered statue.
#[derive(Clone, Debug, Default)]
pub struct StatueOrientationTracker {
    latest: BTreeMap<StatueId, bool>,
}

impl StatueOrientationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `statue` with an initial "facing correctly" report.
    /// Registering twice overwrites the report.
    pub fn register(&mut self, statue: StatueId, correct: bool) {
        self.latest.insert(statue, correct);
    }

    pub fn tracked(&self) -> usize {
        self.latest.len()
    }

    pub fn is_correct(&self, statue: StatueId) -> Option<bool> {
        self.latest.get(&statue).copied()
    }

    /// True iff at least one statue is tracked and every tracked statue's
    /// latest report was "correct". Evaluated on demand.
    pub fn has_required_rotations(&self) -> bool {
        !self.latest.is_empty() && self.latest.values().all(|&correct| correct)
    }

    pub fn record_orientation_event(
        &mut self,
        statue: StatueId,
        correct: bool,
    ) -> Result<PuzzleTransition, PuzzleError> {
        let was_solved = self.has_required_rotations();
        let slot = self
            .latest
            .get_mut(&statue)
            .ok_or(PuzzleError::UnknownStatue(statue))?;
        *slot = correct;

        let transition = match (was_solved, self.has_required_rotations()) {
            (false, true) => PuzzleTransition::Solved,
            (true, false) => PuzzleTransition::Regressed,
            _ => PuzzleTransition::Unchanged,
        };
        if transition != PuzzleTransition::Unchanged {
            tracing::info!(%statue, ?transition, "puzzle state changed");
        }
        Ok(transition)
    }
}
