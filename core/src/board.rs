use serde::{Deserialize, Serialize};

use crate::*;

/// A titled, ordered group of clues; the clue position is the row index
/// of the board column this category occupies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue_at(&self, index: usize) -> Option<&Clue> {
        self.clues.get(index)
    }
}

/// Outcome of a reveal interaction on one clue.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The clue was already fully revealed; nothing changed.
    NoOp,
    /// The clue advanced to `state` and `text` should be displayed.
    Revealed { state: RevealState, text: String },
}

impl RevealOutcome {
    /// Whether this outcome requires the affected cell to be redrawn.
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Revealed { .. })
    }
}

/// The full in-memory state of one round: an ordered sequence of
/// categories, each an ordered sequence of clues.
///
/// The board owns its clue state exclusively; the single mutation path
/// is [`Board::transition`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of columns (categories).
    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Number of rows (clues per category); the loader guarantees all
    /// categories share this length.
    pub fn rows(&self) -> usize {
        self.categories.first().map_or(0, |cat| cat.clues().len())
    }

    pub fn category_at(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn clue_at(&self, category: usize, clue: usize) -> Option<&Clue> {
        self.categories.get(category)?.clues.get(clue)
    }

    /// Advance the addressed clue one reveal step.
    ///
    /// `Hidden` shows the question, `Question` shows the answer, and a
    /// fully revealed clue is a harmless [`RevealOutcome::NoOp`].
    /// Out-of-range indices are a caller contract violation and leave
    /// the board untouched.
    pub fn transition(&mut self, category: usize, clue: usize) -> Result<RevealOutcome> {
        let target = self
            .categories
            .get_mut(category)
            .and_then(|cat| cat.clues.get_mut(clue))
            .ok_or(BoardError::IndexOutOfRange { category, clue })?;

        let Some(next) = target.reveal().next() else {
            return Ok(RevealOutcome::NoOp);
        };

        target.set_reveal(next);
        log::debug!("clue ({category}, {clue}) advanced to {next:?}");

        let text = match next {
            RevealState::Question => target.question().to_owned(),
            RevealState::Answer => target.answer().to_owned(),
            RevealState::Hidden => unreachable!("Hidden is never a successor state"),
        };
        Ok(RevealOutcome::Revealed { state: next, text })
    }
}
