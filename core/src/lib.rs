use core::fmt;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use error::*;
pub use sampler::*;
pub use session::*;

mod board;
mod clue;
mod error;
mod sampler;
mod session;

/// Identifier a remote category is addressed by, as handed out by the
/// category pool listing and accepted by the detail endpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board dimensions for one round: how many categories make up the
/// columns and how many clues each category contributes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub categories: usize,
    pub clues_per_category: usize,
}

impl BoardConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_CLUES_PER_CATEGORY: usize = 5;

    pub const fn new_unchecked(categories: usize, clues_per_category: usize) -> Self {
        Self {
            categories,
            clues_per_category,
        }
    }

    pub fn new(categories: usize, clues_per_category: usize) -> Self {
        Self::new_unchecked(categories.max(1), clues_per_category.max(1))
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_CATEGORIES, Self::DEFAULT_CLUES_PER_CATEGORY)
    }
}
