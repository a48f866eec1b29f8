use cluegrid_core::CategoryId;
use serde::{Deserialize, Serialize};

/// One entry of the remote category pool listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub title: String,
    /// How many clues the remote claims to hold for this category.
    /// Advisory only; the loader re-checks the detail payload.
    #[serde(default)]
    pub clues_count: u32,
}

/// Full category payload from the detail endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub title: String,
    pub clues: Vec<WireClue>,
}

/// A raw clue as the remote serves it, before any reveal state exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireClue {
    pub question: String,
    pub answer: String,
}
