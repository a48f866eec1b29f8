use cluegrid_core::{BoardError, CategoryId};
use thiserror::Error;

/// Transport-level failure talking to the category service.
///
/// Raw `reqwest` errors never leave this crate unwrapped; every failure
/// mode the loader can see is a variant here.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("category has {actual} clues, {expected} required")]
    ShortCategory { expected: usize, actual: usize },
}

/// Failure of a whole board load.
///
/// A board is all-or-nothing: any single category failing fails the
/// round, and no partially populated board is ever produced.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("category pool fetch failed: {0}")]
    Pool(#[source] FetchError),
    #[error("category {id} failed to load: {source}")]
    Category {
        id: CategoryId,
        #[source]
        source: FetchError,
    },
    #[error(transparent)]
    Sampling(#[from] BoardError),
}

impl LoadError {
    /// The category whose fetch sank the load, if that is what failed.
    pub fn failed_category(&self) -> Option<CategoryId> {
        match self {
            Self::Category { id, .. } => Some(*id),
            Self::Pool(_) | Self::Sampling(_) => None,
        }
    }
}
