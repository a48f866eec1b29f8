use cluegrid_core::CategoryId;

use crate::{CategoryDetail, CategorySummary, FetchError};

/// Where category data comes from.
///
/// The loader is generic over this seam so the sample-and-load pipeline
/// can run against the real HTTP service or an in-memory fake in tests.
pub trait CategorySource {
    /// Fetch the pool of available categories to sample from.
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, FetchError>;

    /// Fetch the full detail (title plus raw clues) for one category.
    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail, FetchError>;
}
