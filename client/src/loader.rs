use cluegrid_core::{Board, BoardConfig, Category, CategoryId, Clue, sample_categories};
use futures::future::try_join_all;
use rand::Rng;

use crate::{CategorySource, FetchError, LoadError};

/// Fetch every category in `refs` and assemble a fully hidden board.
///
/// Detail fetches are issued concurrently; assembly preserves the order
/// of `refs`, which is the user-visible column order. The load is
/// all-or-nothing: one failing or undersized category fails the whole
/// round and no board is produced. Oversized categories are truncated
/// to `clues_per_category`.
pub async fn load_board<S: CategorySource>(
    source: &S,
    refs: &[CategoryId],
    clues_per_category: usize,
) -> Result<Board, LoadError> {
    let fetches = refs.iter().map(|&id| async move {
        let detail = source
            .category_detail(id)
            .await
            .map_err(|source| LoadError::Category { id, source })?;

        if detail.clues.len() < clues_per_category {
            return Err(LoadError::Category {
                id,
                source: FetchError::ShortCategory {
                    expected: clues_per_category,
                    actual: detail.clues.len(),
                },
            });
        }

        let clues = detail
            .clues
            .into_iter()
            .take(clues_per_category)
            .map(|clue| Clue::new(clue.question, clue.answer))
            .collect();
        Ok(Category::new(detail.title, clues))
    });

    let categories = try_join_all(fetches).await?;
    log::info!("loaded board with {} categories", categories.len());
    Ok(Board::new(categories))
}

/// The full start/restart pipeline: list the pool, sample
/// `config.categories` ids, load them into a board.
///
/// No retry happens here; the caller restarts the whole pipeline on
/// failure.
pub async fn new_round<S, R>(
    source: &S,
    config: BoardConfig,
    rng: &mut R,
) -> Result<Board, LoadError>
where
    S: CategorySource,
    R: Rng + ?Sized,
{
    let pool = source.list_categories().await.map_err(LoadError::Pool)?;
    let ids: Vec<CategoryId> = pool.iter().map(|summary| summary.id).collect();
    let picked = sample_categories(&ids, config.categories, rng)?;
    log::debug!("sampled categories {picked:?} from pool of {}", ids.len());
    load_board(source, &picked, config.clues_per_category).await
}
