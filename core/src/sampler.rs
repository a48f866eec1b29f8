use rand::Rng;
use rand::seq::index;

use crate::{BoardError, CategoryId, Result};

/// Draws `count` distinct category ids uniformly at random from `pool`.
///
/// Selection is a uniform sample without replacement, so the result is
/// not biased by pool order. The randomness source is supplied by the
/// caller; a seeded RNG makes the selection reproducible.
///
/// A pool smaller than `count` (or a zero `count`) is rejected with
/// [`BoardError::InsufficientPool`] rather than silently returning
/// fewer ids.
pub fn sample_categories<R: Rng + ?Sized>(
    pool: &[CategoryId],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    if count == 0 || count > pool.len() {
        return Err(BoardError::InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }

    let picks = index::sample(rng, pool.len(), count);
    Ok(picks.into_iter().map(|i| pool[i]).collect())
}
