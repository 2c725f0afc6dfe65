use rand::seq::index;
use rand::Rng;

use crate::catalog::MovieCatalog;
use crate::error::{AppError, AppResult};
use crate::models::Movie;

/// Picks `count` distinct movies uniformly at random.
///
/// Errors when the catalog holds fewer rows than requested; `count == 0`
/// yields an empty list.
pub fn random_movies<'a, R: Rng + ?Sized>(
    catalog: &'a MovieCatalog,
    count: usize,
    rng: &mut R,
) -> AppResult<Vec<&'a Movie>> {
    if count > catalog.len() {
        return Err(AppError::InvalidInput(format!(
            "cannot sample {} movies from a catalog of {}",
            count,
            catalog.len()
        )));
    }

    let picks = index::sample(rng, catalog.len(), count);
    Ok(picks
        .into_iter()
        .filter_map(|idx| catalog.get(idx))
        .collect())
}
