use crate::catalog::MovieCatalog;
use crate::models::Movie;

/// Finds the movies nearest to a catalog title in feature space.
///
/// Scans every row and keeps the `count + 1` nearest so the query row
/// itself fits in the window. Every row sharing the query title is then
/// dropped without backfilling, so remakes reusing a title shrink the
/// result instead of pulling in farther neighbors.
///
/// A title absent from the catalog yields an empty list.
pub fn similar_movies<'a>(catalog: &'a MovieCatalog, title: &str, count: usize) -> Vec<&'a Movie> {
    let query_idx = match catalog.find_by_title(title) {
        Some(idx) => idx,
        None => return Vec::new(),
    };
    let query = match catalog.features(query_idx) {
        Some(features) => features,
        None => return Vec::new(),
    };

    // Squared Euclidean distance; ordering matches Euclidean
    let mut neighbors: Vec<(f64, usize)> = catalog
        .feature_rows()
        .iter()
        .enumerate()
        .map(|(idx, features)| (squared_distance(query, features), idx))
        .collect();
    neighbors.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut nearest: Vec<&Movie> = neighbors
        .into_iter()
        .take(count + 1)
        .filter_map(|(_, idx)| catalog.get(idx))
        .filter(|movie| movie.title != title)
        .collect();
    nearest.truncate(count);
    nearest
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GENRE_COUNT, FEATURE_DIM};

    fn movie(title: &str, weighted_rating: f64, genre_slots: &[usize]) -> Movie {
        let mut genres = [0; GENRE_COUNT];
        for &slot in genre_slots {
            genres[slot] = 1;
        }

        Movie {
            title: title.to_string(),
            weighted_rating,
            average_rating: weighted_rating,
            poster_path: None,
            overview: None,
            genres,
        }
    }

    fn titles(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.title.clone()).collect()
    }

    #[test]
    fn test_nearest_by_rating_order() {
        let catalog = MovieCatalog::from_movies(vec![
            movie("Query", 5.0, &[]),
            movie("Far", 9.0, &[]),
            movie("Near", 5.1, &[]),
            movie("Mid", 7.0, &[]),
        ]);

        let result = similar_movies(&catalog, "Query", 2);
        assert_eq!(titles(&result), vec!["Near", "Mid"]);
    }

    #[test]
    fn test_genre_flags_outweigh_small_rating_gaps() {
        let catalog = MovieCatalog::from_movies(vec![
            movie("Query", 7.0, &[0]),
            movie("Same Genre", 7.3, &[0]),
            movie("Other Genre", 7.0, &[8]),
        ]);

        // 0.3 of rating distance beats a two-flag genre mismatch
        let result = similar_movies(&catalog, "Query", 2);
        assert_eq!(titles(&result), vec!["Same Genre", "Other Genre"]);
    }

    #[test]
    fn test_excludes_every_row_sharing_the_query_title() {
        let catalog = MovieCatalog::from_movies(vec![
            movie("Solaris", 5.0, &[]),
            movie("Solaris", 5.02, &[]),
            movie("Stalker", 5.1, &[]),
            movie("Mirror", 5.2, &[]),
            movie("Nostalghia", 9.0, &[]),
        ]);

        // Window of count + 1 = 3 nearest holds both Solaris rows, and the
        // duplicate is dropped without backfilling
        let result = similar_movies(&catalog, "Solaris", 2);
        assert_eq!(titles(&result), vec!["Stalker"]);
    }

    #[test]
    fn test_unknown_title_returns_empty() {
        let catalog = MovieCatalog::from_movies(vec![movie("Only", 5.0, &[])]);

        assert!(similar_movies(&catalog, "Missing", 6).is_empty());
    }

    #[test]
    fn test_count_capped_by_catalog_size() {
        let catalog = MovieCatalog::from_movies(vec![
            movie("Query", 5.0, &[]),
            movie("A", 5.1, &[]),
            movie("B", 5.2, &[]),
        ]);

        let result = similar_movies(&catalog, "Query", 10);
        assert_eq!(titles(&result), vec!["A", "B"]);
    }

    #[test]
    fn test_distance_is_zero_for_identical_features() {
        let a = [1.0; FEATURE_DIM];
        assert_eq!(squared_distance(&a, &a), 0.0);

        let mut b = a;
        b[0] = 3.0;
        assert_eq!(squared_distance(&a, &b), 4.0);
    }
}
