use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::{Movie, FEATURE_DIM};

/// In-memory movie catalog shared read-only across requests.
///
/// Feature vectors are computed once at construction so per-request
/// similarity scans never re-derive them from rows.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    features: Vec<[f64; FEATURE_DIM]>,
    /// Maps each title to its first row. Later rows with the same title
    /// stay in the catalog but never resolve from a title lookup.
    title_index: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

impl MovieCatalog {
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let features = movies.iter().map(Movie::features).collect();

        let mut title_index = HashMap::with_capacity(movies.len());
        for (idx, movie) in movies.iter().enumerate() {
            title_index.entry(movie.title.clone()).or_insert(idx);
        }

        MovieCatalog {
            movies,
            features,
            title_index,
            loaded_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// Resolves a title to the index of its first matching row.
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Distinct titles in first-appearance order, for the picker dropdown.
    pub fn titles(&self) -> Vec<String> {
        self.movies
            .iter()
            .enumerate()
            .filter(|&(idx, movie)| self.find_by_title(&movie.title) == Some(idx))
            .map(|(_, movie)| movie.title.clone())
            .collect()
    }

    pub fn features(&self, index: usize) -> Option<&[f64; FEATURE_DIM]> {
        self.features.get(index)
    }

    /// All feature vectors, row-aligned with `movies()`.
    pub fn feature_rows(&self) -> &[[f64; FEATURE_DIM]] {
        &self.features
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
