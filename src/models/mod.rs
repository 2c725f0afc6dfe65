use serde::{Deserialize, Serialize};

/// Number of binary genre flag columns in the catalog.
pub const GENRE_COUNT: usize = 26;

/// Dimension of the similarity feature vector: weighted rating + genre flags.
pub const FEATURE_DIM: usize = GENRE_COUNT + 1;

/// One row of the movie catalog.
///
/// Titles act as the lookup key for recommendations but are not enforced
/// unique; the catalog resolves a title to its first matching row.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    /// Popularity-weighted rating, the first similarity feature.
    pub weighted_rating: f64,
    /// Plain average rating, shown on cards but not used for similarity.
    pub average_rating: f64,
    /// Path suffix on the poster host. Empty or missing means no poster.
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    /// Binary genre flags in catalog column order (Action through Western).
    pub genres: [u8; GENRE_COUNT],
}

impl Movie {
    /// Returns the feature vector used for nearest-neighbor lookups.
    ///
    /// Layout is fixed: weighted rating first, then the genre flags in
    /// catalog column order.
    pub fn features(&self) -> [f64; FEATURE_DIM] {
        let mut features = [0.0; FEATURE_DIM];
        features[0] = self.weighted_rating;
        for (slot, &flag) in features[1..].iter_mut().zip(&self.genres) {
            *slot = f64::from(flag);
        }
        features
    }
}

/// Display card returned by the recommendation and random-pick endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCard {
    pub title: String,
    pub rating: f64,
    /// Full poster URL, present only when the movie has a non-empty path.
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

impl MovieCard {
    /// Builds a card, joining the poster path onto the poster host base URL.
    pub fn from_movie(movie: &Movie, poster_base_url: &str) -> Self {
        let poster_url = movie
            .poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", poster_base_url, path));

        MovieCard {
            title: movie.title.clone(),
            rating: movie.average_rating,
            poster_url,
            overview: movie.overview.clone(),
        }
    }
}
