use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::catalog::store::MovieCatalog;
use crate::error::{AppError, AppResult};
use crate::models::{Movie, GENRE_COUNT};

/// Raw catalog row as exported by the offline rating pipeline.
///
/// Column names follow the export headers; the genre flag columns appear
/// in the same order they occupy in the feature vector.
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "primaryTitle")]
    title: String,
    #[serde(rename = "weightedRating")]
    weighted_rating: f64,
    #[serde(rename = "Action")]
    action: u8,
    #[serde(rename = "Adult")]
    adult: u8,
    #[serde(rename = "Adventure")]
    adventure: u8,
    #[serde(rename = "Animation")]
    animation: u8,
    #[serde(rename = "Biography")]
    biography: u8,
    #[serde(rename = "Comedy")]
    comedy: u8,
    #[serde(rename = "Crime")]
    crime: u8,
    #[serde(rename = "Documentary")]
    documentary: u8,
    #[serde(rename = "Drama")]
    drama: u8,
    #[serde(rename = "Family")]
    family: u8,
    #[serde(rename = "Fantasy")]
    fantasy: u8,
    #[serde(rename = "Film-Noir")]
    film_noir: u8,
    #[serde(rename = "History")]
    history: u8,
    #[serde(rename = "Horror")]
    horror: u8,
    #[serde(rename = "Music")]
    music: u8,
    #[serde(rename = "Musical")]
    musical: u8,
    #[serde(rename = "Mystery")]
    mystery: u8,
    #[serde(rename = "News")]
    news: u8,
    #[serde(rename = "Reality-TV")]
    reality_tv: u8,
    #[serde(rename = "Romance")]
    romance: u8,
    #[serde(rename = "Sci-Fi")]
    sci_fi: u8,
    #[serde(rename = "Sport")]
    sport: u8,
    #[serde(rename = "Talk-Show")]
    talk_show: u8,
    #[serde(rename = "Thriller")]
    thriller: u8,
    #[serde(rename = "War")]
    war: u8,
    #[serde(rename = "Western")]
    western: u8,
    #[serde(rename = "averageRating_y")]
    average_rating: f64,
    poster_path: Option<String>,
    overview: Option<String>,
    production_countries: Option<String>,
}

impl MovieRow {
    fn genres(&self) -> [u8; GENRE_COUNT] {
        [
            self.action,
            self.adult,
            self.adventure,
            self.animation,
            self.biography,
            self.comedy,
            self.crime,
            self.documentary,
            self.drama,
            self.family,
            self.fantasy,
            self.film_noir,
            self.history,
            self.horror,
            self.music,
            self.musical,
            self.mystery,
            self.news,
            self.reality_tv,
            self.romance,
            self.sci_fi,
            self.sport,
            self.talk_show,
            self.thriller,
            self.war,
            self.western,
        ]
    }
}

/// Loads the catalog CSV, dropping rows whose production countries contain
/// the excluded marker.
///
/// A missing country field counts as empty and is kept. Rows with
/// non-finite ratings are rejected so every stored feature vector orders
/// cleanly under `total_cmp`.
pub fn load_catalog(path: impl AsRef<Path>, excluded_country: &str) -> AppResult<MovieCatalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut movies = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize() {
        let row: MovieRow = row?;

        let countries = row.production_countries.as_deref().unwrap_or("");
        if countries.contains(excluded_country) {
            dropped += 1;
            continue;
        }

        if !row.weighted_rating.is_finite() || !row.average_rating.is_finite() {
            return Err(AppError::Catalog(format!(
                "non-finite rating for '{}'",
                row.title
            )));
        }

        let genres = row.genres();
        movies.push(Movie {
            title: row.title,
            weighted_rating: row.weighted_rating,
            average_rating: row.average_rating,
            poster_path: row.poster_path,
            overview: row.overview,
            genres,
        });
    }

    info!(
        "Loaded {} movies from {} ({} rows dropped by country filter)",
        movies.len(),
        path.display(),
        dropped
    );

    Ok(MovieCatalog::from_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "primaryTitle,weightedRating,Action,Adult,Adventure,Animation,Biography,Comedy,Crime,Documentary,Drama,Family,Fantasy,Film-Noir,History,Horror,Music,Musical,Mystery,News,Reality-TV,Romance,Sci-Fi,Sport,Talk-Show,Thriller,War,Western,averageRating_y,poster_path,overview,production_countries";

    fn write_catalog(rows: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn plain_row(title: &str, weighted: &str, average: &str, country: &str) -> String {
        let flags = vec!["0"; GENRE_COUNT].join(",");
        format!("{},{},{},{},,,{}", title, weighted, flags, average, country)
    }

    #[test]
    fn test_load_parses_rows_and_genres() {
        // Action and Western set: first and last flag columns
        let heat = "Heat,8.1,1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1,8.3,/heat.jpg,Cops and robbers.,US";
        let file = write_catalog(&[heat.to_string(), plain_row("Ran", "8.0", "8.2", "JP")]);

        let catalog = load_catalog(file.path(), "XX").unwrap();
        assert_eq!(catalog.len(), 2);

        let movie = catalog.get(0).unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.weighted_rating, 8.1);
        assert_eq!(movie.average_rating, 8.3);
        assert_eq!(movie.poster_path.as_deref(), Some("/heat.jpg"));
        assert_eq!(movie.overview.as_deref(), Some("Cops and robbers."));
        assert_eq!(movie.genres[0], 1);
        assert_eq!(movie.genres[25], 1);
        assert_eq!(movie.genres[1], 0);
    }

    #[test]
    fn test_load_drops_rows_matching_excluded_country() {
        let file = write_catalog(&[
            plain_row("Kept", "7.0", "7.0", "US"),
            plain_row("Dropped", "7.0", "7.0", "IN"),
            // Substring match applies to quoted multi-country lists too
            plain_row("Also Dropped", "7.0", "7.0", "\"GB,IN\""),
        ]);

        let catalog = load_catalog(file.path(), "IN").unwrap();
        assert_eq!(catalog.titles(), vec!["Kept"]);
    }

    #[test]
    fn test_load_keeps_rows_without_country() {
        let file = write_catalog(&[plain_row("No Country", "7.0", "7.0", "")]);

        let catalog = load_catalog(file.path(), "IN").unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get(0).unwrap().poster_path.is_none());
        assert!(catalog.get(0).unwrap().overview.is_none());
    }

    #[test]
    fn test_load_rejects_non_finite_rating() {
        let file = write_catalog(&[plain_row("Broken", "NaN", "7.0", "US")]);

        let err = load_catalog(file.path(), "IN").unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_load_rejects_malformed_row() {
        let file = write_catalog(&[plain_row("Broken", "not-a-number", "7.0", "US")]);

        let err = load_catalog(file.path(), "IN").unwrap_err();
        assert!(matches!(err, AppError::Csv(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_catalog("/definitely/not/here.csv", "IN");
        assert!(result.is_err());
    }
}
