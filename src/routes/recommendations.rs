use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{models::MovieCard, routes::AppState, services::recommendations};

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    title: String,
}

/// Handler for the similar-movies endpoint
///
/// A title missing from the catalog is not an error: it yields an empty
/// list, matching a picker that only ever offers catalog titles.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecommendQuery>,
) -> Json<Vec<MovieCard>> {
    let movies = recommendations::similar_movies(
        &state.catalog,
        &params.title,
        state.recommendation_count,
    );

    let cards = movies
        .into_iter()
        .map(|movie| MovieCard::from_movie(movie, &state.poster_base_url))
        .collect();
    Json(cards)
}
