use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AppResult, models::MovieCard, routes::AppState, services::sampling};

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    count: Option<usize>,
}

/// Handler for the random picks endpoint
///
/// `count` defaults to the configured recommendation count and is rejected
/// with a 400 when it exceeds the catalog size.
pub async fn pick(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomQuery>,
) -> AppResult<Json<Vec<MovieCard>>> {
    let count = params.count.unwrap_or(state.recommendation_count);
    let movies = sampling::random_movies(&state.catalog, count, &mut rand::rng())?;

    let cards = movies
        .into_iter()
        .map(|movie| MovieCard::from_movie(movie, &state.poster_base_url))
        .collect();
    Ok(Json(cards))
}
