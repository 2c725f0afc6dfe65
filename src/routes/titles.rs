use axum::{extract::State, Json};
use std::sync::Arc;

use crate::routes::AppState;

/// Handler for the title picker listing
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.titles())
}
