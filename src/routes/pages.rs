use axum::response::Html;

/// Serves the single-page picker UI
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
