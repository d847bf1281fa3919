use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - Landing page with a small form demonstrating the API
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
