//! Index page and fallback

use axum::response::Html;

use crate::backend::error::BackendError;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Neighborly</title></head>
<body>
<h1>Neighborly</h1>
<ul>
<li><code>POST /register</code></li>
<li><code>POST /login</code></li>
<li><code>POST /logout</code></li>
<li><code>GET /protected</code></li>
<li><code>POST /events/create</code></li>
<li><code>GET /events/view</code></li>
<li><code>POST /posts</code></li>
<li><code>GET /posts/view</code></li>
<li><code>POST /posts/{id}/delete</code></li>
</ul>
</body>
</html>
"#;

/// `GET /`, also the target of flash redirects
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// JSON 404 for unknown routes
pub async fn not_found() -> BackendError {
    BackendError::not_found("Not found")
}
