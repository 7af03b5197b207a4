//! Static web shell: offline fallback page and PWA manifest.

use axum::http::header;
use axum::response::{Html, IntoResponse};

const OFFLINE_HTML: &str = include_str!("../../../../static/offline.html");

#[utoipa::path(
    get,
    path = "/offline",
    responses((status = 200, description = "Fallback page shown when the client is offline", body = String, content_type = "text/html"))
)]
pub async fn offline_handler() -> Html<&'static str> {
    Html(OFFLINE_HTML)
}

#[utoipa::path(
    get,
    path = "/manifest.webmanifest",
    responses((status = 200, description = "PWA manifest", body = String, content_type = "application/manifest+json"))
)]
pub async fn manifest_handler() -> impl IntoResponse {
    let manifest = serde_json::json!({
        "name": "Storefront",
        "short_name": "Storefront",
        "start_url": "/",
        "display": "standalone",
        "background_color": "#ffffff",
        "theme_color": "#14f195",
        "icons": [
            { "src": "/icons/icon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "/icons/icon-512.png", "sizes": "512x512", "type": "image/png" }
        ]
    });
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        manifest.to_string(),
    )
}
