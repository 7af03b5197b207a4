use crate::transport::http::handlers::{health, shell, shop};
use crate::transport::http::types::{AppState, ErrorResponse, HealthResponse, ShopListResponse};
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Lets popup-based wallet / OAuth sign-in windows talk back to the opener.
pub const CROSS_ORIGIN_OPENER_POLICY: &str = "same-origin-allow-popups";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        shop::list_shop_items_handler,
        shell::offline_handler,
        shell::manifest_handler
    ),
    components(schemas(ShopListResponse, ErrorResponse, HealthResponse))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/shop", get(shop::list_shop_items_handler))
        .route("/offline", get(shell::offline_handler))
        .route("/offline.html", get(shell::offline_handler))
        .route("/manifest.webmanifest", get(shell::manifest_handler))
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static(CROSS_ORIGIN_OPENER_POLICY),
        ))
}
