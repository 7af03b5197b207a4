use crate::transport::http::types::{AppState, ErrorResponse, ShopListResponse, SHOP_FETCH_FAILED};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/shop",
    responses(
        (status = 200, description = "Active shop items ordered by cost", body = ShopListResponse),
        (status = 500, description = "Catalogue query failed", body = ErrorResponse)
    )
)]
pub async fn list_shop_items_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.shop.list_active_items().await {
        Ok(items) => (StatusCode::OK, Json(ShopListResponse { items })).into_response(),
        Err(e) => {
            // The database error stays in the server log.
            tracing::error!(error = %e, "shop listing query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: SHOP_FETCH_FAILED.to_string(),
                }),
            )
                .into_response()
        }
    }
}
