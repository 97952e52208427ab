use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{api::ErrorDto, order::OrderDto},
    service::order::OrderService,
    state::AppState,
};

pub static ORDER_TAG: &str = "order";

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Caller's orders, newest first", body = Vec<OrderDto>),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_orders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let orders = OrderService::new(
        &state.db,
        &state.fees,
        state.tax.as_ref(),
        state.events.as_ref(),
    )
    .list_for_buyer(&user)
    .await?;

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order details", body = OrderDto),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 404, description = "Order not found or not visible to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let order = OrderService::new(
        &state.db,
        &state.fees,
        state.tax.as_ref(),
        state.events.as_ref(),
    )
    .get_for_user(id, &user)
    .await?;

    Ok((StatusCode::OK, Json(order)))
}
