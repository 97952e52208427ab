use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    data::{offer::OfferRepository, vehicle::VehicleRepository},
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::{api::ErrorDto, order::OrderDto},
    service::order::OrderService,
    state::AppState,
};

pub static OFFER_TAG: &str = "offer";

#[utoipa::path(
    post,
    path = "/api/offers/{id}/accept",
    tag = OFFER_TAG,
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 201, description = "Offer accepted, order created", body = OrderDto),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 403, description = "Caller is not the vehicle's seller", body = ErrorDto),
        (status = 404, description = "Offer not found", body = ErrorDto),
        (status = 409, description = "Offer no longer pending, or already converted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let now = state.clock.now();

    let offer = OfferRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Offer not found".to_string()))?;

    let vehicle = VehicleRepository::new(&state.db)
        .find_by_id(offer.vehicle_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    if vehicle.seller_id != user.id && !user.admin {
        return Err(AuthError::AccessDenied(
            user.id,
            "User attempted to accept an offer on a vehicle they do not sell".to_string(),
        )
        .into());
    }

    let order = OrderService::new(
        &state.db,
        &state.fees,
        state.tax.as_ref(),
        state.events.as_ref(),
    )
    .create_order_from_offer(id, now)
    .await?;

    Ok((StatusCode::CREATED, Json(OrderDto::from_entity(order))))
}
