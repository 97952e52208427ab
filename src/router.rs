//! Axum route configuration and API documentation.

use axum::Router;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auction::*, health::*, offer::*, order::*},
    error::AppError,
    state::AppState,
};

/// Sustained bid rate allowed per client IP, in seconds between requests.
const BID_RATE_SECONDS: u64 = 1;
/// Short bursts of bids allowed above the sustained rate.
const BID_RATE_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(tags(
    (name = HEALTH_TAG, description = "Service health"),
    (name = AUCTION_TAG, description = "Auction listings and bidding"),
    (name = OFFER_TAG, description = "Offer acceptance"),
    (name = ORDER_TAG, description = "Purchase orders"),
))]
struct ApiDoc;

pub fn router() -> Result<Router<AppState>, AppError> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(BID_RATE_SECONDS)
        .burst_size(BID_RATE_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid bid rate limiter parameters".to_string()))?;

    // Bid submission is the only write path open to every verified user, so
    // it alone sits behind the per-IP rate limiter.
    let bid_routes = OpenApiRouter::new()
        .routes(routes!(place_bid))
        .routes(routes!(set_max_bid))
        .layer(GovernorLayer::new(governor_conf));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        .routes(routes!(list_auctions))
        .routes(routes!(get_auction, cancel_auction))
        .routes(routes!(get_auction_bids))
        .routes(routes!(accept_offer))
        .routes(routes!(list_orders))
        .routes(routes!(get_order))
        .merge(bid_routes)
        .split_for_parts();

    Ok(router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive()))
}
