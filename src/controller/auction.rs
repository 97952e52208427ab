use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::net::SocketAddr;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::ErrorDto,
        auction::{
            AuctionDetailDto, PaginatedAuctionsDto, PlaceBidDto, PlaceBidResponseDto, SetMaxBidDto,
        },
        bid::BidDto,
    },
    service::auction::AuctionService,
    state::AppState,
};

pub static AUCTION_TAG: &str = "auction";

#[derive(Deserialize)]
pub struct PaginationQuery {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    20
}

#[utoipa::path(
    get,
    path = "/api/auctions",
    tag = AUCTION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "Active auctions, soonest-ending first", body = PaginatedAuctionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_auctions(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let now = state.clock.now();

    let page = AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .list_active(pagination.page, pagination.per_page, now)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

#[utoipa::path(
    get,
    path = "/api/auctions/{id}",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Auction details", body = AuctionDetailDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let now = state.clock.now();

    let auction = AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .get_detail(id, now)
        .await?;

    Ok((StatusCode::OK, Json(auction)))
}

#[utoipa::path(
    get,
    path = "/api/auctions/{id}/bids",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 200, description = "Bid history with masked bidders", body = Vec<BidDto>),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auction_bids(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bids = AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .get_bid_history(id)
        .await?;

    Ok((StatusCode::OK, Json(bids)))
}

#[utoipa::path(
    post,
    path = "/api/auctions/{id}/bids",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    request_body = PlaceBidDto,
    responses(
        (status = 201, description = "Bid accepted", body = PlaceBidResponseDto),
        (status = 400, description = "Auction not active or amount below minimum", body = ErrorDto),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 403, description = "Bidder not eligible", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 409, description = "Heavy bidding, retry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_bid(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<PlaceBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let now = state.clock.now();

    let response = AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .submit_bid(&user, id, payload.amount, Some(addr.ip().to_string()), now)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auctions/{id}/max-bid",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    request_body = SetMaxBidDto,
    responses(
        (status = 201, description = "Ceiling registered", body = PlaceBidResponseDto),
        (status = 400, description = "Auction not active or ceiling below minimum", body = ErrorDto),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 403, description = "Bidder not eligible", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_max_bid(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<SetMaxBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let now = state.clock.now();

    let response = AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .set_max_bid(&user, id, payload.max_bid, Some(addr.ip().to_string()), now)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/auctions/{id}",
    tag = AUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Auction ID")
    ),
    responses(
        (status = 204, description = "Auction cancelled"),
        (status = 401, description = "Missing or invalid API token", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Auction not found", body = ErrorDto),
        (status = 409, description = "Auction already reached a terminal state", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_auction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::Admin])
        .await?;
    let now = state.clock.now();

    AuctionService::new(&state.db, &state.rules, state.events.as_ref())
        .cancel_auction(id, now)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
