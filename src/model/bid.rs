use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bid ledger entry as exposed in public listings.
///
/// Bidder identity is masked; only the trailing digits of the user id are
/// shown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BidDto {
    pub id: i32,
    pub amount: Decimal,
    pub bidder: String,
    pub is_auto_bid: bool,
    pub created_at: DateTime<Utc>,
}

impl BidDto {
    pub fn from_entity(entity: entity::bid::Model) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            bidder: mask_user_id(entity.user_id),
            is_auto_bid: entity.is_auto_bid,
            created_at: entity.created_at,
        }
    }
}

/// Masks a user id for public display, keeping only the last two digits.
pub fn mask_user_id(user_id: i32) -> String {
    let digits = user_id.to_string();
    let tail = &digits[digits.len().saturating_sub(2)..];
    format!("user***{}", tail)
}
