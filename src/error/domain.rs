use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the auction lifecycle engine.
///
/// All variants are recoverable by the caller and distinct from
/// infrastructure failures: a client can tell "your bid was too low" apart
/// from "the system is unavailable". Each carries the context needed to
/// render a response.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The auction is not accepting bids: its status is not `active`, or
    /// the current time is outside the bidding window.
    #[error("This auction is not currently active.")]
    NotActive,

    /// The bidder has no verified identity or no payment method on file.
    #[error("You must verify your ID and add a payment method before bidding.")]
    NotEligible,

    /// The proposed amount is under the current minimum acceptable bid.
    #[error("Minimum bid is ${minimum}")]
    BelowMinimum {
        /// Minimum acceptable amount at the time of validation
        minimum: Decimal,
    },

    /// The requested state transition is not permitted from the entity's
    /// current status. Never silently ignored.
    #[error("Cannot {action} while {status}")]
    InvalidTransition {
        /// The attempted operation, e.g. "cancel auction"
        action: &'static str,
        /// Status the entity was in when the transition was refused
        status: &'static str,
    },

    /// The auction closed with an empty bid ledger; no order can be created.
    #[error("Auction {auction_id} closed without a winning bid")]
    NoWinner {
        /// ID of the auction that has no winner
        auction_id: i32,
    },

    /// A concurrent update on the same auction won the race and the bounded
    /// retries were exhausted. Transient; the caller may resubmit.
    #[error("Auction {auction_id} is receiving heavy bidding, please try again.")]
    StorageConflict {
        /// ID of the contended auction
        auction_id: i32,
    },
}

/// Maps engine rejections to HTTP status codes.
///
/// # Returns
/// - 400 Bad Request - `NotActive`, `BelowMinimum`
/// - 403 Forbidden - `NotEligible`
/// - 409 Conflict - `InvalidTransition`, `NoWinner`, `StorageConflict`
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotActive | Self::BelowMinimum { .. } => StatusCode::BAD_REQUEST,
            Self::NotEligible => StatusCode::FORBIDDEN,
            Self::InvalidTransition { .. } | Self::NoWinner { .. } | Self::StorageConflict { .. } => {
                StatusCode::CONFLICT
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
