//! Pure bid validation.
//!
//! Works on snapshots of the auction and bidder and touches no storage, so
//! the same checks can run before a write and again after an optimistic
//! retry. Checks run in a fixed order and stop at the first failure:
//! auction state, then bidder eligibility, then amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{config::AuctionRules, error::domain::DomainError};

/// Minimum acceptable bid for an auction snapshot.
///
/// The opening bid only has to meet the vehicle's starting price; once a
/// bid exists every later bid must clear the current price by the
/// configured increment.
pub fn minimum_acceptable(
    auction: &entity::auction::Model,
    starting_price: Decimal,
    rules: &AuctionRules,
) -> Decimal {
    if auction.bid_count == 0 {
        starting_price
    } else {
        auction.current_bid + rules.bid_increment
    }
}

/// Validates one proposed bid against an auction snapshot.
///
/// # Returns
/// - `Ok(())`: The bid is acceptable against this snapshot
/// - `Err(DomainError::NotActive)`: Auction not accepting bids
/// - `Err(DomainError::NotEligible)`: Bidder lacks ID verification or a payment method
/// - `Err(DomainError::BelowMinimum)`: Amount under the current minimum
pub fn validate(
    auction: &entity::auction::Model,
    starting_price: Decimal,
    bidder: &entity::user::Model,
    amount: Decimal,
    now: DateTime<Utc>,
    rules: &AuctionRules,
) -> Result<(), DomainError> {
    if !auction.is_active(now) {
        return Err(DomainError::NotActive);
    }

    if !bidder.can_bid() {
        return Err(DomainError::NotEligible);
    }

    let minimum = minimum_acceptable(auction, starting_price, rules);
    if amount < minimum {
        return Err(DomainError::BelowMinimum { minimum });
    }

    Ok(())
}
