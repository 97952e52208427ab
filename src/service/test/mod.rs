use chrono::Duration;
use rust_decimal::Decimal;

use crate::config::{AuctionRules, FeeSchedule, FeeTier};

mod auction;
mod closer;
mod order;

/// Default engine rules for service tests: $100 increment, two-minute
/// snipe window with five-minute extensions, capped at six.
pub fn rules() -> AuctionRules {
    AuctionRules {
        bid_increment: Decimal::new(100, 0),
        snipe_threshold: Duration::seconds(120),
        snipe_extension: Duration::seconds(300),
        max_extensions: 6,
        max_bid_attempts: 3,
    }
}

/// Fee schedule for service tests: 5% up to 10k, 4.75% above, $250
/// premium floor, $75 title fee.
pub fn fees() -> FeeSchedule {
    FeeSchedule {
        tiers: vec![
            FeeTier {
                up_to: Some(Decimal::new(10_000, 0)),
                percent: Decimal::new(50, 1),
            },
            FeeTier {
                up_to: None,
                percent: Decimal::new(475, 2),
            },
        ],
        minimum_buyer_fee: Decimal::new(250, 0),
        title_fee: Decimal::new(75, 0),
        tax_rate_percent: Decimal::ZERO,
    }
}
