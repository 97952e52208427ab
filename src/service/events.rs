//! Lifecycle event notifications.
//!
//! Services announce the facts downstream systems care about through this
//! seam; notification transports (websockets, email, webhooks) subscribe
//! here without the engine knowing about them. The default sink writes
//! structured log lines.

use rust_decimal::Decimal;
use tracing::info;

/// Observer for auction lifecycle events. Implementations must not block;
/// event delivery happens on the bid and sweep paths.
pub trait EventSink: Send + Sync {
    fn bid_accepted(&self, auction_id: i32, user_id: i32, amount: Decimal, extended: bool);

    fn auction_ended(&self, auction_id: i32, winner_id: Option<i32>, final_price: Decimal);

    fn order_created(&self, order_id: i32, order_number: &str, auction_id: Option<i32>);
}

/// Sink that emits each event as a structured log line.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn bid_accepted(&self, auction_id: i32, user_id: i32, amount: Decimal, extended: bool) {
        info!(auction_id, user_id, %amount, extended, "bid accepted");
    }

    fn auction_ended(&self, auction_id: i32, winner_id: Option<i32>, final_price: Decimal) {
        info!(auction_id, winner_id, %final_price, "auction ended");
    }

    fn order_created(&self, order_id: i32, order_number: &str, auction_id: Option<i32>) {
        info!(order_id, order_number, auction_id, "order created");
    }
}
