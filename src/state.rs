//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: the database connection is a pool, configuration is small, and the
//! pluggable collaborators sit behind `Arc`.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::{
    config::{AuctionRules, FeeSchedule},
    service::{events::EventSink, fees::TaxPolicy},
    util::clock::TimeSource,
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Bidding and anti-snipe rules applied to every auction.
    pub rules: AuctionRules,

    /// Buyer premium tiers and flat fees applied by the order factory.
    pub fees: FeeSchedule,

    /// Source of the current time. Handlers and sweeps read time once per
    /// request from here, never from the system clock directly, so tests can
    /// pin it.
    pub clock: Arc<dyn TimeSource>,

    /// Tax policy applied to order totals.
    pub tax: Arc<dyn TaxPolicy>,

    /// Observer notified of lifecycle events.
    pub events: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        rules: AuctionRules,
        fees: FeeSchedule,
        clock: Arc<dyn TimeSource>,
        tax: Arc<dyn TaxPolicy>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            db,
            rules,
            fees,
            clock,
            tax,
            events,
        }
    }
}
