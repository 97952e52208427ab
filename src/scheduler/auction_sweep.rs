use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::{error, info};

use crate::{
    config::FeeSchedule,
    error::{domain::DomainError, AppError},
    service::{closer::AuctionCloser, events::EventSink, fees::TaxPolicy, order::OrderService},
    util::clock::TimeSource,
};

/// Starts the auction lifecycle scheduler
///
/// This scheduler runs every minute and:
/// - Activates scheduled auctions whose start time has passed
/// - Closes active auctions whose end time has passed
/// - Creates orders for closed auctions that have a winner
///
/// # Arguments
/// - `db`: Database connection
/// - `fees`: Fee schedule for the order factory
/// - `clock`: Time source read once per sweep
/// - `tax`: Tax policy for the order factory
/// - `events`: Sink notified of activations, closes, and orders
pub async fn start_scheduler(
    db: DatabaseConnection,
    fees: FeeSchedule,
    clock: Arc<dyn TimeSource>,
    tax: Arc<dyn TaxPolicy>,
    events: Arc<dyn EventSink>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_fees = fees.clone();
    let job_clock = clock.clone();
    let job_tax = tax.clone();
    let job_events = events.clone();

    // Run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let fees = job_fees.clone();
        let clock = job_clock.clone();
        let tax = job_tax.clone();
        let events = job_events.clone();

        Box::pin(async move {
            if let Err(e) = run_sweep(&db, &fees, clock, tax, events).await {
                error!("Error running auction sweep: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    info!("Auction lifecycle scheduler started");

    Ok(())
}

/// Runs one activation and close sweep.
///
/// Each closed auction is settled independently; an order failure for one
/// auction is logged and does not stop the rest of the sweep, and the next
/// sweep reports that auction again until its order exists. Auctions that
/// closed without bids are expected and logged at info level.
pub async fn run_sweep(
    db: &DatabaseConnection,
    fees: &FeeSchedule,
    clock: Arc<dyn TimeSource>,
    tax: Arc<dyn TaxPolicy>,
    events: Arc<dyn EventSink>,
) -> Result<(), AppError> {
    let now = clock.now();

    let closer = AuctionCloser::new(db, events.as_ref());
    closer.activate_due(now).await?;
    let closed = closer.sweep_close(now).await?;

    let orders = OrderService::new(db, fees, tax.as_ref(), events.as_ref());
    for result in &closed {
        match orders.create_order_from_auction(result, now).await {
            Ok(order) => {
                info!(
                    auction_id = result.auction.id,
                    order_number = order.order_number,
                    "order created for closed auction"
                );
            }
            Err(AppError::DomainErr(DomainError::NoWinner { auction_id })) => {
                info!(auction_id, "auction closed without bids, no order");
            }
            Err(e) => {
                error!(
                    auction_id = result.auction.id,
                    "Error creating order for closed auction: {}", e
                );
            }
        }
    }

    Ok(())
}
