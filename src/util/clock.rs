use chrono::{DateTime, Utc};

/// Source of the current time.
///
/// Handlers and the scheduler read the clock once per operation and pass the
/// resulting instant down into the services, so service logic is a pure
/// function of its `now` argument and tests can pin time without mocking.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time source used in production.
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
