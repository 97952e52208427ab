use chrono::Duration;
use rust_decimal::Decimal;

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_decimal, parse_fee_tiers},
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_BID_INCREMENT: &str = "100";
const DEFAULT_SNIPE_THRESHOLD_SECS: &str = "120";
const DEFAULT_SNIPE_EXTENSION_SECS: &str = "300";
const DEFAULT_MAX_EXTENSIONS: &str = "6";
const DEFAULT_BID_RETRY_LIMIT: &str = "3";
const DEFAULT_BUYER_FEE_TIERS: &str = "10000:5.0,25000:4.75,:4.5";
const DEFAULT_BUYER_FEE_MINIMUM: &str = "250";
const DEFAULT_TITLE_FEE: &str = "75";
const DEFAULT_TAX_RATE_PERCENT: &str = "0";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub rules: AuctionRules,
    pub fees: FeeSchedule,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: env_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            rules: AuctionRules::from_env()?,
            fees: FeeSchedule::from_env()?,
        })
    }
}

/// Bidding rules applied by the auction lifecycle engine.
///
/// These are deployment-wide: every auction uses the same increment and
/// anti-snipe parameters for its entire lifetime.
#[derive(Clone, Debug)]
pub struct AuctionRules {
    /// Minimum amount a new bid must exceed the current price by.
    pub bid_increment: Decimal,
    /// A bid landing within this window before the end time triggers an
    /// anti-snipe extension.
    pub snipe_threshold: Duration,
    /// How far the end time is pushed out by one extension.
    pub snipe_extension: Duration,
    /// Upper bound on extensions per auction.
    pub max_extensions: i16,
    /// How many times a bid is retried after losing a concurrent-update
    /// race before surfacing `StorageConflict`.
    pub max_bid_attempts: u32,
}

impl AuctionRules {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bid_increment: parse_decimal(
                "BID_INCREMENT",
                &env_or("BID_INCREMENT", DEFAULT_BID_INCREMENT),
            )?,
            snipe_threshold: Duration::seconds(parse_int(
                "SNIPE_THRESHOLD_SECS",
                &env_or("SNIPE_THRESHOLD_SECS", DEFAULT_SNIPE_THRESHOLD_SECS),
            )?),
            snipe_extension: Duration::seconds(parse_int(
                "SNIPE_EXTENSION_SECS",
                &env_or("SNIPE_EXTENSION_SECS", DEFAULT_SNIPE_EXTENSION_SECS),
            )?),
            max_extensions: parse_int(
                "MAX_EXTENSIONS",
                &env_or("MAX_EXTENSIONS", DEFAULT_MAX_EXTENSIONS),
            )?,
            max_bid_attempts: parse_int(
                "BID_RETRY_LIMIT",
                &env_or("BID_RETRY_LIMIT", DEFAULT_BID_RETRY_LIMIT),
            )?,
        })
    }
}

/// One tier of the buyer-premium schedule.
///
/// Applies to sale prices up to and including `up_to`; `None` marks the
/// open-ended final tier.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeTier {
    pub up_to: Option<Decimal>,
    pub percent: Decimal,
}

/// Fee components the order factory applies when an auction closes with a
/// winner or an offer is accepted.
#[derive(Clone, Debug)]
pub struct FeeSchedule {
    /// Buyer-premium tiers, ascending by limit, last one open-ended.
    pub tiers: Vec<FeeTier>,
    /// Floor for the buyer premium regardless of tier percentage.
    pub minimum_buyer_fee: Decimal,
    /// Flat title-processing fee.
    pub title_fee: Decimal,
    /// Flat-rate tax percentage; jurisdiction-specific policies can replace
    /// this through the `TaxPolicy` trait.
    pub tax_rate_percent: Decimal,
}

impl FeeSchedule {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            tiers: parse_fee_tiers(
                "BUYER_FEE_TIERS",
                &env_or("BUYER_FEE_TIERS", DEFAULT_BUYER_FEE_TIERS),
            )?,
            minimum_buyer_fee: parse_decimal(
                "BUYER_FEE_MINIMUM",
                &env_or("BUYER_FEE_MINIMUM", DEFAULT_BUYER_FEE_MINIMUM),
            )?,
            title_fee: parse_decimal("TITLE_FEE", &env_or("TITLE_FEE", DEFAULT_TITLE_FEE))?,
            tax_rate_percent: parse_decimal(
                "TAX_RATE_PERCENT",
                &env_or("TAX_RATE_PERCENT", DEFAULT_TAX_RATE_PERCENT),
            )?,
        })
    }

    /// Computes the buyer premium for a sale price: the matching tier's
    /// percentage of the price, floored at `minimum_buyer_fee`, rounded to
    /// cents.
    pub fn buyer_fee(&self, price: Decimal) -> Decimal {
        let percent = self
            .tiers
            .iter()
            .find(|tier| tier.up_to.is_none_or(|limit| price <= limit))
            .map(|tier| tier.percent)
            .unwrap_or(Decimal::ZERO);

        let fee = (price * percent / Decimal::ONE_HUNDRED).round_dp(2);
        fee.max(self.minimum_buyer_fee)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parses an integer at the width of its destination, so an out-of-range
/// value errors instead of truncating.
fn parse_int<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("'{}' is not a valid integer: {}", value.trim(), e),
        })
}
