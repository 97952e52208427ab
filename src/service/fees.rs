//! Tax computation for the order factory.

use rust_decimal::Decimal;

/// Computes the tax line for an order.
///
/// The default deployment applies a single flat rate, but jurisdictions
/// differ; implementors can look at the price however they need as long as
/// the result is a non-negative amount rounded to cents.
pub trait TaxPolicy: Send + Sync {
    fn tax_for(&self, vehicle_price: Decimal, buyer_fee: Decimal) -> Decimal;
}

/// Flat-rate tax on the vehicle price plus buyer premium.
pub struct FlatRateTax {
    rate_percent: Decimal,
}

impl FlatRateTax {
    pub fn new(rate_percent: Decimal) -> Self {
        Self { rate_percent }
    }
}

impl TaxPolicy for FlatRateTax {
    fn tax_for(&self, vehicle_price: Decimal, buyer_fee: Decimal) -> Decimal {
        ((vehicle_price + buyer_fee) * self.rate_percent / Decimal::ONE_HUNDRED).round_dp(2)
    }
}
