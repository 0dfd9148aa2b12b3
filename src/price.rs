//! Reference commodity price seam.
//!
//! The live market-data client is an external collaborator; the core only
//! sees this trait. Any provider failure is substituted with a fixed default
//! so a dead market feed never fails a simulation run.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

/// Price used whenever the provider cannot supply one.
pub const DEFAULT_REFERENCE_PRICE: Decimal = dec!(80.0);

/// Blocking source of the most recent closing price for the reference
/// commodity.
pub trait ReferencePrice {
    fn closing_price(&self) -> Result<Decimal>;
}

/// Fixed-price provider, useful for tests and offline runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrice(pub Decimal);

impl ReferencePrice for FixedPrice {
    fn closing_price(&self) -> Result<Decimal> {
        Ok(self.0)
    }
}

/// Fetch the reference price, falling back to [`DEFAULT_REFERENCE_PRICE`]
/// on any failure. The failure is logged, never propagated; no retries.
pub fn reference_price_or_default(provider: &dyn ReferencePrice) -> Decimal {
    match provider.closing_price() {
        Ok(price) => price.round_dp(2),
        Err(err) => {
            warn!(
                error = %err,
                fallback = %DEFAULT_REFERENCE_PRICE,
                "reference price unavailable"
            );
            DEFAULT_REFERENCE_PRICE
        }
    }
}
