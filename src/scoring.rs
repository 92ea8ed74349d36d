use crate::error::{AuctionError, Result};
use rust_decimal::Decimal;

/// Total revenue of one partition: the sum of its bundle prices
pub fn score(prices: &[Decimal]) -> Result<Decimal> {
    prices
        .iter()
        .try_fold(Decimal::ZERO, |total, price| total.checked_add(*price))
        .ok_or(AuctionError::Overflow { context: "score" })
}
