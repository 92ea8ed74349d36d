//! Externality pricing of bundle winners.
//!
//! The winner's contribution is its effective value minus the bundle's second
//! value, and the mechanism charges the effective value minus that
//! contribution. The two steps cancel: every winner pays exactly the bundle's
//! second value whatever it bid above it, including the multi-item case where
//! the representative item's second value exceeds the winner's effective
//! value. Prices are kept in that form rather than recomputed from the
//! welfare-maximizing allocation without the winner.
//!
//! `Decimal` keeps 28 significant digits, so a winner value and second value
//! far apart in magnitude can round the contribution. A price that does not
//! come back to the second value is rejected rather than charged.

use crate::{
    error::{AuctionError, Result},
    types::{EffectiveValueMatrix, WinnerAssignment},
};
use rust_decimal::Decimal;

/// Prices charged to bundle winners alongside the welfare they contribute
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payments {
    /// Price per bundle; losers pay nothing
    pub prices: Vec<Decimal>,
    /// Winner's effective value per bundle
    pub welfare: Vec<Decimal>,
}

/// Price every bundle of one partition
pub fn price_winners(
    effective: &EffectiveValueMatrix,
    winners: &[WinnerAssignment],
) -> Result<Payments> {
    let mut payments = Payments {
        prices: Vec::with_capacity(winners.len()),
        welfare: Vec::with_capacity(winners.len()),
    };

    for (bundle, assignment) in winners.iter().enumerate() {
        let value_winner = effective.value(assignment.winner, bundle);
        let price = value_winner
            .checked_sub(assignment.second_value)
            .and_then(|contribution| value_winner.checked_sub(contribution))
            .ok_or(AuctionError::Overflow { context: "price" })?;

        if price != assignment.second_value {
            return Err(AuctionError::InexactPrice {
                bundle,
                value_winner,
                second_value: assignment.second_value,
            });
        }

        payments.prices.push(price);
        payments.welfare.push(value_winner);
    }

    Ok(payments)
}
