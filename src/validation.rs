use crate::{
    error::{AuctionError, Result},
    types::Partition,
};
use rust_decimal::Decimal;

/// Second values need at least two bids on every item
pub const MIN_BIDDERS: usize = 2;

/// Validate the shape and sign of raw value rows
pub(crate) fn check_value_rows(rows: &[Vec<Decimal>]) -> Result<()> {
    if rows.len() < MIN_BIDDERS {
        return Err(AuctionError::TooFewBidders {
            found: rows.len(),
            required: MIN_BIDDERS,
        });
    }

    let expected = rows[0].len();
    if expected == 0 {
        return Err(AuctionError::NoItems);
    }

    for (bidder, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(AuctionError::RaggedRow {
                bidder,
                found: row.len(),
                expected,
            });
        }
        if let Some((item, &value)) = row.iter().enumerate().find(|(_, v)| **v < Decimal::ZERO) {
            return Err(AuctionError::NegativeValue {
                bidder,
                item,
                value,
            });
        }
    }

    Ok(())
}

/// Check that the bundles are non-empty, in range, disjoint and cover `0..item_count`
pub fn check_partition(partition: &Partition, item_count: usize) -> Result<()> {
    let mut seen = vec![false; item_count];

    for (bundle_idx, bundle) in partition.bundles().iter().enumerate() {
        if bundle.is_empty() {
            return Err(AuctionError::EmptyBundle { bundle: bundle_idx });
        }
        for &item in bundle.items() {
            if item >= item_count {
                return Err(AuctionError::UnknownItem {
                    bundle: bundle_idx,
                    item,
                    item_count,
                });
            }
            if seen[item] {
                return Err(AuctionError::DuplicateItem { item });
            }
            seen[item] = true;
        }
    }

    let missing: Vec<usize> = seen
        .iter()
        .enumerate()
        .filter(|(_, covered)| !**covered)
        .map(|(item, _)| item)
        .collect();
    if !missing.is_empty() {
        return Err(AuctionError::UncoveredItems { missing });
    }

    Ok(())
}
