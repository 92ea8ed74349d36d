//! Projection of single-item values onto the bundles of one partition.
//!
//! A bidder values a bundle at the maximum of its values for the items inside
//! it. The raw [`ValueMatrix`] is only read; every partition gets a freshly
//! derived [`EffectiveValueMatrix`].

use crate::{
    error::{AuctionError, Result},
    types::{EffectiveValueMatrix, Partition, ValueMatrix},
};
use rust_decimal::Decimal;

/// Derive the bidder × bundle value table for `partition`
pub fn derive_effective_values(
    values: &ValueMatrix,
    partition: &Partition,
) -> Result<EffectiveValueMatrix> {
    // Reject bad bundles before touching any row
    for (bundle_idx, bundle) in partition.bundles().iter().enumerate() {
        if bundle.is_empty() {
            return Err(AuctionError::EmptyBundle { bundle: bundle_idx });
        }
        if let Some(&item) = bundle.items().iter().find(|&&i| i >= values.item_count()) {
            return Err(AuctionError::UnknownItem {
                bundle: bundle_idx,
                item,
                item_count: values.item_count(),
            });
        }
    }

    let rows = values
        .bidders()
        .map(|bidder| {
            let row = values.row(bidder);
            partition
                .bundles()
                .iter()
                .map(|bundle| {
                    bundle
                        .items()
                        .iter()
                        .map(|&item| row[item])
                        .max()
                        .unwrap_or(Decimal::ZERO)
                })
                .collect()
        })
        .collect();

    Ok(EffectiveValueMatrix::new(rows, partition.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn example_values() -> ValueMatrix {
        ValueMatrix::from_rows(vec![
            vec![dec!(10), dec!(1), dec!(4)],
            vec![dec!(2), dec!(9), dec!(3)],
            vec![dec!(0), dec!(5), dec!(8)],
        ])
        .unwrap()
    }

    #[test]
    fn test_singletons_copy_raw_values() {
        let values = example_values();
        let partition = Partition::from(vec![vec![0], vec![1], vec![2]]);
        let effective = derive_effective_values(&values, &partition).unwrap();

        assert_eq!(effective.bundle_count(), 3);
        for bidder in values.bidders() {
            assert_eq!(effective.row(bidder), values.row(bidder));
        }
    }

    #[test]
    fn test_bundle_takes_maximum() {
        let values = example_values();
        let partition = Partition::from(vec![vec![0, 1], vec![2]]);
        let effective = derive_effective_values(&values, &partition).unwrap();

        assert_eq!(
            effective.bundle_column(0).collect::<Vec<_>>(),
            vec![dec!(10), dec!(9), dec!(5)]
        );
        assert_eq!(
            effective.bundle_column(1).collect::<Vec<_>>(),
            vec![dec!(4), dec!(3), dec!(8)]
        );
    }

    #[test]
    fn test_effective_value_dominates_items() {
        let values = example_values();
        let partition = Partition::from(vec![vec![2, 0], vec![1]]);
        let effective = derive_effective_values(&values, &partition).unwrap();

        for bidder in values.bidders() {
            for (k, bundle) in partition.bundles().iter().enumerate() {
                for &item in bundle.items() {
                    assert!(effective.value(bidder, k) >= values.value(bidder, item));
                }
            }
        }
    }

    #[test]
    fn test_source_matrix_untouched() {
        let values = example_values();
        let before = values.clone();
        let _ = derive_effective_values(&values, &Partition::from(vec![vec![0, 1, 2]])).unwrap();
        assert_eq!(values, before);
    }

    #[test]
    fn test_unknown_item() {
        let values = example_values();
        let partition = Partition::from(vec![vec![0, 3]]);
        assert!(matches!(
            derive_effective_values(&values, &partition),
            Err(AuctionError::UnknownItem { item: 3, .. })
        ));
    }
}
