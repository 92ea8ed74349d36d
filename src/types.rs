use crate::{error::Result, utils::display_list, validation::check_value_rows};
use rust_decimal::Decimal;
use std::{
    fmt::{Display, Formatter},
    ops::Range,
};

#[cfg(feature = "serde")]
use {
    serde::{Deserialize, Serialize},
    tabled::Tabled,
};

// For clarity
pub type Bidder = usize;
pub type Item = usize;

/// Willingness-to-pay of every bidder (rows) for every single item (columns)
#[derive(Debug, Clone, PartialEq)]
pub struct ValueMatrix {
    rows: Vec<Vec<Decimal>>,
    item_count: usize,
}

impl ValueMatrix {
    /// Build from one row per bidder; rows must be rectangular and non-negative
    pub fn from_rows(rows: Vec<Vec<Decimal>>) -> Result<Self> {
        check_value_rows(&rows)?;
        let item_count = rows[0].len();
        Ok(ValueMatrix { rows, item_count })
    }

    /// Get the number of bidders
    pub fn bidder_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of items
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn bidders(&self) -> Range<Bidder> {
        0..self.bidder_count()
    }

    pub fn items(&self) -> Range<Item> {
        0..self.item_count
    }

    pub fn value(&self, bidder: Bidder, item: Item) -> Decimal {
        self.rows[bidder][item]
    }

    pub fn row(&self, bidder: Bidder) -> &[Decimal] {
        &self.rows[bidder]
    }

    /// Every bidder's raw value for one item, in bidder order
    pub fn item_column(&self, item: Item) -> impl Iterator<Item = Decimal> + '_ {
        self.rows.iter().map(move |row| row[item])
    }
}

/// A set of items auctioned as one lot; the first item represents the bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Bundle {
    items: Vec<Item>,
}

impl Bundle {
    pub fn new(items: Vec<Item>) -> Self {
        Bundle { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn representative(&self) -> Option<Item> {
        self.items.first().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for Bundle {
    fn from(items: Vec<Item>) -> Self {
        Bundle::new(items)
    }
}

impl Display for Bundle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", display_list(&self.items))
    }
}

/// One candidate allocation: disjoint bundles covering every item
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Partition {
    bundles: Vec<Bundle>,
}

impl Partition {
    /// Create from a vector of bundles
    pub fn from_bundles(bundles: Vec<Bundle>) -> Self {
        Partition { bundles }
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Get the number of bundles
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

impl From<Vec<Vec<Item>>> for Partition {
    fn from(bundles: Vec<Vec<Item>>) -> Self {
        Partition::from_bundles(bundles.into_iter().map(Bundle::new).collect())
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", display_list(&self.bundles))
    }
}

/// Bidder × bundle values derived for a single partition
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveValueMatrix {
    rows: Vec<Vec<Decimal>>,
    bundle_count: usize,
}

impl EffectiveValueMatrix {
    pub(crate) fn new(rows: Vec<Vec<Decimal>>, bundle_count: usize) -> Self {
        EffectiveValueMatrix { rows, bundle_count }
    }

    pub fn bidder_count(&self) -> usize {
        self.rows.len()
    }

    pub fn bundle_count(&self) -> usize {
        self.bundle_count
    }

    pub fn value(&self, bidder: Bidder, bundle: usize) -> Decimal {
        self.rows[bidder][bundle]
    }

    pub fn row(&self, bidder: Bidder) -> &[Decimal] {
        &self.rows[bidder]
    }

    /// Every bidder's effective value for one bundle, in bidder order
    pub fn bundle_column(&self, bundle: usize) -> impl Iterator<Item = Decimal> + '_ {
        self.rows.iter().map(move |row| row[bundle])
    }
}

/// Winner of a bundle and the baseline used to price it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WinnerAssignment {
    pub winner: Bidder,
    pub second_value: Decimal,
}

/// Everything produced by evaluating one partition
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AllocationOutcome {
    pub partition: Partition,
    pub winners: Vec<WinnerAssignment>,
    pub prices: Vec<Decimal>,
    pub welfare: Vec<Decimal>,
    pub score: Decimal,
}

impl AllocationOutcome {
    /// One row per bundle, in partition order
    pub fn bundle_rows(&self) -> Vec<BundleOutcome> {
        self.partition
            .bundles()
            .iter()
            .zip(&self.winners)
            .zip(self.prices.iter().zip(&self.welfare))
            .map(|((bundle, assignment), (&price, &welfare))| BundleOutcome {
                bundle: bundle.to_string(),
                winner: assignment.winner,
                winning_value: welfare,
                second_value: assignment.second_value,
                price,
            })
            .collect()
    }
}

impl Display for AllocationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "For allocation {}: prices charged by mechanism {} and total {}",
            self.partition,
            display_list(&self.prices),
            self.score
        )
    }
}

/// Per-bundle view of an outcome, for reporting
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize, Tabled))]
#[derive(Debug, Clone, PartialEq)]
pub struct BundleOutcome {
    pub bundle: String,
    pub winner: Bidder,
    pub winning_value: Decimal,
    pub second_value: Decimal,
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuctionError;
    use rust_decimal::dec;

    #[test]
    fn test_value_matrix_creation() {
        let matrix =
            ValueMatrix::from_rows(vec![vec![dec!(10), dec!(1)], vec![dec!(2), dec!(9)]]).unwrap();
        assert_eq!(matrix.bidder_count(), 2);
        assert_eq!(matrix.item_count(), 2);
        assert_eq!(matrix.value(1, 0), dec!(2));
        assert_eq!(matrix.row(0), &[dec!(10), dec!(1)]);
        assert_eq!(
            matrix.item_column(1).collect::<Vec<_>>(),
            vec![dec!(1), dec!(9)]
        );
    }

    #[test]
    fn test_value_matrix_rejects_single_bidder() {
        let result = ValueMatrix::from_rows(vec![vec![dec!(3), dec!(4)]]);
        assert!(matches!(
            result,
            Err(AuctionError::TooFewBidders {
                found: 1,
                required: 2
            })
        ));
    }

    #[test]
    fn test_bundle_representative() {
        let bundle = Bundle::new(vec![3, 1, 2]);
        assert_eq!(bundle.representative(), Some(3));
        assert_eq!(bundle.len(), 3);
        assert!(Bundle::new(vec![]).representative().is_none());
    }

    #[test]
    fn test_partition_display() {
        let partition = Partition::from(vec![vec![0, 1], vec![2]]);
        assert_eq!(partition.len(), 2);
        assert!(!partition.is_empty());
        assert_eq!(partition.to_string(), "[[0, 1], [2]]");
    }

    #[test]
    fn test_outcome_display_and_rows() {
        let outcome = AllocationOutcome {
            partition: Partition::from(vec![vec![0], vec![1]]),
            winners: vec![
                WinnerAssignment {
                    winner: 0,
                    second_value: dec!(2),
                },
                WinnerAssignment {
                    winner: 1,
                    second_value: dec!(1),
                },
            ],
            prices: vec![dec!(2), dec!(1)],
            welfare: vec![dec!(10), dec!(9)],
            score: dec!(3),
        };
        assert_eq!(
            outcome.to_string(),
            "For allocation [[0], [1]]: prices charged by mechanism [2, 1] and total 3"
        );

        let rows = outcome.bundle_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].bundle, "[1]");
        assert_eq!(rows[1].winner, 1);
        assert_eq!(rows[1].winning_value, dec!(9));
        assert_eq!(rows[1].price, dec!(1));
    }
}
