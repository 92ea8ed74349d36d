use crate::{
    search::AllocationSearchBuilderError,
    types::{Bidder, Item},
};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for allocation evaluation and search
#[derive(Debug, Error)]
pub enum AuctionError {
    /// A bundle without items has no maximum and no representative item
    #[error("Bundle {bundle} is empty; every bundle needs at least one item.")]
    EmptyBundle { bundle: usize },

    /// Item index outside the value matrix columns
    #[error("Bundle {bundle} references item {item}, but the value matrix only has {item_count} items.")]
    UnknownItem {
        bundle: usize,
        item: Item,
        item_count: usize,
    },

    /// Bundles are not pairwise disjoint
    #[error("Item {item} appears in more than one bundle.")]
    DuplicateItem { item: Item },

    /// Bundles do not cover the full item set
    #[error("The partition does not cover every item. Missing: {missing:?}")]
    UncoveredItems { missing: Vec<Item> },

    /// Value matrix without columns
    #[error("The value matrix must contain at least one item.")]
    NoItems,

    /// Second values need at least two bids per item
    #[error("The value matrix must contain at least {required} bidders; found {found}.")]
    TooFewBidders { found: usize, required: usize },

    /// Row length disagrees with the first row
    #[error("Bidder {bidder} has {found} values but the matrix has {expected} items.")]
    RaggedRow {
        bidder: Bidder,
        found: usize,
        expected: usize,
    },

    /// Willingness-to-pay must be non-negative
    #[error("Bidder {bidder} has a negative value {value} for item {item}.")]
    NegativeValue {
        bidder: Bidder,
        item: Item,
        value: Decimal,
    },

    /// Tie-break was handed nobody to choose from
    #[error("Tie-break for bundle {bundle} received an empty candidate set.")]
    EmptyTieSet { bundle: usize },

    /// The price round trip lost digits beyond Decimal's 28 significant digits
    #[error(
        "Price of bundle {bundle} is not exact: winner value {value_winner} and second value {second_value} exceed decimal precision."
    )]
    InexactPrice {
        bundle: usize,
        value_winner: Decimal,
        second_value: Decimal,
    },

    /// Decimal arithmetic left the representable range
    #[error("Decimal overflow while computing the {context}.")]
    Overflow { context: &'static str },

    /// Exhaustive enumeration grows with the Bell numbers
    #[error("There are too many items to enumerate: {count} (limit: {limit})")]
    TooManyItems { count: usize, limit: usize },

    /// Delimited input needs a single-byte separator
    #[error("Delimiter {0:?} must be a single ASCII character.")]
    InvalidDelimiter(char),

    /// The search already reached its terminal state
    #[error("The search is finished; its best record is read-only.")]
    SearchFinished,

    #[error("AllocationSearch configuration build error: {0}")]
    SearchBuild(#[from] AllocationSearchBuilderError),

    /// Decimal parsing error
    #[error("Decimal conversion error: {0}")]
    Decimal(#[from] rust_decimal::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("Delimited input error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for auction operations
pub type Result<T> = std::result::Result<T, AuctionError>;
