//! VCG-style allocation search library
//!
//! This library partitions a set of auctionable items into bundles, awards
//! each bundle to its highest bidder, prices the winners by their externality
//! and keeps the partition that raises the most revenue.

pub mod effective;
pub mod error;
#[cfg(feature = "serde")]
pub mod io;
pub mod partitions;
pub mod pricing;
pub mod scoring;
pub mod search;
pub mod sink;
pub mod types;
mod utils;
pub mod validation;
pub mod winner;

// Re-export main types and functions
pub use error::{AuctionError, Result};
pub use partitions::{SetPartitions, bell_number};
pub use search::{
    AllocationSearch, AllocationSearchBuilder, BestRecord, SearchState, evaluate_partition,
};
pub use sink::{AllocationSink, NoopSink, WriterSink};
pub use types::{
    AllocationOutcome, Bidder, Bundle, BundleOutcome, Item, Partition, ValueMatrix,
    WinnerAssignment,
};
pub use winner::{DEFAULT_TIE_BREAK_SEED, LowestBidder, SeededTieBreak, TieBreak};
