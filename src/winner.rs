//! Winner determination with a reproducible tie-break.
//!
//! Each bundle goes to the bidder with the highest effective value. When
//! several bidders share that maximum a [`TieBreak`] picks one of them. The
//! default [`SeededTieBreak`] re-seeds its generator from the same constant on
//! every call, so a whole search replays the same winners run after run.
//!
//! The bundle's second value is the second-highest *raw* bid on its
//! representative (first) item. For multi-item bundles this is only an
//! approximation of the counterfactual welfare.

use crate::{
    error::{AuctionError, Result},
    types::{Bidder, EffectiveValueMatrix, Partition, ValueMatrix, WinnerAssignment},
    utils::{argmax_all, second_highest},
    validation::MIN_BIDDERS,
};
use rand::{SeedableRng, seq::IndexedRandom};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_TIE_BREAK_SEED: u64 = 10;

/// Chooses one bidder out of a set of tied maximizers
pub trait TieBreak {
    /// `tied` is non-empty and sorted ascending
    fn choose(&self, tied: &[Bidder]) -> Option<Bidder>;
}

/// Uniform choice from a generator seeded identically on every call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededTieBreak {
    seed: u64,
}

impl SeededTieBreak {
    pub fn new(seed: u64) -> Self {
        SeededTieBreak { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeededTieBreak {
    fn default() -> Self {
        SeededTieBreak::new(DEFAULT_TIE_BREAK_SEED)
    }
}

impl TieBreak for SeededTieBreak {
    fn choose(&self, tied: &[Bidder]) -> Option<Bidder> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        tied.choose(&mut rng).copied()
    }
}

/// Always the lowest-index tied bidder
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LowestBidder;

impl TieBreak for LowestBidder {
    fn choose(&self, tied: &[Bidder]) -> Option<Bidder> {
        tied.first().copied()
    }
}

/// Pick a winner and a second value for every bundle, in partition order
pub fn determine_winners<T: TieBreak + ?Sized>(
    values: &ValueMatrix,
    effective: &EffectiveValueMatrix,
    partition: &Partition,
    tie_break: &T,
) -> Result<Vec<WinnerAssignment>> {
    partition
        .bundles()
        .iter()
        .enumerate()
        .map(|(bundle_idx, bundle)| {
            let tied = argmax_all(effective.bundle_column(bundle_idx));
            let winner = match tied.as_slice() {
                [] => None,
                [only] => Some(*only),
                _ => tie_break.choose(&tied),
            }
            .ok_or(AuctionError::EmptyTieSet { bundle: bundle_idx })?;

            let representative = bundle
                .representative()
                .ok_or(AuctionError::EmptyBundle { bundle: bundle_idx })?;
            let second_value = second_highest(values.item_column(representative)).ok_or(
                AuctionError::TooFewBidders {
                    found: values.bidder_count(),
                    required: MIN_BIDDERS,
                },
            )?;

            Ok(WinnerAssignment {
                winner,
                second_value,
            })
        })
        .collect()
}
