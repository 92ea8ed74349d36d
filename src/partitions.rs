//! Exhaustive candidate source: every set partition of `0..n`.
//!
//! Partitions are produced lazily from restricted-growth strings, where
//! `a[0] = 0` and `a[i] <= 1 + max(a[0..i])`, and item `i` lands in bundle
//! `a[i]`. The first partition is the grand bundle, the last is all singletons.

use crate::{
    error::{AuctionError, Result},
    types::{Bundle, Partition},
};

/// Bell(12) is already above four million candidates
pub const MAX_ENUMERATED_ITEMS: usize = 12;

/// Iterator over all partitions of a fixed item set
#[derive(Debug, Clone)]
pub struct SetPartitions {
    growth: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl SetPartitions {
    pub fn new(item_count: usize) -> Result<Self> {
        if item_count == 0 {
            return Err(AuctionError::NoItems);
        }
        if item_count > MAX_ENUMERATED_ITEMS {
            return Err(AuctionError::TooManyItems {
                count: item_count,
                limit: MAX_ENUMERATED_ITEMS,
            });
        }
        Ok(SetPartitions {
            growth: vec![0; item_count],
            started: false,
            exhausted: false,
        })
    }

    fn current(&self) -> Partition {
        let n_bundles = self.growth.iter().max().map_or(0, |m| m + 1);
        let mut bundles = vec![Vec::new(); n_bundles];
        for (item, &bundle) in self.growth.iter().enumerate() {
            bundles[bundle].push(item);
        }
        Partition::from_bundles(bundles.into_iter().map(Bundle::new).collect())
    }

    fn advance(&mut self) -> bool {
        for i in (1..self.growth.len()).rev() {
            let prefix_max = self.growth[..i].iter().copied().max().unwrap_or(0);
            if self.growth[i] <= prefix_max {
                self.growth[i] += 1;
                self.growth[i + 1..].fill(0);
                return true;
            }
        }
        false
    }
}

impl Iterator for SetPartitions {
    type Item = Partition;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.exhausted = true;
            return None;
        }
        Some(self.current())
    }
}

/// Number of partitions of an `n`-element set, via the Bell triangle.
///
/// Row `k` of the triangle ends in Bell(k + 1), so Bell(n) is the last entry
/// of row `n - 1`. `None` once the count no longer fits in a `u64` (n > 25).
pub fn bell_number(n: usize) -> Option<u64> {
    let mut row = vec![1u64];
    for _ in 1..n {
        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(*row.last()?);
        for &value in &row {
            let last = *next.last()?;
            next.push(last.checked_add(value)?);
        }
        row = next;
    }
    row.last().copied()
}
