//! Sequential search for the revenue-maximizing partition.
//!
//! [`AllocationSearch`] owns the value matrix and the running [`BestRecord`].
//! Candidates are evaluated one at a time in the order they are supplied:
//!
//! ```text
//! Idle -> Evaluating -> Updating -> Idle -> ... -> Done
//! ```
//!
//! A candidate that fails to evaluate, or that the sink fails to record,
//! leaves the best record untouched. Ties on score go to the most recently
//! evaluated candidate.

use crate::{
    effective::derive_effective_values,
    error::{AuctionError, Result},
    pricing::{Payments, price_winners},
    scoring::score,
    sink::AllocationSink,
    types::{AllocationOutcome, Partition, ValueMatrix},
    validation::check_partition,
    winner::{SeededTieBreak, TieBreak, determine_winners},
};
use derive_builder::Builder;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Evaluate a single partition: effective values, winners, prices and score
pub fn evaluate_partition<T: TieBreak + ?Sized>(
    values: &ValueMatrix,
    partition: &Partition,
    tie_break: &T,
) -> Result<AllocationOutcome> {
    check_partition(partition, values.item_count())?;

    let effective = derive_effective_values(values, partition)?;
    let winners = determine_winners(values, &effective, partition, tie_break)?;
    let Payments { prices, welfare } = price_winners(&effective, &winners)?;
    let score = score(&prices)?;

    Ok(AllocationOutcome {
        partition: partition.clone(),
        winners,
        prices,
        welfare,
        score,
    })
}

/// Highest-scoring partition observed so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestRecord {
    allocation: Option<Partition>,
    score: Decimal,
}

impl BestRecord {
    /// No allocation yet; scores are non-negative so zero acts as the floor
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocation(&self) -> Option<&Partition> {
        self.allocation.as_ref()
    }

    pub fn score(&self) -> Decimal {
        self.score
    }

    /// Install `partition` if it scores at least as well as the current best
    pub fn offer(&mut self, partition: &Partition, score: Decimal) -> bool {
        if score >= self.score {
            self.allocation = Some(partition.clone());
            self.score = score;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Evaluating,
    Updating,
    Done,
}

/// Search over candidate partitions, generic over how bundle ties are broken
#[derive(Debug, Builder)]
pub struct AllocationSearch<T: TieBreak + Clone + Default = SeededTieBreak> {
    values: ValueMatrix,
    #[builder(default)]
    tie_break: T,
    #[builder(setter(skip))]
    best: BestRecord,
    #[builder(setter(skip))]
    state: SearchState,
    #[builder(setter(skip))]
    evaluated: usize,
}

impl AllocationSearch {
    /// Search over `values` with the default tie-break seed
    pub fn new(values: ValueMatrix) -> Self {
        Self::with_tie_break(values, SeededTieBreak::default())
    }
}

impl<T: TieBreak + Clone + Default> AllocationSearch<T> {
    pub fn with_tie_break(values: ValueMatrix, tie_break: T) -> Self {
        AllocationSearch {
            values,
            tie_break,
            best: BestRecord::new(),
            state: SearchState::Idle,
            evaluated: 0,
        }
    }

    pub fn values(&self) -> &ValueMatrix {
        &self.values
    }

    pub fn tie_break(&self) -> &T {
        &self.tie_break
    }

    pub fn best(&self) -> &BestRecord {
        &self.best
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Number of candidates evaluated successfully
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Evaluate without touching the search state
    pub fn evaluate(&self, partition: &Partition) -> Result<AllocationOutcome> {
        evaluate_partition(&self.values, partition, &self.tie_break)
    }

    /// Evaluate one candidate, report it to `sink`, then update the best record
    pub fn step<S: AllocationSink + ?Sized>(
        &mut self,
        partition: &Partition,
        sink: &mut S,
    ) -> Result<AllocationOutcome> {
        if self.state == SearchState::Done {
            return Err(AuctionError::SearchFinished);
        }

        self.state = SearchState::Evaluating;
        let outcome = match self.evaluate(partition) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.state = SearchState::Idle;
                warn!(%partition, error = %err, "allocation rejected");
                return Err(err);
            }
        };

        debug!(
            partition = %outcome.partition,
            score = %outcome.score,
            "evaluated allocation"
        );
        if let Err(err) = sink.record(&outcome) {
            self.state = SearchState::Idle;
            warn!(%partition, error = %err, "allocation not recorded");
            return Err(err);
        }
        self.evaluated += 1;

        self.state = SearchState::Updating;
        if self.best.offer(&outcome.partition, outcome.score) {
            info!(partition = %outcome.partition, score = %outcome.score, "new best allocation");
        }
        self.state = SearchState::Idle;

        Ok(outcome)
    }

    /// Evaluate every candidate in order, then freeze the best record.
    ///
    /// The first failing candidate aborts the run; the search stays open and
    /// the best record keeps whatever was found before the failure.
    pub fn run<I, S>(&mut self, partitions: I, sink: &mut S) -> Result<&BestRecord>
    where
        I: IntoIterator<Item = Partition>,
        S: AllocationSink + ?Sized,
    {
        if self.state == SearchState::Done {
            return Err(AuctionError::SearchFinished);
        }

        for partition in partitions {
            self.step(&partition, sink)?;
        }

        self.state = SearchState::Done;
        info!(
            evaluated = self.evaluated,
            best_score = %self.best.score(),
            "allocation search finished"
        );
        Ok(&self.best)
    }

    /// Consume the search and return its best record
    pub fn finish(self) -> BestRecord {
        self.best
    }
}
