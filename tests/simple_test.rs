use rust_decimal::{Decimal, dec};
use vcg_allocation::{
    AllocationOutcome, AllocationSearch, AuctionError, NoopSink, Partition, SetPartitions,
    ValueMatrix,
};

fn two_by_two() -> ValueMatrix {
    ValueMatrix::from_rows(vec![vec![dec!(10), dec!(1)], vec![dec!(2), dec!(9)]]).unwrap()
}

#[test]
fn test_single_item_bundles() {
    let search = AllocationSearch::new(two_by_two());
    let outcome = search
        .evaluate(&Partition::from(vec![vec![0], vec![1]]))
        .unwrap();

    let winners: Vec<usize> = outcome.winners.iter().map(|w| w.winner).collect();
    let second_values: Vec<Decimal> = outcome.winners.iter().map(|w| w.second_value).collect();
    assert_eq!(winners, vec![0, 1]);
    assert_eq!(second_values, vec![dec!(2), dec!(1)]);
    assert_eq!(outcome.prices, vec![dec!(2), dec!(1)]);
    assert_eq!(outcome.score, dec!(3));
}

#[test]
fn test_grand_bundle() {
    let search = AllocationSearch::new(two_by_two());
    let outcome = search.evaluate(&Partition::from(vec![vec![0, 1]])).unwrap();

    assert_eq!(outcome.winners[0].winner, 0);
    assert_eq!(outcome.winners[0].second_value, dec!(2));
    assert_eq!(outcome.welfare, vec![dec!(10)]);
    assert_eq!(outcome.prices, vec![dec!(2)]);
    assert_eq!(outcome.score, dec!(2));
}

#[test]
fn test_partial_cover_fails_without_touching_best() {
    let mut search = AllocationSearch::new(two_by_two());
    let result = search.step(&Partition::from(vec![vec![0]]), &mut NoopSink);

    assert!(matches!(
        result,
        Err(AuctionError::UncoveredItems { ref missing }) if missing == &vec![1]
    ));
    assert!(search.best().allocation().is_none());
    assert_eq!(search.best().score(), Decimal::ZERO);
    assert_eq!(search.evaluated(), 0);
}

#[test]
fn test_exhaustive_search_two_items() {
    let mut search = AllocationSearch::new(two_by_two());
    let mut outcomes: Vec<AllocationOutcome> = Vec::new();
    search
        .run(SetPartitions::new(2).unwrap(), &mut outcomes)
        .unwrap();

    let scores: Vec<Decimal> = outcomes.iter().map(|o| o.score).collect();
    assert_eq!(scores, vec![dec!(2), dec!(3)]);

    let best = search.finish();
    assert_eq!(best.score(), dec!(3));
    assert_eq!(
        best.allocation(),
        Some(&Partition::from(vec![vec![0], vec![1]]))
    );
}
