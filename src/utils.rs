use rust_decimal::Decimal;
use std::fmt::Display;

/// Render a slice as `[a, b, c]`
pub(crate) fn display_list<T: Display>(values: &[T]) -> String {
    let inner: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Second entry of the values sorted in descending order; duplicates count
pub(crate) fn second_highest(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    let mut sorted: Vec<Decimal> = values.into_iter().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.get(1).copied()
}

/// Indices of every entry equal to the maximum, in ascending order
pub(crate) fn argmax_all(values: impl IntoIterator<Item = Decimal>) -> Vec<usize> {
    let mut best: Option<Decimal> = None;
    let mut indices = Vec::new();
    for (idx, value) in values.into_iter().enumerate() {
        match best {
            Some(current) if value < current => {}
            Some(current) if value == current => indices.push(idx),
            _ => {
                best = Some(value);
                indices.clear();
                indices.push(idx);
            }
        }
    }
    indices
}
