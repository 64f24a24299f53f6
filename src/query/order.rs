use crate::catalog::Record;

/// Stable ascending sort by issue number.
///
/// Numbers compare as integers, never as text. Duplicate numbers, should
/// bad data carry them, keep their input order.
pub fn sorted_by_number(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| record.number);
    sorted
}

/// The first `n` records of an already sorted slice.
///
/// A shorter input comes back whole; never an error.
pub fn top_n(records: &[Record], n: usize) -> &[Record] {
    &records[..records.len().min(n)]
}
