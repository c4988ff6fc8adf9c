//! Type-directed value comparison for grid sorting.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::SortDirection;

/// Compares two field values in ascending order.
///
/// - strings: collated (see [`collate`])
/// - numbers: numeric order, so `9` comes before `10`
/// - booleans: `true` before `false`
/// - anything else, including mismatched kinds and absent fields: equal
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => collate(a, b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => compare_numbers(a, b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => b.cmp(a),
        _ => Ordering::Equal,
    }
}

/// [`compare_values`] adjusted for `direction`.
pub fn compare_directed(
    a: Option<&Value>,
    b: Option<&Value>,
    direction: SortDirection,
) -> Ordering {
    let ordering = compare_values(a, b);
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Locale-style string collation.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts before
/// uppercase at the first differing position, then raw code points decide.
/// The result is a total order, stable across platforms.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }

    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => return x.cmp(&y),
            }
        }
    }
    a.cmp(b)
}

/// Stable merge sort returning a sorted copy of `items`.
///
/// `compare` does not have to be a total order (mixed-kind columns compare
/// equal to everything); std's sort may panic on such comparators, this one
/// never does and keeps equal elements in input order.
pub fn stable_sorted<T: Copy>(items: &[T], mut compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let len = items.len();
    let mut current = items.to_vec();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            while left < mid && right < end {
                if compare(&current[right], &current[left]) == Ordering::Less {
                    merged.push(current[right]);
                    right += 1;
                } else {
                    merged.push(current[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&current[left..mid]);
            merged.extend_from_slice(&current[right..end]);
            start = end;
        }
        std::mem::swap(&mut current, &mut merged);
        width *= 2;
    }

    current
}
