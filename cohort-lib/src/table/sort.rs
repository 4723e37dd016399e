//! Sort state and row comparison.

use std::cmp::Ordering;

use crate::collate::natural_cmp;
use crate::model::{ID_FIELD, Row, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Active sort key and direction.
///
/// Defaults to ascending by the identifier field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// The active field key, if any.
    pub key: Option<String>,
    /// Direction of the active sort. Meaningless without a key.
    pub direction: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: Some(ID_FIELD.to_string()),
            direction: Direction::Asc,
        }
    }
}

impl SortState {
    /// Returns `true` if `key` is the active sort key.
    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Direction a sort request for `key` should produce.
    ///
    /// Repeating the active key flips the direction. Any other key starts
    /// descending.
    pub fn next_direction(&self, key: &str) -> Direction {
        if self.is_active(key) {
            self.direction.toggled()
        } else {
            Direction::Desc
        }
    }
}

/// Compare two rows on one field.
///
/// A missing value on either side makes the pair equal. Two numbers compare
/// numerically; anything else compares as text in natural order.
pub(crate) fn compare_field(a: &Row, b: &Row, key: &str, direction: Direction) -> Ordering {
    let (Some(left), Some(right)) = (a.get(key), b.get(key)) else {
        return Ordering::Equal;
    };
    direction.apply(compare_values(left, right))
}

fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => natural_cmp(&left.as_text(), &right.as_text()),
        },
    }
}

/// Compare two rows by identifier in ascending natural order.
pub(crate) fn compare_ids(a: &Row, b: &Row) -> Ordering {
    natural_cmp(&a.key(), &b.key())
}

/// Stable merge sort.
///
/// `compare_field` is not a total order (absent values equal everything), and
/// `slice::sort_by` may panic on such comparators. A right-hand element only
/// moves ahead of a left-hand one when it compares strictly less.
pub(crate) fn stable_sort_by<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);
    let left = stable_sort_by(left, compare);
    let right = stable_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged
}
