//! `ElementSetV1`: the ordered, immutable multiset a subset-sum search runs over.
//!
//! Values are sorted ascending before any search begins. An index into the
//! set is a stable identity for the duration of one search run: two equal
//! values at different indices are distinct elements.

use thiserror::Error;

/// Construction failure for [`ElementSetV1`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementSetError {
    /// `from_sorted` received a sequence that is not ascending.
    #[error("element set is not sorted ascending: values[{index}] = {value} < {previous}")]
    NotSorted {
        index: usize,
        value: i64,
        previous: i64,
    },
}

/// An ascending, immutable sequence of integers indexed `0..n`.
///
/// Duplicates are permitted. Negative values are representable here; whether
/// a search accepts them is a policy decision made by the search layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementSetV1 {
    values: Vec<i64>,
}

impl ElementSetV1 {
    /// Wrap an already-normalized sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ElementSetError::NotSorted`] at the first index whose value is
    /// smaller than its predecessor.
    pub fn from_sorted(values: Vec<i64>) -> Result<Self, ElementSetError> {
        if let Some(index) = values.windows(2).position(|w| w[1] < w[0]) {
            return Err(ElementSetError::NotSorted {
                index: index + 1,
                value: values[index + 1],
                previous: values[index],
            });
        }
        Ok(Self { values })
    }

    /// Normalize an arbitrary sequence by sorting it ascending.
    #[must_use]
    pub fn from_unsorted(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Self { values }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The value at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Index and value of the first negative element, if any.
    ///
    /// The set is sorted, so a negative element can only sit at index 0
    /// when present at all.
    #[must_use]
    pub fn first_negative(&self) -> Option<(usize, i64)> {
        self.values
            .first()
            .copied()
            .filter(|v| *v < 0)
            .map(|v| (0, v))
    }

    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.first_negative().is_some()
    }

    /// Sum of every element, widened so it cannot overflow for any set of
    /// at most `2^64` elements.
    #[must_use]
    pub fn total(&self) -> i128 {
        self.values.iter().map(|v| i128::from(*v)).sum()
    }

    /// JSON rendering: a plain array of integers in index order.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.values.clone())
    }
}

impl<'a> IntoIterator for &'a ElementSetV1 {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
