use std::fmt;
use std::sync::Arc;

use crate::datasource::error::DataSourceError;

/// Shared "has this row changed" predicate, called as `(old, new)`.
pub type RowPredicate<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Immutable snapshot of list rows plus the predicate used to decide
/// whether a row needs to be redrawn.
///
/// Snapshots are cheap to clone: rows and predicate are shared behind
/// `Arc`. A new set of rows always produces a new snapshot through
/// [`clone_with_rows`](Self::clone_with_rows); the receiver and any clones
/// of it keep their rows.
pub struct RowDataSource<T> {
    rows: Arc<[T]>,
    row_has_changed: RowPredicate<T>,
}

impl<T> RowDataSource<T> {
    /// Create an empty data source that uses `row_has_changed` for all
    /// snapshots derived from it.
    pub fn new<F>(row_has_changed: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Self {
            rows: Arc::from(Vec::new()),
            row_has_changed: Arc::new(row_has_changed),
        }
    }

    /// Return a new snapshot holding `rows` in iteration order.
    ///
    /// The predicate is carried over. `self` is left untouched.
    pub fn clone_with_rows<I>(&self, rows: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let rows: Vec<T> = rows.into_iter().collect();
        tracing::trace!(rows = rows.len(), "cloned data source with new rows");
        Self {
            rows: Arc::from(rows),
            row_has_changed: Arc::clone(&self.row_has_changed),
        }
    }

    /// Ask the stored predicate whether `new` differs from `old`.
    pub fn row_has_changed(&self, old: &T, new: &T) -> bool {
        (self.row_has_changed)(old, new)
    }

    /// Row at `index`, or `IndexOutOfRange` if there is none.
    pub fn row_at(&self, index: usize) -> Result<&T, DataSourceError> {
        self.rows
            .get(index)
            .ok_or_else(|| DataSourceError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.rows.len(),
            })
    }

    /// Like [`row_at`](Self::row_at) for signed positions. Negative
    /// indices are always out of range.
    pub fn row_at_offset(&self, index: isize) -> Result<&T, DataSourceError> {
        let out_of_range = DataSourceError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        };
        let index = usize::try_from(index).map_err(|_| out_of_range.clone())?;
        self.rows.get(index).ok_or(out_of_range)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    /// True if `other` holds the very same rows, i.e. one is a plain
    /// `clone()` of the other.
    pub fn is_same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }

    /// True if both snapshots were derived from the same predicate.
    pub fn shares_predicate(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.row_has_changed, &other.row_has_changed)
    }
}

impl<T> Clone for RowDataSource<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            row_has_changed: Arc::clone(&self.row_has_changed),
        }
    }
}

impl<T: PartialEq + 'static> Default for RowDataSource<T> {
    /// Empty source that treats a row as changed when it compares unequal.
    fn default() -> Self {
        Self::new(|old: &T, new: &T| old != new)
    }
}

/// Snapshots compare by rows only; predicates are closures and have no
/// meaningful equality.
impl<T: PartialEq> PartialEq for RowDataSource<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: fmt::Debug> fmt::Debug for RowDataSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowDataSource")
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

impl<'a, T> IntoIterator for &'a RowDataSource<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Vec<String> {
        (0..count).map(|i| i.to_string()).collect()
    }

    #[test]
    fn hundred_rows_round_trip() {
        let ds = RowDataSource::new(|a: &String, b: &String| a != b);
        let ds2 = ds.clone_with_rows(numbers(100));

        assert_eq!(ds2.len(), 100);
        assert_eq!(ds2.row_at(0).unwrap(), "0");
        assert_eq!(ds2.row_at(99).unwrap(), "99");
        assert_eq!(
            ds2.row_at(100),
            Err(DataSourceError::IndexOutOfRange { index: 100, len: 100 })
        );
    }

    #[test]
    fn empty_snapshot_rejects_every_index() {
        let ds = RowDataSource::<String>::default().clone_with_rows(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.row_at(0).is_err());
        assert!(ds.row_at_offset(-1).is_err());
    }

    #[test]
    fn negative_offset_is_out_of_range() {
        let ds = RowDataSource::<String>::default().clone_with_rows(numbers(3));
        assert_eq!(
            ds.row_at_offset(-1),
            Err(DataSourceError::IndexOutOfRange { index: -1, len: 3 })
        );
        assert_eq!(ds.row_at_offset(2).unwrap(), "2");
        assert!(ds.row_at_offset(3).is_err());
    }

    #[test]
    fn clone_with_rows_leaves_receiver_alone() {
        let first = RowDataSource::<String>::default().clone_with_rows(numbers(5));
        let second = first.clone_with_rows(numbers(2));

        assert_eq!(first.rows(), numbers(5).as_slice());
        assert_eq!(second.rows(), numbers(2).as_slice());
        assert!(first.shares_predicate(&second));
    }

    #[test]
    fn row_has_changed_delegates_to_predicate() {
        let always = RowDataSource::<u32>::new(|_, _| true);
        let parity = RowDataSource::<u32>::new(|a, b| a % 2 != b % 2);

        assert!(always.row_has_changed(&1, &1));
        assert!(!parity.row_has_changed(&1, &3));
        assert!(parity.row_has_changed(&1, &2));
    }

    #[test]
    fn input_mutation_after_clone_is_not_observed() {
        let mut input = numbers(3);
        let ds = RowDataSource::<String>::default().clone_with_rows(input.clone());
        input[0] = "changed".to_string();
        input.push("3".to_string());

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.row_at(0).unwrap(), "0");
    }
}
