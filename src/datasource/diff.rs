use crate::datasource::source::RowDataSource;

/// What the rendering layer has to do for one row of the new snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// Same position existed before and the predicate says it is unchanged.
    Unchanged,
    /// Same position existed before but the predicate reports a change.
    Changed,
    /// No row at this position in the old snapshot.
    Added,
}

/// Index-aligned change plan between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowDiff {
    changes: Vec<RowChange>,
    removed: usize,
}

impl RowDiff {
    /// One entry per row of the new snapshot.
    pub fn changes(&self) -> &[RowChange] {
        &self.changes
    }

    /// Number of trailing rows the old snapshot had beyond the new length.
    pub fn removed(&self) -> usize {
        self.removed
    }

    pub fn needs_render(&self, index: usize) -> bool {
        !matches!(self.changes.get(index), Some(RowChange::Unchanged) | None)
    }

    pub fn rerender_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|change| **change != RowChange::Unchanged)
            .count()
    }

    /// True when nothing needs redrawing and nothing was dropped.
    pub fn is_clean(&self) -> bool {
        self.removed == 0 && self.rerender_count() == 0
    }
}

/// Compare `old` and `new` position by position using `new`'s predicate.
///
/// Rows are never matched by content: a row that moved is reported as
/// changed at both positions.
pub fn diff_rows<T>(old: &RowDataSource<T>, new: &RowDataSource<T>) -> RowDiff {
    let old_rows = old.rows();
    let changes = new
        .iter()
        .enumerate()
        .map(|(index, row)| match old_rows.get(index) {
            None => RowChange::Added,
            Some(previous) if new.row_has_changed(previous, row) => RowChange::Changed,
            Some(_) => RowChange::Unchanged,
        })
        .collect();

    RowDiff {
        changes,
        removed: old.len().saturating_sub(new.len()),
    }
}
