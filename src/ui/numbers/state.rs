use crate::datasource::RowDataSource;
use crate::ui::mvi::UiState;

/// Numbers screen: synthetic rows `"0".."N-1"` and a cursor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumbersState {
    pub source: RowDataSource<String>,
    pub selected: usize,
}

impl UiState for NumbersState {}

impl NumbersState {
    /// Text for one row, as the list view draws it.
    pub fn row_label(value: &str, index: usize) -> String {
        format!("Row {} = {}", index, value)
    }
}
