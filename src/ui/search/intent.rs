use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Insert(char),
    /// Bracketed paste; control characters are dropped.
    Paste(String),
    Backspace,
    Clear,
}

impl Intent for SearchIntent {}
