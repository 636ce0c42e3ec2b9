use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumbersIntent {
    /// Replace the rows with `"0".."count-1"`.
    Generate { count: usize },
    MoveUp,
    MoveDown,
    PageUp { page: usize },
    PageDown { page: usize },
    Home,
    End,
}

impl Intent for NumbersIntent {}
