//! Rendering layer for [`RowDataSource`] snapshots.
//!
//! The cache keeps the last snapshot it drew and the lines it produced.
//! Handing it a new snapshot redraws only rows the positional diff flags;
//! handing it the same snapshot again is free.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::datasource::{diff_rows, RowDataSource};

/// Move a cursor by `delta`, clamped to `[0, len)`. Empty lists pin it at 0.
pub fn step_cursor(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

pub struct ListViewCache<T> {
    snapshot: Option<RowDataSource<T>>,
    lines: Vec<Line<'static>>,
    offset: usize,
    last_rerendered: usize,
}

impl<T> Default for ListViewCache<T> {
    fn default() -> Self {
        Self {
            snapshot: None,
            lines: Vec::new(),
            offset: 0,
            last_rerendered: 0,
        }
    }
}

impl<T> ListViewCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cached lines up to date with `snapshot`.
    ///
    /// `render_row(row, index)` runs only for rows that are new or that the
    /// snapshot's predicate reports as changed. Returns how many rows were
    /// rendered.
    pub fn sync<F>(&mut self, snapshot: &RowDataSource<T>, mut render_row: F) -> usize
    where
        F: FnMut(&T, usize) -> Line<'static>,
    {
        if let Some(previous) = &self.snapshot {
            if previous.is_same_snapshot(snapshot) {
                return 0;
            }
        }

        let diff = self
            .snapshot
            .as_ref()
            .map(|previous| diff_rows(previous, snapshot));

        self.lines.truncate(snapshot.len());
        let mut rendered = 0;
        for (index, row) in snapshot.iter().enumerate() {
            let cached = index < self.lines.len();
            let stale = diff.as_ref().is_none_or(|diff| diff.needs_render(index));
            if cached && !stale {
                continue;
            }
            let line = render_row(row, index);
            if cached {
                self.lines[index] = line;
            } else {
                self.lines.push(line);
            }
            rendered += 1;
        }

        tracing::debug!(
            rows = snapshot.len(),
            rendered,
            removed = diff.as_ref().map_or(0, |diff| diff.removed()),
            "list view synced"
        );

        self.snapshot = Some(snapshot.clone());
        self.last_rerendered = rendered;
        rendered
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Rows rendered by the most recent sync that did any work.
    pub fn last_rerendered(&self) -> usize {
        self.last_rerendered
    }

    /// Rows to draw in a viewport of `height` lines, scrolled the least
    /// amount needed to keep `selected` visible.
    pub fn visible_window(&mut self, height: usize, selected: usize) -> Range<usize> {
        let len = self.lines.len();
        if height == 0 || len == 0 {
            self.offset = 0;
            return 0..0;
        }
        let selected = selected.min(len - 1);
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + height {
            self.offset = selected + 1 - height;
        }
        self.offset = self.offset.min(len.saturating_sub(height));
        self.offset..(self.offset + height).min(len)
    }

    /// Widget drawing the visible rows with `selected` highlighted.
    pub fn view<'a>(
        &'a mut self,
        height: usize,
        selected: Option<usize>,
        highlight: Style,
    ) -> ListView<'a> {
        let window = self.visible_window(height, selected.unwrap_or(0));
        ListView {
            lines: &self.lines[window.clone()],
            first_index: window.start,
            selected,
            highlight,
            block: None,
        }
    }
}

/// Borrowed slice of cached lines, ready to draw.
pub struct ListView<'a> {
    lines: &'a [Line<'static>],
    first_index: usize,
    selected: Option<usize>,
    highlight: Style,
    block: Option<Block<'a>>,
}

impl<'a> ListView<'a> {
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line<'static>> = self
            .lines
            .iter()
            .enumerate()
            .map(|(offset, line)| {
                if Some(self.first_index + offset) == self.selected {
                    line.clone().patch_style(self.highlight)
                } else {
                    line.clone()
                }
            })
            .collect();
        let mut paragraph = Paragraph::new(lines);
        if let Some(block) = self.block {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
