use crate::config::Screen;
use crate::ui::app::VideoFocus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    screen: Screen,
    focus: VideoFocus,
    redrawn: (usize, usize),
    error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(
        screen: Screen,
        focus: VideoFocus,
        redrawn: (usize, usize),
        error: Option<&'a str>,
    ) -> Self {
        Self {
            screen,
            focus,
            redrawn,
            error,
        }
    }

    fn hints(&self) -> &'static str {
        match (self.screen, self.focus) {
            (Screen::Numbers, _) => " ↑/↓ PgUp/PgDn Home/End: Move │ q: Quit",
            (Screen::Videos, VideoFocus::SearchBar) => {
                " Enter: Search │ Esc: Clear │ Tab: Results │ Ctrl+Q: Quit"
            }
            (Screen::Videos, VideoFocus::Results) => {
                " ↑/↓: Move │ Enter: Show │ Esc: Hide │ Tab: Search │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let hints = self.hints();
        let status = match self.error {
            Some(error) => format!("{} ", error),
            None => format!("redrawn {}/{} │ v{} ", self.redrawn.0, self.redrawn.1, VERSION),
        };
        let status_style = if self.error.is_some() {
            Style::default().fg(STATUS_ERROR)
        } else {
            text_style
        };

        // char count, not byte count
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(status.chars().count());

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
