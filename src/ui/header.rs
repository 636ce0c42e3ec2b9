use crate::config::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    screen: Screen,
    loading: bool,
}

impl Header {
    pub fn new(screen: Screen, loading: bool) -> Self {
        Self { screen, loading }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let active_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let tab = |label: &'static str, screen: Screen| {
            let style = if self.screen == screen {
                active_style
            } else {
                text_style
            };
            Span::styled(label, style)
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            tab("F1 Numbers", Screen::Numbers),
            Span::styled("  │  ", separator_style),
            tab("F2 Videos", Screen::Videos),
        ];
        if self.loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("searching…", Style::default().fg(STATUS_OK)));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
