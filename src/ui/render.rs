use crate::config::Screen;
use crate::ui::app::{App, VideoFocus};
use crate::ui::detail::render_video_detail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{inner_height, layout_regions, video_regions};
use crate::ui::numbers::NumbersState;
use crate::ui::search::button_title;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, SEARCH_BUTTON};
use crate::ui::videos::VideoListState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.screen(), app.videos().loading);
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Numbers => draw_numbers(frame, body, app),
        Screen::Videos => draw_videos(frame, body, app),
    }

    let footer_widget = Footer::new(
        app.screen(),
        app.video_focus(),
        app.redraw_stats(),
        app.videos().last_error.as_deref(),
    );
    frame.render_widget(footer_widget.widget(footer), footer);
}

fn highlight() -> Style {
    Style::default()
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

fn list_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { HEADER_TEXT } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn draw_numbers(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let (state, view) = app.numbers_view();
    let selected = state.selected;
    view.sync(&state.source, |row, index| {
        Line::from(format!("  {}", NumbersState::row_label(row, index)))
    });
    let list = view
        .view(inner_height(area), Some(selected), highlight())
        .block(list_block(" Numbers ", true));
    frame.render_widget(list, area);
}

fn draw_videos(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let (search_area, results_area, detail_area) = video_regions(area);
    let focus = app.video_focus();
    draw_search_bar(frame, search_area, app, focus == VideoFocus::SearchBar);

    let detail = app.video_detail();
    let (state, view) = app.videos_view();
    let cursor = (!state.source.is_empty()).then_some(state.cursor);
    view.sync(&state.source, |_, index| {
        Line::from(format!(" {}", VideoListState::row_label(index)))
    });
    let list = view
        .view(inner_height(results_area), cursor, highlight())
        .block(list_block(" Results ", focus == VideoFocus::Results));
    frame.render_widget(list, results_area);

    render_video_detail(frame, detail_area, &detail);
}

fn draw_search_bar(frame: &mut Frame<'_>, area: Rect, app: &App, focused: bool) {
    let title = button_title(app.videos().loading);
    let button_width = u16::try_from(title.chars().count() + 4).unwrap_or(u16::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width)])
        .split(area);

    let mut input = vec![Span::raw(app.search_bar().term.clone())];
    if focused {
        input.push(Span::styled("█", Style::default().fg(HEADER_TEXT)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(input)).block(list_block(" Search ", focused)),
        columns[0],
    );

    let button = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default().fg(SEARCH_BUTTON).add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SEARCH_BUTTON)),
    );
    frame.render_widget(button, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Video;
    use crate::config::Config;
    use crate::ui::videos::VideoIntent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn numbers_screen_shows_rows() {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        let mut app = App::new(Config::default());
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Row 0 = 0"));
        assert!(text.contains("Row 11 = 11"));
        assert!(text.contains("redrawn 100/100"));
    }

    #[test]
    fn redraw_only_touches_changed_rows() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut config = Config::default();
        config.ui.start_screen = Screen::Videos;
        let mut app = App::new(config);

        app.start_search("a".to_string());
        app.on_search_finished(
            "a".to_string(),
            1,
            Ok(vec![Video::new("1", "one", ""), Video::new("2", "two", "")]),
        );
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        assert_eq!(app.redraw_stats(), (2, 2));

        app.start_search("b".to_string());
        app.on_search_finished(
            "b".to_string(),
            2,
            Ok(vec![
                Video::new("1", "one", ""),
                Video::new("2", "two", ""),
                Video::new("3", "three", ""),
            ]),
        );
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();
        assert_eq!(app.redraw_stats(), (1, 3));
    }

    #[test]
    fn detail_pane_shows_selected_video() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut config = Config::default();
        config.ui.start_screen = Screen::Videos;
        let mut app = App::new(config);
        app.start_search("r".to_string());
        app.on_search_finished("r".to_string(), 1, Ok(vec![Video::new("abc", "Rust", "")]));
        app.dispatch_videos(VideoIntent::Select);
        terminal.draw(|frame| draw(frame, &mut app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Video 0"));
        assert!(text.contains("youtube.com/embed/abc"));
    }
}
