use crate::config::Screen;
use crate::ui::app::{App, VideoFocus};
use crate::ui::numbers::NumbersIntent;
use crate::ui::search::SearchIntent;
use crate::ui::videos::VideoIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::F(1) => return app.show_screen(Screen::Numbers),
        KeyCode::F(2) => return app.show_screen(Screen::Videos),
        _ => {}
    }

    match app.screen() {
        Screen::Numbers => handle_numbers_key(app, key),
        Screen::Videos => match app.video_focus() {
            VideoFocus::SearchBar => handle_search_key(app, key),
            VideoFocus::Results => handle_results_key(app, key),
        },
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.screen() == Screen::Videos && app.video_focus() == VideoFocus::SearchBar {
        app.dispatch_search(SearchIntent::Paste(text));
    }
}

fn handle_numbers_key(app: &mut App, key: KeyEvent) {
    let page = app.page_size();
    let intent = match key.code {
        KeyCode::Char('q') => return app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => NumbersIntent::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => NumbersIntent::MoveDown,
        KeyCode::PageUp => NumbersIntent::PageUp { page },
        KeyCode::PageDown => NumbersIntent::PageDown { page },
        KeyCode::Home => NumbersIntent::Home,
        KeyCode::End => NumbersIntent::End,
        _ => return,
    };
    app.dispatch_numbers(intent);
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.on_press_search(),
        KeyCode::Tab => app.toggle_video_focus(),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::Backspace),
        KeyCode::Esc => app.dispatch_search(SearchIntent::Clear),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_search(SearchIntent::Insert(ch))
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Char('/') => app.focus_search_bar(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_videos(VideoIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_videos(VideoIntent::MoveDown),
        KeyCode::Enter => app.dispatch_videos(VideoIntent::Select),
        KeyCode::Esc => app.dispatch_videos(VideoIntent::ClearSelection),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
