use crate::catalog::search_catalog;
use crate::config::Config;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Run the UI until the user quits. `initial_query` is searched right away.
pub fn run(config: Config, initial_query: Option<String>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(term) = initial_query {
        app.start_search(term);
    }

    loop {
        for command in app.take_commands() {
            execute(command, events.sender());
        }

        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::SearchFinished {
                term,
                generation,
                outcome,
            }) => app.on_search_finished(term, generation, outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}

/// Run `command` on a worker thread; its outcome comes back as an event.
fn execute(command: UiCommand, tx: Sender<AppEvent>) {
    match command {
        UiCommand::Search {
            term,
            generation,
            catalog_path,
            max_results,
        } => {
            thread::spawn(move || {
                let outcome = search_catalog(catalog_path.as_deref(), &term, max_results)
                    .map_err(|err| err.to_string());
                let _ = tx.send(AppEvent::SearchFinished {
                    term,
                    generation,
                    outcome,
                });
            });
        }
    }
}
