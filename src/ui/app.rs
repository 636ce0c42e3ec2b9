use crate::catalog::Video;
use crate::config::{Config, Screen};
use crate::ui::detail::{VideoDetail, VideoDetailProps};
use crate::ui::list_view::ListViewCache;
use crate::ui::mvi::Reducer;
use crate::ui::numbers::{NumbersIntent, NumbersReducer, NumbersState};
use crate::ui::search::{SearchBarState, SearchIntent, SearchReducer};
use crate::ui::videos::{VideoIntent, VideoListState, VideoReducer};
use std::path::PathBuf;

/// Which part of the videos screen receives keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum VideoFocus {
    #[default]
    SearchBar,
    Results,
}

/// Work the app wants done outside the reducers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Search {
        term: String,
        /// Search generation the outcome must be reported with.
        generation: u64,
        catalog_path: Option<PathBuf>,
        max_results: usize,
    },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    video_focus: VideoFocus,
    config: Config,
    /// Body height in rows, used for page movement.
    page_size: usize,
    numbers: NumbersState,
    numbers_view: ListViewCache<String>,
    search_bar: SearchBarState,
    videos: VideoListState,
    videos_view: ListViewCache<Video>,
    pending: Vec<UiCommand>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            should_quit: false,
            screen: config.ui.start_screen,
            video_focus: VideoFocus::default(),
            page_size: 10,
            numbers: NumbersState::default(),
            numbers_view: ListViewCache::new(),
            search_bar: SearchBarState::default(),
            videos: VideoListState::default(),
            videos_view: ListViewCache::new(),
            pending: Vec::new(),
            config,
        };
        let count = app.config.numbers.row_count;
        app.dispatch_numbers(NumbersIntent::Generate { count });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(?screen, "switching screen");
            self.screen = screen;
        }
    }

    pub fn video_focus(&self) -> VideoFocus {
        self.video_focus
    }

    pub fn toggle_video_focus(&mut self) {
        self.video_focus = match self.video_focus {
            VideoFocus::SearchBar => VideoFocus::Results,
            VideoFocus::Results => VideoFocus::SearchBar,
        };
    }

    pub fn focus_search_bar(&mut self) {
        self.video_focus = VideoFocus::SearchBar;
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn on_resize(&mut self, _cols: u16, rows: u16) {
        // header, footer and the list border
        self.page_size = usize::from(rows.saturating_sub(8)).max(1);
    }

    pub fn numbers(&self) -> &NumbersState {
        &self.numbers
    }

    pub fn search_bar(&self) -> &SearchBarState {
        &self.search_bar
    }

    pub fn videos(&self) -> &VideoListState {
        &self.videos
    }

    pub fn dispatch_numbers(&mut self, intent: NumbersIntent) {
        dispatch_mvi!(self, numbers, NumbersReducer, intent);
    }

    pub fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search_bar, SearchReducer, intent);
    }

    pub fn dispatch_videos(&mut self, intent: VideoIntent) {
        dispatch_mvi!(self, videos, VideoReducer, intent);
    }

    /// Search button pressed: search for whatever is in the bar.
    pub fn on_press_search(&mut self) {
        let term = self.search_bar.term.clone();
        self.start_search(term);
        self.video_focus = VideoFocus::Results;
    }

    /// Mark a search as loading and queue it for the worker.
    pub fn start_search(&mut self, term: String) {
        tracing::info!(%term, "search requested");
        self.dispatch_videos(VideoIntent::SearchStarted { term: term.clone() });
        self.pending.push(UiCommand::Search {
            term,
            generation: self.videos.search_generation,
            catalog_path: self.config.videos.catalog_path.clone(),
            max_results: self.config.videos.max_results,
        });
    }

    pub fn on_search_finished(
        &mut self,
        term: String,
        generation: u64,
        outcome: Result<Vec<Video>, String>,
    ) {
        match outcome {
            Ok(videos) => {
                tracing::info!(%term, generation, results = videos.len(), "search finished");
                self.dispatch_videos(VideoIntent::ResultsArrived {
                    term,
                    generation,
                    videos,
                });
            }
            Err(message) => {
                tracing::warn!(%term, generation, %message, "search failed");
                self.dispatch_videos(VideoIntent::SearchFailed {
                    term,
                    generation,
                    message,
                });
            }
        }
    }

    /// Drain commands queued since the last call.
    pub fn take_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn video_detail(&self) -> VideoDetail {
        VideoDetail::from_props(
            VideoDetailProps::from_state(&self.videos),
            &self.config.videos.embed_base_url,
        )
    }

    pub fn numbers_view(&mut self) -> (&NumbersState, &mut ListViewCache<String>) {
        (&self.numbers, &mut self.numbers_view)
    }

    pub fn videos_view(&mut self) -> (&VideoListState, &mut ListViewCache<Video>) {
        (&self.videos, &mut self.videos_view)
    }

    /// Rows redrawn by the last sync of the visible list, and its length.
    pub fn redraw_stats(&self) -> (usize, usize) {
        match self.screen {
            Screen::Numbers => (self.numbers_view.last_rerendered(), self.numbers.source.len()),
            Screen::Videos => (self.videos_view.last_rerendered(), self.videos.source.len()),
        }
    }
}
