//! Video detail pane, derived from the video store.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Video;
use crate::ui::theme::{ACCENT, DETAIL_BORDER, DIM_TEXT, HEADER_TEXT};
use crate::ui::videos::VideoListState;

/// The slice of store state the detail pane reads.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetailProps {
    pub video: Option<Video>,
    pub loading: bool,
}

impl VideoDetailProps {
    pub fn from_state(state: &VideoListState) -> Self {
        let video = match state.selected_video() {
            Ok(video) => video.cloned(),
            Err(err) => {
                tracing::warn!(error = %err, "selection does not match current results");
                None
            }
        };
        Self {
            video,
            loading: state.loading,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoDetail {
    Loading,
    Empty,
    Ready {
        embed_url: String,
        title: String,
        description: String,
    },
}

impl VideoDetail {
    pub fn from_props(props: VideoDetailProps, embed_base_url: &str) -> Self {
        if props.loading {
            return VideoDetail::Loading;
        }
        match props.video {
            None => VideoDetail::Empty,
            Some(video) => VideoDetail::Ready {
                embed_url: embed_url(embed_base_url, video.video_id()),
                title: video.snippet.title,
                description: video.snippet.description,
            },
        }
    }
}

/// `base` and `video_id` joined by exactly one `/`.
pub fn embed_url(base: &str, video_id: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), video_id)
}

pub fn render_video_detail(frame: &mut Frame<'_>, area: Rect, detail: &VideoDetail) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DETAIL_BORDER));

    let lines = match detail {
        VideoDetail::Loading => vec![Line::from("Loading...")],
        VideoDetail::Empty => Vec::new(),
        VideoDetail::Ready {
            embed_url,
            title,
            description,
        } => vec![
            Line::from(Span::styled(
                title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(embed_url.clone(), Style::default().fg(ACCENT))),
            Line::from(""),
            Line::from(Span::styled(description.clone(), Style::default().fg(DIM_TEXT))),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
