//! Gallery component
//!
//! Renders the photo grid with a one-line header and a one-line status bar.
//! Only cards inside the current viewport are drawn.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{core::state::AppState, presentation::widgets::photo_card::PhotoCard};

const TITLE: &str = "photoscroll";
const LOADING: &str = "Loading...";
const EMPTY: &str = "No photos yet";

#[derive(Debug, Clone, Default)]
pub struct GalleryComponent;

impl GalleryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [header, grid, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.view_header(state, frame, header);
        self.view_grid(state, frame, grid);
        self.view_status(state, frame, status);
    }

    fn view_header(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let line = match state.feed.last_error() {
            Some(error) => Line::from(vec![
                Span::styled(error.to_string(), Style::default().fg(Color::Red).bold()),
                Span::raw(" (esc to dismiss)").dim(),
            ]),
            None => Line::from(Span::styled(TITLE, Style::default().bold())),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn view_grid(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if state.feed.is_empty() {
            if !state.feed.is_loading() {
                frame.render_widget(Paragraph::new(EMPTY.dim()).centered(), area);
            }
            return;
        }

        let layout = state.gallery.layout();
        let scroll_row = state.gallery.scroll_row();
        let selected = state.gallery.selected_index();

        for index in layout.visible_range(scroll_row, state.feed.len()) {
            let (Some(photo), Some(card_area)) = (
                state.feed.get(index),
                layout.card_area(index, scroll_row, area),
            ) else {
                continue;
            };
            let card = PhotoCard::new(photo).selected(selected == Some(index));
            frame.render_widget(card, card_area);
        }
    }

    fn view_status(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        if state.feed.is_loading() {
            spans.push(Span::styled(LOADING, Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" "));
        }
        spans.push(
            Span::raw(format!(
                "{} photos, {} pages",
                state.feed.len(),
                state.feed.pages_loaded()
            ))
            .dim(),
        );
        if let Some(message) = &state.system.status_message {
            spans.push(Span::raw(" | ").dim());
            spans.push(Span::raw(message.clone()));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
            area,
        );
    }
}
