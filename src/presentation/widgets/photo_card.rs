use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use thousands::Separable;

use crate::domain::{
    photo::PhotoRecord,
    text::{parse_hex_color, truncate_to_width},
};

/// One photo in the gallery grid
pub struct PhotoCard<'a> {
    photo: &'a PhotoRecord,
    selected: bool,
}

impl<'a> PhotoCard<'a> {
    pub fn new(photo: &'a PhotoRecord) -> Self {
        Self {
            photo,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    fn swatch(&self) -> Span<'static> {
        match self.photo.color.as_deref().and_then(parse_hex_color) {
            Some((r, g, b)) => Span::styled("██", Style::default().fg(Color::Rgb(r, g, b))),
            None => Span::styled("░░", Style::default().fg(Color::DarkGray)),
        }
    }

    fn likes(&self) -> Span<'static> {
        Span::styled(
            format!("♥ {}", self.photo.likes.separate_with_commas()),
            Style::default().fg(Color::LightRed),
        )
    }
}

impl Widget for PhotoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let inner_width = usize::from(area.width.saturating_sub(2));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style)
            .title(Span::styled(
                truncate_to_width(&self.photo.author_name, inner_width.saturating_sub(2)),
                Style::default().bold(),
            ));

        let lines = vec![
            Line::from(truncate_to_width(self.photo.description(), inner_width)),
            Line::from(vec![self.swatch(), Span::raw(" "), self.likes()]),
            Line::from(Span::styled(
                truncate_to_width(&self.photo.thumbnail_url, inner_width),
                Style::default().fg(Color::Blue).underlined(),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
