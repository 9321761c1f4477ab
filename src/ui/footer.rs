//! Key hints along the bottom edge.

use crate::config::Labels;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Footer<'a> {
    labels: &'a Labels,
}

impl<'a> Footer<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        Self { labels }
    }

    /// `(keys, action)` pairs in display order.
    fn hints(&self) -> [(&'static str, &'a str); 3] {
        [
            ("Tab ↑↓", self.labels.hint_move.as_str()),
            ("Enter Space", self.labels.hint_press.as_str()),
            ("Esc ^Q", self.labels.hint_quit.as_str()),
        ]
    }

    fn line(&self) -> Line<'static> {
        let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = Vec::new();
        for (i, (keys, action)) in self.hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", separator_style));
            }
            spans.push(Span::styled(keys, key_style));
            spans.push(Span::styled(format!(" {}", action), text_style));
        }
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let version = Line::from(Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(HEADER_SEPARATOR),
        ))
        .alignment(Alignment::Right);

        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(version),
        )
    }
}
