use crate::config::Labels;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    labels: &'a Labels,
    cards: usize,
    error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(labels: &'a Labels, cards: usize) -> Self {
        Self {
            labels,
            cards,
            error: None,
        }
    }

    pub fn with_error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    fn line(&self) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                self.labels.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}: {}", self.labels.cards, self.cards), text_style),
        ];
        if let Some(error) = self.error {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                error.to_string(),
                Style::default().fg(STATUS_ERROR),
            ));
        }
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
