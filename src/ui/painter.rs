//! Paints a live tree as terminal lines.
//!
//! Block tags (`div`, `p`) start and end their own line, `br` ends the
//! current line, text and controls flow inline. Elements with class
//! `card` get a left rule so cards read as separate boxes.

use crate::ui::theme::{
    BUTTON_TEXT, CARD_BORDER, FOCUS_HIGHLIGHT, INPUT_TEXT, PLACEHOLDER_TEXT, TEXT,
};
use crate::vdom::{LiveNode, NodeId, Tag};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Minimum inner width of an input box, in characters.
const INPUT_WIDTH: usize = 24;

#[derive(Debug, Default)]
pub struct Painted {
    pub lines: Vec<Line<'static>>,
    /// Index into `lines` of the line holding the focused node.
    pub focus_line: Option<usize>,
}

impl Painted {
    /// Scroll offset that keeps the focused line inside a viewport of
    /// `height` rows.
    pub fn scroll_for(&self, height: usize) -> usize {
        match self.focus_line {
            Some(line) if height > 0 && line >= height => line + 1 - height,
            _ => 0,
        }
    }
}

pub fn paint<M>(root: &LiveNode<M>, focus: Option<NodeId>) -> Painted {
    let mut painter = Painter {
        focus,
        prefix: Vec::new(),
        current: Vec::new(),
        painted: Painted::default(),
        cards: 0,
    };
    painter.node(root);
    painter.flush();
    painter.painted
}

struct Painter {
    focus: Option<NodeId>,
    prefix: Vec<Span<'static>>,
    current: Vec<Span<'static>>,
    painted: Painted,
    cards: usize,
}

impl Painter {
    fn node<M>(&mut self, node: &LiveNode<M>) {
        if let Some(text) = node.text() {
            if !text.is_empty() {
                self.current
                    .push(Span::styled(text.to_string(), Style::default().fg(TEXT)));
            }
            return;
        }

        match node.tag() {
            Some(Tag::Button) => self.button(node),
            Some(Tag::Input) => self.input(node),
            Some(Tag::Break) => self.line_break(),
            Some(_) if node.has_class("card") => self.card(node),
            Some(tag) if tag.is_block() => {
                self.flush();
                self.children(node);
                self.flush();
            }
            _ => self.children(node),
        }
    }

    fn children<M>(&mut self, node: &LiveNode<M>) {
        for child in node.children() {
            self.node(child);
        }
    }

    fn card<M>(&mut self, node: &LiveNode<M>) {
        self.flush();
        self.cards += 1;
        let rule = Style::default().fg(CARD_BORDER);
        self.push_line(vec![Span::styled(format!("╭─ #{}", self.cards), rule)]);
        self.prefix.push(Span::styled("│ ", rule));
        self.children(node);
        self.flush();
        self.prefix.pop();
        self.push_line(vec![Span::styled("╰─", rule)]);
    }

    fn button<M>(&mut self, node: &LiveNode<M>) {
        let focused = self.is_focused(node);
        let mut style = Style::default().fg(BUTTON_TEXT);
        if focused {
            style = style.bg(FOCUS_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        self.mark_focus(focused);
        self.current
            .push(Span::styled(format!("[ {} ]", node.text_content()), style));
        self.current.push(Span::raw(" "));
    }

    fn input<M>(&mut self, node: &LiveNode<M>) {
        let focused = self.is_focused(node);
        let value = node.attr("value").unwrap_or_default();
        let (mut shown, style) = if value.is_empty() && !focused {
            (
                node.attr("placeholder").unwrap_or_default().to_string(),
                Style::default().fg(PLACEHOLDER_TEXT).add_modifier(Modifier::ITALIC),
            )
        } else {
            (value.to_string(), Style::default().fg(INPUT_TEXT))
        };
        if focused {
            shown.push('▏');
        }
        let width = shown.chars().count();
        shown.push_str(&" ".repeat(INPUT_WIDTH.saturating_sub(width)));

        let style = if focused {
            style.bg(FOCUS_HIGHLIGHT)
        } else {
            style.add_modifier(Modifier::UNDERLINED)
        };
        self.mark_focus(focused);
        self.current.push(Span::styled(shown, style));
        self.current.push(Span::raw(" "));
    }

    fn line_break(&mut self) {
        if self.current.is_empty() {
            self.push_line(Vec::new());
        } else {
            self.flush();
        }
    }

    fn is_focused<M>(&self, node: &LiveNode<M>) -> bool {
        self.focus == Some(node.id())
    }

    fn mark_focus(&mut self, focused: bool) {
        if focused {
            self.painted.focus_line = Some(self.painted.lines.len());
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        self.push_line(spans);
    }

    fn push_line(&mut self, spans: Vec<Span<'static>>) {
        let mut line = self.prefix.clone();
        line.extend(spans);
        self.painted.lines.push(Line::from(line));
    }
}
