use crate::config::Labels;
use crate::ui::mvi::{Program, ProgramError};
use crate::ui::quiz::{QuizIntent, QuizModel, QuizReducer, QuizView};
use crate::vdom::{Document, LiveNode, NodeId, Tag, TreeRenderer};

/// Id of the document element the quiz mounts under.
pub const MOUNT_ID: &str = "app";

pub type QuizProgram = Program<QuizReducer, QuizView, TreeRenderer>;

pub struct App {
    should_quit: bool,
    program: QuizProgram,
    /// Focused live node. Kept across re-renders as long as the node survives.
    focus: Option<NodeId>,
    /// Last dispatch failure, shown in the header until the next success.
    last_error: Option<String>,
}

impl App {
    pub fn new(labels: Labels) -> Result<Self, ProgramError> {
        let program = Program::mount(
            QuizModel::default(),
            QuizView::new(labels),
            TreeRenderer::new(),
            Document::new(MOUNT_ID),
            MOUNT_ID,
        )?;
        let focus = program.focusable().first().copied();
        Ok(Self {
            should_quit: false,
            program,
            focus,
            last_error: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn model(&self) -> &QuizModel {
        self.program.model()
    }

    pub fn labels(&self) -> &Labels {
        self.program.view().labels()
    }

    pub fn live_root(&self) -> Option<&LiveNode<QuizIntent>> {
        self.program.live_root()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn focus(&self) -> Option<NodeId> {
        self.focus
    }

    pub fn focused_node(&self) -> Option<&LiveNode<QuizIntent>> {
        self.focus
            .and_then(|id| self.program.document().node(id))
    }

    pub fn focused_tag(&self) -> Option<Tag> {
        self.focused_node().and_then(LiveNode::tag)
    }

    /// Focus the first focusable node whose `id` attribute is `id`.
    pub fn focus_element(&mut self, id: &str) -> bool {
        let target = self
            .program
            .document()
            .element_by_id(id)
            .filter(|node| node.is_focusable())
            .map(LiveNode::id);
        if target.is_some() {
            self.focus = target;
        }
        target.is_some()
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let focusable = self.program.focusable();
        if focusable.is_empty() {
            self.focus = None;
            return;
        }
        let len = focusable.len() as isize;
        let next = match self.focus_position(&focusable) {
            Some(current) => (current as isize + step).rem_euclid(len),
            None if step < 0 => len - 1,
            None => 0,
        };
        self.focus = Some(focusable[next as usize]);
    }

    fn focus_position(&self, focusable: &[NodeId]) -> Option<usize> {
        self.focus
            .and_then(|id| focusable.iter().position(|&candidate| candidate == id))
    }

    /// Activate the focused button. Returns false if focus is not on one.
    pub fn activate(&mut self) -> bool {
        let intent = self
            .focused_node()
            .filter(|node| node.tag() == Some(Tag::Button))
            .and_then(LiveNode::handler)
            .and_then(|handler| handler.click());
        match intent {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Append `ch` to the focused input.
    pub fn type_char(&mut self, ch: char) -> bool {
        self.edit_focused_input(|value| value.push(ch))
    }

    /// Remove the last character of the focused input.
    pub fn backspace(&mut self) -> bool {
        self.edit_focused_input(|value| {
            value.pop();
        })
    }

    fn edit_focused_input(&mut self, edit: impl FnOnce(&mut String)) -> bool {
        let Some(node) = self
            .focused_node()
            .filter(|node| node.tag() == Some(Tag::Input))
        else {
            return false;
        };
        let mut value = node.attr("value").unwrap_or_default().to_string();
        edit(&mut value);
        let intent = node.handler().and_then(|handler| handler.input(value));
        match intent {
            Some(intent) => {
                self.dispatch(intent);
                true
            }
            None => false,
        }
    }

    /// Run `intent` through the update loop and re-anchor focus.
    ///
    /// Focus stays on the same live node when the patch kept it; otherwise
    /// it moves to whatever now sits at the same focus position.
    pub fn dispatch(&mut self, intent: QuizIntent) {
        let previous = self.focus_position(&self.program.focusable());

        match self.program.dispatch(intent) {
            Ok(outcome) => {
                tracing::debug!(patches = outcome.patches, "dispatch applied");
                self.last_error = None;
            }
            Err(err) => {
                tracing::error!(%err, "dispatch failed");
                self.last_error = Some(err.to_string());
            }
        }

        let focusable = self.program.focusable();
        if self.focus_position(&focusable).is_none() {
            self.focus = match previous {
                Some(position) if !focusable.is_empty() => {
                    Some(focusable[position.min(focusable.len() - 1)])
                }
                _ => focusable.first().copied(),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    fn app() -> App {
        App::new(Labels::for_locale(Locale::En)).expect("mount")
    }

    #[test]
    fn starts_focused_on_question_input() {
        let app = app();
        assert_eq!(app.focused_tag(), Some(Tag::Input));
        assert_eq!(
            app.focused_node().and_then(|n| n.attr("id")),
            Some("question")
        );
    }

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut app = app();
        let first = app.focus();
        app.focus_prev();
        assert_ne!(app.focus(), first);
        app.focus_next();
        assert_eq!(app.focus(), first);
    }

    #[test]
    fn typing_keeps_focus_on_same_node() {
        let mut app = app();
        let before = app.focus();
        assert!(app.type_char('Q'));
        assert!(app.type_char('1'));
        assert_eq!(app.focus(), before);
        assert_eq!(app.model().question, "Q1");
    }

    #[test]
    fn activate_on_input_does_nothing() {
        let mut app = app();
        assert!(!app.activate());
        assert!(app.model().cards.is_empty());
    }
}
