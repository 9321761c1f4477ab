use crate::ui::mvi::UiState;

/// One flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub question: String,
    pub answer: String,
    pub show_answer: bool,
    /// Sum of every rating weight applied so far.
    pub rating: u64,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            show_answer: false,
            rating: 0,
        }
    }
}

/// Whole application state.
///
/// Cards have no identity beyond their position in `cards`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizModel {
    /// Text in the question input. Cleared when a card is added.
    pub question: String,
    /// Text in the answer input. Cleared when a card is added.
    pub answer: String,
    pub cards: Vec<Card>,
}

impl UiState for QuizModel {}

impl QuizModel {
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }
}
