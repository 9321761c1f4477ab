use crate::ui::mvi::Intent;

/// How well a card was recalled. Each level adds its weight to the card's
/// cumulative rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Bad,
    Good,
    Perfect,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Bad, Rating::Good, Rating::Perfect];

    pub fn weight(self) -> u64 {
        match self {
            Rating::Bad => 0,
            Rating::Good => 1,
            Rating::Perfect => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    QuestionChanged(String),
    AnswerChanged(String),
    /// Save the scratch fields as a new card at the end of the list.
    AddCard,
    ToggleAnswer { index: usize },
    DeleteCard { index: usize },
    /// Move a card back into the scratch fields for re-submission.
    EditCard { index: usize },
    RateCard { index: usize, rating: Rating },
}

impl Intent for QuizIntent {}

impl QuizIntent {
    /// Card index this intent addresses, if any.
    pub fn index(&self) -> Option<usize> {
        match self {
            QuizIntent::ToggleAnswer { index }
            | QuizIntent::DeleteCard { index }
            | QuizIntent::EditCard { index }
            | QuizIntent::RateCard { index, .. } => Some(*index),
            QuizIntent::QuestionChanged(_) | QuizIntent::AnswerChanged(_) | QuizIntent::AddCard => {
                None
            }
        }
    }

    /// Short verb used in log lines and errors.
    pub fn action(&self) -> &'static str {
        match self {
            QuizIntent::QuestionChanged(_) => "edit question of",
            QuizIntent::AnswerChanged(_) => "edit answer of",
            QuizIntent::AddCard => "add",
            QuizIntent::ToggleAnswer { .. } => "toggle",
            QuizIntent::DeleteCard { .. } => "delete",
            QuizIntent::EditCard { .. } => "edit",
            QuizIntent::RateCard { .. } => "rate",
        }
    }
}
