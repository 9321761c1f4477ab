use thiserror::Error;

/// Errors from applying a [`QuizIntent`](super::QuizIntent) to a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An index-taking intent addressed a card that does not exist.
    #[error("cannot {action} card {index}: only {len} card(s) present")]
    IndexOutOfRange {
        action: &'static str,
        index: usize,
        len: usize,
    },
}
