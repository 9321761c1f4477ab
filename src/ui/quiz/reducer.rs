use crate::ui::mvi::Reducer;

use super::error::QuizError;
use super::intent::QuizIntent;
use super::state::{Card, QuizModel};

impl QuizModel {
    /// Reject intents that address a card outside `0..cards.len()`.
    pub fn check(&self, intent: &QuizIntent) -> Result<(), QuizError> {
        match intent.index() {
            Some(index) if index >= self.cards.len() => Err(QuizError::IndexOutOfRange {
                action: intent.action(),
                index,
                len: self.cards.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Apply `intent`, failing loudly on an out-of-range card index.
    pub fn apply(self, intent: QuizIntent) -> Result<Self, QuizError> {
        self.check(&intent)?;
        Ok(self.transition(intent))
    }

    /// Caller has already run `check`.
    fn transition(self, intent: QuizIntent) -> Self {
        match intent {
            QuizIntent::QuestionChanged(question) => Self { question, ..self },
            QuizIntent::AnswerChanged(answer) => Self { answer, ..self },
            QuizIntent::AddCard => {
                let QuizModel {
                    question,
                    answer,
                    mut cards,
                } = self;
                cards.push(Card::new(question, answer));
                QuizModel {
                    question: String::new(),
                    answer: String::new(),
                    cards,
                }
            }
            QuizIntent::ToggleAnswer { index } => {
                let mut cards = self.cards;
                if let Some(card) = cards.get_mut(index) {
                    card.show_answer = !card.show_answer;
                }
                Self { cards, ..self }
            }
            QuizIntent::DeleteCard { index } => {
                let mut cards = self.cards;
                cards.remove(index);
                Self { cards, ..self }
            }
            QuizIntent::EditCard { index } => {
                let mut cards = self.cards;
                let card = cards.remove(index);
                QuizModel {
                    question: card.question,
                    answer: card.answer,
                    cards,
                }
            }
            QuizIntent::RateCard { index, rating } => {
                let mut cards = self.cards;
                if let Some(card) = cards.get_mut(index) {
                    card.rating = card.rating.saturating_add(rating.weight());
                }
                Self { cards, ..self }
            }
        }
    }
}

/// Reducer used by the update loop.
///
/// Out-of-range intents are logged and leave the model unchanged; use
/// [`QuizModel::apply`] to get the error instead.
pub struct QuizReducer;

impl Reducer for QuizReducer {
    type State = QuizModel;
    type Intent = QuizIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state.check(&intent) {
            Ok(()) => state.transition(intent),
            Err(err) => {
                tracing::warn!(%err, ?intent, "intent rejected");
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::quiz::Rating;

    fn with_cards(n: usize) -> QuizModel {
        QuizModel {
            cards: (0..n)
                .map(|i| Card::new(format!("Q{i}"), format!("A{i}")))
                .collect(),
            ..QuizModel::default()
        }
    }

    #[test]
    fn add_card_accepts_empty_fields() {
        let model = QuizReducer::reduce(QuizModel::default(), QuizIntent::AddCard);
        assert_eq!(model.cards, vec![Card::new("", "")]);
    }

    #[test]
    fn delete_out_of_range_is_an_error() {
        let err = with_cards(1)
            .apply(QuizIntent::DeleteCard { index: 1 })
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::IndexOutOfRange {
                action: "delete",
                index: 1,
                len: 1,
            }
        );
    }

    #[test]
    fn reduce_ignores_out_of_range_intents() {
        let model = with_cards(2);
        for intent in [
            QuizIntent::ToggleAnswer { index: 2 },
            QuizIntent::DeleteCard { index: 5 },
            QuizIntent::EditCard { index: 2 },
            QuizIntent::RateCard {
                index: 9,
                rating: Rating::Perfect,
            },
        ] {
            assert_eq!(QuizReducer::reduce(model.clone(), intent), model);
        }
    }

    #[test]
    fn rating_saturates_instead_of_overflowing() {
        let mut model = with_cards(1);
        model.cards[0].rating = u64::MAX - 1;
        let model = QuizReducer::reduce(
            model,
            QuizIntent::RateCard {
                index: 0,
                rating: Rating::Perfect,
            },
        );
        assert_eq!(model.cards[0].rating, u64::MAX);
    }

    #[test]
    fn edit_moves_card_into_scratch_fields() {
        let model = with_cards(3)
            .apply(QuizIntent::EditCard { index: 1 })
            .expect("in range");
        assert_eq!(model.question, "Q1");
        assert_eq!(model.answer, "A1");
        let questions: Vec<&str> = model.cards.iter().map(|c| c.question.as_str()).collect();
        assert_eq!(questions, vec!["Q0", "Q2"]);
    }
}
