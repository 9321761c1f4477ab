use crate::config::Labels;
use crate::ui::mvi::View;
use crate::vdom::{br, button, div, input, p, text, Element, Node};

use super::intent::{QuizIntent, Rating};
use super::state::{Card, QuizModel};

/// Renders the quiz: an editor row followed by one block per card.
#[derive(Debug, Clone)]
pub struct QuizView {
    labels: Labels,
}

impl QuizView {
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    fn editor(&self, model: &QuizModel) -> Element<QuizIntent> {
        div()
            .class("editor")
            .child(
                input()
                    .id("question")
                    .attr("placeholder", &self.labels.question_placeholder)
                    .attr("value", &model.question)
                    .on_input(QuizIntent::QuestionChanged),
            )
            .child(
                input()
                    .id("answer")
                    .attr("placeholder", &self.labels.answer_placeholder)
                    .attr("value", &model.answer)
                    .on_input(QuizIntent::AnswerChanged),
            )
            .child(
                button()
                    .class("save")
                    .on_click(QuizIntent::AddCard)
                    .text(&self.labels.save),
            )
    }

    fn card(&self, index: usize, card: &Card) -> Node<QuizIntent> {
        let toggle_label = if card.show_answer {
            &self.labels.hide_answer
        } else {
            &self.labels.show_answer
        };
        let revealed: Option<[Node<QuizIntent>; 2]> = card.show_answer.then(|| {
            [
                p().class("answer").text(&card.answer).into(),
                br().into(),
            ]
        });

        div()
            .class("card")
            .child(
                p().class("controls")
                    .child(
                        button()
                            .class("edit")
                            .on_click(QuizIntent::EditCard { index })
                            .text(&self.labels.edit),
                    )
                    .child(
                        button()
                            .class("delete")
                            .on_click(QuizIntent::DeleteCard { index })
                            .text(&self.labels.delete),
                    ),
            )
            .child(p().class("caption").text(&self.labels.question_caption))
            .child(p().class("question").text(&card.question))
            .child(br())
            .child(
                button()
                    .class("toggle")
                    .on_click(QuizIntent::ToggleAnswer { index })
                    .text(toggle_label),
            )
            .children(revealed.into_iter().flatten())
            .child(self.rating(index, card))
            .into()
    }

    fn rating(&self, index: usize, card: &Card) -> Element<QuizIntent> {
        let buttons = Rating::ALL.into_iter().map(|rating| -> Node<QuizIntent> {
            let (class, label) = match rating {
                Rating::Bad => ("bad", &self.labels.bad),
                Rating::Good => ("good", &self.labels.good),
                Rating::Perfect => ("perfect", &self.labels.perfect),
            };
            button()
                .class(class)
                .on_click(QuizIntent::RateCard { index, rating })
                .text(label)
                .into()
        });

        div()
            .class("rating")
            .child(text(&self.labels.rating_caption))
            .child(br())
            .children(buttons)
            .child(
                p().class("score")
                    .text(format!("{}: {}", self.labels.score, card.rating)),
            )
    }
}

impl View<QuizModel, QuizIntent> for QuizView {
    fn render(&self, model: &QuizModel) -> Node<QuizIntent> {
        let cards: Vec<Node<QuizIntent>> = if model.cards.is_empty() {
            vec![p().class("empty").text(&self.labels.empty).into()]
        } else {
            model
                .cards
                .iter()
                .enumerate()
                .map(|(index, card)| self.card(index, card))
                .collect()
        };

        div()
            .id("quiz")
            .child(self.editor(model))
            .child(div().class("cards").children(cards))
            .into()
    }
}
