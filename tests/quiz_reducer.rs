use quizcards::ui::mvi::Reducer;
use quizcards::ui::quiz::{Card, QuizError, QuizIntent, QuizModel, QuizReducer, Rating};

fn reduce_all(intents: impl IntoIterator<Item = QuizIntent>) -> QuizModel {
    intents
        .into_iter()
        .fold(QuizModel::default(), QuizReducer::reduce)
}

fn add(question: &str, answer: &str) -> [QuizIntent; 3] {
    [
        QuizIntent::QuestionChanged(question.to_string()),
        QuizIntent::AnswerChanged(answer.to_string()),
        QuizIntent::AddCard,
    ]
}

fn two_cards() -> QuizModel {
    reduce_all(add("Q1", "A1").into_iter().chain(add("Q2", "A2")))
}

#[test]
fn reduce_is_deterministic() {
    let model = two_cards();
    let intent = QuizIntent::RateCard {
        index: 1,
        rating: Rating::Perfect,
    };
    assert_eq!(
        QuizReducer::reduce(model.clone(), intent.clone()),
        QuizReducer::reduce(model, intent)
    );
}

#[test]
fn add_appends_card_and_clears_scratch() {
    let model = two_cards();
    assert_eq!(model.question, "");
    assert_eq!(model.answer, "");
    assert_eq!(
        model.cards,
        vec![Card::new("Q1", "A1"), Card::new("Q2", "A2")]
    );
}

#[test]
fn empty_scratch_still_adds_a_card() {
    let model = QuizReducer::reduce(QuizModel::default(), QuizIntent::AddCard);
    assert_eq!(model.cards, vec![Card::new("", "")]);
}

#[test]
fn edit_then_add_moves_card_to_the_end() {
    let model = two_cards();
    let model = QuizReducer::reduce(model, QuizIntent::EditCard { index: 0 });
    assert_eq!(model.question, "Q1");
    assert_eq!(model.answer, "A1");
    assert_eq!(model.cards, vec![Card::new("Q2", "A2")]);

    let model = QuizReducer::reduce(model, QuizIntent::AddCard);
    assert_eq!(
        model.cards,
        vec![Card::new("Q2", "A2"), Card::new("Q1", "A1")]
    );
}

#[test]
fn edit_resets_rating_and_visibility() {
    let mut model = two_cards();
    model.cards[0].rating = 5;
    model.cards[0].show_answer = true;
    let model = QuizReducer::reduce(model, QuizIntent::EditCard { index: 0 });
    let model = QuizReducer::reduce(model, QuizIntent::AddCard);
    assert_eq!(model.cards[1], Card::new("Q1", "A1"));
}

#[test]
fn edit_overwrites_pending_scratch_text() {
    let model = two_cards();
    let model = QuizReducer::reduce(model, QuizIntent::QuestionChanged("draft".to_string()));
    let model = QuizReducer::reduce(model, QuizIntent::EditCard { index: 1 });
    assert_eq!(model.question, "Q2");
    assert_eq!(model.answer, "A2");
}

#[test]
fn toggling_twice_restores_visibility() {
    let model = two_cards();
    let once = QuizReducer::reduce(model.clone(), QuizIntent::ToggleAnswer { index: 1 });
    assert!(once.cards[1].show_answer);
    assert!(!once.cards[0].show_answer);
    let twice = QuizReducer::reduce(once, QuizIntent::ToggleAnswer { index: 1 });
    assert_eq!(twice, model);
}

#[test]
fn ratings_accumulate_by_weight() {
    let model = two_cards();
    let model = [Rating::Good, Rating::Perfect, Rating::Bad]
        .into_iter()
        .fold(model, |model, rating| {
            QuizReducer::reduce(model, QuizIntent::RateCard { index: 0, rating })
        });
    assert_eq!(model.cards[0].rating, 3);
    assert_eq!(model.cards[1].rating, 0);
}

#[test]
fn delete_shifts_later_cards_down() {
    let model = reduce_all(
        add("Q1", "A1")
            .into_iter()
            .chain(add("Q2", "A2"))
            .chain(add("Q3", "A3")),
    );
    let model = QuizReducer::reduce(model, QuizIntent::DeleteCard { index: 0 });
    assert_eq!(
        model.cards,
        vec![Card::new("Q2", "A2"), Card::new("Q3", "A3")]
    );

    let model = QuizReducer::reduce(
        model,
        QuizIntent::RateCard {
            index: 0,
            rating: Rating::Good,
        },
    );
    assert_eq!(model.card(0).map(|c| c.question.as_str()), Some("Q2"));
    assert_eq!(model.card(0).map(|c| c.rating), Some(1));
}

#[test]
fn delete_keeps_scratch_fields() {
    let model = two_cards();
    let model = QuizReducer::reduce(model, QuizIntent::AnswerChanged("typing".to_string()));
    let model = QuizReducer::reduce(model, QuizIntent::DeleteCard { index: 0 });
    assert_eq!(model.answer, "typing");
    assert_eq!(model.cards.len(), 1);
}

#[test]
fn out_of_range_index_reports_error_and_reducer_ignores_it() {
    let model = two_cards();
    let intent = QuizIntent::DeleteCard { index: 2 };

    match model.clone().apply(intent.clone()) {
        Err(QuizError::IndexOutOfRange { index, len, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }

    assert_eq!(QuizReducer::reduce(model.clone(), intent), model);
}

#[test]
fn any_index_on_empty_model_is_rejected() {
    let model = QuizModel::default();
    for intent in [
        QuizIntent::ToggleAnswer { index: 0 },
        QuizIntent::EditCard { index: 0 },
        QuizIntent::RateCard {
            index: 0,
            rating: Rating::Bad,
        },
    ] {
        assert!(
            model.check(&intent).is_err(),
            "{:?} should be rejected",
            intent
        );
    }
}

#[test]
fn add_then_edit_last_restores_previous_model() {
    let before = reduce_all(add("Q0", "A0"));
    let before = QuizReducer::reduce(before, QuizIntent::QuestionChanged("Q1".to_string()));
    let before = QuizReducer::reduce(before, QuizIntent::AnswerChanged("A1".to_string()));
    let len = before.cards.len();

    let added = QuizReducer::reduce(before.clone(), QuizIntent::AddCard);
    let restored = QuizReducer::reduce(added, QuizIntent::EditCard { index: len });

    assert_eq!(restored, before);
}

#[test]
fn delete_first_keeps_every_field_of_the_second() {
    let model = two_cards();
    let model = QuizReducer::reduce(model, QuizIntent::ToggleAnswer { index: 1 });
    let model = QuizReducer::reduce(
        model,
        QuizIntent::RateCard {
            index: 1,
            rating: Rating::Perfect,
        },
    );
    let second = model.cards[1].clone();
    assert!(second.show_answer);
    assert_eq!(second.rating, 2);

    let model = QuizReducer::reduce(model, QuizIntent::DeleteCard { index: 0 });
    assert_eq!(model.cards, vec![second]);
}
