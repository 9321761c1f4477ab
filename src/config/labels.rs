//! Presentation strings.
//!
//! One program, several presentations: every user-visible string comes
//! from a [`Labels`] set picked by [`Locale`] and optionally overridden
//! field by field from the config file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

/// Full set of strings the quiz view and chrome render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub title: String,
    pub question_placeholder: String,
    pub answer_placeholder: String,
    pub save: String,
    pub edit: String,
    pub delete: String,
    pub question_caption: String,
    pub show_answer: String,
    pub hide_answer: String,
    pub rating_caption: String,
    pub bad: String,
    pub good: String,
    pub perfect: String,
    pub score: String,
    pub empty: String,
    /// Header caption in front of the card count.
    pub cards: String,
    pub hint_move: String,
    pub hint_press: String,
    pub hint_quit: String,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                title: "Quiz Cards".to_string(),
                question_placeholder: "Give your question".to_string(),
                answer_placeholder: "Give your answer".to_string(),
                save: "Save".to_string(),
                edit: "Edit".to_string(),
                delete: "X".to_string(),
                question_caption: "Question".to_string(),
                show_answer: "Show".to_string(),
                hide_answer: "Hide".to_string(),
                rating_caption: "Rating: ".to_string(),
                bad: "Bad".to_string(),
                good: "Good".to_string(),
                perfect: "Perfect".to_string(),
                score: "Score".to_string(),
                empty: "No cards yet.".to_string(),
                cards: "Cards".to_string(),
                hint_move: "Move".to_string(),
                hint_press: "Press".to_string(),
                hint_quit: "Quit".to_string(),
            },
            Locale::De => Self {
                title: "Quizkarten".to_string(),
                question_placeholder: "Frage eingeben".to_string(),
                answer_placeholder: "Antwort eingeben".to_string(),
                save: "Speichern".to_string(),
                edit: "Bearbeiten".to_string(),
                delete: "X".to_string(),
                question_caption: "Frage".to_string(),
                show_answer: "Zeigen".to_string(),
                hide_answer: "Verbergen".to_string(),
                rating_caption: "Bewertung: ".to_string(),
                bad: "Schlecht".to_string(),
                good: "Gut".to_string(),
                perfect: "Perfekt".to_string(),
                score: "Punkte".to_string(),
                empty: "Noch keine Karten.".to_string(),
                cards: "Karten".to_string(),
                hint_move: "Bewegen".to_string(),
                hint_press: "Drücken".to_string(),
                hint_quit: "Beenden".to_string(),
            },
        }
    }

    /// Replace every field that has an override.
    pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
        let pairs: [(&mut String, &Option<String>); 19] = [
            (&mut self.title, &overrides.title),
            (&mut self.question_placeholder, &overrides.question_placeholder),
            (&mut self.answer_placeholder, &overrides.answer_placeholder),
            (&mut self.save, &overrides.save),
            (&mut self.edit, &overrides.edit),
            (&mut self.delete, &overrides.delete),
            (&mut self.question_caption, &overrides.question_caption),
            (&mut self.show_answer, &overrides.show_answer),
            (&mut self.hide_answer, &overrides.hide_answer),
            (&mut self.rating_caption, &overrides.rating_caption),
            (&mut self.bad, &overrides.bad),
            (&mut self.good, &overrides.good),
            (&mut self.perfect, &overrides.perfect),
            (&mut self.score, &overrides.score),
            (&mut self.empty, &overrides.empty),
            (&mut self.cards, &overrides.cards),
            (&mut self.hint_move, &overrides.hint_move),
            (&mut self.hint_press, &overrides.hint_press),
            (&mut self.hint_quit, &overrides.hint_quit),
        ];
        for (slot, value) in pairs {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
        self
    }

    /// Labels rendered as buttons. An empty one would leave nothing to
    /// select on screen.
    pub fn button_labels(&self) -> [(&'static str, &str); 8] {
        [
            ("save", self.save.as_str()),
            ("edit", self.edit.as_str()),
            ("delete", self.delete.as_str()),
            ("show_answer", self.show_answer.as_str()),
            ("hide_answer", self.hide_answer.as_str()),
            ("bad", self.bad.as_str()),
            ("good", self.good.as_str()),
            ("perfect", self.perfect.as_str()),
        ]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// `[labels]` table of the config file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub title: Option<String>,
    pub question_placeholder: Option<String>,
    pub answer_placeholder: Option<String>,
    pub save: Option<String>,
    pub edit: Option<String>,
    pub delete: Option<String>,
    pub question_caption: Option<String>,
    pub show_answer: Option<String>,
    pub hide_answer: Option<String>,
    pub rating_caption: Option<String>,
    pub bad: Option<String>,
    pub good: Option<String>,
    pub perfect: Option<String>,
    pub score: Option<String>,
    pub empty: Option<String>,
    pub cards: Option<String>,
    pub hint_move: Option<String>,
    pub hint_press: Option<String>,
    pub hint_quit: Option<String>,
}
