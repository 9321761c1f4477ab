//! Flashcard quiz feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Quiz model: scratch fields and the ordered card list
//! - `intent.rs` - User actions (edit fields, add, toggle, delete, edit, rate)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view.rs` - Model to declarative tree
//! - `error.rs` - Rejected transitions

mod error;
mod intent;
mod reducer;
mod state;
mod view;

pub use error::QuizError;
pub use intent::{QuizIntent, Rating};
pub use reducer::QuizReducer;
pub use state::{Card, QuizModel};
pub use view::QuizView;
