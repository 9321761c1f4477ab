//! Terminal front-end for the quiz.
//!
//! The quiz itself lives in [`quiz`] and runs on the [`mvi`] loop; the
//! rest of this module feeds it key presses and paints its live tree.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod painter;
pub mod quiz;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
