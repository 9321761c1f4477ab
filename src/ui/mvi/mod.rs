//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the traits and the runtime loop for unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View ──→ diff ──→ patch live tree
//!    ↑                                                     │
//!    └─────────────── handler on focused node ─────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Intent**: User actions
//! - **Reducer**: Pure function that transforms state based on intents
//! - **View**: Pure function from state to a declarative tree
//! - **Program**: Owns state, tree and live document; runs the loop

mod intent;
mod program;
mod reducer;
mod state;
mod view;

pub use intent::Intent;
pub use program::{DispatchOutcome, Program, ProgramError};
pub use reducer::Reducer;
pub use state::UiState;
pub use view::View;
