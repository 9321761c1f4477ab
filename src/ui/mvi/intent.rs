//! Base trait for intents (user actions) in MVI architecture.

use std::fmt::Debug;

/// Marker trait for intent objects.
///
/// Intents are plain values: views embed them in interactive nodes and
/// the runtime hands them to reducers. They must be comparable so the
/// diff can tell whether a node's handler changed between renders.
pub trait Intent: Clone + PartialEq + Debug + Send + 'static {}
