//! View trait for MVI architecture.

use crate::vdom::Node;

/// Renders a state into a declarative tree.
///
/// Must not depend on anything but `self` (presentation settings) and the
/// state passed in. Interactive nodes carry intent values; there is no
/// dispatch callback to capture.
pub trait View<S, I> {
    fn render(&self, state: &S) -> Node<I>;
}
