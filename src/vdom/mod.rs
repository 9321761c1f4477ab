//! Minimal virtual tree: declarative nodes, positional diff, and a live
//! tree that patches apply to in place.
//!
//! ```text
//! view(model) ──→ Node ──diff(old, new)──→ PatchSet ──apply──→ LiveNode
//! ```

mod diff;
mod live;
mod node;
mod renderer;

pub use diff::{diff, Patch, PatchSet};
pub use live::{Document, LiveContent, LiveNode, NodeId, NodeIds};
pub use node::{br, button, div, input, p, text, Element, Handler, Node, Path, Tag};
pub use renderer::{PatchError, Renderer, TreeRenderer};
