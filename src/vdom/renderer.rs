//! The rendering collaborator used by the update loop.

use std::collections::BTreeMap;

use thiserror::Error;

use super::diff::{diff, Patch, PatchSet};
use super::live::{LiveContent, LiveNode, NodeIds};
use super::node::{Node, Path};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("no live node at path {path:?}")]
    InvalidPath { path: Path },

    #[error("live node at path {path:?} is not an element")]
    NotAnElement { path: Path },

    #[error("live node at path {path:?} is not a text node")]
    NotText { path: Path },
}

/// The three operations the update loop needs from a rendering backend.
pub trait Renderer<M> {
    /// Build a live tree from a virtual one.
    fn materialize(&mut self, tree: &Node<M>) -> LiveNode<M>;

    /// Compute the patches turning `old` into `new`.
    fn diff(&self, old: &Node<M>, new: &Node<M>) -> PatchSet<M>;

    /// Apply `patches` to `live` in place. Returns the number of patches applied.
    fn apply_patch(
        &mut self,
        live: &mut LiveNode<M>,
        patches: &PatchSet<M>,
    ) -> Result<usize, PatchError>;
}

/// In-memory renderer backing the terminal front-end.
#[derive(Debug, Default)]
pub struct TreeRenderer {
    ids: NodeIds,
}

impl TreeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn apply_one<M: Clone + PartialEq>(
        &mut self,
        live: &mut LiveNode<M>,
        patch: &Patch<M>,
    ) -> Result<(), PatchError> {
        let path = patch.path();
        let target = live.get_mut(path).ok_or_else(|| PatchError::InvalidPath {
            path: path.to_vec(),
        })?;

        match patch {
            Patch::Replace { node, .. } => {
                *target = self.materialize(node);
            }
            Patch::SetText { text, .. } => match &mut target.content {
                LiveContent::Text(current) => *current = text.clone(),
                LiveContent::Element { .. } => {
                    return Err(PatchError::NotText {
                        path: path.to_vec(),
                    })
                }
            },
            Patch::SetAttr { key, value, .. } => {
                attrs_mut(target, path)?.insert(key.clone(), value.clone());
            }
            Patch::RemoveAttr { key, .. } => {
                attrs_mut(target, path)?.remove(key);
            }
            Patch::SetHandler { handler, .. } => match &mut target.content {
                LiveContent::Element { handler: slot, .. } => *slot = handler.clone(),
                LiveContent::Text(_) => {
                    return Err(PatchError::NotAnElement {
                        path: path.to_vec(),
                    })
                }
            },
            Patch::Append { node, .. } => {
                ensure_element(target, path)?;
                let child = self.materialize(node);
                target.children.push(child);
            }
            Patch::Truncate { len, .. } => {
                ensure_element(target, path)?;
                target.children.truncate(*len);
            }
        }
        Ok(())
    }
}

fn ensure_element<M>(node: &LiveNode<M>, path: &[usize]) -> Result<(), PatchError> {
    match node.content {
        LiveContent::Element { .. } => Ok(()),
        LiveContent::Text(_) => Err(PatchError::NotAnElement {
            path: path.to_vec(),
        }),
    }
}

fn attrs_mut<'a, M>(
    node: &'a mut LiveNode<M>,
    path: &[usize],
) -> Result<&'a mut BTreeMap<String, String>, PatchError> {
    match &mut node.content {
        LiveContent::Element { attrs, .. } => Ok(attrs),
        LiveContent::Text(_) => Err(PatchError::NotAnElement {
            path: path.to_vec(),
        }),
    }
}

impl<M: Clone + PartialEq> Renderer<M> for TreeRenderer {
    fn materialize(&mut self, tree: &Node<M>) -> LiveNode<M> {
        let id = self.ids.next_id();
        match tree {
            Node::Text(text) => LiveNode::new(id, LiveContent::Text(text.clone()), Vec::new()),
            Node::Element(element) => {
                let children = element
                    .children
                    .iter()
                    .map(|child| self.materialize(child))
                    .collect();
                LiveNode::new(
                    id,
                    LiveContent::Element {
                        tag: element.tag,
                        attrs: element.attrs.clone(),
                        handler: element.handler.clone(),
                    },
                    children,
                )
            }
        }
    }

    fn diff(&self, old: &Node<M>, new: &Node<M>) -> PatchSet<M> {
        diff(old, new)
    }

    fn apply_patch(
        &mut self,
        live: &mut LiveNode<M>,
        patches: &PatchSet<M>,
    ) -> Result<usize, PatchError> {
        for patch in patches {
            self.apply_one(live, patch)?;
        }
        Ok(patches.len())
    }
}
