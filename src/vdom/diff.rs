//! Positional structural diff between two trees.
//!
//! Children are matched by index (there are no keys), so removing the
//! first of two siblings shows up as "patch sibling 0 to look like
//! sibling 1, then truncate". Patches for a parent's children are always
//! emitted after the parent's own attribute and handler patches, and a
//! parent's `Truncate`/`Append` come after every patch inside the kept
//! prefix, so applying them in order never invalidates a later path.

use super::node::{Element, Handler, Node, Path};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<M> {
    /// Swap the node at `path` for a freshly materialized one.
    Replace { path: Path, node: Node<M> },
    SetText { path: Path, text: String },
    SetAttr { path: Path, key: String, value: String },
    RemoveAttr { path: Path, key: String },
    SetHandler { path: Path, handler: Option<Handler<M>> },
    /// Push a new last child onto the element at `path`.
    Append { path: Path, node: Node<M> },
    /// Drop every child of the element at `path` from index `len` onward.
    Truncate { path: Path, len: usize },
}

impl<M> Patch<M> {
    pub fn path(&self) -> &[usize] {
        match self {
            Patch::Replace { path, .. }
            | Patch::SetText { path, .. }
            | Patch::SetAttr { path, .. }
            | Patch::RemoveAttr { path, .. }
            | Patch::SetHandler { path, .. }
            | Patch::Append { path, .. }
            | Patch::Truncate { path, .. } => path,
        }
    }
}

/// Ordered list of patches turning one tree into another.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchSet<M> {
    patches: Vec<Patch<M>>,
}

impl<M> Default for PatchSet<M> {
    fn default() -> Self {
        Self {
            patches: Vec::new(),
        }
    }
}

impl<M> PatchSet<M> {
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Patch<M>> {
        self.patches.iter()
    }
}

impl<'a, M> IntoIterator for &'a PatchSet<M> {
    type Item = &'a Patch<M>;
    type IntoIter = std::slice::Iter<'a, Patch<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.patches.iter()
    }
}

pub fn diff<M: Clone + PartialEq>(old: &Node<M>, new: &Node<M>) -> PatchSet<M> {
    let mut patches = Vec::new();
    let mut path = Vec::new();
    diff_node(old, new, &mut path, &mut patches);
    PatchSet { patches }
}

fn diff_node<M: Clone + PartialEq>(
    old: &Node<M>,
    new: &Node<M>,
    path: &mut Path,
    out: &mut Vec<Patch<M>>,
) {
    match (old, new) {
        (Node::Text(before), Node::Text(after)) => {
            if before != after {
                out.push(Patch::SetText {
                    path: path.clone(),
                    text: after.clone(),
                });
            }
        }
        (Node::Element(before), Node::Element(after)) if before.tag == after.tag => {
            diff_element(before, after, path, out);
        }
        _ => out.push(Patch::Replace {
            path: path.clone(),
            node: new.clone(),
        }),
    }
}

fn diff_element<M: Clone + PartialEq>(
    old: &Element<M>,
    new: &Element<M>,
    path: &mut Path,
    out: &mut Vec<Patch<M>>,
) {
    for (key, value) in &new.attrs {
        if old.attrs.get(key) != Some(value) {
            out.push(Patch::SetAttr {
                path: path.clone(),
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    for key in old.attrs.keys() {
        if !new.attrs.contains_key(key) {
            out.push(Patch::RemoveAttr {
                path: path.clone(),
                key: key.clone(),
            });
        }
    }

    if old.handler != new.handler {
        out.push(Patch::SetHandler {
            path: path.clone(),
            handler: new.handler.clone(),
        });
    }

    let common = old.children.len().min(new.children.len());
    for (index, (before, after)) in old.children.iter().zip(&new.children).enumerate() {
        path.push(index);
        diff_node(before, after, path, out);
        path.pop();
    }

    if old.children.len() > common {
        out.push(Patch::Truncate {
            path: path.clone(),
            len: common,
        });
    }
    for node in &new.children[common..] {
        out.push(Patch::Append {
            path: path.clone(),
            node: node.clone(),
        });
    }
}
