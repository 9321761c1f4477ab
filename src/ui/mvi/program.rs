//! The update loop: reduce, render, diff, patch.

use std::marker::PhantomData;

use thiserror::Error;

use crate::vdom::{Document, LiveNode, Node, NodeId, PatchError, Renderer};

use super::reducer::Reducer;
use super::view::View;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("mount point '#{id}' not found in document")]
    MountNotFound { id: String },

    #[error("mounted root is no longer attached to the document")]
    RootDetached,

    #[error("failed to patch live tree: {0}")]
    Patch(#[from] PatchError),
}

/// Result of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of patch operations applied to the live tree.
    pub patches: usize,
}

/// Single owner of the loop state: current model, current tree, and the
/// document holding the live tree.
///
/// Dispatch is synchronous: the next intent is only processed after the
/// previous one has been reduced, rendered and patched.
pub struct Program<R, V, D>
where
    R: Reducer,
{
    model: R::State,
    tree: Node<R::Intent>,
    view: V,
    renderer: D,
    document: Document<R::Intent>,
    mount: NodeId,
    slot: usize,
    _reducer: PhantomData<R>,
}

impl<R, V, D> Program<R, V, D>
where
    R: Reducer,
    V: View<R::State, R::Intent>,
    D: Renderer<R::Intent>,
{
    /// Render `model`, materialize the tree and append it under the element
    /// whose `id` attribute is `mount_id`. The root is attached exactly once.
    pub fn mount(
        model: R::State,
        view: V,
        mut renderer: D,
        mut document: Document<R::Intent>,
        mount_id: &str,
    ) -> Result<Self, ProgramError> {
        let tree = view.render(&model);
        let live = renderer.materialize(&tree);

        let container =
            document
                .element_by_id_mut(mount_id)
                .ok_or_else(|| ProgramError::MountNotFound {
                    id: mount_id.to_string(),
                })?;
        let mount = container.id();
        let slot = container.children.len();
        container.children.push(live);

        tracing::debug!(mount_id, slot, "mounted program root");

        Ok(Self {
            model,
            tree,
            view,
            renderer,
            document,
            mount,
            slot,
            _reducer: PhantomData,
        })
    }

    /// Run one intent through the loop.
    ///
    /// The reducer gets its own copy of the model and patches go to a copy
    /// of the live root. Model, tree and live root are only replaced once
    /// every patch has applied, so on error all three stay as they were.
    pub fn dispatch(&mut self, intent: R::Intent) -> Result<DispatchOutcome, ProgramError> {
        tracing::debug!(?intent, "dispatch");

        let model = R::reduce(self.model.clone(), intent);
        let tree = self.view.render(&model);
        let patches = self.renderer.diff(&self.tree, &tree);

        let live = Self::live_root_mut(&mut self.document, self.mount, self.slot)?;
        let applied = if patches.is_empty() {
            0
        } else {
            let mut staged = live.clone();
            let applied = self.renderer.apply_patch(&mut staged, &patches)?;
            *live = staged;
            applied
        };

        self.model = model;
        self.tree = tree;

        tracing::trace!(patches = applied, "live tree patched");
        Ok(DispatchOutcome { patches: applied })
    }

    pub fn model(&self) -> &R::State {
        &self.model
    }

    pub fn tree(&self) -> &Node<R::Intent> {
        &self.tree
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn document(&self) -> &Document<R::Intent> {
        &self.document
    }

    /// The live node this program manages (the one appended at mount).
    pub fn live_root(&self) -> Option<&LiveNode<R::Intent>> {
        self.document
            .node(self.mount)
            .and_then(|mount| mount.children().get(self.slot))
    }

    /// Focusable live nodes of this program in document order.
    pub fn focusable(&self) -> Vec<NodeId> {
        self.live_root().map(LiveNode::focusable).unwrap_or_default()
    }

    fn live_root_mut(
        document: &mut Document<R::Intent>,
        mount: NodeId,
        slot: usize,
    ) -> Result<&mut LiveNode<R::Intent>, ProgramError> {
        document
            .node_mut(mount)
            .and_then(|container| container.children.get_mut(slot))
            .ok_or(ProgramError::RootDetached)
    }
}
