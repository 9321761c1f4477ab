//! Materialized tree with stable node identity.

use std::collections::BTreeMap;

use super::node::{Element, Handler, Node, Tag};

/// Identity of a live node. Survives every patch that does not replace or
/// remove the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Reserved for the document's mount container.
    pub const MOUNT: NodeId = NodeId(0);

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out fresh [`NodeId`]s. Starts after [`NodeId::MOUNT`].
#[derive(Debug)]
pub struct NodeIds {
    next: u64,
}

impl Default for NodeIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl NodeIds {
    pub fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub enum LiveContent<M> {
    Element {
        tag: Tag,
        attrs: BTreeMap<String, String>,
        handler: Option<Handler<M>>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct LiveNode<M> {
    id: NodeId,
    pub(crate) content: LiveContent<M>,
    pub(crate) children: Vec<LiveNode<M>>,
}

impl<M> LiveNode<M> {
    pub(crate) fn new(id: NodeId, content: LiveContent<M>, children: Vec<LiveNode<M>>) -> Self {
        Self {
            id,
            content,
            children,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn content(&self) -> &LiveContent<M> {
        &self.content
    }

    pub fn children(&self) -> &[LiveNode<M>] {
        &self.children
    }

    pub fn tag(&self) -> Option<Tag> {
        match &self.content {
            LiveContent::Element { tag, .. } => Some(*tag),
            LiveContent::Text(_) => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match &self.content {
            LiveContent::Element { attrs, .. } => attrs.get(key).map(String::as_str),
            LiveContent::Text(_) => None,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    pub fn handler(&self) -> Option<&Handler<M>> {
        match &self.content {
            LiveContent::Element { handler, .. } => handler.as_ref(),
            LiveContent::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            LiveContent::Text(text) => Some(text),
            LiveContent::Element { .. } => None,
        }
    }

    pub fn text_content(&self) -> String {
        match &self.content {
            LiveContent::Text(text) => text.clone(),
            LiveContent::Element { .. } => {
                self.children.iter().map(LiveNode::text_content).collect()
            }
        }
    }

    pub fn is_focusable(&self) -> bool {
        self.tag().is_some_and(Tag::is_focusable) && self.handler().is_some()
    }

    pub fn get(&self, path: &[usize]) -> Option<&LiveNode<M>> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    pub fn get_mut(&mut self, path: &[usize]) -> Option<&mut LiveNode<M>> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    pub fn find(&self, id: NodeId) -> Option<&LiveNode<M>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut LiveNode<M>> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// First node in document order whose `id` attribute equals `id`.
    pub fn element_by_id(&self, id: &str) -> Option<&LiveNode<M>> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.element_by_id(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut LiveNode<M>> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.element_by_id_mut(id))
    }

    /// Focusable descendants (including self) in document order.
    pub fn focusable(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_focusable(&mut out);
        out
    }

    fn collect_focusable(&self, out: &mut Vec<NodeId>) {
        if self.is_focusable() {
            out.push(self.id);
        }
        for child in &self.children {
            child.collect_focusable(out);
        }
    }
}

impl<M: Clone> LiveNode<M> {
    /// Virtual snapshot of this live subtree, without identities.
    pub fn to_node(&self) -> Node<M> {
        match &self.content {
            LiveContent::Text(text) => Node::Text(text.clone()),
            LiveContent::Element {
                tag,
                attrs,
                handler,
            } => Node::Element(Element {
                tag: *tag,
                attrs: attrs.clone(),
                handler: handler.clone(),
                children: self.children.iter().map(LiveNode::to_node).collect(),
            }),
        }
    }
}

/// Host container for mounted trees.
///
/// Created with a single mount element carrying a fixed `id` attribute;
/// programs locate it by that id and append their root under it.
#[derive(Debug)]
pub struct Document<M> {
    root: LiveNode<M>,
}

impl<M> Document<M> {
    pub fn new(mount_id: &str) -> Self {
        let mut attrs = BTreeMap::new();
        attrs.insert("id".to_string(), mount_id.to_string());
        Self {
            root: LiveNode::new(
                NodeId::MOUNT,
                LiveContent::Element {
                    tag: Tag::Div,
                    attrs,
                    handler: None,
                },
                Vec::new(),
            ),
        }
    }

    pub fn root(&self) -> &LiveNode<M> {
        &self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&LiveNode<M>> {
        self.root.find(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut LiveNode<M>> {
        self.root.find_mut(id)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&LiveNode<M>> {
        self.root.element_by_id(id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut LiveNode<M>> {
        self.root.element_by_id_mut(id)
    }
}
