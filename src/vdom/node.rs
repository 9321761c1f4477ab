//! Declarative tree produced by views.
//!
//! Nodes carry message *values* instead of callbacks: a button holds the
//! intent it emits, an input holds a constructor that turns the edited
//! value into an intent. The runtime resolves them against whatever tree
//! is live at the moment of the key press.

use std::collections::BTreeMap;

/// Child-index path from the root of a tree.
pub type Path = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Paragraph,
    Button,
    Input,
    Break,
}

impl Tag {
    /// Buttons and inputs can hold terminal focus.
    pub fn is_focusable(self) -> bool {
        matches!(self, Tag::Button | Tag::Input)
    }

    /// Block-level tags start and end their own line when painted.
    pub fn is_block(self) -> bool {
        matches!(self, Tag::Div | Tag::Paragraph)
    }
}

/// What an interactive node emits when the user acts on it.
#[derive(Debug, Clone)]
pub enum Handler<M> {
    /// Activated (Enter/Space on a button).
    Click(M),
    /// Edited; receives the full new value of the input.
    Input(fn(String) -> M),
}

impl<M: PartialEq> PartialEq for Handler<M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Handler::Click(a), Handler::Click(b)) => a == b,
            (Handler::Input(a), Handler::Input(b)) => *a as usize == *b as usize,
            _ => false,
        }
    }
}

impl<M: Clone> Handler<M> {
    pub fn click(&self) -> Option<M> {
        match self {
            Handler::Click(msg) => Some(msg.clone()),
            Handler::Input(_) => None,
        }
    }

    pub fn input(&self, value: String) -> Option<M> {
        match self {
            Handler::Input(build) => Some(build(value)),
            Handler::Click(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element<M> {
    pub tag: Tag,
    pub attrs: BTreeMap<String, String>,
    pub handler: Option<Handler<M>>,
    pub children: Vec<Node<M>>,
}

impl<M> Element<M> {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: BTreeMap::new(),
            handler: None,
            children: Vec::new(),
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn on_click(mut self, msg: M) -> Self {
        self.handler = Some(Handler::Click(msg));
        self
    }

    pub fn on_input(mut self, build: fn(String) -> M) -> Self {
        self.handler = Some(Handler::Input(build));
        self
    }

    pub fn child(mut self, node: impl Into<Node<M>>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node<M>>,
    {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<M> {
    Element(Element<M>),
    Text(String),
}

impl<M> From<Element<M>> for Node<M> {
    fn from(element: Element<M>) -> Self {
        Node::Element(element)
    }
}

impl<M> Node<M> {
    pub fn as_element(&self) -> Option<&Element<M>> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node<M>] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Node at `path`, or `None` if any step is out of range.
    pub fn get(&self, path: &[usize]) -> Option<&Node<M>> {
        path.iter()
            .try_fold(self, |node, &index| node.children().get(index))
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }
}

pub fn div<M>() -> Element<M> {
    Element::new(Tag::Div)
}

pub fn p<M>() -> Element<M> {
    Element::new(Tag::Paragraph)
}

pub fn button<M>() -> Element<M> {
    Element::new(Tag::Button)
}

pub fn input<M>() -> Element<M> {
    Element::new(Tag::Input)
}

pub fn br<M>() -> Element<M> {
    Element::new(Tag::Break)
}

pub fn text<M>(text: impl Into<String>) -> Node<M> {
    Node::Text(text.into())
}
