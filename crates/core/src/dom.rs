//! Owned, mutable DOM working tree.
//!
//! [`DomTree`] is the representation the pipeline mutates: the noise remover
//! and the section filter both delete nodes in place, and the locator scores
//! trial copies without touching the parsed source document. Building a tree
//! from a [`scraper`] element deep-copies that subtree, so any number of
//! trees can be built from one parsed document and mutated independently.
//!
//! Nodes live in a flat arena (`Vec<DomNode>`) addressed by [`NodeId`],
//! with parent/child links by id. A tree owns its nodes; it is `Send` but
//! not meant to be shared across threads — process one tree per task.

use scraper::ElementRef;

/// Index of a node within its [`DomTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Element payload: tag plus attributes, with class tokens and id broken out
/// so callers can ask "does this node carry class token T?" without string
/// splitting at every call site.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lowercase tag name.
    pub tag: String,
    /// Value of the `id` attribute, if present.
    pub id: Option<String>,
    /// Class attribute split into individual tokens.
    pub classes: Vec<String>,
    /// All attributes in source order, including `class` and `id`.
    pub attrs: Vec<(String, String)>,
}

/// A node is either an element or a run of text.
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
struct DomNode {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    detached: bool,
}

/// An owned tree of elements and text, supporting in-place node removal.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<DomNode>,
    root: NodeId,
}

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

impl DomTree {
    /// Builds an owned tree from a parsed element, deep-copying the subtree.
    ///
    /// Comments, doctypes, and processing instructions are dropped; only
    /// elements and text survive the copy.
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let mut tree = Self { nodes: Vec::new(), root: NodeId(0) };
        let root = tree.push_node(element_data_of(element), None);
        tree.root = root;
        tree.append_children(root, element);
        tree
    }

    fn append_children(&mut self, parent: NodeId, element: ElementRef<'_>) {
        for child in element.children() {
            match child.value() {
                scraper::Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        let id = self.push_node(element_data_of(el), Some(parent));
                        self.append_children(id, el);
                    }
                }
                scraper::Node::Text(text) => {
                    self.push(NodeData::Text(text.text.to_string()), Some(parent));
                }
                _ => {}
            }
        }
    }

    fn push_node(&mut self, data: ElementData, parent: Option<NodeId>) -> NodeId {
        self.push(NodeData::Element(data), parent)
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(DomNode { data, parent, children: Vec::new(), detached: false });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    /// The root node the tree was built from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node payload.
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    /// Element payload, or `None` for text nodes.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].data {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    /// Lowercase tag name, or `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    /// Whether the element carries the given class token.
    pub fn has_class(&self, id: NodeId, token: &str) -> bool {
        self.element(id).is_some_and(|el| el.classes.iter().any(|c| c == token))
    }

    /// Attribute lookup on an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)
            .and_then(|el| el.attrs.iter().find(|(k, _)| k == name))
            .map(|(_, v)| v.as_str())
    }

    /// Parent id, `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Attached children, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// True while the node is still reachable from the root.
    pub fn is_attached(&self, id: NodeId) -> bool {
        let mut current = id;
        loop {
            if self.nodes[current.0].detached {
                return false;
            }
            match self.nodes[current.0].parent {
                Some(parent) => current = parent,
                None => return current == self.root,
            }
        }
    }

    /// Removes the node (and its subtree) from the tree. Detaching the root
    /// or an already-detached node is a no-op.
    pub fn detach(&mut self, id: NodeId) {
        if id == self.root || self.nodes[id.0].detached {
            return;
        }
        if let Some(parent) = self.nodes[id.0].parent {
            self.nodes[parent.0].children.retain(|c| *c != id);
        }
        self.nodes[id.0].detached = true;
    }

    /// All attached descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.children(node).iter().rev().copied());
        }
        out
    }

    /// Heading level for a tag name (`h1`..`h6`).
    pub fn heading_level(tag: &str) -> Option<u8> {
        match tag {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }

    /// Heading elements under `id` with their levels, in document order.
    pub fn headings(&self, id: NodeId) -> Vec<(NodeId, u8)> {
        self.descendants(id)
            .into_iter()
            .filter_map(|n| {
                let level = self.tag(n).and_then(Self::heading_level)?;
                Some((n, level))
            })
            .collect()
    }

    /// Concatenated text of the subtree, in document order.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element(_) => {
                for child in self.children(id) {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Count of non-whitespace characters in the subtree's text. Candidate
    /// scores and the chrome text threshold both use this measure.
    pub fn printable_len(&self, id: NodeId) -> usize {
        self.text(id).chars().filter(|c| !c.is_whitespace()).count()
    }

    /// Serializes the subtree back to HTML, root tag included.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize(id, &mut out);
        out
    }

    fn serialize(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].data {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&el.tag.as_str()) {
                    return;
                }
                for child in self.children(id) {
                    self.serialize(*child, out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn element_data_of(element: ElementRef<'_>) -> ElementData {
    let value = element.value();
    ElementData {
        tag: value.name().to_lowercase(),
        id: value.id().map(|s| s.to_string()),
        classes: value.classes().map(|c| c.to_string()).collect(),
        attrs: value.attrs().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}
