//! In-memory host document.
//!
//! Used to render and inspect a mounted tree without a browser.

use std::cell::RefCell;

use crate::Result;
use crate::document::{Attach, HostDocument};
use crate::target::MountTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
enum NodeData {
    Element {
        tag: String,
        id: Option<String>,
        children: Vec<NodeId>,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    parent: Option<NodeId>,
    data: NodeData,
}

/// Tree of elements and text nodes rooted at a `body` element.
#[derive(Debug)]
pub struct MemoryDocument {
    nodes: RefCell<Vec<Node>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let body = Node {
            parent: None,
            data: NodeData::Element {
                tag: "body".to_string(),
                id: None,
                children: Vec::new(),
            },
        };
        Self {
            nodes: RefCell::new(vec![body]),
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn append_element(&self, parent: NodeId, tag: &str, id: Option<&str>) -> Result<NodeId> {
        self.ensure_element(parent)?;
        Ok(self.push_child(
            parent,
            NodeData::Element {
                tag: tag.to_string(),
                id: id.map(str::to_string),
                children: Vec::new(),
            },
        ))
    }

    pub fn append_text(&self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.ensure_element(parent)?;
        Ok(self.push_child(parent, NodeData::Text(text.to_string())))
    }

    /// First element in document order carrying the given id.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(|data| matches!(data, NodeData::Element { id: Some(v), .. } if v == id))
    }

    pub fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.find(|data| matches!(data, NodeData::Element { tag: t, .. } if t.eq_ignore_ascii_case(tag)))
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        match &self.nodes.borrow().get(node.0)?.data {
            NodeData::Element { tag, .. } => Some(tag.clone()),
            NodeData::Text(_) => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.borrow().get(node.0)?.parent
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.nodes.borrow().get(node.0).map(|n| &n.data) {
            Some(NodeData::Element { children, .. }) => children.clone(),
            _ => Vec::new(),
        }
    }

    /// Concatenated text of `node` and all its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        collect_text(&nodes, node, &mut out);
        out
    }

    /// True when `node` sits strictly below `ancestor`.
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Markup of everything inside `body`.
    pub fn to_html(&self) -> String {
        self.inner_html(self.body())
    }

    pub fn inner_html(&self, node: NodeId) -> String {
        let nodes = self.nodes.borrow();
        let mut out = String::new();
        if let Some(NodeData::Element { children, .. }) = nodes.get(node.0).map(|n| &n.data) {
            for child in children {
                write_node(&nodes, *child, &mut out);
            }
        }
        out
    }

    fn ensure_element(&self, node: NodeId) -> Result<()> {
        self.tag(node)
            .ok_or_else(|| format!("Node {} is not an element", node.0))?;
        Ok(())
    }

    fn find<P>(&self, predicate: P) -> Option<NodeId>
    where
        P: Fn(&NodeData) -> bool,
    {
        let nodes = self.nodes.borrow();
        let mut stack = vec![self.body()];
        while let Some(current) = stack.pop() {
            let data = &nodes[current.0].data;
            if predicate(data) {
                return Some(current);
            }
            if let NodeData::Element { children, .. } = data {
                stack.extend(children.iter().rev());
            }
        }
        None
    }

    fn push_child(&self, parent: NodeId, data: NodeData) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            parent: Some(parent),
            data,
        });
        if let NodeData::Element { children, .. } = &mut nodes[parent.0].data {
            children.push(id);
        }
        id
    }

    fn insert_view(&self, parent: NodeId, view: View) -> NodeId {
        match view {
            View::Element { tag, id, children } => {
                let node = self.push_child(
                    parent,
                    NodeData::Element {
                        tag,
                        id,
                        children: Vec::new(),
                    },
                );
                for child in children {
                    self.insert_view(node, child);
                }
                node
            }
            View::Text(text) => self.push_child(parent, NodeData::Text(text)),
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HostDocument for MemoryDocument {
    type Element = NodeId;

    fn resolve(&self, target: &MountTarget) -> Result<Option<NodeId>> {
        let found = match target {
            MountTarget::Id(id) => self.element_by_id(id),
            MountTarget::Query(query) if is_tag_name(query) => self.first_element_by_tag(query),
            MountTarget::Query(_) => None,
        };
        Ok(found)
    }
}

/// Static markup tree, the memory document's notion of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Element {
        tag: String,
        id: Option<String>,
        children: Vec<View>,
    },
    Text(String),
}

impl View {
    pub fn element(tag: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            id: None,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Sets the id attribute. Text views are returned unchanged.
    pub fn with_id(mut self, value: impl Into<String>) -> Self {
        if let Self::Element { id, .. } = &mut self {
            *id = Some(value.into());
        }
        self
    }

    /// Appends a child view. Text views are returned unchanged.
    pub fn child(mut self, view: View) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(view);
        }
        self
    }
}

impl Attach<MemoryDocument> for View {
    type Handle = NodeId;

    fn attach(self, document: &MemoryDocument, parent: NodeId) -> Result<NodeId> {
        document.ensure_element(parent)?;
        Ok(document.insert_view(parent, self))
    }
}

fn is_tag_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn collect_text(nodes: &[Node], node: NodeId, out: &mut String) {
    match nodes.get(node.0).map(|n| &n.data) {
        Some(NodeData::Text(text)) => out.push_str(text),
        Some(NodeData::Element { children, .. }) => {
            for child in children {
                collect_text(nodes, *child, out);
            }
        }
        None => {}
    }
}

fn write_node(nodes: &[Node], node: NodeId, out: &mut String) {
    match &nodes[node.0].data {
        NodeData::Text(text) => out.push_str(&escape(text, false)),
        NodeData::Element { tag, id, children } => {
            out.push('<');
            out.push_str(tag);
            if let Some(id) = id {
                out.push_str(" id=\"");
                out.push_str(&escape(id, true));
                out.push('"');
            }
            out.push('>');
            for child in children {
                write_node(nodes, *child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape(value: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
