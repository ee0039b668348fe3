use std::collections::BTreeMap;

use indextree::Arena;
use kurbo::Rect;

use crate::{
    animation::value::{OptionValue, StyleState},
    document::selector::Selector,
    foundation::attr::dataset_key,
    foundation::error::{EmberError, EmberResult},
};

/// Handle to a node owned by a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) indextree::NodeId);

impl NodeId {
    /// Arena index of the node (1-based, stable for the document's lifetime).
    pub fn index(self) -> usize {
        self.0.into()
    }
}

impl serde::Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.index() as u64)
    }
}

#[derive(Clone, Debug)]
/// Element payload: tag, classes, attributes, inline style and page-space layout box.
pub struct ElementData {
    /// Lower-case tag name.
    pub tag: String,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Attributes by full name (`data-entrance-delay`, ...).
    pub attrs: BTreeMap<String, String>,
    /// Inline style written by the tween engine.
    pub style: StyleState,
    /// Layout box in page coordinates.
    pub rect: Rect,
}

#[derive(Clone, Debug)]
/// Node payload.
pub enum NodeKind {
    /// Element node.
    Element(ElementData),
    /// Text node.
    Text(String),
}

/// Arena-backed document tree.
///
/// Nodes are never removed; detached subtrees simply become unreachable from the root.
#[derive(Clone, Debug)]
pub struct Document {
    arena: Arena<NodeKind>,
    root: NodeId,
}

impl Document {
    /// Create a document whose root element has the given tag.
    pub fn new(root_tag: &str) -> Self {
        let mut arena = Arena::new();
        let root = NodeId(arena.new_node(element_kind(root_tag)));
        Self { arena, root }
    }

    /// Root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes ever created (attached or not).
    pub fn len(&self) -> usize {
        self.arena.count()
    }

    /// `true` when the arena is empty (never the case for a constructed document).
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        NodeId(self.arena.new_node(element_kind(tag)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        NodeId(self.arena.new_node(NodeKind::Text(text.into())))
    }

    fn contains(&self, id: NodeId) -> bool {
        self.arena.get(id.0).is_some_and(|n| !n.is_removed())
    }

    /// Append `child` as the last child of `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> EmberResult<()> {
        if !self.contains(child) {
            return Err(EmberError::document(format!("unknown node {}", child.index())));
        }
        if !self.is_element(parent) {
            return Err(EmberError::document(format!(
                "node {} cannot have children",
                parent.index()
            )));
        }
        parent
            .0
            .checked_append(child.0, &mut self.arena)
            .map_err(|e| {
                EmberError::document(format!(
                    "cannot append node {} under {}: {e}",
                    child.index(),
                    parent.index()
                ))
            })
    }

    /// Detach every child of `node`.
    pub fn remove_children(&mut self, node: NodeId) {
        for c in self.children(node) {
            c.0.detach(&mut self.arena);
        }
    }

    /// Parent node, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node.0)?.parent().map(NodeId)
    }

    /// Child nodes in order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        if !self.contains(node) {
            return Vec::new();
        }
        node.0.children(&self.arena).map(NodeId).collect()
    }

    /// Node payload.
    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.arena.get(node.0).map(|n| n.get())
    }

    /// Element payload, if `node` is an element.
    pub fn element(&self, node: NodeId) -> Option<&ElementData> {
        match self.kind(node) {
            Some(NodeKind::Element(e)) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut ElementData> {
        match self.arena.get_mut(node.0).map(|n| n.get_mut()) {
            Some(NodeKind::Element(e)) => Some(e),
            _ => None,
        }
    }

    /// `true` if `node` is an element.
    pub fn is_element(&self, node: NodeId) -> bool {
        self.element(node).is_some()
    }

    /// Tag name of an element.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    /// Class list of an element (empty for text nodes).
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.element(node)
            .map(|e| e.classes.as_slice())
            .unwrap_or(&[])
    }

    /// `true` when the element carries the class.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// Add a class if it is not present yet.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.element_mut(node) {
            if !e.classes.iter().any(|c| c == class) {
                e.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(e) = self.element_mut(node) {
            e.classes.retain(|c| c != class);
        }
    }

    /// Attribute value by full name.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|e| e.attrs.get(name))
            .map(String::as_str)
    }

    /// `true` when the attribute is present (even if empty).
    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Set an attribute.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(e) = self.element_mut(node) {
            e.attrs.insert(name.to_string(), value.into());
        }
    }

    /// Camel-cased view of the element's `data-*` attributes.
    pub fn dataset(&self, node: NodeId) -> BTreeMap<String, String> {
        let Some(e) = self.element(node) else {
            return BTreeMap::new();
        };
        e.attrs
            .iter()
            .filter_map(|(k, v)| dataset_key(k).map(|key| (key, v.clone())))
            .collect()
    }

    /// Inline style of an element.
    pub fn style(&self, node: NodeId) -> Option<&StyleState> {
        self.element(node).map(|e| &e.style)
    }

    /// Set one inline style property.
    pub fn set_style(&mut self, node: NodeId, key: &str, value: OptionValue) {
        if let Some(e) = self.element_mut(node) {
            e.style.insert(key, value);
        }
    }

    /// Overlay every property of `state` onto the element's inline style.
    pub fn apply_style(&mut self, node: NodeId, state: &StyleState) {
        if let Some(e) = self.element_mut(node) {
            for (k, v) in state.iter() {
                e.style.insert(k.clone(), v.clone());
            }
        }
    }

    /// Page-space layout box of an element (`Rect::ZERO` for text nodes).
    pub fn rect(&self, node: NodeId) -> Rect {
        self.element(node).map(|e| e.rect).unwrap_or(Rect::ZERO)
    }

    /// Set the page-space layout box of an element.
    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(e) = self.element_mut(node) {
            e.rect = rect;
        }
    }

    /// Ancestors of `node`, nearest first, excluding `node` itself.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.contains(node)
            .then(|| node.0.ancestors(&self.arena).skip(1).map(NodeId))
            .into_iter()
            .flatten()
    }

    /// `true` when the element matches `selector`.
    pub fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.element(node)
            .is_some_and(|e| selector.matches(&e.tag, &e.classes))
    }

    /// Nearest inclusive ancestor matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|n| self.matches(*n, selector))
    }

    /// Descendants of `node` in document (pre-)order, excluding `node`.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        if !self.contains(node) {
            return Vec::new();
        }
        node.0.descendants(&self.arena).skip(1).map(NodeId).collect()
    }

    /// Descendant elements of `node` matching `selector`, in document order.
    pub fn query_all(&self, node: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    /// Concatenated text of every descendant text node.
    pub fn inner_text(&self, node: NodeId) -> String {
        if let Some(NodeKind::Text(t)) = self.kind(node) {
            return t.clone();
        }
        self.descendants(node)
            .into_iter()
            .filter_map(|n| match self.kind(n) {
                Some(NodeKind::Text(t)) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace the children of `node` with a single text node.
    pub fn set_inner_text(&mut self, node: NodeId, text: &str) -> EmberResult<()> {
        self.remove_children(node);
        let t = self.create_text(text);
        self.append_child(node, t)
    }
}

fn element_kind(tag: &str) -> NodeKind {
    NodeKind::Element(ElementData {
        tag: tag.to_ascii_lowercase(),
        classes: Vec::new(),
        attrs: BTreeMap::new(),
        style: StyleState::new(),
        rect: Rect::ZERO,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/document/node.rs"]
mod tests;
