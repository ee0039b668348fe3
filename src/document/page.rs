use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use kurbo::Rect;

use crate::{
    document::node::{Document, NodeId},
    document::viewport::Viewport,
    foundation::error::{EmberError, EmberResult},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Serialized description of a page: a node tree, the viewport and scripted scrolling.
pub struct Page {
    /// Viewport at load time.
    pub viewport: Viewport,
    /// Root node of the tree.
    pub root: NodeSpec,
    /// Scroll steps replayed by the simulator, in any order.
    #[serde(default)]
    pub scroll: Vec<ScrollStep>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One node of a serialized page.
pub struct NodeSpec {
    /// Tag name.
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Class list.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Attributes by full name.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Layout box as `[x, y, width, height]` in page coordinates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f64; 4]>,
    /// Text content, appended after the children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Child elements.
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

fn default_tag() -> String {
    "div".to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Scroll the viewport to `y` once `at_ms` of virtual time has elapsed.
pub struct ScrollStep {
    /// Virtual time in milliseconds since `init`.
    pub at_ms: u64,
    /// Target vertical scroll offset.
    pub y: f64,
}

impl Page {
    /// Parse a page from JSON.
    pub fn from_reader<R: Read>(r: R) -> EmberResult<Self> {
        serde_json::from_reader(r).map_err(|e| EmberError::serde(format!("page JSON: {e}")))
    }

    /// Load a page JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> EmberResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EmberError::validation(format!("open page JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build the in-memory document for this page.
    pub fn build_document(&self) -> EmberResult<Document> {
        let mut doc = Document::new(&self.root.tag);
        let root = doc.root();
        fill(&mut doc, root, &self.root)?;
        Ok(doc)
    }

    /// Scroll steps sorted by time.
    pub fn scroll_steps(&self) -> Vec<ScrollStep> {
        let mut steps = self.scroll.clone();
        steps.sort_by_key(|s| s.at_ms);
        steps
    }
}

fn fill(doc: &mut Document, node: NodeId, spec: &NodeSpec) -> EmberResult<()> {
    for class in &spec.classes {
        doc.add_class(node, class);
    }
    for (k, v) in &spec.attrs {
        doc.set_attr(node, k, v.clone());
    }
    if let Some([x, y, w, h]) = spec.rect {
        if w < 0.0 || h < 0.0 {
            return Err(EmberError::validation(format!(
                "node '{}' has a negative rect size",
                spec.tag
            )));
        }
        doc.set_rect(node, Rect::new(x, y, x + w, y + h));
    }

    for child in &spec.children {
        let c = doc.create_element(&child.tag);
        doc.append_child(node, c)?;
        fill(doc, c, child)?;
    }

    if let Some(text) = &spec.text {
        let t = doc.create_text(text.clone());
        doc.append_child(node, t)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/document/page.rs"]
mod tests;
