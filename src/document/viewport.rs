use kurbo::Rect;

use crate::document::node::{Document, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The visible window onto the page.
pub struct Viewport {
    /// Visible width in pixels.
    pub width: f64,
    /// Visible height in pixels.
    pub height: f64,
    /// Horizontal scroll offset.
    #[serde(default)]
    pub scroll_x: f64,
    /// Vertical scroll offset.
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    /// Viewport scrolled to the page origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Viewport-space bounds (`0,0 .. width,height`).
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Bounding box of `node` relative to the viewport origin.
    pub fn client_rect(&self, doc: &Document, node: NodeId) -> Rect {
        let r = doc.rect(node);
        Rect::new(
            r.x0 - self.scroll_x,
            r.y0 - self.scroll_y,
            r.x1 - self.scroll_x,
            r.y1 - self.scroll_y,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/viewport.rs"]
mod tests;
