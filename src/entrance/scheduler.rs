use std::collections::BTreeSet;

use kurbo::Rect;

use crate::{
    config::settings::RootMargin,
    document::node::Document,
    document::viewport::Viewport,
    entrance::element::EntranceGroup,
};

/// Viewport rectangle grown (or shrunk, for negative margins) by `margin`.
pub fn root_rect(viewport: &Viewport, margin: &RootMargin) -> Rect {
    let (top, right, bottom, left) = margin.resolve(viewport);
    let b = viewport.bounds();
    Rect::new(b.x0 - left, b.y0 - top, b.x1 + right, b.y1 + bottom)
}

/// Intersection test with inclusive edges, so a zero-height target touching the root
/// still counts as visible.
pub fn is_intersecting(target: Rect, root: Rect) -> bool {
    target.x0 <= root.x1 && target.x1 >= root.x0 && target.y0 <= root.y1 && target.y1 >= root.y0
}

/// Tracks which groups are still waiting to become visible.
///
/// A group fires at most once: it is unobserved as soon as it is reported and can never
/// be observed again.
#[derive(Clone, Debug, Default)]
pub struct VisibilityScheduler {
    observed: BTreeSet<usize>,
    fired: BTreeSet<usize>,
}

impl VisibilityScheduler {
    /// Scheduler observing nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing the group at `index`. Groups that already fired are ignored.
    pub fn observe(&mut self, index: usize) {
        if !self.fired.contains(&index) {
            self.observed.insert(index);
        }
    }

    /// `true` while the group at `index` is observed.
    pub fn is_observing(&self, index: usize) -> bool {
        self.observed.contains(&index)
    }

    /// `true` once the group at `index` was reported visible.
    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.contains(&index)
    }

    /// Number of groups still observed.
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Report the observed groups that now intersect the root, in group order, and stop
    /// observing them.
    pub fn take_visible(
        &mut self,
        doc: &Document,
        viewport: &Viewport,
        margin: &RootMargin,
        groups: &[EntranceGroup],
    ) -> Vec<usize> {
        let root = root_rect(viewport, margin);
        let visible: Vec<usize> = self
            .observed
            .iter()
            .copied()
            .filter(|i| {
                groups
                    .get(*i)
                    .is_some_and(|g| is_intersecting(viewport.client_rect(doc, g.node), root))
            })
            .collect();

        for i in &visible {
            self.observed.remove(i);
            self.fired.insert(*i);
        }
        if !visible.is_empty() {
            tracing::debug!(groups = ?visible, "groups became visible");
        }
        visible
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/scheduler.rs"]
mod tests;
