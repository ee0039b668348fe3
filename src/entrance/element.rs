use crate::document::node::NodeId;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One animated element of an entrance group.
pub struct EntranceElement {
    /// The element node.
    pub node: NodeId,
    /// Resolved animation name (may not be registered; lookups then no-op).
    pub anim: String,
    /// Delay in milliseconds before the completed phase starts (before the settle pad).
    pub delay: i64,
}

impl EntranceElement {
    /// Element record with an explicit animation and delay.
    pub fn new(node: NodeId, anim: impl Into<String>, delay: i64) -> Self {
        Self {
            node,
            anim: anim.into(),
            delay,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A container whose elements animate together with staggered delays.
pub struct EntranceGroup {
    /// The container node (the only long-lived link back to the document).
    pub node: NodeId,
    /// One-time offset in milliseconds added to every element delay.
    pub delay: i64,
    /// Spacing in milliseconds between consecutive delay indices.
    pub delay_between: i64,
    /// Elements in document order.
    pub elements: Vec<EntranceElement>,
}
