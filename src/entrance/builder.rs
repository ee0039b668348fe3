use crate::{
    animation::phase::Phase,
    document::node::{Document, NodeId},
    document::viewport::Viewport,
    entrance::element::{EntranceElement, EntranceGroup},
    entrance::processor::AnimationPhaseProcessor,
    foundation::attr::parse_leading_int,
    foundation::error::EmberResult,
    runtime::context::RuntimeContext,
    tween::engine::TweenEngine,
};

/// Group attribute: one-time offset added to every element delay.
pub const ATTR_GROUP_DELAY: &str = "data-entrance-delay";
/// Group attribute: spacing between consecutive delay indices.
pub const ATTR_DELAY_BETWEEN: &str = "data-entrance-delay-between";
/// Element attribute: explicit animation name.
pub const ATTR_ANIM: &str = "data-entrance-anim";
/// Element attribute: fixed delay.
pub const ATTR_DELAY: &str = "data-entrance-delay";
/// Element attribute: delay added to the running index delay.
pub const ATTR_DELAY_ADD: &str = "data-entrance-delay-add";
/// Element attribute: explicit delay index.
pub const ATTR_DELAY_INDEX: &str = "data-entrance-delay-index";
/// Element attribute: restart the running index at zero.
pub const ATTR_DELAY_INDEX_RESET: &str = "data-entrance-delay-index-reset";

const PRIMARY_CATEGORY: &str = "primary";

/// Discovers entrance groups and resolves each element's animation and delay.
///
/// Building a group applies the initial phase of every element it retains.
pub struct EntranceGroupBuilder<'a> {
    ctx: &'a RuntimeContext,
}

impl<'a> EntranceGroupBuilder<'a> {
    /// Builder reading settings and definitions from `ctx`.
    pub fn new(ctx: &'a RuntimeContext) -> Self {
        Self { ctx }
    }

    /// Build every group of the document in document order, dropping excluded ones.
    #[tracing::instrument(skip_all)]
    pub fn gather_all(
        &self,
        doc: &mut Document,
        engine: &mut dyn TweenEngine,
        viewport: &Viewport,
    ) -> EmberResult<Vec<EntranceGroup>> {
        let group_nodes = doc.query_all(doc.root(), &self.ctx.settings.selectors.group());
        let mut groups = Vec::with_capacity(group_nodes.len());
        for node in group_nodes {
            if let Some(group) = self.build_group(doc, engine, viewport, node)? {
                groups.push(group);
            }
        }
        tracing::debug!(groups = groups.len(), "gathered entrance groups");
        Ok(groups)
    }

    /// Build the group rooted at `group_node`.
    ///
    /// Returns `None` when the group's top edge is already above the viewport.
    pub fn build_group(
        &self,
        doc: &mut Document,
        engine: &mut dyn TweenEngine,
        viewport: &Viewport,
        group_node: NodeId,
    ) -> EmberResult<Option<EntranceGroup>> {
        if viewport.client_rect(doc, group_node).y0 < 0.0 {
            tracing::debug!(node = group_node.index(), "group above the viewport, excluded");
            return Ok(None);
        }

        let settings = &self.ctx.settings;
        let mut group = EntranceGroup {
            node: group_node,
            delay: 0,
            delay_between: settings.delay_between,
            elements: Vec::new(),
        };
        if let Some(raw) = doc.attr(group_node, ATTR_GROUP_DELAY).filter(|v| !v.is_empty()) {
            group.delay = read_int(ATTR_GROUP_DELAY, raw);
        }
        if let Some(raw) = doc
            .attr(group_node, ATTR_DELAY_BETWEEN)
            .filter(|v| !v.is_empty())
        {
            group.delay_between = read_int(ATTR_DELAY_BETWEEN, raw);
        }

        let group_sel = settings.selectors.group();
        let skip_sel = settings.selectors.skip();
        let nested_groups = doc.query_all(group_node, &group_sel);
        let skip_zones = doc.query_all(group_node, &skip_sel);
        let candidates = doc.query_all(group_node, &settings.selectors.element());

        let processor = AnimationPhaseProcessor::new(self.ctx);
        let mut index: i64 = 0;

        for node in candidates {
            if doc
                .closest(node, &group_sel)
                .is_some_and(|g| nested_groups.contains(&g))
            {
                continue;
            }
            if doc
                .closest(node, &skip_sel)
                .is_some_and(|s| skip_zones.contains(&s))
            {
                continue;
            }

            let anim = self.resolve_anim(doc, node);
            let delay = resolve_delay(doc, node, group.delay_between, &mut index)
                .saturating_add(group.delay);

            doc.add_class(node, &format!("{}{anim}", settings.selectors.category_prefix));

            let element = EntranceElement::new(node, anim, delay);
            processor.process(doc, engine, crate::ENTRANCE_ROLE, &element, Phase::Initial)?;
            group.elements.push(element);

            index += 1;
        }

        tracing::debug!(
            node = group_node.index(),
            elements = group.elements.len(),
            delay = group.delay,
            delay_between = group.delay_between,
            "built entrance group"
        );
        Ok(Some(group))
    }

    /// Animation name of an element: the explicit attribute, else its category class mapped
    /// through the default animations (unknown categories use the primary mapping).
    pub fn resolve_anim(&self, doc: &Document, node: NodeId) -> String {
        if let Some(anim) = doc.attr(node, ATTR_ANIM).filter(|v| !v.is_empty()) {
            return anim.to_string();
        }

        let settings = &self.ctx.settings;
        let prefix = settings.selectors.category_prefix.as_str();
        let category = doc
            .classes(node)
            .iter()
            .find_map(|c| c.strip_prefix(prefix))
            .unwrap_or(PRIMARY_CATEGORY);

        let defaults = &settings.default_animations;
        defaults
            .get(category)
            .filter(|a| !a.is_empty())
            .or_else(|| defaults.get(PRIMARY_CATEGORY))
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(category, "no default animation for category");
                String::new()
            })
    }
}

/// Delay of one element. The first present override wins: fixed, additive, index, reset.
fn resolve_delay(doc: &Document, node: NodeId, delay_between: i64, index: &mut i64) -> i64 {
    let base = delay_between.saturating_mul(*index);

    if let Some(raw) = doc.attr(node, ATTR_DELAY) {
        read_int(ATTR_DELAY, raw)
    } else if let Some(raw) = doc.attr(node, ATTR_DELAY_ADD) {
        base.saturating_add(read_int(ATTR_DELAY_ADD, raw))
    } else if let Some(raw) = doc.attr(node, ATTR_DELAY_INDEX) {
        delay_between.saturating_mul(read_int(ATTR_DELAY_INDEX, raw))
    } else if doc.has_attr(node, ATTR_DELAY_INDEX_RESET) {
        *index = 0;
        0
    } else {
        base
    }
}

fn read_int(attr: &str, raw: &str) -> i64 {
    parse_leading_int(raw).unwrap_or_else(|| {
        tracing::warn!(attr, value = raw, "attribute is not an integer, using 0");
        0
    })
}

#[cfg(test)]
#[path = "../../tests/unit/entrance/builder.rs"]
mod tests;
