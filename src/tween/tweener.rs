use crate::{
    animation::ease::Ease,
    animation::value::{OptionValue, StyleState},
    document::node::{Document, NodeId},
    tween::engine::{TweenEngine, TweenId, TweenVars},
    tween::interp::Lerp,
};

#[derive(Clone, Debug)]
struct PropTween {
    key: String,
    from: Option<OptionValue>,
    to: OptionValue,
}

#[derive(Clone, Debug)]
struct Track {
    node: NodeId,
    offset_ms: f64,
    props: Vec<PropTween>,
}

#[derive(Clone, Debug)]
struct ActiveTween {
    id: TweenId,
    tracks: Vec<Track>,
    duration_ms: f64,
    ease: Ease,
    elapsed_ms: f64,
}

impl ActiveTween {
    fn total_ms(&self) -> f64 {
        self.tracks
            .last()
            .map(|t| t.offset_ms)
            .unwrap_or(0.0)
            + self.duration_ms
    }

    fn render(&self, doc: &mut Document) {
        for track in &self.tracks {
            let local = self.elapsed_ms - track.offset_ms;
            if local < 0.0 {
                continue;
            }
            let raw = if self.duration_ms <= 0.0 {
                1.0
            } else {
                (local / self.duration_ms).min(1.0)
            };
            let t = if raw >= 1.0 { 1.0 } else { self.ease.apply(raw) };

            for p in &track.props {
                let value = match &p.from {
                    Some(from) => OptionValue::lerp(from, &p.to, t),
                    None => p.to.clone(),
                };
                doc.set_style(track.node, &p.key, value);
            }
        }
    }
}

/// Built-in frame-stepped tween engine.
///
/// Start values are captured from the nodes' inline style when the tween is created;
/// properties without a start value jump straight to their target.
#[derive(Debug, Default)]
pub struct Tweener {
    next_id: u64,
    active: Vec<ActiveTween>,
}

impl Tweener {
    /// Engine with no running tweens.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of running tweens.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl TweenEngine for Tweener {
    fn set(&mut self, doc: &mut Document, nodes: &[NodeId], state: &StyleState) {
        for node in nodes {
            doc.apply_style(*node, state);
        }
    }

    fn to(
        &mut self,
        doc: &Document,
        nodes: &[NodeId],
        state: StyleState,
        vars: TweenVars,
    ) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;

        let stagger_ms = vars.stagger_s * 1000.0;
        let tracks = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| Track {
                node: *node,
                offset_ms: stagger_ms * i as f64,
                props: state
                    .iter()
                    .map(|(k, v)| PropTween {
                        key: k.clone(),
                        from: doc.style(*node).and_then(|s| s.get(k)).cloned(),
                        to: v.clone(),
                    })
                    .collect(),
            })
            .collect();

        self.active.push(ActiveTween {
            id,
            tracks,
            duration_ms: vars.duration_s * 1000.0,
            ease: vars.ease,
            elapsed_ms: 0.0,
        });
        id
    }

    fn tick(&mut self, doc: &mut Document, dt_ms: f64) -> Vec<TweenId> {
        let mut finished = Vec::new();
        for tween in &mut self.active {
            tween.elapsed_ms += dt_ms.max(0.0);
            tween.render(doc);
            if tween.elapsed_ms >= tween.total_ms() {
                finished.push(tween.id);
            }
        }
        self.active.retain(|t| !finished.contains(&t.id));
        finished
    }

    fn is_active(&self) -> bool {
        !self.active.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tween/tweener.rs"]
mod tests;
