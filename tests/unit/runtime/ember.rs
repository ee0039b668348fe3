use kurbo::Rect;

use super::*;
use crate::animation::value::OptionValue;

fn page(group_tops: &[f64]) -> (Document, Vec<Vec<crate::document::node::NodeId>>) {
    let mut doc = Document::new("body");
    let mut all = Vec::new();
    for top in group_tops {
        let g = doc.create_element("section");
        doc.add_class(g, "ember-entrance-group");
        doc.set_rect(g, Rect::new(0.0, *top, 1000.0, top + 300.0));
        doc.append_child(doc.root(), g).unwrap();
        let mut nodes = Vec::new();
        for _ in 0..2 {
            let p = doc.create_element("p");
            doc.add_class(p, "ember-entrance");
            doc.append_child(g, p).unwrap();
            nodes.push(p);
        }
        all.push(nodes);
    }
    (doc, all)
}

fn opacity(ember: &Ember, node: crate::document::node::NodeId) -> Option<f64> {
    ember
        .document()
        .style(node)
        .and_then(|s| s.get("opacity"))
        .and_then(OptionValue::as_f64)
}

#[test]
fn observation_waits_for_settle_delay() {
    let (doc, nodes) = page(&[0.0]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    assert!(ember.register_builtin_animations().is_empty());
    ember.init().unwrap();

    assert_eq!(opacity(&ember, nodes[0][0]), Some(0.0));
    assert!(!ember.is_observing());

    ember.advance(299).unwrap();
    assert!(!ember.is_observing());
    ember.advance(1).unwrap();
    assert!(ember.is_observing());
    assert!(ember.group_fired(0));
    assert!(ember.document().has_class(nodes[0][0], "ember-entrance--started"));
}

#[test]
fn elements_start_after_delay_plus_pad() {
    let (doc, nodes) = page(&[0.0]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    ember.register_builtin_animations();
    ember.init().unwrap();

    // observing at 300; first tween starts at 400, second at 550
    ember.advance(400).unwrap();
    ember.advance(100).unwrap();
    let first = opacity(&ember, nodes[0][0]).unwrap();
    assert!(first > 0.0 && first < 1.0);
    assert_eq!(opacity(&ember, nodes[0][1]), Some(0.0));

    let elapsed = ember.run_until_idle(16, 10_000).unwrap();
    assert!(elapsed < 10_000);
    assert!(ember.is_idle());
    assert_eq!(ember.completed_elements(), 2);
    for node in &nodes[0] {
        assert_eq!(opacity(&ember, *node), Some(1.0));
        assert!(ember.document().has_class(*node, "ember-entrance--completed"));
        assert!(!ember.document().has_class(*node, "ember-entrance--started"));
    }
}

#[test]
fn below_fold_group_waits_for_scroll() {
    let (doc, nodes) = page(&[0.0, 2000.0]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    ember.register_builtin_animations();
    ember.init().unwrap();
    ember.run_until_idle(16, 5_000).unwrap();

    assert!(ember.group_fired(0));
    assert!(!ember.group_fired(1));
    assert_eq!(opacity(&ember, nodes[1][0]), Some(0.0));

    ember.scroll_to(1500.0).unwrap();
    assert!(ember.group_fired(1));
    ember.run_until_idle(16, 5_000).unwrap();
    assert_eq!(opacity(&ember, nodes[1][1]), Some(1.0));
    assert_eq!(ember.completed_elements(), 4);

    // scrolling back and forth never completes a group twice
    ember.scroll_to(0.0).unwrap();
    ember.scroll_to(1500.0).unwrap();
    assert!(ember.is_idle());
    assert_eq!(ember.completed_elements(), 4);
}

#[test]
fn init_twice_is_rejected() {
    let (doc, _) = page(&[0.0]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    ember.init().unwrap();
    assert!(matches!(ember.init(), Err(EmberError::Validation(_))));
}

#[test]
fn set_defaults_changes_timing() {
    let (doc, _) = page(&[0.0]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    ember.register_builtin_animations();
    ember.set_defaults(SettingsPatch {
        delay_between: Some(0),
        ..SettingsPatch::default()
    });
    ember.init().unwrap();
    let delays: Vec<_> = ember.groups()[0].elements.iter().map(|e| e.delay).collect();
    assert_eq!(delays, vec![0, 0]);
    assert_eq!(ember.settings().delay_between, 0);
}

fn flagged_page(anims: &[&str]) -> (Document, Vec<crate::document::node::NodeId>) {
    let (mut doc, nodes) = page(&[0.0]);
    for (node, anim) in nodes[0].iter().zip(anims) {
        doc.set_attr(*node, "data-entrance-anim", *anim);
        doc.set_attr(*node, "data-entrance-delay", "0");
    }
    (doc, nodes.into_iter().flatten().collect())
}

fn opacity_fade(name: &str) -> AnimationDefinition {
    use crate::animation::value::StyleTemplate;
    AnimationDefinition::new(name)
        .initial(StyleTemplate::new().with("opacity", 0))
        .completed(StyleTemplate::new().with("opacity", 1))
}

#[test]
fn failing_completion_hook_does_not_strand_other_tweens() {
    let (doc, nodes) = flagged_page(&["boom", "ok"]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    let issues = ember.register_animations(
        crate::ENTRANCE_ROLE,
        [
            opacity_fade("boom")
                .on_complete(|_, _, _| Err(EmberError::animation("completion failed"))),
            opacity_fade("ok"),
        ],
    );
    assert!(issues.is_empty());
    ember.init().unwrap();

    assert!(matches!(
        ember.run_until_idle(16, 5_000),
        Err(EmberError::Animation(_))
    ));
    assert!(ember.is_idle());
    assert_eq!(ember.completed_elements(), 1);
    assert!(ember.document().has_class(nodes[1], "ember-entrance--completed"));
    assert!(!ember.document().has_class(nodes[1], "ember-entrance--started"));

    assert_eq!(ember.run_until_idle(16, 5_000).unwrap(), 0);
}

#[test]
fn failed_init_can_be_retried() {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    let (doc, _) = flagged_page(&["flaky", "flaky"]);
    let mut ember = Ember::new(doc, Viewport::new(1000.0, 800.0));
    let failed_once = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&failed_once);
    ember.register_animations(
        crate::ENTRANCE_ROLE,
        [opacity_fade("flaky").on_setup(move |_, _, _| {
            if flag.swap(true, Ordering::SeqCst) {
                Ok(())
            } else {
                Err(EmberError::animation("setup failed"))
            }
        })],
    );

    assert!(ember.init().is_err());
    assert!(ember.groups().is_empty());
    ember.init().unwrap();
    assert_eq!(ember.groups()[0].elements.len(), 2);
    assert!(matches!(ember.init(), Err(EmberError::Validation(_))));
}
