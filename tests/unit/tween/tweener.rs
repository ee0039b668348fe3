use super::*;
use crate::animation::ease::Ease;

fn doc_with(n: usize) -> (Document, Vec<NodeId>) {
    let mut doc = Document::new("body");
    let nodes = (0..n)
        .map(|_| {
            let p = doc.create_element("p");
            doc.append_child(doc.root(), p).unwrap();
            p
        })
        .collect();
    (doc, nodes)
}

fn state(pairs: &[(&str, OptionValue)]) -> StyleState {
    let mut s = StyleState::new();
    for (k, v) in pairs {
        s.insert(*k, v.clone());
    }
    s
}

fn linear(duration_s: f64, stagger_s: f64) -> TweenVars {
    TweenVars {
        duration_s,
        ease: Ease::Linear,
        stagger_s,
    }
}

fn opacity(doc: &Document, node: NodeId) -> Option<f64> {
    doc.style(node)
        .and_then(|s| s.get("opacity"))
        .and_then(OptionValue::as_f64)
}

#[test]
fn set_applies_immediately() {
    let (mut doc, nodes) = doc_with(2);
    let mut tw = Tweener::new();
    tw.set(&mut doc, &nodes, &state(&[("opacity", OptionValue::Number(0.0))]));

    assert_eq!(opacity(&doc, nodes[0]), Some(0.0));
    assert_eq!(opacity(&doc, nodes[1]), Some(0.0));
    assert!(!tw.is_active());
}

#[test]
fn to_interpolates_from_captured_values() {
    let (mut doc, nodes) = doc_with(1);
    let mut tw = Tweener::new();
    tw.set(&mut doc, &nodes, &state(&[("opacity", OptionValue::Number(0.0))]));

    let id = tw.to(
        &doc,
        &nodes,
        state(&[("opacity", OptionValue::Number(1.0))]),
        linear(1.0, 0.0),
    );
    assert!(tw.is_active());

    assert!(tw.tick(&mut doc, 250.0).is_empty());
    assert_eq!(opacity(&doc, nodes[0]), Some(0.25));

    assert_eq!(tw.tick(&mut doc, 750.0), vec![id]);
    assert_eq!(opacity(&doc, nodes[0]), Some(1.0));
    assert!(!tw.is_active());

    // reported once only
    assert!(tw.tick(&mut doc, 1000.0).is_empty());
}

#[test]
fn missing_start_value_jumps_to_target() {
    let (mut doc, nodes) = doc_with(1);
    let mut tw = Tweener::new();
    tw.to(
        &doc,
        &nodes,
        state(&[("left", OptionValue::Number(0.0))]),
        linear(1.0, 0.0),
    );
    tw.tick(&mut doc, 10.0);
    assert_eq!(
        doc.style(nodes[0]).and_then(|s| s.get("left")),
        Some(&OptionValue::Number(0.0))
    );
}

#[test]
fn stagger_delays_later_nodes_and_extends_the_tween() {
    let (mut doc, nodes) = doc_with(3);
    let mut tw = Tweener::new();
    tw.set(&mut doc, &nodes, &state(&[("opacity", OptionValue::Number(0.0))]));
    let id = tw.to(
        &doc,
        &nodes,
        state(&[("opacity", OptionValue::Number(1.0))]),
        linear(0.1, 0.1),
    );

    assert!(tw.tick(&mut doc, 150.0).is_empty());
    assert_eq!(opacity(&doc, nodes[0]), Some(1.0));
    assert_eq!(opacity(&doc, nodes[1]), Some(0.5));
    assert_eq!(opacity(&doc, nodes[2]), Some(0.0));

    assert_eq!(tw.tick(&mut doc, 150.0), vec![id]);
    assert_eq!(opacity(&doc, nodes[2]), Some(1.0));
}

#[test]
fn zero_duration_completes_on_next_tick() {
    let (mut doc, nodes) = doc_with(1);
    let mut tw = Tweener::new();
    let id = tw.to(
        &doc,
        &nodes,
        state(&[("opacity", OptionValue::Number(1.0))]),
        linear(0.0, 0.0),
    );
    assert_eq!(tw.tick(&mut doc, 0.0), vec![id]);
    assert_eq!(opacity(&doc, nodes[0]), Some(1.0));
}

#[test]
fn ids_are_distinct_and_finish_independently() {
    let (mut doc, nodes) = doc_with(2);
    let mut tw = Tweener::new();
    let a = tw.to(
        &doc,
        &nodes[..1],
        state(&[("opacity", OptionValue::Number(1.0))]),
        linear(0.1, 0.0),
    );
    let b = tw.to(
        &doc,
        &nodes[1..],
        state(&[("opacity", OptionValue::Number(1.0))]),
        linear(0.3, 0.0),
    );
    assert_ne!(a, b);
    assert_eq!(tw.active_count(), 2);
    assert_eq!(tw.tick(&mut doc, 100.0), vec![a]);
    assert_eq!(tw.tick(&mut doc, 200.0), vec![b]);
}
