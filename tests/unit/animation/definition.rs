use super::*;
use crate::animation::value::StyleKey;

fn ctx_fixture() -> (Document, EntranceElement, AnimationOptions) {
    let mut doc = Document::new("body");
    let p = doc.create_element("p");
    doc.append_child(doc.root(), p).unwrap();
    let mut options = AnimationOptions::new();
    options.set("direction", "left");
    (doc, EntranceElement::new(p, "x", 0), options)
}

#[test]
fn builder_sets_phases_and_hooks() {
    let def = AnimationDefinition::new("fade")
        .default_option("direction", "top")
        .initial(StyleTemplate::new().with("opacity", 0))
        .completed(StyleTemplate::new().with("opacity", 1))
        .on_complete(|_, _, _| Ok(()));

    assert_eq!(def.name, "fade");
    assert!(def.role.is_none());
    assert!(def.initial.is_some());
    assert!(def.completed.is_some());
    assert!(def.always.is_none());
    assert!(def.hooks.on_complete.is_some());
    assert!(def.hooks.on_setup.is_none());
    assert_eq!(
        def.default_options.get("direction"),
        Some(&OptionValue::from("top"))
    );
}

#[test]
fn computed_states_see_options_and_element() {
    let (doc, element, options) = ctx_fixture();
    let src: StateSource<StyleTemplate> = StateSource::Computed(Arc::new(
        |ctx: &HookCtx<'_>| -> EmberResult<StyleTemplate> {
            let dir = ctx.options.get_str("direction").unwrap_or("top").to_string();
            Ok(StyleTemplate::new().with(&dir, ctx.element.node.index() as i32))
        },
    ));
    let ctx = HookCtx {
        doc: &doc,
        element: &element,
        options: &options,
    };
    let out = src.evaluate(&ctx).unwrap();
    assert!(out.0.contains_key(&StyleKey::Literal("left".to_string())));
}

#[test]
fn computed_state_errors_propagate() {
    let (doc, element, options) = ctx_fixture();
    let src: StateSource<StyleTemplate> = StateSource::Computed(Arc::new(
        |_: &HookCtx<'_>| -> EmberResult<StyleTemplate> { Err(EmberError::animation("boom")) },
    ));
    let ctx = HookCtx {
        doc: &doc,
        element: &element,
        options: &options,
    };
    assert!(src.evaluate(&ctx).is_err());
}

#[test]
fn debug_output_hides_closures() {
    let def = AnimationDefinition::new("x").initial_with(|_| Ok(StyleTemplate::new()));
    let s = format!("{def:?}");
    assert!(s.contains("Computed(..)"));
    assert!(s.contains("on_setup: false"));
}

#[test]
fn packs_load_static_definitions() {
    let json = r#"[
        {
            "name": "pop",
            "defaultOptions": { "scale": 0.8 },
            "initial": { "opacity": 0, "scale": "{scale}" },
            "completed": { "opacity": 1, "scale": 1 },
            "always": { "position": null }
        },
        { "initial": { "opacity": 0 } }
    ]"#;
    let defs = read_animation_pack(json.as_bytes()).unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].name, "pop");
    assert!(defs[0].always.is_some());
    assert_eq!(defs[1].name, "");
    assert!(defs[1].completed.is_none());
}

#[test]
fn packs_reject_unknown_fields() {
    let json = r#"[ { "name": "pop", "onSetup": "nope" } ]"#;
    assert!(matches!(
        read_animation_pack(json.as_bytes()),
        Err(EmberError::Serde(_))
    ));
}
