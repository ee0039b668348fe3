use crate::{
    animation::definition::{AnimationDefinition, HookCtx},
    animation::value::{AnimationOptions, StyleOverlay, StyleTemplate},
    document::node::{Document, NodeId},
    document::selector::Selector,
    entrance::element::EntranceElement,
    foundation::error::EmberResult,
};

const DIRECTIONS: [&str; 4] = ["top", "right", "bottom", "left"];

/// Class of the word wrappers created when splitting text.
pub const WORD_CLASS: &str = "w";
/// Class of the letter wrappers created when splitting text.
pub const LETTER_CLASS: &str = "l";

/// Every bundled entrance animation.
pub fn builtin_animations() -> Vec<AnimationDefinition> {
    vec![
        fade(),
        fade_motion(),
        roll(),
        fade_words(),
        fade_letters(),
        slide_words(),
    ]
}

/// Plain opacity fade.
pub fn fade() -> AnimationDefinition {
    AnimationDefinition::new("fade")
        .initial(StyleTemplate::new().with("opacity", 0))
        .completed(StyleTemplate::new().with("opacity", 1))
}

/// Fade while moving in from `direction` by `offset` pixels.
pub fn fade_motion() -> AnimationDefinition {
    directional_fade("fade-motion").default_option("direction", "top")
}

/// Clip-path reveal starting from `direction`.
pub fn roll() -> AnimationDefinition {
    AnimationDefinition::new("roll")
        .default_option("direction", "top")
        .initial_with(|ctx| {
            let inset = match direction(ctx.options) {
                "left" => "inset(0% 0% 0% 100%)",
                "right" => "inset(0% 100% 0% 0%)",
                "top" => "inset(100% 0% 0% 0%)",
                "bottom" => "inset(0% 0% 100% 0%)",
                _ => return Ok(StyleTemplate::new()),
            };
            Ok(StyleTemplate::new().with("clipPath", inset))
        })
        .completed(StyleTemplate::new().with("clipPath", "inset(0% 0% 0% 0%)"))
}

/// [`fade_motion`] applied word by word.
pub fn fade_words() -> AnimationDefinition {
    directional_fade("fade-words")
        .default_option("direction", "top")
        .default_option("stagger", 0.05)
        .default_option("offset", 100)
        .on_setup(|doc, element, _| split_text(doc, element.node, false))
        .on_get_nodes(|ctx| Ok(wrappers(ctx, WORD_CLASS)))
        .on_complete(|doc, element, _| restore_text(doc, element))
}

/// [`fade_motion`] applied letter by letter.
pub fn fade_letters() -> AnimationDefinition {
    directional_fade("fade-letters")
        .default_option("direction", "top")
        .on_setup(|doc, element, _| split_text(doc, element.node, true))
        .on_get_nodes(|ctx| Ok(wrappers(ctx, LETTER_CLASS)))
        .on_complete(|doc, element, _| restore_text(doc, element))
}

/// Words slide out from behind a clip sized to the element.
pub fn slide_words() -> AnimationDefinition {
    AnimationDefinition::new("slide-words")
        .default_option("direction", "top")
        .default_option("stagger", 0.05)
        .default_option("offset", 150)
        .always(StyleOverlay::new().with("position", "relative"))
        .initial_with(|ctx| {
            // Clip and offset must match, so both come from the measured box.
            let rect = ctx.doc.rect(ctx.element.node);
            let (width, height) = (rect.width(), rect.height());
            let (clip, offset) = match direction(ctx.options) {
                "left" => (format!("inset(0px {width}px 0px 0px)"), width),
                "right" => (format!("inset(0px 0px 0px {width}px)"), width),
                "top" => (format!("inset(0px 0px {height}px 0px)"), height),
                "bottom" => (format!("inset({height}px 0px 0px 0px)"), height),
                _ => return Ok(StyleTemplate::new()),
            };
            Ok(StyleTemplate::new()
                .with("clipPath", clip)
                .with("{direction}", offset))
        })
        .completed(
            StyleTemplate::new()
                .with("clipPath", "inset(0px 0px 0px 0px)")
                .with("{direction}", 0),
        )
        .on_setup(|doc, element, _| split_text(doc, element.node, false))
        .on_get_nodes(|ctx| Ok(wrappers(ctx, WORD_CLASS)))
        .on_complete(|doc, element, _| restore_text(doc, element))
}

fn directional_fade(name: &str) -> AnimationDefinition {
    AnimationDefinition::new(name)
        .always_with(|ctx| {
            Ok(if DIRECTIONS.contains(&direction(ctx.options)) {
                StyleOverlay::new().with("position", "relative")
            } else {
                StyleOverlay::new().without("position")
            })
        })
        .initial(
            StyleTemplate::new()
                .with("opacity", 0)
                .with("{direction}", "{offset}"),
        )
        .completed(
            StyleTemplate::new()
                .with("opacity", 1)
                .with("{direction}", 0),
        )
}

fn direction(options: &AnimationOptions) -> &str {
    options.get_str("direction").unwrap_or_default()
}

/// Replace the text of `node` with `span.w` word wrappers separated by spaces, each
/// holding either the word or one `span.l` per letter.
pub fn split_text(doc: &mut Document, node: NodeId, letters: bool) -> EmberResult<()> {
    let text = doc.inner_text(node);
    doc.remove_children(node);

    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            let space = doc.create_text(" ");
            doc.append_child(node, space)?;
        }
        let w = span(doc, node, WORD_CLASS)?;
        if letters {
            for ch in word.chars() {
                let l = span(doc, w, LETTER_CLASS)?;
                let t = doc.create_text(ch.to_string());
                doc.append_child(l, t)?;
            }
        } else if !word.is_empty() {
            let t = doc.create_text(word);
            doc.append_child(w, t)?;
        }
    }
    Ok(())
}

fn span(doc: &mut Document, parent: NodeId, class: &str) -> EmberResult<NodeId> {
    let s = doc.create_element("span");
    doc.add_class(s, class);
    doc.append_child(parent, s)?;
    Ok(s)
}

fn wrappers(ctx: &HookCtx<'_>, class: &str) -> Vec<NodeId> {
    let sel = Selector::TagClass {
        tag: "span".to_string(),
        class: class.to_string(),
    };
    ctx.doc.query_all(ctx.element.node, &sel)
}

fn restore_text(doc: &mut Document, element: &EntranceElement) -> EmberResult<()> {
    let text = doc.inner_text(element.node);
    doc.set_inner_text(element.node, &text)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/library.rs"]
mod tests;
