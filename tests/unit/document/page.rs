use super::*;
use crate::document::selector::Selector;

const PAGE: &str = r#"
{
  "viewport": { "width": 1280, "height": 800 },
  "root": {
    "tag": "body",
    "children": [
      {
        "classes": ["ember-entrance-group"],
        "attrs": { "data-entrance-delay-between": "200" },
        "rect": [0, 900, 1280, 400],
        "children": [
          { "tag": "h2", "classes": ["ember-entrance"], "text": "Title", "rect": [0, 900, 600, 60] },
          { "tag": "p", "classes": ["ember-entrance--secondary"], "text": "Body" }
        ]
      }
    ]
  },
  "scroll": [ { "at_ms": 2000, "y": 900 }, { "at_ms": 500, "y": 300 } ]
}
"#;

#[test]
fn page_json_builds_expected_tree() {
    let page = Page::from_reader(PAGE.as_bytes()).unwrap();
    let doc = page.build_document().unwrap();

    let groups = doc.query_all(doc.root(), &Selector::parse(".ember-entrance-group").unwrap());
    assert_eq!(groups.len(), 1);
    let g = groups[0];
    assert_eq!(doc.tag(g), Some("div"));
    assert_eq!(doc.attr(g, "data-entrance-delay-between"), Some("200"));
    assert_eq!(doc.rect(g).y0, 900.0);
    assert_eq!(doc.rect(g).height(), 400.0);

    let h2 = doc.children(g)[0];
    assert_eq!(doc.tag(h2), Some("h2"));
    assert_eq!(doc.inner_text(g), "TitleBody");
}

#[test]
fn scroll_steps_are_sorted() {
    let page = Page::from_reader(PAGE.as_bytes()).unwrap();
    let steps = page.scroll_steps();
    assert_eq!(steps[0].at_ms, 500);
    assert_eq!(steps[1].y, 900.0);
}

#[test]
fn malformed_pages_are_rejected() {
    assert!(matches!(
        Page::from_reader("{".as_bytes()),
        Err(EmberError::Serde(_))
    ));

    let bad = r#"{ "viewport": { "width": 1, "height": 1 },
                   "root": { "rect": [0, 0, -1, 5] } }"#;
    let page = Page::from_reader(bad.as_bytes()).unwrap();
    assert!(page.build_document().is_err());
}
