use super::*;

fn classes(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_supports_class_tag_and_lists() {
    assert_eq!(
        Selector::parse(".ember-entrance-group").unwrap(),
        Selector::Class("ember-entrance-group".to_string())
    );
    assert_eq!(
        Selector::parse("span.w").unwrap(),
        Selector::TagClass {
            tag: "span".to_string(),
            class: "w".to_string()
        }
    );
    assert_eq!(
        Selector::parse("P").unwrap(),
        Selector::Tag("p".to_string())
    );
    assert!(matches!(
        Selector::parse(".a, .b").unwrap(),
        Selector::AnyOf(v) if v.len() == 2
    ));
}

#[test]
fn parse_rejects_unsupported_forms() {
    assert!(Selector::parse("").is_err());
    assert!(Selector::parse(".a,,.b").is_err());
    assert!(Selector::parse("div span").is_err());
    assert!(Selector::parse(".a.b").is_err());
    assert!(Selector::parse("span.").is_err());
}

#[test]
fn matching_rules() {
    let c = classes(&["card", "ember-entrance--secondary"]);
    assert!(Selector::Class("card".to_string()).matches("div", &c));
    assert!(!Selector::Class("ember-entrance".to_string()).matches("div", &c));
    assert!(Selector::ClassPrefix("ember-entrance--".to_string()).matches("div", &c));
    assert!(Selector::parse("DIV.card").unwrap().matches("div", &c));
    assert!(!Selector::parse("span.card").unwrap().matches("div", &c));
    assert!(
        Selector::parse(".nope, .card")
            .unwrap()
            .matches("section", &c)
    );
}
