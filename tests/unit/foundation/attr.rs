use super::*;

#[test]
fn leading_int_matches_markup_expectations() {
    assert_eq!(parse_leading_int("150"), Some(150));
    assert_eq!(parse_leading_int("  42"), Some(42));
    assert_eq!(parse_leading_int("-30"), Some(-30));
    assert_eq!(parse_leading_int("+7"), Some(7));
    assert_eq!(parse_leading_int("250ms"), Some(250));
    assert_eq!(parse_leading_int("1.9"), Some(1));
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("abc"), None);
    assert_eq!(parse_leading_int("-"), None);
}

#[test]
fn dataset_keys_are_camel_cased() {
    assert_eq!(
        dataset_key("data-entrance-delay-between").as_deref(),
        Some("entranceDelayBetween")
    );
    assert_eq!(
        dataset_key("data-entrance-anim-duration").as_deref(),
        Some("entranceAnimDuration")
    );
    assert_eq!(dataset_key("data-x").as_deref(), Some("x"));
    assert_eq!(dataset_key("data-a-1").as_deref(), Some("a-1"));
    assert_eq!(dataset_key("class"), None);
}

#[test]
fn lower_first_only_touches_first_char() {
    assert_eq!(lower_first("Duration"), "duration");
    assert_eq!(lower_first("OffsetX"), "offsetX");
    assert_eq!(lower_first(""), "");
}
