use super::*;
use crate::animation::value::StyleTemplate;

fn complete(name: &str) -> AnimationDefinition {
    AnimationDefinition::new(name)
        .initial(StyleTemplate::new().with("opacity", 0))
        .completed(StyleTemplate::new().with("opacity", 1))
}

#[test]
fn lookup_returns_the_registered_definition() {
    let mut reg = AnimationRegistry::default();
    assert!(reg.register("entrance", complete("fade")).is_empty());

    let a = reg.lookup("entrance", "fade").unwrap();
    let b = reg.lookup("entrance", "fade").unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(a.role.as_deref(), Some("entrance"));
    assert_eq!(reg.names("entrance"), vec!["fade"]);
}

#[test]
fn duplicates_are_reported_and_first_definition_is_kept() {
    let mut reg = AnimationRegistry::default();
    reg.register("entrance", complete("fade").default_option("marker", "first"));
    let first = reg.lookup("entrance", "fade").unwrap();

    let issues = reg.register(
        "entrance",
        complete("fade").default_option("marker", "second"),
    );
    assert_eq!(
        issues,
        vec![RegistrationError::Duplicate {
            role: "entrance".to_string(),
            name: "fade".to_string()
        }]
    );

    let kept = reg.lookup("entrance", "fade").unwrap();
    assert!(Arc::ptr_eq(&first, &kept));
}

#[test]
fn unknown_role_is_reported_and_ignored() {
    let mut reg = AnimationRegistry::default();
    let issues = reg.register("exit", complete("fade"));
    assert_eq!(issues, vec![RegistrationError::UnknownRole("exit".to_string())]);
    assert!(reg.lookup("exit", "fade").is_none());

    reg.add_role("exit");
    assert!(reg.register("exit", complete("fade")).is_empty());
    assert!(reg.lookup("exit", "fade").is_some());
}

#[test]
fn missing_name_is_not_stored() {
    let mut reg = AnimationRegistry::default();
    let issues = reg.register("entrance", complete(""));
    assert_eq!(issues, vec![RegistrationError::MissingName]);
    assert!(reg.names("entrance").is_empty());
}

#[test]
fn missing_phase_states_are_reported_but_stored() {
    let mut reg = AnimationRegistry::default();
    let issues = reg.register("entrance", AnimationDefinition::new("broken"));
    assert_eq!(
        issues,
        vec![
            RegistrationError::MissingInitial("broken".to_string()),
            RegistrationError::MissingCompleted("broken".to_string()),
        ]
    );
    assert!(reg.lookup("entrance", "broken").is_some());
}

#[test]
fn lookup_miss_is_none() {
    let reg = AnimationRegistry::default();
    assert!(reg.lookup("entrance", "nope").is_none());
    assert!(reg.lookup("nope", "nope").is_none());
    assert!(reg.names("nope").is_empty());
}
