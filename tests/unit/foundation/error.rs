use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EmberError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        EmberError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        EmberError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        EmberError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn registration_errors_convert_and_keep_detail() {
    let err: EmberError = RegistrationError::Duplicate {
        role: "entrance".to_string(),
        name: "fade".to_string(),
    }
    .into();
    let msg = err.to_string();
    assert!(msg.starts_with("registration error:"));
    assert!(msg.contains("'fade'"));
    assert!(msg.contains("'entrance'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EmberError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
