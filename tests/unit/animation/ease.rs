use super::*;

const ALL: [Ease; 19] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::InQuint,
    Ease::OutQuint,
    Ease::InOutQuint,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::InExpo,
    Ease::OutExpo,
    Ease::InOutExpo,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn in_out_variants_are_symmetric_at_midpoint() {
    for ease in [
        Ease::InOutQuad,
        Ease::InOutCubic,
        Ease::InOutQuart,
        Ease::InOutQuint,
        Ease::InOutSine,
        Ease::InOutExpo,
    ] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn gsap_names_parse() {
    assert_eq!(Ease::parse("power2.out").unwrap(), Ease::OutCubic);
    assert_eq!(Ease::parse("power1.inOut").unwrap(), Ease::InOutQuad);
    assert_eq!(Ease::parse("power3.in").unwrap(), Ease::InQuart);
    assert_eq!(Ease::parse("power4").unwrap(), Ease::OutQuint);
    assert_eq!(Ease::parse("sine.inOut").unwrap(), Ease::InOutSine);
    assert_eq!(Ease::parse("expo.in").unwrap(), Ease::InExpo);
    assert_eq!(Ease::parse("none").unwrap(), Ease::Linear);
    assert_eq!(Ease::parse(" linear ").unwrap(), Ease::Linear);
}

#[test]
fn unknown_names_are_rejected() {
    assert!(Ease::parse("bounce.out").is_err());
    assert!(Ease::parse("power2.sideways").is_err());
}
