use plotkit::core::Color;

#[test]
fn parses_six_digit_hex() {
    let color = Color::parse("#4e9ade").expect("color");
    assert_eq!(color, Color::from_rgb(0x4e, 0x9a, 0xde));
}

#[test]
fn parses_eight_digit_hex_with_alpha_suffix() {
    let color = Color::parse("#ff000080").expect("color");
    assert_eq!(color, Color::from_argb(0x80, 0xff, 0x00, 0x00));
}

#[test]
fn parses_three_digit_shorthand() {
    let color = Color::parse("#fa0").expect("color");
    assert_eq!(color, Color::from_rgb(0xff, 0xaa, 0x00));
}

#[test]
fn parses_component_lists() {
    assert_eq!(
        Color::parse("10, 20, 30").expect("rgb"),
        Color::from_rgb(10, 20, 30)
    );
    assert_eq!(
        Color::parse("10,20,30,40").expect("rgba"),
        Color::from_argb(40, 10, 20, 30)
    );
}

#[test]
fn rejects_malformed_input() {
    assert!(Color::parse("#12345").is_err());
    assert!(Color::parse("#xyzxyz").is_err());
    assert!(Color::parse("1,2").is_err());
    assert!(Color::parse("1,2,3,4,5").is_err());
    assert!(Color::parse("300,0,0").is_err());
}

#[test]
fn sentinels_are_distinct_and_invisible() {
    assert!(Color::UNDEFINED.is_undefined());
    assert!(Color::AUTOMATIC.is_automatic());
    assert!(!Color::AUTOMATIC.is_undefined());
    assert!(!Color::UNDEFINED.is_visible());
}

#[test]
fn automatic_resolves_to_context_default() {
    let default = Color::from_rgb(1, 2, 3);
    assert_eq!(Color::AUTOMATIC.get_actual(default), default);
    assert_eq!(Color::BLACK.get_actual(default), Color::BLACK);
}

#[test]
fn interpolation_is_clamped_and_linear() {
    let a = Color::from_rgb(0, 0, 0);
    let b = Color::from_rgb(200, 100, 50);
    assert_eq!(a.interpolate(b, 0.5), Color::from_rgb(100, 50, 25));
    assert_eq!(a.interpolate(b, -1.0), a);
    assert_eq!(a.interpolate(b, 2.0), b);
}
