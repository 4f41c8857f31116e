use crate::color::{palette, Color};

#[test]
fn palette_constants() {
    assert_eq!(palette::BLACK, Color::new(0, 0, 0, 255));
    assert_eq!(palette::WHITE, Color::splat(255));
    assert_eq!(palette::CORNFLOWER_BLUE, Color::rgb(100, 149, 237));
    assert_eq!(palette::TRANSPARENT.a, 0);
}

#[test]
fn palette_lookup_ignores_case() {
    assert_eq!(palette::by_name("Tomato"), Some(palette::TOMATO));
    assert_eq!(palette::by_name("tomato"), Some(palette::TOMATO));
    assert_eq!(palette::by_name("LIGHTSLATEGRAY"), Some(palette::LIGHT_SLATE_GRAY));
    assert_eq!(palette::by_name("transparent"), Some(palette::TRANSPARENT));
}

#[test]
fn palette_lookup_unknown() {
    assert_eq!(palette::by_name(""), None);
    assert_eq!(palette::by_name("Light Slate Gray"), None);
    assert_eq!(palette::by_name("Blurple"), None);
}
