use taglog::fmt::{Color, Palette, STANDARD_COLORS};

#[test]
fn standard_palette_has_sixteen_letters() {
    let palette = Palette::standard();
    assert_eq!(palette.len(), 16);
    for (letter, code) in STANDARD_COLORS {
        assert_eq!(palette.get(letter), Some(code));
    }
}

#[test]
fn standard_letters_are_lowercase_and_unique() {
    let letters = Palette::standard().letters();
    assert_eq!(letters.len(), 16);
    assert!(letters.iter().all(char::is_ascii_lowercase));
    assert!(letters.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn unknown_letter_has_no_code() {
    assert_eq!(Palette::standard().get('q'), None);
    assert!(!Palette::standard().contains('q'));
}

#[test]
fn with_color_adds_truecolor_letter() {
    let palette = Palette::standard()
        .clone()
        .with_color('q', Color::new(1, 2, 3));
    assert_eq!(palette.get('q'), Some("\x1b[38;2;1;2;3m"));
    assert_eq!(palette.len(), 17);
}

#[test]
fn with_escape_replaces_existing_letter() {
    let palette = Palette::standard().clone().with_escape('r', "\x1b[1;31m");
    assert_eq!(palette.get('r'), Some("\x1b[1;31m"));
    assert_eq!(palette.len(), 16);
    assert_eq!(Palette::standard().get('r'), Some("\x1b[31m"));
}

#[test]
fn empty_palette_knows_nothing() {
    let palette = Palette::empty();
    assert!(palette.is_empty());
    assert!(palette.letters().is_empty());
}
