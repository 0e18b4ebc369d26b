#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::fmt::{Palette, render, strip, validate, validate_strict};

fuzz_target!(|data: (&str, u8)| {
    let (input, max_len) = data;
    let max_len = usize::from(max_len);
    let palette = Palette::standard();

    let rendered = render(input, max_len, palette);
    let stripped = strip(input, max_len);
    assert!(rendered.len() < max_len.max(1));
    assert!(stripped.len() < max_len.max(1));

    // Palette letters are all lowercase, so runtime acceptance implies strict acceptance
    if validate(input, palette) {
        assert!(validate_strict(input));
    }
});
