#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::fmt::Color;

fuzz_target!(|data: &str| {
    // Must not panic on any hex string, and anything accepted must print back as #rrggbb
    if let Some(color) = Color::parse_hex(data) {
        assert_eq!(Color::parse_hex(&color.to_string()), Some(color));
    }
    let _ = Color::from_hex(data);
});
