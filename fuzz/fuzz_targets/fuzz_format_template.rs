#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::fmt::{FormatTemplate, FormatValues};

fuzz_target!(|data: &str| {
    // Must not panic on unbalanced braces or unknown placeholders
    let template = FormatTemplate::parse(data);
    let values = FormatValues::new()
        .tag("INFO")
        .location("main.rs", 1, 13)
        .msg("message");
    let _ = template.render(&values);
});
