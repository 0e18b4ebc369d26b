#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::config::extract_sources;

fuzz_target!(|data: &str| {
    // Must not panic; no line is both a source and part of the remaining TOML
    let (sources, remaining) = extract_sources(data);
    assert!(sources.len() + remaining.lines().count() <= data.lines().count());
});
