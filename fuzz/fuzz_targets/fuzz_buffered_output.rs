#![no_main]
use libfuzzer_sys::fuzz_target;
use taglog::output::BufferedOutput;

fuzz_target!(|data: (u8, Vec<&str>)| {
    let (capacity, lines) = data;
    let Ok(mut out) = BufferedOutput::new(Vec::new(), usize::from(capacity)) else {
        return;
    };
    for line in lines {
        let _ = out.append(line);
        assert!(out.len() < out.capacity());
    }
    let _ = out.flush();
    assert!(out.is_empty());
});
