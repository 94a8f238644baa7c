#![no_main]
use libfuzzer_sys::fuzz_target;
use sinkfmt_core::printf::{LengthMod, Specifier, parse_placeholder};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = parse_placeholder(body) else {
        return;
    };

    // Accepted bodies always start with a known length and end the head in
    // the specifier.
    let head = body.split(':').next().unwrap_or("");
    assert!(head.ends_with(spec.specifier.as_char()));
    assert_eq!(
        LengthMod::from_text(&head[..head.len() - 1]),
        Some(spec.length)
    );
    if matches!(spec.specifier, Specifier::Char | Specifier::String) {
        assert_eq!(spec.length, LengthMod::Default);
    }
});
