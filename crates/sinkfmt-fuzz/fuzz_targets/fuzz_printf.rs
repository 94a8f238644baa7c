#![no_main]
use libfuzzer_sys::fuzz_target;
use sinkfmt_core::printf::{compile, print_segments};
use sinkfmt_core::{Arg, ArgPolicy, SliceSink, WriterError, print_with};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the sink capacity, the rest is the template.
    let cap = usize::from(data[0]);
    let Ok(template) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    let args = [
        Arg::I32(-17),
        Arg::U64(u64::MAX),
        Arg::Str(b"fuzz\0tail"),
        Arg::Char(b'#'),
        Arg::I16(i16::MIN),
    ];

    let mut unbounded = Vec::new();
    let full = print_with(&mut unbounded, template, &args, ArgPolicy::Widening);

    // A bounded sink sees a prefix of the same bytes.
    let mut storage = vec![0_u8; cap];
    let mut bounded = SliceSink::new(&mut storage);
    let short = print_with(&mut bounded, template, &args, ArgPolicy::Widening);
    assert!(unbounded.starts_with(bounded.as_bytes()));
    if short.is_ok() {
        assert_eq!(full, short);
        assert_eq!(bounded.as_bytes(), unbounded.as_slice());
    } else if full.is_ok() {
        assert_eq!(short, Err(WriterError::ShortCount));
    }

    // Precompiled rendering agrees with direct rendering.
    if let Ok(segments) = compile(template) {
        let mut compiled = Vec::new();
        let r = print_segments(&mut compiled, &segments, &args, ArgPolicy::Widening);
        assert_eq!(r, full);
        assert_eq!(compiled, unbounded);
    }
});
