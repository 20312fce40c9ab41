#![no_main]

use libfuzzer_sys::fuzz_target;
use shortcode::Event;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    // classify by the first letter so both kinds of shortcode occur
    let classify = |name: &str| name.starts_with(|c: char| c.is_ascii_lowercase() && c < 'n');

    let mut end = 0;
    for (event, range) in shortcode::Parser::new(input, classify).into_offset_iter() {
        // contiguous, non-empty, on char boundaries
        assert_eq!(range.start, end, "{:?}", event);
        assert!(range.end > range.start, "{:?}", event);
        let src = &input[range.clone()];
        end = range.end;

        match event {
            Event::Text(text) => {
                assert_eq!(text, src);
                assert!(!text.contains('['));
            }
            Event::Error(raw, e) => {
                assert_eq!(raw, src);
                assert!((range.start..=range.end).contains(&e.offset), "{} {:?}", e, range);
            }
            Event::Shortcode(s) => {
                assert_eq!(s.is_enclosing(), classify(s.name()));
                let canonical = s.to_string();
                assert_eq!(canonical.parse::<shortcode::Shortcode>().as_ref(), Ok(&s));
            }
        }
    }
    assert_eq!(end, input.len());
});
