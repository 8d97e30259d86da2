//! Fuzz target: `PressClassifier::poll`
//!
//! Each input byte is one sample: bit 7 is the raw level, the low bits
//! are the gap in milliseconds since the previous sample.  Asserts that a
//! poll never reports both events and that a held session yields at most
//! one long press with no short press after it.
//!
//! cargo fuzz run fuzz_press_classifier

#![no_main]

use libfuzzer_sys::fuzz_target;
use pushdim::config::ControlConfig;
use pushdim::drivers::button::PressClassifier;
use pushdim::time::Instant;

fuzz_target!(|data: &[u8]| {
    let Some((&first, samples)) = data.split_first() else {
        return;
    };
    let mut btn = PressClassifier::new(&ControlConfig::default(), first & 0x80 != 0, Instant::ZERO);
    let mut now = Instant::ZERO;
    let mut long_in_session = false;

    for &byte in samples {
        now = now.plus_millis(u64::from(byte & 0x7F) * 8);
        let out = btn.poll(byte & 0x80 != 0, now);

        assert!(!(out.short_event && out.long_event));
        if out.long_event {
            assert!(!long_in_session, "second long press in one session");
            long_in_session = true;
        }
        if out.short_event {
            assert!(!long_in_session, "short press after long press");
        }
        if !out.is_held {
            long_in_session = false;
        }
        assert_eq!(out.is_held, btn.is_held());
    }
});
