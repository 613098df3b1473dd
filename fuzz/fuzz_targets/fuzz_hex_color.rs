//! Fuzz hex color parsing.
//!
//! `Color::from_hex` must never panic on arbitrary input, and any color
//! it accepts must survive a display/parse round trip unchanged.

#![no_main]

use arbor_style::Color;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(color) = Color::from_hex(text) {
        let rendered = color.to_string();
        assert_eq!(
            Color::from_hex(&rendered),
            Some(color),
            "display output {rendered:?} did not parse back"
        );
    }
});
