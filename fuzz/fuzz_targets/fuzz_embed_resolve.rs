//! Fuzz symbolic embedding resolution.
//!
//! For every position/inset/guide combination, `resolve` must emit
//! between 2 and 4 constraints, never repeat an identifier, and stamp
//! the requested guide on every spec.

#![no_main]

use arbitrary::Arbitrary;
use arbor_core::Insets;
use arbor_layout::{EmbedPosition, Guide, resolve};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    position: u8,
    top: i16,
    left: i16,
    bottom: i16,
    right: i16,
    safe_area: bool,
}

fuzz_target!(|input: Input| {
    let position = EmbedPosition::ALL[usize::from(input.position) % EmbedPosition::ALL.len()];
    let insets = Insets::new(
        f64::from(input.top),
        f64::from(input.left),
        f64::from(input.bottom),
        f64::from(input.right),
    );
    let guide = if input.safe_area {
        Guide::SafeArea
    } else {
        Guide::Bounds
    };

    let specs = resolve(position, insets, guide);

    assert!(
        (2..=4).contains(&specs.len()),
        "{position:?} resolved to {} specs",
        specs.len()
    );
    for (index, spec) in specs.iter().enumerate() {
        assert_eq!(spec.guide, guide);
        for later in specs.iter().skip(index + 1) {
            assert_ne!(
                spec.identifier, later.identifier,
                "{position:?} repeated an identifier"
            );
        }
    }
});
