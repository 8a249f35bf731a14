// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cursor movement.
//!
//! Drives a forward and a reverse cursor with random signed steps, tracking
//! the expected position separately. Steps that would leave `[0, len]` are
//! skipped; every other step must land where the arithmetic says it does.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanguard::BoundedView;

#[derive(Debug, Arbitrary)]
struct CursorInput {
    storage: Vec<u16>,
    steps: Vec<i8>,
}

fuzz_target!(|input: CursorInput| {
    let view = BoundedView::from_slice(&input.storage[..]);
    let len = view.len() as isize;

    let mut forward = view.begin();
    let mut reverse = view.rbegin();
    let mut position: isize = 0;

    for &delta in input.steps.iter().take(256) {
        let delta = delta as isize;
        let target = position + delta;
        if !(0..=len).contains(&target) {
            continue;
        }
        forward += delta;
        reverse += delta;
        position = target;

        assert_eq!(forward - view.begin(), position);
        assert_eq!(reverse - view.rbegin(), position);
        assert_eq!(forward.is_end(), position == len);
        assert_eq!(reverse.is_end(), position == len);

        if position < len {
            let i = position as usize;
            assert_eq!(*forward.get(), input.storage[i]);
            assert_eq!(*reverse.get(), input.storage[input.storage.len() - 1 - i]);
        }
    }
});
