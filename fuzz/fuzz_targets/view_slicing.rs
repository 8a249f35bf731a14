// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for sub-view slicing.
//!
//! Applies a random chain of first/last/subspan requests to a view and to a
//! plain slice side by side. Requests the slice would reject are skipped, so
//! every call that reaches the view is legal and must agree with the slice.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanguard::{as_bytes, BoundedView, DYNAMIC_EXTENT};

#[derive(Debug, Arbitrary)]
enum Slice {
    First(u8),
    Last(u8),
    Subspan(u8, u8),
    SubspanFrom(u8),
}

#[derive(Debug, Arbitrary)]
struct SlicingInput {
    storage: Vec<u32>,
    ops: Vec<Slice>,
}

fuzz_target!(|input: SlicingInput| {
    let mut view = BoundedView::from_slice(&input.storage[..]);
    let mut oracle: &[u32] = &input.storage;

    for op in input.ops.iter().take(64) {
        let len = oracle.len();
        match *op {
            Slice::First(n) if (n as usize) <= len => {
                view = view.first(n as usize);
                oracle = &oracle[..n as usize];
            }
            Slice::Last(n) if (n as usize) <= len => {
                view = view.last(n as usize);
                oracle = &oracle[len - n as usize..];
            }
            Slice::Subspan(o, c) if (o as usize) <= len && (c as usize) <= len - o as usize => {
                view = view.subspan(o as usize, c as usize);
                oracle = &oracle[o as usize..o as usize + c as usize];
            }
            Slice::SubspanFrom(o) if (o as usize) <= len => {
                view = view.subspan(o as usize, DYNAMIC_EXTENT);
                oracle = &oracle[o as usize..];
            }
            _ => continue,
        }

        assert_eq!(view.len(), oracle.len());
        assert_eq!(view.as_slice(), oracle);
        assert_eq!(view.size_bytes(), oracle.len() * 4);
        assert_eq!(as_bytes(view).len(), view.size_bytes());
        if let (Some(front), Some(expected)) = (view.get(0), oracle.first()) {
            assert_eq!(front, expected);
        }
    }
});
