// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for spanguard bounds arithmetic.
//!
//! This standalone crate extracts the functions from `src/view/bounds.rs`
//! that decide whether a sub-view, index, or cursor move is legal, and proves
//! them for every possible input using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: no function overflows or underflows for any input
//! 2. **Containment**: every accepted range lies inside `[0, len]`
//! 3. **Completeness**: every in-range request is accepted

/// Sentinel count meaning "everything after the offset".
pub const DYNAMIC_EXTENT: usize = usize::MAX;

// ============================================================================
// BOUNDS ARITHMETIC (copied from src/view/bounds.rs)
// ============================================================================

/// Range of the leading `count` elements.
pub fn leading(len: usize, count: usize) -> Option<(usize, usize)> {
    if count > len {
        return None;
    }
    Some((0, count))
}

/// Range of the trailing `count` elements.
pub fn trailing(len: usize, count: usize) -> Option<(usize, usize)> {
    if count > len {
        return None;
    }
    Some((len - count, len))
}

/// Range `[offset, offset + count)`; `count == DYNAMIC_EXTENT` runs to the end.
pub fn window(len: usize, offset: usize, count: usize) -> Option<(usize, usize)> {
    if offset > len {
        return None;
    }
    let available = len - offset;
    if count == DYNAMIC_EXTENT {
        return Some((offset, len));
    }
    if count > available {
        return None;
    }
    Some((offset, offset + count))
}

/// Move a cursor position by `delta`, staying inside `[0, len]`.
pub fn step(position: usize, delta: isize, len: usize) -> Option<usize> {
    let moved = if delta >= 0 {
        position.checked_add(delta.unsigned_abs())
    } else {
        position.checked_sub(delta.unsigned_abs())
    };
    match moved {
        Some(target) if target <= len => Some(target),
        _ => None,
    }
}

/// Total byte size of `len` elements, bounded by `isize::MAX`.
pub fn byte_len(len: usize, elem_size: usize) -> Option<usize> {
    match len.checked_mul(elem_size) {
        Some(bytes) if bytes <= isize::MAX as usize => Some(bytes),
        _ => None,
    }
}

/// Element count spanned by the byte distance between two addresses.
pub fn range_len(first: usize, last: usize, elem_size: usize) -> Option<usize> {
    let bytes = last.checked_sub(first)?;
    if elem_size == 0 {
        return Some(0);
    }
    if bytes % elem_size != 0 {
        return None;
    }
    Some(bytes / elem_size)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify leading/trailing accept exactly `count <= len` and stay inside.
    #[kani::proof]
    fn verify_leading_trailing_contained() {
        let len: usize = kani::any();
        let count: usize = kani::any();

        match leading(len, count) {
            Some((start, end)) => {
                kani::assert(start == 0 && end == count, "leading starts at 0");
                kani::assert(end <= len, "leading stays inside the view");
            }
            None => kani::assert(count > len, "leading rejects only oversize counts"),
        }

        match trailing(len, count) {
            Some((start, end)) => {
                kani::assert(end == len, "trailing ends at len");
                kani::assert(end - start == count, "trailing spans count elements");
            }
            None => kani::assert(count > len, "trailing rejects only oversize counts"),
        }
    }

    /// Verify window never overflows and accepts every in-range request.
    #[kani::proof]
    fn verify_window_contained() {
        let len: usize = kani::any();
        let offset: usize = kani::any();
        let count: usize = kani::any();

        match window(len, offset, count) {
            Some((start, end)) => {
                kani::assert(start == offset, "window starts at offset");
                kani::assert(start <= end && end <= len, "window stays inside the view");
                if count != DYNAMIC_EXTENT {
                    kani::assert(end - start == count, "window spans count elements");
                }
            }
            None => kani::assert(
                offset > len || (count != DYNAMIC_EXTENT && count > len - offset),
                "window rejects only out-of-range requests",
            ),
        }
    }

    /// Verify cursor steps never leave `[0, len]`.
    #[kani::proof]
    fn verify_step_contained() {
        let len: usize = kani::any();
        let position: usize = kani::any_where(|&p| p <= len);
        let delta: isize = kani::any();

        if let Some(target) = step(position, delta, len) {
            kani::assert(target <= len, "cursor stays inside [0, len]");
            let expected = position as i128 + delta as i128;
            kani::assert(target as i128 == expected, "cursor moves by exactly delta");
        }
    }

    /// Verify byte sizes never exceed isize::MAX.
    #[kani::proof]
    fn verify_byte_len_bounded() {
        let len: usize = kani::any();
        let elem_size: usize = kani::any();

        if let Some(bytes) = byte_len(len, elem_size) {
            kani::assert(bytes <= isize::MAX as usize, "byte size fits in isize");
            kani::assert(
                elem_size == 0 || bytes / elem_size == len,
                "byte size is len * elem_size",
            );
        }
    }

    /// Verify pointer ranges round-trip through their element count.
    #[kani::proof]
    fn verify_range_len_exact() {
        let first: usize = kani::any();
        let last: usize = kani::any();
        let elem_size: usize = kani::any_where(|&s| s > 0 && s <= 64);

        match range_len(first, last, elem_size) {
            Some(count) => kani::assert(
                first + count * elem_size == last,
                "count spans the whole range",
            ),
            None => kani::assert(
                last < first || (last - first) % elem_size != 0,
                "only inverted or ragged ranges are rejected",
            ),
        }
    }
}
