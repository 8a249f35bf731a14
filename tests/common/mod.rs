//! Shared test utilities and fixtures.

#![allow(dead_code)]

use spanguard::{BoundedView, Extent};

// Re-export canonical test utilities from spanguard::testing
pub use spanguard::testing::{assert_violation, panic_message, sequence, violates};

// ============================================================================
// FIXTURES
// ============================================================================

/// The five-element fixture most edge-case tests use.
pub const FIVE: [i32; 5] = [1, 2, 3, 4, 5];

/// Element type whose size is not a power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triple {
    pub a: u8,
    pub b: u8,
    pub c: u8,
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check the structural invariants every view must satisfy.
///
/// - `len()` agrees with the slice it exposes
/// - `size_bytes()` is `len() * size_of::<T>()`
/// - `as_ptr()` is the slice base, or null for an empty null-based view
/// - forward and reverse cursors span exactly `len()` positions
pub fn assert_view_well_formed<T, E: Extent>(view: &BoundedView<'_, T, E>) {
    let slice = view.as_slice();
    assert_eq!(view.len(), slice.len(), "len() disagrees with as_slice()");
    assert_eq!(view.size_bytes(), view.len() * std::mem::size_of::<T>());
    assert_eq!(view.is_empty(), view.len() == 0);
    if !view.as_ptr().is_null() {
        assert_eq!(view.as_ptr(), slice.as_ptr());
    } else {
        assert_eq!(view.len(), 0, "null base with non-zero length");
    }
    assert_eq!(view.end() - view.begin(), view.len() as isize);
    assert_eq!(view.rend() - view.rbegin(), view.len() as isize);
    assert_eq!(view.iter().len(), view.len());
}
