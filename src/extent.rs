// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-level extents: the "static size or dynamic" tag of a view.
//!
//! The extent decides what a view stores next to its base address:
//!
//! | Extent      | Stored length | View size |
//! |-------------|---------------|-----------|
//! | `Dynamic`   | `usize`       | 2 words   |
//! | `Fixed<N>`  | `()`          | 1 word    |
//!
//! A missing base address is the null view. Everything above this module
//! works on the runtime length only, so slicing and cursors are written once
//! for both.

use core::fmt;

use crate::contracts::ContractViolation;

/// Sentinel for "no static extent". Also used as the "rest of the view"
/// count in [`BoundedView::subspan`](crate::BoundedView::subspan).
pub const DYNAMIC_EXTENT: usize = usize::MAX;

mod private {
    pub trait Sealed {}
}

/// Length selector for views. Sealed: only [`Dynamic`] and [`Fixed`]
/// implement it.
pub trait Extent: private::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The compile-time length, or `None` for [`Dynamic`].
    const STATIC_LEN: Option<usize>;

    /// What a view keeps to recover its length.
    #[doc(hidden)]
    type Stored: Copy + fmt::Debug + Send + Sync + 'static;

    /// Check `len` against the static length and encode it.
    #[doc(hidden)]
    fn store(len: usize) -> Result<Self::Stored, ContractViolation>;

    #[doc(hidden)]
    fn load(stored: Self::Stored) -> usize;
}

/// Extent resolved at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dynamic;

/// Extent fixed at compile time to `N` elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed<const N: usize>;

impl private::Sealed for Dynamic {}

impl Extent for Dynamic {
    const STATIC_LEN: Option<usize> = None;

    type Stored = usize;

    #[inline]
    fn store(len: usize) -> Result<usize, ContractViolation> {
        Ok(len)
    }

    #[inline]
    fn load(stored: usize) -> usize {
        stored
    }
}

impl<const N: usize> private::Sealed for Fixed<N> {}

impl<const N: usize> Extent for Fixed<N> {
    const STATIC_LEN: Option<usize> = Some(N);

    type Stored = ();

    #[inline]
    fn store(len: usize) -> Result<(), ContractViolation> {
        if len != N {
            return Err(ContractViolation::ExtentMismatch {
                expected: N,
                actual: len,
            });
        }
        Ok(())
    }

    #[inline]
    fn load(_stored: ()) -> usize {
        N
    }
}

/// Check storage of `len` elements, or a null base when `len` is `None`,
/// against extent `E`.
#[inline]
pub(crate) fn bind<E: Extent>(len: Option<usize>) -> Result<E::Stored, ContractViolation> {
    match (len, E::STATIC_LEN) {
        // INVARIANT: only a zero extent may sit on a null base
        (None, Some(n)) if n != 0 => Err(ContractViolation::NullWithLength { len: n }),
        (None, _) => E::store(0),
        (Some(len), _) => E::store(len),
    }
}

/// `true` when a view of extent `from` may be re-bound to extent `to`
/// without a runtime check failing by construction.
pub(crate) const fn extents_compatible(from: Option<usize>, to: Option<usize>) -> bool {
    match (from, to) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// `true` unless `count` exceeds a known static length.
pub(crate) const fn count_fits(static_len: Option<usize>, count: usize) -> bool {
    match static_len {
        Some(len) => count <= len,
        None => true,
    }
}

/// `true` unless `[offset, offset + count)` falls outside a known static
/// length. `count == DYNAMIC_EXTENT` means "the rest".
pub(crate) const fn window_fits(static_len: Option<usize>, offset: usize, count: usize) -> bool {
    match static_len {
        Some(len) => offset <= len && (count == DYNAMIC_EXTENT || count <= len - offset),
        None => true,
    }
}
