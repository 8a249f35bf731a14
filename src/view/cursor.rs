// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access cursors over a view.
//!
//! A cursor is a position in `[0, len]` tied to the identity (base address,
//! length) of the view it came from. A null view has a null base, so its
//! cursors never match those of an empty view over real storage. Movement, dereference, comparison and
//! difference are all checked:
//!
//! ```text
//!   begin()                       end()
//!     │                             │
//!     ▼                             ▼
//!   [ a | b | c | d ]  ───────────  one past the end (not dereferenceable)
//!                 ▲               ▲
//!              rbegin() derefs d  rend() sits before a
//! ```
//!
//! Cursors are not iterators; use [`BoundedView::iter`](super::BoundedView::iter)
//! for `for` loops.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use super::bounds;
use crate::contracts::{self, ContractViolation};

/// Forward cursor. Created by [`begin`](super::BoundedView::begin) and
/// [`end`](super::BoundedView::end).
pub struct Cursor<'a, T> {
    view: Option<&'a [T]>,
    pos: usize,
}

impl<'a, T> Cursor<'a, T> {
    /// `view` is `None` for a null view.
    pub(crate) fn new(view: Option<&'a [T]>, pos: usize) -> Self {
        Cursor { view, pos }
    }

    #[inline]
    fn items(&self) -> &'a [T] {
        self.view.unwrap_or(&[])
    }

    #[inline]
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Offset from the start of the view.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// `true` when the cursor sits one past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == self.len()
    }

    /// The element under the cursor. Contract: not at the end.
    #[track_caller]
    pub fn get(&self) -> &'a T {
        match self.items().get(self.pos) {
            Some(item) => item,
            None => contracts::violated(ContractViolation::CursorOutOfRange {
                position: self.pos as isize,
                len: self.len(),
            }),
        }
    }

    /// The element `delta` places away, without moving the cursor.
    #[track_caller]
    pub fn peek(&self, delta: isize) -> &'a T {
        (*self + delta).get()
    }

    /// Step forward by one. Contract: not at the end.
    #[track_caller]
    pub fn advance(&mut self) {
        *self += 1;
    }

    /// Step back by one. Contract: not at the start.
    #[track_caller]
    pub fn retreat(&mut self) {
        *self -= 1;
    }

    #[track_caller]
    fn moved(self, delta: isize) -> Self {
        let pos = contracts::enforce(bounds::step(self.pos, delta, self.len()));
        Cursor { pos, ..self }
    }

    #[track_caller]
    fn check_same_view(&self, other: &Self) {
        // INVARIANT: positions are only comparable within one (base, len) pair.
        let same = match (self.view, other.view) {
            (None, None) => true,
            (Some(a), Some(b)) => ptr::eq(a, b),
            _ => false,
        };
        contracts::require(same, || ContractViolation::IncomparableCursors);
    }
}

impl<T> Default for Cursor<'_, T> {
    fn default() -> Self {
        Cursor { view: None, pos: 0 }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("base", &self.view.map_or(ptr::null(), <[T]>::as_ptr))
            .field("len", &self.len())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(self, delta: isize) -> Self {
        self.moved(delta)
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(self, delta: isize) -> Self {
        match delta.checked_neg() {
            Some(back) => self.moved(back),
            None => contracts::violated(ContractViolation::CursorOutOfRange {
                position: isize::MAX,
                len: self.len(),
            }),
        }
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, delta: isize) {
        *self = *self + delta;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, delta: isize) {
        *self = *self - delta;
    }
}

/// Signed distance between two cursors of the same view.
impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    #[track_caller]
    fn sub(self, other: Self) -> isize {
        self.check_same_view(&other);
        bounds::distance(other.pos, self.pos)
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.check_same_view(other);
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        self.check_same_view(other);
        self.pos.cmp(&other.pos)
    }
}

/// Reverse cursor. Created by [`rbegin`](super::BoundedView::rbegin) and
/// [`rend`](super::BoundedView::rend). It wraps a forward cursor one past the
/// element it dereferences.
pub struct RevCursor<'a, T> {
    base: Cursor<'a, T>,
}

impl<'a, T> RevCursor<'a, T> {
    pub(crate) fn new(base: Cursor<'a, T>) -> Self {
        RevCursor { base }
    }

    /// The forward cursor one past the current element.
    #[inline]
    pub fn base(&self) -> Cursor<'a, T> {
        self.base
    }

    /// `true` when the cursor sits before the first element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.base.pos == 0
    }

    /// The element under the cursor. Contract: not at the reverse end.
    #[track_caller]
    pub fn get(&self) -> &'a T {
        match self.base.pos.checked_sub(1) {
            Some(pos) => Cursor { pos, ..self.base }.get(),
            None => contracts::violated(ContractViolation::CursorOutOfRange {
                position: -1,
                len: self.base.len(),
            }),
        }
    }

    #[track_caller]
    pub fn peek(&self, delta: isize) -> &'a T {
        (*self + delta).get()
    }

    #[track_caller]
    pub fn advance(&mut self) {
        *self += 1;
    }

    #[track_caller]
    pub fn retreat(&mut self) {
        *self -= 1;
    }
}

impl<T> Default for RevCursor<'_, T> {
    fn default() -> Self {
        RevCursor {
            base: Cursor::default(),
        }
    }
}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RevCursor<'_, T> {}

impl<T> fmt::Debug for RevCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.base).finish()
    }
}

impl<T> Add<isize> for RevCursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn add(self, delta: isize) -> Self {
        RevCursor {
            base: self.base - delta,
        }
    }
}

impl<T> Sub<isize> for RevCursor<'_, T> {
    type Output = Self;

    #[track_caller]
    fn sub(self, delta: isize) -> Self {
        RevCursor {
            base: self.base + delta,
        }
    }
}

impl<T> AddAssign<isize> for RevCursor<'_, T> {
    #[track_caller]
    fn add_assign(&mut self, delta: isize) {
        *self = *self + delta;
    }
}

impl<T> SubAssign<isize> for RevCursor<'_, T> {
    #[track_caller]
    fn sub_assign(&mut self, delta: isize) {
        *self = *self - delta;
    }
}

impl<T> Sub for RevCursor<'_, T> {
    type Output = isize;

    #[track_caller]
    fn sub(self, other: Self) -> isize {
        other.base - self.base
    }
}

impl<T> PartialEq for RevCursor<'_, T> {
    #[track_caller]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<T> Eq for RevCursor<'_, T> {}

impl<T> PartialOrd for RevCursor<'_, T> {
    #[track_caller]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RevCursor<'_, T> {
    #[track_caller]
    fn cmp(&self, other: &Self) -> Ordering {
        other.base.cmp(&self.base)
    }
}
