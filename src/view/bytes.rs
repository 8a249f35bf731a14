// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw-byte reinterpretation of views.
//!
//! The element bounds come from `zerocopy`: reading bytes needs
//! `T: IntoBytes + Immutable` (no padding, no interior mutability), writing
//! them also needs `T: FromBytes` (every bit pattern valid). The result is a
//! dynamic view of `size_bytes()` [`Byte`]s at the same base address.

use zerocopy::{FromBytes, Immutable, IntoBytes};

use super::{BoundedView, BoundedViewMut};
use crate::byte::Byte;
use crate::extent::Extent;

/// Reinterpret `&[u8]` as `&[Byte]`.
#[allow(unsafe_code)]
fn byte_slice(bytes: &[u8]) -> &[Byte] {
    // SAFETY: `Byte` is `repr(transparent)` over `u8`; same size, alignment
    // and validity, so the cast keeps length and lifetime.
    unsafe { &*(bytes as *const [u8] as *const [Byte]) }
}

#[allow(unsafe_code)]
fn byte_slice_mut(bytes: &mut [u8]) -> &mut [Byte] {
    // SAFETY: as in `byte_slice`; the unique borrow moves into the result.
    unsafe { &mut *(bytes as *mut [u8] as *mut [Byte]) }
}

/// Read-only byte view over the storage of `view`.
///
/// A null-based view yields a null-based byte view.
pub fn as_bytes<'a, T, E>(view: BoundedView<'a, T, E>) -> BoundedView<'a, Byte>
where
    T: IntoBytes + Immutable,
    E: Extent,
{
    super::bind(view.as_option().map(|storage| byte_slice(storage.as_bytes())))
}

/// Writable byte view over the storage of `view`.
pub fn as_writable_bytes<'a, T, E>(view: BoundedViewMut<'a, T, E>) -> BoundedViewMut<'a, Byte>
where
    T: IntoBytes + FromBytes,
    E: Extent,
{
    if view.as_ptr().is_null() {
        return BoundedViewMut::default();
    }
    BoundedViewMut::from_slice(byte_slice_mut(view.into_mut_slice().as_mut_bytes()))
}

impl<'a, T: IntoBytes + Immutable, E: Extent> BoundedView<'a, T, E> {
    /// Method form of [`as_bytes`].
    pub fn as_bytes(&self) -> BoundedView<'a, Byte> {
        as_bytes(*self)
    }
}

impl<'a, T: IntoBytes + FromBytes, E: Extent> BoundedViewMut<'a, T, E> {
    /// Method form of [`as_writable_bytes`], borrowing `self`.
    pub fn as_writable_bytes(&mut self) -> BoundedViewMut<'_, Byte> {
        as_writable_bytes(self.reborrow())
    }
}
