// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Contiguous-storage providers.
//!
//! Anything a view can be built from exposes its elements as one slice and,
//! through that slice, the address of its first element. Nothing relies on
//! implicit address-of: a provider that cannot hand out a slice is not
//! contiguous storage.

use std::rc::Rc;
use std::sync::Arc;

use crate::extent::Extent;
use crate::view::{BoundedView, BoundedViewMut};

/// Read access to a contiguous run of `Item`s.
pub trait ContiguousStorage {
    type Item;

    /// All elements, in order.
    fn as_contiguous(&self) -> &[Self::Item];

    /// Address of the first element.
    fn base_ptr(&self) -> *const Self::Item {
        self.as_contiguous().as_ptr()
    }

    /// Number of elements.
    fn storage_len(&self) -> usize {
        self.as_contiguous().len()
    }
}

/// Write access to a contiguous run of `Item`s.
pub trait ContiguousStorageMut: ContiguousStorage {
    fn as_contiguous_mut(&mut self) -> &mut [Self::Item];
}

impl<T> ContiguousStorage for [T] {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousStorageMut for [T] {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> ContiguousStorage for [T; N] {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> ContiguousStorageMut for [T; N] {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> ContiguousStorage for Vec<T> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousStorageMut for Vec<T> {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> ContiguousStorage for Box<[T]> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousStorageMut for Box<[T]> {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> ContiguousStorage for Rc<[T]> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

impl<T> ContiguousStorage for Arc<[T]> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self
    }
}

// Strings are read-only byte storage; writing bytes could break UTF-8.
impl ContiguousStorage for str {
    type Item = u8;

    fn as_contiguous(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl ContiguousStorage for String {
    type Item = u8;

    fn as_contiguous(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T, E: Extent> ContiguousStorage for BoundedView<'_, T, E> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> ContiguousStorage for BoundedViewMut<'_, T, E> {
    type Item = T;

    fn as_contiguous(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> ContiguousStorageMut for BoundedViewMut<'_, T, E> {
    fn as_contiguous_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
