// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked access on arbitrary contiguous storage.

use core::mem::size_of;

use crate::contracts::{self, ContractViolation};
use crate::extent::{self, Extent};
use crate::storage::{ContiguousStorage, ContiguousStorageMut};
use crate::view::{BoundedView, BoundedViewMut};

/// The element at `index`. Contract: `index < storage length`.
///
/// ```
/// let v = vec![1, 2, 3, 4];
/// assert!(std::ptr::eq(spanguard::at(&v, 2), &v[2]));
/// ```
#[inline]
#[track_caller]
pub fn at<C>(storage: &C, index: usize) -> &C::Item
where
    C: ContiguousStorage + ?Sized,
{
    let items = storage.as_contiguous();
    match items.get(index) {
        Some(item) => item,
        None => contracts::violated(ContractViolation::IndexOutOfRange {
            index,
            len: items.len(),
        }),
    }
}

/// Writable element at `index`. Contract: `index < storage length`.
#[inline]
#[track_caller]
pub fn at_mut<C>(storage: &mut C, index: usize) -> &mut C::Item
where
    C: ContiguousStorageMut + ?Sized,
{
    let items = storage.as_contiguous_mut();
    let len = items.len();
    match items.get_mut(index) {
        Some(item) => item,
        None => contracts::violated(ContractViolation::IndexOutOfRange { index, len }),
    }
}

/// Length as a signed integer.
#[track_caller]
pub fn ssize<C>(storage: &C) -> isize
where
    C: ContiguousStorage + ?Sized,
{
    let len = storage.storage_len();
    match isize::try_from(len) {
        Ok(signed) => signed,
        Err(_) => contracts::violated(ContractViolation::SizeOverflow {
            len,
            elem_size: size_of::<C::Item>(),
        }),
    }
}

/// Dynamic view over any contiguous storage.
#[inline]
pub fn make_view<C>(storage: &C) -> BoundedView<'_, C::Item>
where
    C: ContiguousStorage + ?Sized,
{
    BoundedView::from_storage(storage)
}

/// Writable dynamic view over any contiguous storage.
#[inline]
pub fn make_view_mut<C>(storage: &mut C) -> BoundedViewMut<'_, C::Item>
where
    C: ContiguousStorageMut + ?Sized,
{
    BoundedViewMut::from_storage(storage)
}

/// Copy `src` into the front of `dst`.
///
/// Contract: `dst.len() >= src.len()`. When both extents are fixed this is
/// checked at compile time.
///
/// ```
/// use spanguard::{copy, BoundedView, BoundedViewMut};
///
/// let src = [1, 2];
/// let mut dst = [0; 4];
/// copy(BoundedView::from_slice(&src[..]), BoundedViewMut::from_slice(&mut dst[..]));
/// assert_eq!(dst, [1, 2, 0, 0]);
/// ```
#[track_caller]
pub fn copy<T, E, F>(src: BoundedView<'_, T, E>, mut dst: BoundedViewMut<'_, T, F>)
where
    T: Clone,
    E: Extent,
    F: Extent,
{
    const {
        assert!(
            match E::STATIC_LEN {
                Some(src_len) => extent::count_fits(F::STATIC_LEN, src_len),
                None => true,
            },
            "copy source is larger than its destination"
        )
    };
    contracts::require(dst.len() >= src.len(), || {
        ContractViolation::DestinationTooSmall {
            src: src.len(),
            dst: dst.len(),
        }
    });
    dst.first_mut(src.len())
        .as_mut_slice()
        .clone_from_slice(src.as_slice());
}
