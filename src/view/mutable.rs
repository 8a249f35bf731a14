// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Writable views.
//!
//! [`BoundedViewMut`] is the unique-borrow twin of [`BoundedView`]: the same
//! constructors and checks, plus element assignment. It is not `Copy`; use
//! [`reborrow`](BoundedViewMut::reborrow) or [`as_view`](BoundedViewMut::as_view)
//! to hand out shorter-lived views.

use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;
use core::ops::{Index, IndexMut, Range};
use core::ptr::{self, NonNull};
use core::slice;

use super::{bounds, BoundedView};
use crate::contracts::{self, ContractViolation};
use crate::extent::{self, Dynamic, Extent, Fixed, DYNAMIC_EXTENT};
use crate::storage::ContiguousStorageMut;

/// A non-owning, bounds-checked, writable view over `T`s with extent `E`.
///
/// Covariant in `'a` and invariant in `T`, like `&'a mut [T]`.
pub struct BoundedViewMut<'a, T, E: Extent = Dynamic> {
    ptr: Option<NonNull<T>>,
    len: E::Stored,
    marker: PhantomData<&'a mut [T]>,
}

static_assertions::assert_eq_size!(BoundedViewMut<'static, u32>, [usize; 2]);
static_assertions::assert_eq_size!(BoundedViewMut<'static, u32, Fixed<4>>, usize);
static_assertions::assert_not_impl_any!(BoundedViewMut<'static, u8>: Copy, Clone);
static_assertions::assert_impl_all!(BoundedViewMut<'static, u8>: Send, Sync);

// SAFETY: a writable view is a unique borrow of `[T]` and is exactly as
// thread-safe as `&'a mut [T]`.
#[allow(unsafe_code)]
unsafe impl<T: Send, E: Extent> Send for BoundedViewMut<'_, T, E> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync, E: Extent> Sync for BoundedViewMut<'_, T, E> {}

#[inline]
#[track_caller]
fn bind_mut<T, F: Extent>(storage: Option<&mut [T]>) -> BoundedViewMut<'_, T, F> {
    let len = contracts::enforce(extent::bind::<F>(storage.as_ref().map(|s| s.len())));
    BoundedViewMut {
        ptr: storage.map(|storage| NonNull::from(storage).cast()),
        len,
        marker: PhantomData,
    }
}

/// # Safety
///
/// As [`BoundedViewMut::from_raw_parts_mut`].
#[allow(unsafe_code)]
#[track_caller]
unsafe fn bind_raw_parts_mut<'a, T, F: Extent>(data: *mut T, len: usize) -> BoundedViewMut<'a, T, F> {
    if data.is_null() {
        contracts::require(len == 0, || ContractViolation::NullWithLength { len });
        return bind_mut(None);
    }
    contracts::enforce(bounds::byte_len(len, size_of::<T>()));
    // SAFETY: non-null, and the caller guarantees exclusive access to `len` elements for 'a.
    let storage: &'a mut [T] = unsafe { slice::from_raw_parts_mut(data, len) };
    bind_mut(Some(storage))
}

impl<'a, T> BoundedViewMut<'a, T> {
    /// Build a writable view from a raw pointer and an element count.
    ///
    /// # Safety
    ///
    /// When `data` is non-null it must be aligned and point to `len`
    /// initialized `T`s, valid and not otherwise accessed for `'a`.
    ///
    /// # Contract
    ///
    /// Same as [`BoundedView::from_raw_parts`].
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_raw_parts_mut(data: *mut T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_raw_parts_mut(data, len) }
    }

    #[inline]
    pub fn from_array<const M: usize>(array: &'a mut [T; M]) -> Self {
        bind_mut(Some(array.as_mut_slice()))
    }

    #[inline]
    pub fn from_slice(slice: &'a mut [T]) -> Self {
        bind_mut(Some(slice))
    }

    /// Writable view over any contiguous storage.
    #[inline]
    pub fn from_storage<C>(storage: &'a mut C) -> Self
    where
        C: ContiguousStorageMut<Item = T> + ?Sized,
    {
        bind_mut(Some(storage.as_contiguous_mut()))
    }
}

/// Fixed-extent constructors, checked like their [`BoundedView`] twins.
impl<'a, T, const N: usize> BoundedViewMut<'a, T, Fixed<N>> {
    /// # Safety
    ///
    /// As [`BoundedViewMut::from_raw_parts_mut`].
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_raw_parts_mut_fixed(data: *mut T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_raw_parts_mut(data, len) }
    }

    #[inline]
    pub fn from_array_fixed(array: &'a mut [T; N]) -> Self {
        bind_mut(Some(array.as_mut_slice()))
    }

    /// Contract: `slice.len() == N`.
    #[track_caller]
    pub fn from_slice_fixed(slice: &'a mut [T]) -> Self {
        bind_mut(Some(slice))
    }

    /// Contract: the storage holds exactly `N` elements.
    #[track_caller]
    pub fn from_storage_fixed<C>(storage: &'a mut C) -> Self
    where
        C: ContiguousStorageMut<Item = T> + ?Sized,
    {
        bind_mut(Some(storage.as_contiguous_mut()))
    }
}

impl<'a, T, E: Extent> BoundedViewMut<'a, T, E> {
    /// Re-bind to another extent, checked like [`BoundedView::to_extent`].
    #[track_caller]
    pub fn to_extent<F: Extent>(self) -> BoundedViewMut<'a, T, F> {
        const {
            assert!(
                extent::extents_compatible(E::STATIC_LEN, F::STATIC_LEN),
                "incompatible fixed extents"
            )
        };
        bind_mut(self.into_option())
    }

    #[inline]
    #[allow(unsafe_code)]
    fn into_option(self) -> Option<&'a mut [T]> {
        let ptr = self.ptr?;
        // SAFETY: `ptr` and the stored length were taken from a `&'a mut [T]`,
        // and consuming `self` hands that unique borrow on.
        Some(unsafe { slice::from_raw_parts_mut(ptr.as_ptr(), E::load(self.len)) })
    }

    /// A shared view over the same elements, borrowing `self`.
    #[inline]
    pub fn as_view(&self) -> BoundedView<'_, T, E> {
        BoundedView {
            ptr: self.ptr,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Give up write access for the full lifetime.
    #[inline]
    pub fn into_view(self) -> BoundedView<'a, T, E> {
        BoundedView {
            ptr: self.ptr,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// A writable view with a shorter lifetime, leaving `self` usable after.
    #[inline]
    pub fn reborrow(&mut self) -> BoundedViewMut<'_, T, E> {
        BoundedViewMut {
            ptr: self.ptr,
            len: self.len,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.reborrow().into_mut_slice()
    }

    /// Consume the view, yielding the underlying slice for `'a`.
    #[inline]
    pub fn into_mut_slice(self) -> &'a mut [T] {
        self.into_option().unwrap_or(&mut [])
    }

    #[inline]
    pub fn len(&self) -> usize {
        E::load(self.len)
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * size_of::<T>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_view().as_ptr()
    }

    /// Base address; null for a null-based view.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// First element. Contract: the view is not empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "front" }),
        }
    }

    /// Last element. Contract: the view is not empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "back" }),
        }
    }

    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "front_mut" }),
        }
    }

    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "back_mut" }),
        }
    }

    fn slice_to_mut(&mut self, range: Range<usize>) -> BoundedViewMut<'_, T> {
        bind_mut(self.reborrow().into_option().map(|storage| &mut storage[range]))
    }

    /// The leading `count` elements, writable. Contract: `count <= len()`.
    #[track_caller]
    pub fn first_mut(&mut self, count: usize) -> BoundedViewMut<'_, T> {
        let range = contracts::enforce(bounds::leading(self.len(), count));
        self.slice_to_mut(range)
    }

    /// The trailing `count` elements, writable. Contract: `count <= len()`.
    #[track_caller]
    pub fn last_mut(&mut self, count: usize) -> BoundedViewMut<'_, T> {
        let range = contracts::enforce(bounds::trailing(self.len(), count));
        self.slice_to_mut(range)
    }

    /// Elements `[offset, offset + count)`, writable. `count` may be
    /// [`DYNAMIC_EXTENT`] for "the rest".
    #[track_caller]
    pub fn subspan_mut(&mut self, offset: usize, count: usize) -> BoundedViewMut<'_, T> {
        let range = contracts::enforce(bounds::window(self.len(), offset, count));
        self.slice_to_mut(range)
    }

    /// Elements `[offset, len())`, writable.
    #[track_caller]
    pub fn subspan_from_mut(&mut self, offset: usize) -> BoundedViewMut<'_, T> {
        self.subspan_mut(offset, DYNAMIC_EXTENT)
    }

    /// The leading `N` elements as a writable fixed-extent view.
    #[track_caller]
    pub fn first_fixed_mut<const N: usize>(&mut self) -> BoundedViewMut<'_, T, Fixed<N>> {
        const {
            assert!(
                extent::count_fits(E::STATIC_LEN, N),
                "count exceeds the fixed extent"
            )
        };
        bind_mut(self.first_mut(N).into_option())
    }

    /// Fill every element with clones of `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Default for BoundedViewMut<'_, T, Dynamic> {
    fn default() -> Self {
        BoundedViewMut {
            ptr: None,
            len: 0,
            marker: PhantomData,
        }
    }
}

impl<T> Default for BoundedViewMut<'_, T, Fixed<0>> {
    fn default() -> Self {
        BoundedViewMut {
            ptr: None,
            len: (),
            marker: PhantomData,
        }
    }
}

impl<T: fmt::Debug, E: Extent> fmt::Debug for BoundedViewMut<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, E: Extent> Index<usize> for BoundedViewMut<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let index = contracts::enforce(bounds::element(self.len(), index));
        &self.as_slice()[index]
    }
}

impl<T, E: Extent> IndexMut<usize> for BoundedViewMut<'_, T, E> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let index = contracts::enforce(bounds::element(self.len(), index));
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T, E: Extent> IntoIterator for BoundedViewMut<'a, T, E> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_mut_slice().iter_mut()
    }
}

impl<'s, T, E: Extent> IntoIterator for &'s mut BoundedViewMut<'_, T, E> {
    type Item = &'s mut T;
    type IntoIter = slice::IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, E: Extent> AsRef<[T]> for BoundedViewMut<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, E: Extent> AsMut<[T]> for BoundedViewMut<'_, T, E> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for BoundedViewMut<'a, T, Fixed<N>> {
    fn from(array: &'a mut [T; N]) -> Self {
        BoundedViewMut::from_array_fixed(array)
    }
}

impl<'a, T> From<&'a mut [T]> for BoundedViewMut<'a, T, Dynamic> {
    fn from(slice: &'a mut [T]) -> Self {
        BoundedViewMut::from_slice(slice)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for BoundedViewMut<'a, T, Dynamic> {
    fn from(vec: &'a mut Vec<T>) -> Self {
        BoundedViewMut::from_slice(vec)
    }
}

impl<'a, T, const N: usize> From<BoundedViewMut<'a, T, Fixed<N>>>
    for BoundedViewMut<'a, T, Dynamic>
{
    fn from(view: BoundedViewMut<'a, T, Fixed<N>>) -> Self {
        view.to_extent()
    }
}
