// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounds-checked, non-owning views over contiguous storage.
//!
//! A [`BoundedView`] is a borrowed run of elements whose every access is
//! checked against its length. Out-of-range access is a contract violation
//! (see [`contracts`](crate::contracts)), never silent wraparound or a
//! recoverable error.
//!
//! ```text
//! storage:   [ 1 | 2 | 3 | 4 | 5 ]
//!                  └── subspan(1, 3) ──┘
//! view:          [ 2 | 3 | 4 ]          (aliases storage, owns nothing)
//! ```
//!
//! # Extents
//!
//! `BoundedView<'a, T>` has a dynamic extent. `BoundedView<'a, T, Fixed<N>>`
//! carries its length in the type and stores a single pointer. Conversions
//! between them are checked at compile time when both lengths are static and
//! at runtime otherwise.
//!
//! # Example
//!
//! ```
//! use spanguard::{BoundedView, Fixed};
//!
//! let arr = [1, 2, 3, 4, 5];
//! let view: BoundedView<'_, i32, Fixed<5>> = BoundedView::from_array_fixed(&arr);
//!
//! assert_eq!(view.subspan(1, 3), [2, 3, 4]);
//! assert_eq!(view.first_fixed::<2>().len(), 2);
//! assert_eq!(view.last(1)[0], 5);
//! ```

pub(crate) mod bounds;
mod bytes;
mod compare;
mod cursor;
mod mutable;
mod serialize;

pub use bytes::{as_bytes, as_writable_bytes};
pub use cursor::{Cursor, RevCursor};
pub use mutable::BoundedViewMut;

use core::fmt;
use core::marker::PhantomData;
use core::mem::size_of;
use core::ops::{Index, Range};
use core::ptr::{self, NonNull};
use core::slice;

use crate::contracts::{self, ContractViolation};
use crate::extent::{self, Dynamic, Extent, Fixed, DYNAMIC_EXTENT};
use crate::storage::ContiguousStorage;

/// A non-owning, bounds-checked view over `T`s with extent `E`.
///
/// Covariant in `'a` and `T`, like the `&'a [T]` it stands for. See the
/// [module docs](self) for the extent model.
pub struct BoundedView<'a, T, E: Extent = Dynamic> {
    ptr: Option<NonNull<T>>,
    len: E::Stored,
    marker: PhantomData<&'a [T]>,
}

static_assertions::assert_eq_size!(BoundedView<'static, u32>, [usize; 2]);
static_assertions::assert_eq_size!(BoundedView<'static, u32, Fixed<4>>, usize);
static_assertions::assert_eq_size!(BoundedView<'static, u64, Fixed<0>>, usize);
static_assertions::assert_impl_all!(BoundedView<'static, u8>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(BoundedView<'static, u8, Fixed<0>>: Default);
static_assertions::assert_not_impl_any!(BoundedView<'static, u8, Fixed<42>>: Default);
static_assertions::assert_not_impl_any!(BoundedView<'static, core::cell::Cell<u8>>: Send, Sync);

// SAFETY: a view is a shared borrow of `[T]` and is exactly as thread-safe
// as `&'a [T]`.
#[allow(unsafe_code)]
unsafe impl<T: Sync, E: Extent> Send for BoundedView<'_, T, E> {}
#[allow(unsafe_code)]
unsafe impl<T: Sync, E: Extent> Sync for BoundedView<'_, T, E> {}

/// Bind `storage`, or a null base, to extent `F`.
#[inline]
#[track_caller]
fn bind<T, F: Extent>(storage: Option<&[T]>) -> BoundedView<'_, T, F> {
    let len = contracts::enforce(extent::bind::<F>(storage.map(<[T]>::len)));
    BoundedView {
        ptr: storage.map(|storage| NonNull::from(storage).cast()),
        len,
        marker: PhantomData,
    }
}

/// # Safety
///
/// As [`BoundedView::from_raw_parts`].
#[allow(unsafe_code)]
#[track_caller]
unsafe fn bind_raw_parts<'a, T, F: Extent>(data: *const T, len: usize) -> BoundedView<'a, T, F> {
    if data.is_null() {
        contracts::require(len == 0, || ContractViolation::NullWithLength { len });
        return bind(None);
    }
    contracts::enforce(bounds::byte_len(len, size_of::<T>()));
    // SAFETY: non-null, and the caller guarantees `len` valid elements for 'a.
    let storage: &'a [T] = unsafe { slice::from_raw_parts(data, len) };
    bind(Some(storage))
}

/// # Safety
///
/// As [`BoundedView::from_ptr_range`].
#[allow(unsafe_code)]
#[track_caller]
unsafe fn bind_ptr_range<'a, T, F: Extent>(first: *const T, last: *const T) -> BoundedView<'a, T, F> {
    match (first.is_null(), last.is_null()) {
        (true, true) => return bind(None),
        (false, false) => {}
        _ => contracts::violated(ContractViolation::InvertedRange),
    }
    let len = contracts::enforce(bounds::range_len(
        first as usize,
        last as usize,
        size_of::<T>(),
    ));
    // SAFETY: forwarded to the caller's guarantee for [first, last).
    unsafe { bind_raw_parts(first, len) }
}

impl<'a, T> BoundedView<'a, T> {
    /// Build a view from a raw pointer and an element count.
    ///
    /// A null `data` with `len == 0` yields a null-based empty view.
    ///
    /// # Safety
    ///
    /// When `data` is non-null it must be aligned and point to `len`
    /// initialized `T`s that stay valid and unmutated for `'a`.
    ///
    /// # Contract
    ///
    /// `data` null implies `len == 0`; `len * size_of::<T>() <= isize::MAX`.
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_raw_parts(data: *const T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_raw_parts(data, len) }
    }

    /// Build a view over `[first, last)`.
    ///
    /// Two null pointers yield a null-based empty view.
    ///
    /// # Safety
    ///
    /// Both pointers must belong to the same allocation, with every element
    /// in between initialized and valid for `'a`.
    ///
    /// # Contract
    ///
    /// Either both pointers are null or neither is; `last >= first`; the
    /// distance is a whole number of elements.
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_ptr_range(first: *const T, last: *const T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_ptr_range(first, last) }
    }

    /// View over a whole array.
    #[inline]
    pub fn from_array<const M: usize>(array: &'a [T; M]) -> Self {
        bind(Some(array.as_slice()))
    }

    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        bind(Some(slice))
    }

    /// View over any contiguous storage.
    #[inline]
    pub fn from_storage<C>(storage: &'a C) -> Self
    where
        C: ContiguousStorage<Item = T> + ?Sized,
    {
        bind(Some(storage.as_contiguous()))
    }
}

/// Fixed-extent constructors. Each checks that the storage holds exactly `N`
/// elements; [`from_array_fixed`](Self::from_array_fixed) does so in the type.
impl<'a, T, const N: usize> BoundedView<'a, T, Fixed<N>> {
    /// # Safety
    ///
    /// As [`BoundedView::from_raw_parts`].
    ///
    /// # Contract
    ///
    /// As [`BoundedView::from_raw_parts`], and `len == N`.
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_raw_parts_fixed(data: *const T, len: usize) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_raw_parts(data, len) }
    }

    /// # Safety
    ///
    /// As [`BoundedView::from_ptr_range`].
    ///
    /// # Contract
    ///
    /// As [`BoundedView::from_ptr_range`], and the range spans `N` elements.
    #[allow(unsafe_code)]
    #[track_caller]
    pub unsafe fn from_ptr_range_fixed(first: *const T, last: *const T) -> Self {
        // SAFETY: forwarded to the caller.
        unsafe { bind_ptr_range(first, last) }
    }

    #[inline]
    pub fn from_array_fixed(array: &'a [T; N]) -> Self {
        bind(Some(array.as_slice()))
    }

    /// Contract: `slice.len() == N`.
    #[track_caller]
    pub fn from_slice_fixed(slice: &'a [T]) -> Self {
        bind(Some(slice))
    }

    /// Contract: the storage holds exactly `N` elements.
    #[track_caller]
    pub fn from_storage_fixed<C>(storage: &'a C) -> Self
    where
        C: ContiguousStorage<Item = T> + ?Sized,
    {
        bind(Some(storage.as_contiguous()))
    }
}

impl<'a, T, E: Extent> BoundedView<'a, T, E> {
    /// Re-bind to another extent. Fixed-to-fixed of different lengths does
    /// not compile; dynamic-to-fixed is checked at runtime.
    #[track_caller]
    pub fn to_extent<F: Extent>(self) -> BoundedView<'a, T, F> {
        const {
            assert!(
                extent::extents_compatible(E::STATIC_LEN, F::STATIC_LEN),
                "incompatible fixed extents"
            )
        };
        bind(self.as_option())
    }

    #[inline]
    #[allow(unsafe_code)]
    fn as_option(&self) -> Option<&'a [T]> {
        let ptr = self.ptr?;
        // SAFETY: `ptr` and the stored length were taken from a `&'a [T]`
        // when the view was bound.
        Some(unsafe { slice::from_raw_parts(ptr.as_ptr(), E::load(self.len)) })
    }

    /// The viewed elements as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.as_option().unwrap_or(&[])
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        E::load(self.len)
    }

    /// `len() * size_of::<T>()`.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.len() * size_of::<T>()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Base address; null for a null-based view.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.map_or(ptr::null(), |ptr| ptr.as_ptr().cast_const())
    }

    /// The element at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// First element. Contract: the view is not empty.
    #[track_caller]
    pub fn front(&self) -> &'a T {
        match self.as_slice().first() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "front" }),
        }
    }

    /// Last element. Contract: the view is not empty.
    #[track_caller]
    pub fn back(&self) -> &'a T {
        match self.as_slice().last() {
            Some(item) => item,
            None => contracts::violated(ContractViolation::EmptyAccess { op: "back" }),
        }
    }

    /// Sub-view over `range`, keeping a null base null.
    #[inline]
    fn slice_to(&self, range: Range<usize>) -> BoundedView<'a, T> {
        bind(self.as_option().map(|storage| &storage[range]))
    }

    /// The leading `count` elements. Contract: `count <= len()`.
    #[track_caller]
    pub fn first(&self, count: usize) -> BoundedView<'a, T> {
        let range = contracts::enforce(bounds::leading(self.len(), count));
        self.slice_to(range)
    }

    /// The trailing `count` elements. Contract: `count <= len()`.
    #[track_caller]
    pub fn last(&self, count: usize) -> BoundedView<'a, T> {
        let range = contracts::enforce(bounds::trailing(self.len(), count));
        self.slice_to(range)
    }

    /// Elements `[offset, offset + count)`, or `[offset, len())` when `count`
    /// is [`DYNAMIC_EXTENT`].
    ///
    /// Contract: `offset <= len()` and `count <= len() - offset`.
    #[track_caller]
    pub fn subspan(&self, offset: usize, count: usize) -> BoundedView<'a, T> {
        let range = contracts::enforce(bounds::window(self.len(), offset, count));
        self.slice_to(range)
    }

    /// Elements `[offset, len())`. Contract: `offset <= len()`.
    #[track_caller]
    pub fn subspan_from(&self, offset: usize) -> BoundedView<'a, T> {
        self.subspan(offset, DYNAMIC_EXTENT)
    }

    /// The leading `N` elements as a fixed-extent view.
    ///
    /// Does not compile when `N` exceeds a fixed source extent.
    #[track_caller]
    pub fn first_fixed<const N: usize>(&self) -> BoundedView<'a, T, Fixed<N>> {
        const {
            assert!(
                extent::count_fits(E::STATIC_LEN, N),
                "count exceeds the fixed extent"
            )
        };
        bind(self.first(N).as_option())
    }

    /// The trailing `N` elements as a fixed-extent view.
    ///
    /// Does not compile when `N` exceeds a fixed source extent.
    #[track_caller]
    pub fn last_fixed<const N: usize>(&self) -> BoundedView<'a, T, Fixed<N>> {
        const {
            assert!(
                extent::count_fits(E::STATIC_LEN, N),
                "count exceeds the fixed extent"
            )
        };
        bind(self.last(N).as_option())
    }

    /// Elements `[OFFSET, OFFSET + COUNT)` as a fixed-extent view.
    ///
    /// Does not compile when the window falls outside a fixed source extent.
    #[track_caller]
    pub fn subspan_fixed<const OFFSET: usize, const COUNT: usize>(
        &self,
    ) -> BoundedView<'a, T, Fixed<COUNT>> {
        const {
            assert!(
                COUNT != DYNAMIC_EXTENT && extent::window_fits(E::STATIC_LEN, OFFSET, COUNT),
                "window exceeds the fixed extent"
            )
        };
        bind(self.subspan(OFFSET, COUNT).as_option())
    }

    /// Elements `[OFFSET, len())`.
    ///
    /// Does not compile when `OFFSET` exceeds a fixed source extent. The
    /// result is dynamic; re-bind with [`to_extent`](Self::to_extent) for a
    /// fixed one.
    #[track_caller]
    pub fn subspan_tail<const OFFSET: usize>(&self) -> BoundedView<'a, T> {
        const {
            assert!(
                extent::window_fits(E::STATIC_LEN, OFFSET, DYNAMIC_EXTENT),
                "offset exceeds the fixed extent"
            )
        };
        self.subspan_from(OFFSET)
    }

    /// Standard Rust iterator over the elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor<'a, T> {
        Cursor::new(self.as_option(), 0)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'a, T> {
        Cursor::new(self.as_option(), self.len())
    }

    /// Reverse cursor at the last element.
    pub fn rbegin(&self) -> RevCursor<'a, T> {
        RevCursor::new(self.end())
    }

    /// Reverse cursor one before the first element.
    pub fn rend(&self) -> RevCursor<'a, T> {
        RevCursor::new(self.begin())
    }
}

impl<T> Default for BoundedView<'_, T, Dynamic> {
    fn default() -> Self {
        BoundedView {
            ptr: None,
            len: 0,
            marker: PhantomData,
        }
    }
}

impl<T> Default for BoundedView<'_, T, Fixed<0>> {
    fn default() -> Self {
        BoundedView {
            ptr: None,
            len: (),
            marker: PhantomData,
        }
    }
}

impl<T, E: Extent> Clone for BoundedView<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: Extent> Copy for BoundedView<'_, T, E> {}

impl<T: fmt::Debug, E: Extent> fmt::Debug for BoundedView<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T, E: Extent> Index<usize> for BoundedView<'_, T, E> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let index = contracts::enforce(bounds::element(self.len(), index));
        &self.as_slice()[index]
    }
}

impl<'a, T, E: Extent> IntoIterator for BoundedView<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E: Extent> IntoIterator for &BoundedView<'a, T, E> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E: Extent> AsRef<[T]> for BoundedView<'_, T, E> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, const N: usize> From<BoundedView<'a, T, Fixed<N>>> for BoundedView<'a, T, Dynamic> {
    fn from(view: BoundedView<'a, T, Fixed<N>>) -> Self {
        view.to_extent()
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for BoundedView<'a, T, Fixed<N>> {
    fn from(array: &'a [T; N]) -> Self {
        BoundedView::from_array_fixed(array)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for BoundedView<'a, T, Dynamic> {
    fn from(array: &'a [T; N]) -> Self {
        BoundedView::from_array(array)
    }
}

impl<'a, T> From<&'a [T]> for BoundedView<'a, T, Dynamic> {
    fn from(slice: &'a [T]) -> Self {
        BoundedView::from_slice(slice)
    }
}

impl<'a, T> From<&'a Vec<T>> for BoundedView<'a, T, Dynamic> {
    fn from(vec: &'a Vec<T>) -> Self {
        BoundedView::from_slice(vec)
    }
}

impl<'a, T, E: Extent> From<BoundedViewMut<'a, T, E>> for BoundedView<'a, T, E> {
    fn from(view: BoundedViewMut<'a, T, E>) -> Self {
        view.into_view()
    }
}
