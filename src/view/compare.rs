// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content comparison for views.
//!
//! Views compare element-wise and lexicographically, like slices. Extent and
//! base address play no part: a fixed view equals a dynamic one over equal
//! elements, and two null views equal two empty ones.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use super::{BoundedView, BoundedViewMut};
use crate::extent::Extent;

impl<'a, 'b, T, U, E, F> PartialEq<BoundedView<'b, U, F>> for BoundedView<'a, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &BoundedView<'b, U, F>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, E: Extent> Eq for BoundedView<'_, T, E> {}

impl<T, U, E, const N: usize> PartialEq<[U; N]> for BoundedView<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, E> PartialEq<[U]> for BoundedView<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, E> PartialEq<&[U]> for BoundedView<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, E> PartialEq<Vec<U>> for BoundedView<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, 'b, T, E, F> PartialOrd<BoundedView<'b, T, F>> for BoundedView<'a, T, E>
where
    T: PartialOrd,
    E: Extent,
    F: Extent,
{
    fn partial_cmp(&self, other: &BoundedView<'b, T, F>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, E: Extent> Ord for BoundedView<'_, T, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, E: Extent> Hash for BoundedView<'_, T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, 'b, T, U, E, F> PartialEq<BoundedViewMut<'b, U, F>> for BoundedViewMut<'a, T, E>
where
    T: PartialEq<U>,
    E: Extent,
    F: Extent,
{
    fn eq(&self, other: &BoundedViewMut<'b, U, F>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, E: Extent> Eq for BoundedViewMut<'_, T, E> {}

impl<T, U, E, const N: usize> PartialEq<[U; N]> for BoundedViewMut<'_, T, E>
where
    T: PartialEq<U>,
    E: Extent,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}
