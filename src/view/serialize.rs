//! `serde` support. Views serialize as a sequence of their elements, the same
//! shape as the slice they borrow. There is no `Deserialize`: a view cannot
//! own what it would decode.

use serde::{Serialize, Serializer};

use super::{BoundedView, BoundedViewMut};
use crate::extent::Extent;

impl<T: Serialize, E: Extent> Serialize for BoundedView<'_, T, E> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.as_slice())
    }
}

impl<T: Serialize, E: Extent> Serialize for BoundedViewMut<'_, T, E> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.as_slice())
    }
}
