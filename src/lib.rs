//! Bounds-checked, non-owning views over contiguous storage.
//!
//! A [`BoundedView`] is a borrowed run of elements with either a compile-time
//! extent ([`Fixed<N>`]) or a runtime one ([`Dynamic`]). Every access is
//! checked; a failed check is a contract violation reported through a single
//! process-wide hook, never an out-of-bounds read.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  storage.rs │────▶│   view/      │────▶│  view/cursor.rs  │
//! │ (Contiguous │     │ (BoundedView,│     │ (Cursor,         │
//! │  Storage)   │     │  ...Mut)     │     │  RevCursor)      │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  extent.rs (Dynamic, Fixed<N>)  view/bounds.rs      │
//! │  contracts.rs (ContractViolation, failure hook)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Checks
//!
//! | Where            | What                                          |
//! |------------------|-----------------------------------------------|
//! | compile time     | fixed-to-fixed extents, fixed sub-view windows |
//! | construction     | null base, extent match, pointer range order   |
//! | every access     | index, count, offset, cursor position          |
//!
//! Checks are always on, in debug and release builds alike.
//!
//! # Usage
//!
//! ```
//! use spanguard::{make_view, BoundedView, Fixed};
//!
//! let storage = vec![1, 2, 3, 4, 5];
//! let view = make_view(&storage);
//!
//! assert_eq!(view.subspan(1, 3), [2, 3, 4]);
//! assert_eq!(*view.back(), 5);
//!
//! let head: BoundedView<'_, i32, Fixed<2>> = view.first_fixed::<2>();
//! assert_eq!(head, [1, 2]);
//! ```

pub mod byte;
pub mod contracts;
pub mod extent;
pub mod storage;
pub mod util;
mod view;

/// Test utilities (hidden from docs, used by integration tests)
#[doc(hidden)]
pub mod testing;

pub use byte::{to_byte, Byte};
pub use contracts::{set_failure_hook, ContractViolation, FailureHook, HookAlreadySet};
pub use extent::{Dynamic, Extent, Fixed, DYNAMIC_EXTENT};
pub use storage::{ContiguousStorage, ContiguousStorageMut};
pub use util::{
    at, at_mut, copy, finally, make_view, make_view_mut, narrow, narrow_cast, ssize,
    FinalAction, NarrowingError,
};
pub use view::{as_bytes, as_writable_bytes, BoundedView, BoundedViewMut, Cursor, RevCursor};
