// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small helpers that sit next to the views.
//!
//! Checked element access on any storage, scope-exit actions, numeric
//! narrowing, and view-level copy. Everything here reports broken
//! preconditions through [`contracts`](crate::contracts) except [`narrow`],
//! whose failure is an ordinary `Result`.

mod access;
mod finally;
mod narrow;

pub use access::{at, at_mut, copy, make_view, make_view_mut, ssize};
pub use finally::{finally, FinalAction};
pub use narrow::{narrow, narrow_cast, NarrowingError};
