// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts and the process-wide failure hook.
//!
//! Every precondition in this crate is checked at call time. A failed check
//! never turns into an `Err` value: it builds a [`ContractViolation`] and hands
//! it to the installed [`FailureHook`], which does not return.
//!
//! # Failure hook
//!
//! | Hook           | Behavior                                         |
//! |----------------|--------------------------------------------------|
//! | [`panic_hook`] | log via `tracing`, then panic (default)          |
//! | [`abort_hook`] | log via `tracing`, then abort the process        |
//!
//! The default is [`panic_hook`] unless the `abort-on-violation` feature is
//! enabled. A program picks its own behavior once at startup:
//!
//! ```no_run
//! use spanguard::contracts::{abort_hook, set_failure_hook};
//!
//! set_failure_hook(abort_hook).expect("hook installed twice");
//! ```
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The hook is the only exit from a failed check. Code after a call to
//! [`violated`] is unreachable; nothing in the crate continues with a view
//! whose precondition failed.

use std::panic::Location;
use std::sync::OnceLock;

use thiserror::Error;

/// A detected precondition or postcondition failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A null base address was paired with a non-zero length.
    #[error("null base address with length {len}")]
    NullWithLength { len: usize },
    /// Storage length does not match the fixed extent it was bound to.
    #[error("fixed extent {expected} bound to storage of length {actual}")]
    ExtentMismatch { expected: usize, actual: usize },
    /// A pointer range ends before it starts, or has exactly one null end.
    #[error("pointer range end precedes its start")]
    InvertedRange,
    /// A pointer range does not span a whole number of elements.
    #[error("pointer range of {bytes} bytes is not a multiple of element size {elem_size}")]
    UnalignedRange { bytes: usize, elem_size: usize },
    /// The byte size of the view would exceed `isize::MAX`.
    #[error("{len} elements of {elem_size} bytes overflow isize::MAX")]
    SizeOverflow { len: usize, elem_size: usize },
    /// Element index outside `[0, len)`.
    #[error("index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Sub-view count larger than the elements available.
    #[error("count {count} out of range for view of length {len}")]
    CountOutOfRange { count: usize, len: usize },
    /// Sub-view offset past the end of the view.
    #[error("offset {offset} out of range for view of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
    /// `front`/`back` on an empty view.
    #[error("{op}() called on an empty view")]
    EmptyAccess { op: &'static str },
    /// Cursor moved or dereferenced outside its view.
    #[error("cursor position {position} out of range for view of length {len}")]
    CursorOutOfRange { position: isize, len: usize },
    /// Cursors from different views were compared or subtracted.
    #[error("cursors belong to different views")]
    IncomparableCursors,
    /// Copy destination shorter than its source.
    #[error("copy of {src} elements into a destination of {dst}")]
    DestinationTooSmall { src: usize, dst: usize },
    /// An `expects!` condition was false.
    #[error("precondition failed: {condition}")]
    Precondition { condition: &'static str },
    /// An `ensures!` condition was false.
    #[error("postcondition failed: {condition}")]
    Postcondition { condition: &'static str },
}

/// Handler invoked on every contract violation. It must not return.
pub type FailureHook = fn(&ContractViolation, &'static Location<'static>) -> !;

/// Returned by [`set_failure_hook`] when a hook is already installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("contract failure hook already installed")]
pub struct HookAlreadySet;

static FAILURE_HOOK: OnceLock<FailureHook> = OnceLock::new();

/// Install the process-wide failure hook.
///
/// Only the first call succeeds. Once any contract has failed with the default
/// hook, the default is locked in and this returns [`HookAlreadySet`].
pub fn set_failure_hook(hook: FailureHook) -> Result<(), HookAlreadySet> {
    FAILURE_HOOK.set(hook).map_err(|_| HookAlreadySet)?;
    tracing::debug!("installed custom contract failure hook");
    Ok(())
}

/// The hook currently in effect.
pub fn failure_hook() -> FailureHook {
    *FAILURE_HOOK.get_or_init(default_hook)
}

fn default_hook() -> FailureHook {
    if cfg!(feature = "abort-on-violation") {
        abort_hook as FailureHook
    } else {
        panic_hook as FailureHook
    }
}

/// Log the violation, then panic with a `"Contract violation: "` message.
pub fn panic_hook(violation: &ContractViolation, location: &'static Location<'static>) -> ! {
    tracing::error!(%violation, %location, "contract violation");
    panic!("Contract violation: {violation} at {location}");
}

/// Log the violation, then abort the process without unwinding.
pub fn abort_hook(violation: &ContractViolation, location: &'static Location<'static>) -> ! {
    tracing::error!(%violation, %location, "contract violation, aborting");
    eprintln!("Contract violation: {violation} at {location}");
    std::process::abort();
}

/// Report a violation through the installed hook.
#[cold]
#[inline(never)]
#[track_caller]
pub fn violated(violation: ContractViolation) -> ! {
    let location = Location::caller();
    // INVARIANT: the hook diverges, so no caller continues past a violation.
    (failure_hook())(&violation, location)
}

/// Report `violation` unless `ok` holds.
#[inline]
#[track_caller]
pub fn require(ok: bool, violation: impl FnOnce() -> ContractViolation) {
    if !ok {
        violated(violation());
    }
}

/// Unwrap a bounds computation, reporting its error as a violation.
#[inline]
#[track_caller]
pub fn enforce<T>(checked: Result<T, ContractViolation>) -> T {
    match checked {
        Ok(value) => value,
        Err(violation) => violated(violation),
    }
}

/// Check a precondition. A false condition is a
/// [`ContractViolation::Precondition`].
///
/// ```
/// use spanguard::expects;
///
/// fn checked_digit(i: u32) -> u32 {
///     expects!(i < 10);
///     i
/// }
///
/// assert_eq!(checked_digit(2), 2);
/// ```
#[macro_export]
macro_rules! expects {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::contracts::violated($crate::contracts::ContractViolation::Precondition {
                condition: ::core::stringify!($cond),
            });
        }
    };
}

/// Check a postcondition. A false condition is a
/// [`ContractViolation::Postcondition`].
#[macro_export]
macro_rules! ensures {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::contracts::violated($crate::contracts::ContractViolation::Postcondition {
                condition: ::core::stringify!($cond),
            });
        }
    };
}
