//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::panic::{self, AssertUnwindSafe};

/// Storage `[1, 2, ..., n]` used as the standard fixture.
pub fn sequence(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// Run `f` and return the panic message if it panicked.
///
/// The message is `Some` for both `panic!("literal")` and formatted panics.
/// Returns `None` when `f` completes normally.
pub fn panic_message<R>(f: impl FnOnce() -> R) -> Option<String> {
    let payload = panic::catch_unwind(AssertUnwindSafe(f)).err()?;
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .or_else(|| Some(String::from("<non-string panic payload>")))
}

/// `true` if `f` reported a contract violation through the default hook.
pub fn violates<R>(f: impl FnOnce() -> R) -> bool {
    panic_message(f).is_some_and(|message| message.starts_with("Contract violation: "))
}

/// Assert that `f` reports a contract violation whose message contains
/// `needle`.
#[track_caller]
pub fn assert_violation<R>(needle: &str, f: impl FnOnce() -> R) {
    match panic_message(f) {
        Some(message) => assert!(
            message.starts_with("Contract violation: ") && message.contains(needle),
            "expected contract violation containing {:?}, got {:?}",
            needle,
            message
        ),
        None => panic!("expected contract violation containing {:?}, got none", needle),
    }
}
