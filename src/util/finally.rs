//! Scope-exit actions.

/// Runs its closure exactly once, when dropped.
///
/// Moving a `FinalAction` moves the obligation with it; only the final owner
/// runs the closure. It is deliberately not `Clone`.
#[must_use = "the action runs immediately if the guard is not bound"]
pub struct FinalAction<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> FinalAction<F> {
    pub fn new(action: F) -> Self {
        FinalAction {
            action: Some(action),
        }
    }
}

impl<F: FnOnce()> Drop for FinalAction<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Run `action` when the returned guard goes out of scope.
///
/// ```
/// use std::cell::Cell;
/// use spanguard::finally;
///
/// let count = Cell::new(0);
/// {
///     let _guard = finally(|| count.set(count.get() + 1));
///     assert_eq!(count.get(), 0);
/// }
/// assert_eq!(count.get(), 1);
/// ```
pub fn finally<F: FnOnce()>(action: F) -> FinalAction<F> {
    FinalAction::new(action)
}

static_assertions::assert_not_impl_any!(FinalAction<fn()>: Clone, Copy);
