//! Guards that run a closure when they leave scope.

// -----------------------------------------------------------------------------
// FinalAction

/// Runs `F` once when dropped, unless dismissed.
///
/// ```
/// use core::cell::Cell;
/// use gl_utils::finally;
///
/// let closed = Cell::new(false);
/// {
///     let _guard = finally(|| closed.set(true));
///     assert!(!closed.get());
/// }
/// assert!(closed.get());
/// ```
#[must_use = "the action runs as soon as the guard is dropped"]
pub struct FinalAction<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> FinalAction<F> {
    /// Creates a guard that runs `action` on drop.
    #[inline]
    pub const fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Drops the action without running it.
    #[inline]
    pub fn dismiss(&mut self) {
        self.action = None;
    }

    /// Returns `true` while the action is still due.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.action.is_some()
    }
}

impl<F: FnOnce()> Drop for FinalAction<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Runs `action` when the returned guard leaves scope.
#[inline]
pub const fn finally<F: FnOnce()>(action: F) -> FinalAction<F> {
    FinalAction::new(action)
}

// -----------------------------------------------------------------------------
// Unwind-aware guards

crate::cfg::std! {
    /// Which way out of the scope runs the action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Exit {
        Return,
        Unwind,
    }

    /// Runs `F` on drop when the scope is left on the matching path.
    ///
    /// A panic that was already unwinding at creation does not count.
    #[must_use = "the action runs as soon as the guard is dropped"]
    pub struct ExitAction<F: FnOnce()> {
        action: FinalAction<F>,
        on: Exit,
        panicking: bool,
    }

    impl<F: FnOnce()> ExitAction<F> {
        #[inline]
        fn new(action: F, on: Exit) -> Self {
            Self {
                action: FinalAction::new(action),
                on,
                panicking: std::thread::panicking(),
            }
        }

        /// Drops the action without running it.
        #[inline]
        pub fn dismiss(&mut self) {
            self.action.dismiss();
        }

        /// Returns `true` while the action is still due.
        #[inline]
        pub fn is_active(&self) -> bool {
            self.action.is_active()
        }
    }

    impl<F: FnOnce()> Drop for ExitAction<F> {
        fn drop(&mut self) {
            let unwinding = std::thread::panicking() && !self.panicking;
            let exit = if unwinding { Exit::Unwind } else { Exit::Return };
            if exit != self.on {
                self.action.dismiss();
            }
        }
    }

    /// Runs `action` when the scope is left normally.
    ///
    /// ```
    /// use core::cell::Cell;
    /// use gl_utils::on_return;
    ///
    /// let committed = Cell::new(false);
    /// {
    ///     let _guard = on_return(|| committed.set(true));
    /// }
    /// assert!(committed.get());
    /// ```
    #[inline]
    pub fn on_return<F: FnOnce()>(action: F) -> ExitAction<F> {
        ExitAction::new(action, Exit::Return)
    }

    /// Runs `action` when the scope is left by a panic.
    #[inline]
    pub fn on_error<F: FnOnce()>(action: F) -> ExitAction<F> {
        ExitAction::new(action, Exit::Unwind)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FinalAction, finally, on_error, on_return};
    use core::cell::Cell;
    use core::panic::AssertUnwindSafe;
    use std::panic::catch_unwind;

    #[test]
    fn finally_runs_once_on_drop() {
        let count = Cell::new(0);
        {
            let guard = finally(|| count.set(count.get() + 1));
            assert!(guard.is_active());
            assert_eq!(count.get(), 0);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn dismissed_action_never_runs() {
        let ran = Cell::new(false);
        {
            let mut guard = FinalAction::new(|| ran.set(true));
            guard.dismiss();
            assert!(!guard.is_active());
        }
        assert!(!ran.get());
    }

    #[test]
    fn finally_runs_while_unwinding() {
        let ran = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = finally(|| ran.set(true));
            panic!("leaving early");
        }));
        assert!(result.is_err());
        assert!(ran.get());
    }

    #[test]
    fn exit_guards_follow_the_exit_path() {
        let returned = Cell::new(false);
        let failed = Cell::new(false);
        {
            let _ok = on_return(|| returned.set(true));
            let _err = on_error(|| failed.set(true));
        }
        assert!(returned.get());
        assert!(!failed.get());

        returned.set(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ok = on_return(|| returned.set(true));
            let _err = on_error(|| failed.set(true));
            panic!("leaving early");
        }));
        assert!(result.is_err());
        assert!(!returned.get());
        assert!(failed.get());
    }

    #[test]
    fn dismissed_exit_guard_stays_silent() {
        let failed = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut guard = on_error(|| failed.set(true));
            guard.dismiss();
            assert!(!guard.is_active());
            panic!("leaving early");
        }));
        assert!(result.is_err());
        assert!(!failed.get());
    }

    #[test]
    fn unwind_in_progress_at_creation_counts_as_return() {
        struct OnUnwind<'a>(&'a Cell<bool>, &'a Cell<bool>);

        impl Drop for OnUnwind<'_> {
            fn drop(&mut self) {
                let _ok = on_return(|| self.0.set(true));
                let _err = on_error(|| self.1.set(true));
            }
        }

        let returned = Cell::new(false);
        let failed = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _cleanup = OnUnwind(&returned, &failed);
            panic!("leaving early");
        }));
        assert!(result.is_err());
        assert!(returned.get());
        assert!(!failed.get());
    }
}
