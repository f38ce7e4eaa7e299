//! Scoped UI state that must be released on every exit path.

use std::cell::Cell;

/// Calls `set(true)` on acquisition and `set(false)` when dropped.
pub struct BusyGuard<F: Fn(bool)> {
    set: F,
}

impl<F: Fn(bool)> BusyGuard<F> {
    pub fn acquire(set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: Fn(bool)> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// Marks a flag for the lifetime of the guard; refuses to enter twice.
pub struct ReentryGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ReentryGuard<'a> {
    pub fn try_enter(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            return None;
        }
        Some(Self { flag })
    }
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
