//! Where the footer gets "now" from.
//!
//! The year is read on every render through a [`ClockHandle`] placed in Leptos
//! context, so tests can pin it and a long-lived tab crossing New Year picks up
//! the change on the next render.

use std::sync::Arc;

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Local wall clock. In the browser chrono reads `Date` through `js-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Always reports the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Cloneable handle stored in context.
#[derive(Clone)]
pub struct ClockHandle(Arc<dyn Clock>);

impl ClockHandle {
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self(Arc::new(clock))
    }

    pub fn system() -> Self {
        Self::new(SystemClock)
    }

    pub fn fixed(year: i32) -> Self {
        Self::new(FixedClock(year))
    }

    pub fn current_year(&self) -> i32 {
        self.0.current_year()
    }
}

impl Default for ClockHandle {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for ClockHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ClockHandle")
            .field(&self.current_year())
            .finish()
    }
}
