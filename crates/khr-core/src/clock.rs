// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Wall clock abstraction.
//!
//! Token creation times are local date-times without a zone, so the clock
//! hands out [`NaiveDateTime`] values in local time.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use parking_lot::Mutex;

/// Shared clock handle.
pub type SharedClock = Arc<dyn Clock>;

/// Source of the current local date-time.
pub trait Clock: Send + Sync {
    /// Returns the current local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// The system's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// Used to drive expiration and rotation deterministically.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Creates a clock frozen at the current local time, truncated to the
    /// second.
    pub fn starting_now() -> Self {
        let now = SystemClock.now();
        Self::new(now.with_nanosecond(0).unwrap_or(now))
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let delta = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        let mut now = self.now.lock();
        *now = now.checked_add_signed(delta).unwrap_or(NaiveDateTime::MAX);
    }

    /// Sets the clock to an absolute time.
    pub fn set(&self, to: NaiveDateTime) {
        *self.now.lock() = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}
