// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Odometer pulse counter.
//!
//! The edge handler waits out the debounce window and counts the pulse only if the line is still
//! high. The 16-bit count is split into the two odometer telemetry bytes by the poll loop inside a
//! critical section.
//!
//! The host reads the two bytes with two separate bus transactions, so a pulse counted between
//! those reads can still produce an inconsistent pair.

use core::sync::atomic::{AtomicU16, Ordering};

use crate::telemetry::registers::{Field, TelemetryMap};

pub struct PulseCounter {
    count: AtomicU16,
}

impl PulseCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU16::new(0),
        }
    }

    /// Rising-edge handler body. Must run with interrupts masked.
    ///
    /// `wait` blocks for the debounce window; `still_high` samples the line afterwards.
    /// Returns `true` if the pulse was counted.
    pub fn on_rising_edge<W, L>(&self, wait: W, still_high: L) -> bool
    where
        W: FnOnce(),
        L: FnOnce() -> bool,
    {
        wait();
        if !still_high() {
            return false;
        }
        self.count.fetch_add(1, Ordering::Relaxed);
        true
    }

    /// Current count. Wraps at `u16::MAX`.
    #[inline]
    pub fn count(&self) -> u16 {
        self.count.load(Ordering::Relaxed)
    }

    /// Copy the count into the odometer fields. Must run with interrupts masked.
    pub fn snapshot_into(&self, registers: &TelemetryMap) {
        let [high, low] = self.count().to_be_bytes();
        registers.write(Field::OdometerHigh, high);
        registers.write(Field::OdometerLow, low);
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new()
    }
}
