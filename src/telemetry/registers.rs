// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Telemetry register map of the sensor node.
//!
//! Eight one-byte fields, written by the sampler, the odometer snapshot and the mode-toggle
//! handlers, and read by the bus slave. Every field is a single atomic byte, so the bus reader can
//! never observe a torn field.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::{MODE_FLAG_POWER_ON, NO_DATA};

/// Number of fields in the map.
pub const FIELD_COUNT: usize = 8;

/// A named telemetry field. The discriminant is the selector the host writes to pick it.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    AutomaticDrive = 0,
    IrFront = 1,
    IrLeft = 2,
    IrRight = 3,
    OdometerHigh = 4,
    OdometerLow = 5,
    Gyro = 6,
    StartDrive = 7,
}

impl Field {
    /// All fields in selector order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::AutomaticDrive,
        Field::IrFront,
        Field::IrLeft,
        Field::IrRight,
        Field::OdometerHigh,
        Field::OdometerLow,
        Field::Gyro,
        Field::StartDrive,
    ];

    /// Field named by a selector byte, if any.
    #[inline]
    pub fn from_selector(selector: u8) -> Option<Field> {
        Self::ALL.get(selector as usize).copied()
    }

    #[inline]
    pub fn selector(self) -> u8 {
        self as u8
    }
}

/// The two host-visible mode flags toggled by edge interrupts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModeFlag {
    AutomaticDrive,
    StartDrive,
}

impl ModeFlag {
    #[inline]
    pub fn field(self) -> Field {
        match self {
            ModeFlag::AutomaticDrive => Field::AutomaticDrive,
            ModeFlag::StartDrive => Field::StartDrive,
        }
    }
}

/// Fixed set of telemetry bytes, shareable between handlers and the poll loop.
pub struct TelemetryMap {
    fields: [AtomicU8; FIELD_COUNT],
}

impl TelemetryMap {
    /// Power-on map: mode flags set, everything else zero.
    pub const fn new() -> Self {
        Self {
            fields: [
                AtomicU8::new(MODE_FLAG_POWER_ON), // automatic_drive
                AtomicU8::new(0),                  // ir_front
                AtomicU8::new(0),                  // ir_left
                AtomicU8::new(0),                  // ir_right
                AtomicU8::new(0),                  // odometer_high
                AtomicU8::new(0),                  // odometer_low
                AtomicU8::new(0),                  // gyro
                AtomicU8::new(MODE_FLAG_POWER_ON), // start_drive
            ],
        }
    }

    #[inline]
    pub fn read(&self, field: Field) -> u8 {
        self.fields[field as usize].load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write(&self, field: Field, value: u8) {
        self.fields[field as usize].store(value, Ordering::Relaxed);
    }

    /// Value returned to the host for `selector`: the selected field, or [`NO_DATA`].
    #[inline]
    pub fn select(&self, selector: u8) -> u8 {
        Field::from_selector(selector).map_or(NO_DATA, |f| self.read(f))
    }

    /// Flip a mode flag: `0` becomes `1`, any other value becomes `0`.
    ///
    /// The caller must hold a critical section; this is a read-modify-write.
    pub fn toggle(&self, flag: ModeFlag) -> u8 {
        let field = flag.field();
        let next = if self.read(field) == 0 { 1 } else { 0 };
        self.write(field, next);
        next
    }

    /// Copy of all fields in selector order.
    pub fn snapshot(&self) -> [u8; FIELD_COUNT] {
        let mut out = [0u8; FIELD_COUNT];
        for (slot, field) in out.iter_mut().zip(Field::ALL) {
            *slot = self.read(field);
        }
        out
    }
}

impl Default for TelemetryMap {
    fn default() -> Self {
        Self::new()
    }
}
