// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven analog sampler.
//!
//! One conversion is in flight at a time. [`Sampler::start_conversion`] records the channel and
//! raises the busy flag before triggering the ADC; the conversion-complete handler stores the top
//! 8 bits into the channel's telemetry field and clears the flag. The poll loop spins on
//! [`Sampler::poll_complete`] in between. There is no timeout: a conversion that never completes
//! stalls the loop until the MCU is reset.

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::{adc_input, ADC_RESOLUTION_BITS};
use crate::telemetry::registers::{Field, TelemetryMap};

/// Trigger side of a single-conversion ADC. Completion is reported by the ADC interrupt.
pub trait AdcTrigger {
    /// Select `input` and start one conversion.
    fn start(&mut self, input: u8);
}

/// The four sampled sensors, in round-robin order.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AnalogChannel {
    IrLeft = 0,
    IrRight = 1,
    Gyro = 2,
    IrFront = 3,
}

impl AnalogChannel {
    /// Round-robin order driven by the poll loop.
    pub const ROUND_ROBIN: [AnalogChannel; 4] = [
        AnalogChannel::IrLeft,
        AnalogChannel::IrRight,
        AnalogChannel::Gyro,
        AnalogChannel::IrFront,
    ];

    #[inline]
    fn from_index(index: u8) -> Option<Self> {
        Self::ROUND_ROBIN.get(index as usize).copied()
    }

    /// Telemetry field the conversion result is stored in.
    #[inline]
    pub fn field(self) -> Field {
        match self {
            AnalogChannel::IrLeft => Field::IrLeft,
            AnalogChannel::IrRight => Field::IrRight,
            AnalogChannel::Gyro => Field::Gyro,
            AnalogChannel::IrFront => Field::IrFront,
        }
    }

    /// ADC input the sensor is wired to.
    #[inline]
    pub fn input(self) -> u8 {
        match self {
            AnalogChannel::IrLeft => adc_input::IR_LEFT,
            AnalogChannel::IrRight => adc_input::IR_RIGHT,
            AnalogChannel::Gyro => adc_input::GYRO,
            AnalogChannel::IrFront => adc_input::IR_FRONT,
        }
    }

    /// Channel following this one in round-robin order.
    #[inline]
    pub fn next(self) -> Self {
        Self::ROUND_ROBIN[(self as usize + 1) % Self::ROUND_ROBIN.len()]
    }
}

/// Reduce a raw conversion result to its 8 most-significant bits.
#[inline]
pub fn msb8(raw: u16) -> u8 {
    let mask = (1u32 << ADC_RESOLUTION_BITS) - 1;
    ((raw as u32 & mask) >> (ADC_RESOLUTION_BITS - 8)) as u8
}

/// Busy flag plus the channel that was active when the conversion was triggered.
pub struct Sampler {
    active: AtomicU8,
    busy: AtomicBool,
}

impl Sampler {
    pub const fn new() -> Self {
        Self {
            active: AtomicU8::new(AnalogChannel::IrLeft as u8),
            busy: AtomicBool::new(false),
        }
    }

    /// Start a conversion on `channel`.
    ///
    /// Returns `WouldBlock` while the previous conversion is still in flight.
    pub fn start_conversion<A: AdcTrigger>(
        &self,
        channel: AnalogChannel,
        adc: &mut A,
    ) -> nb::Result<(), Infallible> {
        if self.busy.load(Ordering::Acquire) {
            return Err(nb::Error::WouldBlock);
        }

        self.active.store(channel as u8, Ordering::Relaxed);
        self.busy.store(true, Ordering::Release);
        adc.start(channel.input());
        Ok(())
    }

    /// `Ok` once the in-flight conversion (if any) has completed.
    #[inline]
    pub fn poll_complete(&self) -> nb::Result<(), Infallible> {
        if self.busy.load(Ordering::Acquire) {
            Err(nb::Error::WouldBlock)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Conversion-complete handler body.
    ///
    /// Returns the channel that was updated, or `None` for a completion with nothing in flight,
    /// which is discarded.
    pub fn complete(&self, raw: u16, registers: &TelemetryMap) -> Option<AnalogChannel> {
        if !self.busy.load(Ordering::Acquire) {
            return None;
        }

        let channel = AnalogChannel::from_index(self.active.load(Ordering::Relaxed))?;
        registers.write(channel.field(), msb8(raw));
        self.busy.store(false, Ordering::Release);
        Some(channel)
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
