// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sensor node.
//!
//! Owns the telemetry map and everything that writes it. A single `static SensorNode` is shared by
//! the poll loop and the interrupt handlers; every entry point takes `&self` and enters its own
//! critical section through the supplied [`InterruptMask`].
//!
//! Example:
//! ```ignore
//! static NODE: SensorNode = SensorNode::new();
//!
//! #[interrupt]
//! fn ADC() {
//!     NODE.on_conversion_complete(Adc::<pac::ADC1>::result(), &CortexMask);
//! }
//!
//! #[entry]
//! fn main() -> ! {
//!     NODE.run(&mut adc, &CortexMask)
//! }
//! ```

use nb::block;

use crate::critical::{masked, InterruptMask};
use crate::protocol::{SlavePort, SlaveState, TelemetrySlave};
use crate::telemetry::{AdcTrigger, AnalogChannel, ModeFlag, PulseCounter, Sampler, TelemetryMap};

pub struct SensorNode {
    registers: TelemetryMap,
    sampler: Sampler,
    odometer: PulseCounter,
    bus: TelemetrySlave,
}

impl SensorNode {
    pub const fn new() -> Self {
        Self {
            registers: TelemetryMap::new(),
            sampler: Sampler::new(),
            odometer: PulseCounter::new(),
            bus: TelemetrySlave::new(),
        }
    }

    // ----- Interrupt entry points -----

    /// ADC conversion-complete handler.
    pub fn on_conversion_complete<M: InterruptMask + ?Sized>(
        &self,
        raw: u16,
        mask: &M,
    ) -> Option<AnalogChannel> {
        masked(mask, || self.sampler.complete(raw, &self.registers))
    }

    /// Bus event handler.
    pub fn on_bus_event<P, M>(&self, port: &mut P, mask: &M) -> SlaveState
    where
        P: SlavePort,
        M: InterruptMask + ?Sized,
    {
        masked(mask, || self.bus.handle(port, &self.registers))
    }

    /// Odometer rising-edge handler. The debounce wait runs inside the critical section.
    pub fn on_pulse_edge<M, W, L>(&self, mask: &M, wait: W, still_high: L) -> bool
    where
        M: InterruptMask + ?Sized,
        W: FnOnce(),
        L: FnOnce() -> bool,
    {
        masked(mask, || self.odometer.on_rising_edge(wait, still_high))
    }

    /// Mode-toggle edge handler. Returns the new flag value.
    pub fn on_mode_toggle<M: InterruptMask + ?Sized>(&self, flag: ModeFlag, mask: &M) -> u8 {
        masked(mask, || self.registers.toggle(flag))
    }

    // ----- Poll loop -----

    /// Copy the pulse count into the two odometer fields as one consistent pair.
    pub fn snapshot_odometer<M: InterruptMask + ?Sized>(&self, mask: &M) {
        masked(mask, || self.odometer.snapshot_into(&self.registers));
    }

    /// One pass over all analog channels, then the odometer snapshot.
    ///
    /// Spins on each conversion. The ADC handler must be able to preempt this call.
    pub fn poll_cycle<A, M>(&self, adc: &mut A, mask: &M)
    where
        A: AdcTrigger,
        M: InterruptMask + ?Sized,
    {
        for channel in AnalogChannel::ROUND_ROBIN {
            let _ = block!(self.sampler.start_conversion(channel, adc));
            let _ = block!(self.sampler.poll_complete());
        }
        self.snapshot_odometer(mask);
    }

    /// Main loop body of the sensor node. Never returns.
    pub fn run<A, M>(&self, adc: &mut A, mask: &M) -> !
    where
        A: AdcTrigger,
        M: InterruptMask + ?Sized,
    {
        loop {
            self.poll_cycle(adc, mask);
        }
    }

    // ----- Diagnostics -----

    #[inline]
    pub fn registers(&self) -> &TelemetryMap {
        &self.registers
    }

    /// Live pulse count, ahead of the last snapshot.
    #[inline]
    pub fn odometer(&self) -> u16 {
        self.odometer.count()
    }

    #[inline]
    pub fn bus(&self) -> &TelemetrySlave {
        &self.bus
    }

    #[inline]
    pub fn is_sampling(&self) -> bool {
        self.sampler.is_busy()
    }
}

impl Default for SensorNode {
    fn default() -> Self {
        Self::new()
    }
}
