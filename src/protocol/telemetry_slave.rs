// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bus slave of the sensor node.
//!
//! A write transaction stores one selector byte; the next read transaction returns the telemetry
//! field it names. One field per transaction, no bursts. Any event outside that flow resets the
//! bus peripheral, which is the only recovery from a desynchronized master.
//!
//! The slave is driven entirely from the bus interrupt and never blocks or retries: each call to
//! [`TelemetrySlave::handle`] consumes exactly one event.

use core::sync::atomic::{AtomicU16, AtomicU8, Ordering};

use crate::config::SELECTOR_POWER_ON;
use crate::protocol::port::{SlavePort, SlaveState};
use crate::protocol::status::BusEvent;
use crate::telemetry::TelemetryMap;

pub struct TelemetrySlave {
    /// Selector written by the last write transaction. Not validated.
    selector: AtomicU8,
    state: AtomicU8,
    resets: AtomicU16,
}

impl TelemetrySlave {
    pub const fn new() -> Self {
        Self {
            selector: AtomicU8::new(SELECTOR_POWER_ON),
            state: AtomicU8::new(SlaveState::Idle as u8),
            resets: AtomicU16::new(0),
        }
    }

    /// Handle the pending bus event. Must run with interrupts masked.
    ///
    /// Returns the state that handled the event. After [`SlaveState::ErrorReset`] the stored
    /// state is already back to [`SlaveState::Idle`].
    pub fn handle<P: SlavePort>(&self, port: &mut P, registers: &TelemetryMap) -> SlaveState {
        let handled = match BusEvent::decode(port.status()) {
            BusEvent::AddressedForRead => {
                port.write_data(registers.select(self.selector()));
                port.acknowledge();
                SlaveState::AddressedForRead
            }
            BusEvent::ByteSent { ack } => {
                port.acknowledge();
                if ack {
                    SlaveState::ByteSentAck
                } else {
                    SlaveState::ByteSentNack
                }
            }
            BusEvent::AddressedForWrite => {
                port.acknowledge();
                SlaveState::AddressedForWrite
            }
            BusEvent::DataReceived { ack: true } => {
                self.selector.store(port.read_data(), Ordering::Relaxed);
                port.acknowledge();
                SlaveState::DataReceived
            }
            BusEvent::StopReceived => {
                port.acknowledge();
                SlaveState::StopReceived
            }
            _ => {
                port.reset();
                self.resets.fetch_add(1, Ordering::Relaxed);
                SlaveState::ErrorReset
            }
        };

        let stored = match handled {
            SlaveState::ErrorReset => SlaveState::Idle,
            other => other,
        };
        self.state.store(stored as u8, Ordering::Relaxed);

        handled
    }

    #[inline]
    pub fn state(&self) -> SlaveState {
        SlaveState::from_u8(self.state.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn selector(&self) -> u8 {
        self.selector.load(Ordering::Relaxed)
    }

    /// Number of bus resets issued since power-on. Wraps.
    #[inline]
    pub fn resets(&self) -> u16 {
        self.resets.load(Ordering::Relaxed)
    }
}

impl Default for TelemetrySlave {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NO_DATA;
    use crate::protocol::status::*;
    use crate::telemetry::Field;

    #[derive(Default)]
    struct ScriptedPort {
        status: u8,
        rx: u8,
        tx: Option<u8>,
        acks: u32,
        resets: u32,
    }

    impl SlavePort for ScriptedPort {
        fn status(&mut self) -> u8 {
            self.status
        }
        fn read_data(&mut self) -> u8 {
            self.rx
        }
        fn write_data(&mut self, byte: u8) {
            self.tx = Some(byte);
        }
        fn acknowledge(&mut self) {
            self.acks += 1;
        }
        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    fn event(slave: &TelemetrySlave, map: &TelemetryMap, port: &mut ScriptedPort, status: u8) {
        port.status = status;
        slave.handle(port, map);
    }

    fn write_selector(slave: &TelemetrySlave, map: &TelemetryMap, selector: u8) {
        let mut port = ScriptedPort {
            rx: selector,
            ..Default::default()
        };
        event(slave, map, &mut port, SR_SLA_W_ACK);
        event(slave, map, &mut port, SR_DATA_ACK);
        event(slave, map, &mut port, SR_STOP);
    }

    fn read_byte(slave: &TelemetrySlave, map: &TelemetryMap) -> u8 {
        let mut port = ScriptedPort::default();
        event(slave, map, &mut port, ST_SLA_R_ACK);
        let byte = port.tx.expect("nothing loaded for transmit");
        event(slave, map, &mut port, ST_DATA_NACK);
        event(slave, map, &mut port, SR_STOP);
        byte
    }

    #[test]
    fn read_before_any_selector_is_no_data() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        assert_eq!(read_byte(&slave, &map), NO_DATA);
    }

    #[test]
    fn selected_field_is_returned() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        map.write(Field::IrLeft, 0x5A);

        write_selector(&slave, &map, Field::IrLeft.selector());
        assert_eq!(read_byte(&slave, &map), 0x5A);
    }

    #[test]
    fn selector_persists_across_reads() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        write_selector(&slave, &map, Field::Gyro.selector());

        map.write(Field::Gyro, 1);
        assert_eq!(read_byte(&slave, &map), 1);
        map.write(Field::Gyro, 2);
        assert_eq!(read_byte(&slave, &map), 2);
    }

    #[test]
    fn out_of_range_selector_is_stored_and_reads_no_data() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        write_selector(&slave, &map, 0x20);
        assert_eq!(slave.selector(), 0x20);
        assert_eq!(read_byte(&slave, &map), NO_DATA);
    }

    #[test]
    fn every_served_event_is_acknowledged() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        let mut port = ScriptedPort::default();
        for status in [ST_SLA_R_ACK, ST_DATA_ACK, ST_DATA_NACK, SR_SLA_W_ACK, SR_DATA_ACK, SR_STOP] {
            event(&slave, &map, &mut port, status);
        }
        assert_eq!(port.acks, 6);
        assert_eq!(port.resets, 0);
    }

    #[test]
    fn states_follow_events() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        let mut port = ScriptedPort::default();
        assert_eq!(slave.state(), SlaveState::Idle);

        let cases = [
            (ST_SLA_R_ACK, SlaveState::AddressedForRead),
            (ST_DATA_ACK, SlaveState::ByteSentAck),
            (ST_DATA_NACK, SlaveState::ByteSentNack),
            (SR_SLA_W_ACK, SlaveState::AddressedForWrite),
            (SR_DATA_ACK, SlaveState::DataReceived),
            (SR_STOP, SlaveState::StopReceived),
        ];
        for (status, expected) in cases {
            port.status = status;
            assert_eq!(slave.handle(&mut port, &map), expected);
            assert_eq!(slave.state(), expected);
        }
    }

    #[test]
    fn unrecognized_status_resets_to_idle_from_any_state() {
        let map = TelemetryMap::new();
        let lead_ins = [ST_SLA_R_ACK, ST_DATA_ACK, ST_DATA_NACK, SR_SLA_W_ACK, SR_DATA_ACK, SR_STOP];
        let unknown = [BUS_ERROR, NO_INFO, SR_GCALL_ACK, SR_GCALL_DATA_ACK, SR_DATA_NACK, 0x08, 0x50];

        for lead in lead_ins {
            for bad in unknown {
                let slave = TelemetrySlave::new();
                let mut port = ScriptedPort::default();
                event(&slave, &map, &mut port, lead);

                port.status = bad;
                assert_eq!(slave.handle(&mut port, &map), SlaveState::ErrorReset);
                assert_eq!(slave.state(), SlaveState::Idle);
                assert_eq!(port.resets, 1);
                assert_eq!(slave.resets(), 1);
            }
        }
    }

    #[test]
    fn bus_recovers_after_reset() {
        let slave = TelemetrySlave::new();
        let map = TelemetryMap::new();
        map.write(Field::IrRight, 0x77);
        write_selector(&slave, &map, Field::IrRight.selector());

        let mut port = ScriptedPort::default();
        event(&slave, &map, &mut port, BUS_ERROR);

        assert_eq!(read_byte(&slave, &map), 0x77);
    }
}
