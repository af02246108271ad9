// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bus slave of the motor node.
//!
//! Write-only: every data byte received after our address is a motor command. Read addressing is
//! not served. Unlike the sensor node, an unrecognized event never resets the peripheral; it is
//! only reported to the caller.

use crate::protocol::port::{SlavePort, SlaveState};
use crate::protocol::status::{BusEvent, STATUS_MASK};

/// Result of handling one bus event.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Event acknowledged, nothing else to do.
    Handled(SlaveState),
    /// A command byte was received and acknowledged.
    Command(u8),
    /// Event not served. Carries the masked status code. Not acknowledged.
    Unrecognized(u8),
}

pub struct CommandSlave {
    state: SlaveState,
    unrecognized: u16,
}

impl CommandSlave {
    pub const fn new() -> Self {
        Self {
            state: SlaveState::Idle,
            unrecognized: 0,
        }
    }

    /// Handle the pending bus event.
    pub fn handle<P: SlavePort>(&mut self, port: &mut P) -> Outcome {
        let status = port.status();
        let outcome = match BusEvent::decode(status) {
            BusEvent::AddressedForWrite | BusEvent::GeneralCall => {
                port.acknowledge();
                Outcome::Handled(SlaveState::AddressedForWrite)
            }
            BusEvent::DataReceived { ack: true } => {
                let byte = port.read_data();
                port.acknowledge();
                Outcome::Command(byte)
            }
            BusEvent::DataReceived { ack: false } | BusEvent::GeneralCallData => {
                port.acknowledge();
                Outcome::Handled(SlaveState::DataReceived)
            }
            BusEvent::StopReceived => {
                port.acknowledge();
                Outcome::Handled(SlaveState::StopReceived)
            }
            // Read addressing included: this node has nothing to transmit.
            _ => Outcome::Unrecognized(status & STATUS_MASK),
        };

        match outcome {
            Outcome::Handled(state) => self.state = state,
            Outcome::Command(_) => self.state = SlaveState::DataReceived,
            Outcome::Unrecognized(_) => {
                self.unrecognized = self.unrecognized.wrapping_add(1);
            }
        }

        outcome
    }

    /// State after the last served event. Unrecognized events leave it untouched.
    #[inline]
    pub fn state(&self) -> SlaveState {
        self.state
    }

    /// Number of unrecognized events since power-on. Wraps.
    #[inline]
    pub fn unrecognized(&self) -> u16 {
        self.unrecognized
    }
}

impl Default for CommandSlave {
    fn default() -> Self {
        Self::new()
    }
}
