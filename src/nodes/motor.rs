// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor node.
//!
//! Everything happens in the bus interrupt: a received command byte is decoded and applied to the
//! outputs before the handler returns. The main loop only idles.
//!
//! Unrecognized bus events are printed to the diagnostic sink and otherwise ignored. The
//! peripheral is not reset, unlike on the sensor node.

use core::fmt::Write;

use crate::control::{Command, CommandDecoder, MotorOutput, MotorOutputs, Side};
use crate::protocol::{CommandSlave, Outcome, SlavePort, SlaveState};

pub struct MotorNode {
    bus: CommandSlave,
    decoder: CommandDecoder,
}

impl MotorNode {
    pub const fn new() -> Self {
        Self {
            bus: CommandSlave::new(),
            decoder: CommandDecoder::new(),
        }
    }

    /// Drive both motor sides to the neutral output. Call once before enabling the bus.
    pub fn init<O: MotorOutputs>(&mut self, outputs: &mut O) {
        self.decoder.init(outputs);
    }

    /// Bus event handler. Must run with interrupts masked.
    ///
    /// `diag` is written best-effort; a failed write is dropped.
    pub fn on_bus_event<P, O, D>(&mut self, port: &mut P, outputs: &mut O, diag: &mut D) -> Outcome
    where
        P: SlavePort,
        O: MotorOutputs,
        D: Write,
    {
        let outcome = self.bus.handle(port);
        match outcome {
            Outcome::Command(byte) => {
                self.decoder.apply(byte, outputs);
            }
            Outcome::Unrecognized(code) => {
                let _ = write!(diag, "error : 0x{:02x}\r\n", code);
            }
            Outcome::Handled(_) => {}
        }
        outcome
    }

    /// Last received command byte, decoded.
    #[inline]
    pub fn last_command(&self) -> Command {
        Command::decode(self.decoder.register())
    }

    #[inline]
    pub fn output(&self, side: Side) -> MotorOutput {
        self.decoder.output(side)
    }

    #[inline]
    pub fn bus_state(&self) -> SlaveState {
        self.bus.state()
    }

    /// Number of unrecognized bus events since power-on.
    #[inline]
    pub fn bus_errors(&self) -> u16 {
        self.bus.unrecognized()
    }
}

impl Default for MotorNode {
    fn default() -> Self {
        Self::new()
    }
}
