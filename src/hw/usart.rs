// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART debug terminal.
//!
//! [`Usart`] blocks on every byte and is meant for the main thread (startup banner). Interrupt
//! handlers must not stall on the transmitter, so they print through [`BestEffort`], which drops
//! bytes while the transmit register is still busy.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    /// Write one byte if the transmitter is free.
    #[inline]
    pub fn try_write_byte(&mut self, b: u8) -> nb::Result<(), ()> {
        self.tx.write(b).map_err(|e| e.map(|_| ()))
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.write_str("\r\n");
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    pub fn print_hex_u8(&mut self, n: u8) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.write_str("0x");
        self.write_byte(HEX[((n >> 4) & 0xF) as usize]);
        self.write_byte(HEX[(n & 0xF) as usize]);
    }

    /// Non-blocking view for interrupt context.
    #[inline]
    pub fn best_effort(&mut self) -> BestEffort<'_, U> {
        BestEffort { usart: self }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}

/// Non-blocking writer. Bytes that find the transmitter busy are dropped.
pub struct BestEffort<'a, U: Instance> {
    usart: &'a mut Usart<U>,
}

impl<U: Instance> fmt::Write for BestEffort<'_, U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            let _ = self.usart.try_write_byte(b);
        }
        Ok(())
    }
}
