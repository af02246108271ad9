// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! I2C1 in slave mode, exposed to the protocol layer as a [`SlavePort`].
//!
//! The STM32F7 I2C peripheral reports events as a set of ISR flags instead of a single status
//! byte. [`I2cSlave::status`] folds the pending flags into the equivalent slave status code, one
//! event per call, so the state machines in [`crate::protocol`] stay peripheral-agnostic.
//!
//! | ISR flags        | Code   |
//! | ---------------- | ------ |
//! | BERR, ARLO, OVR  | `0x00` |
//! | ADDR, DIR = 1    | `0xA8` |
//! | ADDR, DIR = 0    | `0x60` |
//! | RXNE             | `0x80` |
//! | NACKF            | `0xC0` |
//! | STOPF            | `0xA0` |
//! | TXIS             | `0xB8` |
//! | none             | `0xF8` |
//!
//! Clock stretching stays enabled, so the master waits while a handler is running.

use stm32f7xx_hal::pac;

use crate::config::I2C_TIMINGR;
use crate::hw::pins::I2c1Pins;
use crate::protocol::status::{
    BUS_ERROR, NO_INFO, SR_DATA_ACK, SR_SLA_W_ACK, SR_STOP, ST_DATA_ACK, ST_DATA_NACK, ST_SLA_R_ACK,
};
use crate::protocol::SlavePort;

// ISR bits
const TXE: u32 = 1 << 0;
const TXIS: u32 = 1 << 1;
const RXNE: u32 = 1 << 2;
const ADDR: u32 = 1 << 3;
const NACKF: u32 = 1 << 4;
const STOPF: u32 = 1 << 5;
const BERR: u32 = 1 << 8;
const ARLO: u32 = 1 << 9;
const OVR: u32 = 1 << 10;
const DIR: u32 = 1 << 16;

// CR1 bits
const PE: u32 = 1 << 0;
const TXIE: u32 = 1 << 1;
const RXIE: u32 = 1 << 2;
const ADDRIE: u32 = 1 << 3;
const NACKIE: u32 = 1 << 4;
const STOPIE: u32 = 1 << 5;
const ERRIE: u32 = 1 << 7;

// OAR1 bits
const OA1EN: u32 = 1 << 15;

const CLEAR_ALL: u32 = ADDR | NACKF | STOPF | BERR | ARLO | OVR;

/// Byte clocked out when the master reads past the single field.
const PAD: u8 = 0xFF;

pub struct I2cSlave<I2C> {
    i2c: I2C,
    /// Code returned by the last [`SlavePort::status`] call.
    pending: u8,
}

impl<I2C> I2cSlave<I2C> {
    #[inline]
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl I2cSlave<pac::I2C1> {
    /// Configure I2C1 to answer at the 7-bit `address` with all slave interrupts enabled.
    pub fn i2c1(i2c1: pac::I2C1, _pins: I2c1Pins, address: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.i2c1en().set_bit());

        let i2c = i2c1;

        // Disable while configuring
        i2c.cr1.modify(|r, w| unsafe { w.bits(r.bits() & !PE) });

        i2c.timingr.write(|w| unsafe { w.bits(I2C_TIMINGR) });

        // 7-bit own address 1. OA1 only changes while OA1EN is clear
        i2c.oar1.write(|w| unsafe { w.bits(0) });
        i2c.oar1
            .write(|w| unsafe { w.bits(OA1EN | ((address as u32 & 0x7F) << 1)) });

        i2c.cr1.write(|w| unsafe {
            w.bits(TXIE | RXIE | ADDRIE | NACKIE | STOPIE | ERRIE | PE)
        });

        Self { i2c, pending: NO_INFO }
    }
}

impl SlavePort for I2cSlave<pac::I2C1> {
    fn status(&mut self) -> u8 {
        let isr = self.i2c.isr.read().bits();

        self.pending = if isr & (BERR | ARLO | OVR) != 0 {
            BUS_ERROR
        } else if isr & ADDR != 0 {
            if isr & DIR != 0 {
                ST_SLA_R_ACK
            } else {
                SR_SLA_W_ACK
            }
        } else if isr & RXNE != 0 {
            SR_DATA_ACK
        } else if isr & NACKF != 0 {
            ST_DATA_NACK
        } else if isr & STOPF != 0 {
            SR_STOP
        } else if isr & TXIS != 0 {
            ST_DATA_ACK
        } else {
            NO_INFO
        };

        self.pending
    }

    #[inline]
    fn read_data(&mut self) -> u8 {
        self.i2c.rxdr.read().bits() as u8
    }

    fn write_data(&mut self, byte: u8) {
        // Flush whatever a previous transaction left behind
        self.i2c.isr.write(|w| unsafe { w.bits(TXE) });
        self.i2c.txdr.write(|w| unsafe { w.bits(byte as u32) });
    }

    fn acknowledge(&mut self) {
        let clear = match self.pending {
            ST_SLA_R_ACK | SR_SLA_W_ACK => ADDR,
            ST_DATA_NACK => NACKF,
            SR_STOP => {
                self.i2c.isr.write(|w| unsafe { w.bits(TXE) });
                STOPF
            }
            ST_DATA_ACK => {
                // TXIS only clears on a TXDR write
                self.i2c.txdr.write(|w| unsafe { w.bits(PAD as u32) });
                0
            }
            // RXNE clears on the RXDR read
            _ => 0,
        };

        if clear != 0 {
            self.i2c.icr.write(|w| unsafe { w.bits(clear) });
        }
    }

    fn reset(&mut self) {
        self.i2c.cr1.modify(|r, w| unsafe { w.bits(r.bits() & !PE) });
        // PE must read back low before re-enabling
        while self.i2c.cr1.read().bits() & PE != 0 {}
        self.i2c.icr.write(|w| unsafe { w.bits(CLEAR_ALL) });
        self.i2c.cr1.modify(|r, w| unsafe { w.bits(r.bits() | PE) });
        self.pending = NO_INFO;
    }
}
