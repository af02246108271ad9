// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bus slave status codes and the events they decode to.
//!
//! The codes follow the TWI slave status byte: the top five bits identify the event, the low three
//! bits are prescaler bits and are masked off before decoding.

/// Mask applied to the raw status byte.
pub const STATUS_MASK: u8 = 0xF8;

// Slave receiver
pub const SR_SLA_W_ACK: u8 = 0x60;
pub const SR_ARB_LOST_SLA_W_ACK: u8 = 0x68;
pub const SR_GCALL_ACK: u8 = 0x70;
pub const SR_ARB_LOST_GCALL_ACK: u8 = 0x78;
pub const SR_DATA_ACK: u8 = 0x80;
pub const SR_DATA_NACK: u8 = 0x88;
pub const SR_GCALL_DATA_ACK: u8 = 0x90;
pub const SR_GCALL_DATA_NACK: u8 = 0x98;
pub const SR_STOP: u8 = 0xA0;

// Slave transmitter
pub const ST_SLA_R_ACK: u8 = 0xA8;
pub const ST_ARB_LOST_SLA_R_ACK: u8 = 0xB0;
pub const ST_DATA_ACK: u8 = 0xB8;
pub const ST_DATA_NACK: u8 = 0xC0;
pub const ST_LAST_DATA_ACK: u8 = 0xC8;

// Misc
pub const BUS_ERROR: u8 = 0x00;
pub const NO_INFO: u8 = 0xF8;

/// One bus event, as seen by a slave.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BusEvent {
    /// Own address received with the write bit.
    AddressedForWrite,
    /// General-call address received.
    GeneralCall,
    /// Data byte received after being addressed. `ack` is the acknowledge we returned.
    DataReceived { ack: bool },
    /// Data byte received after a general call.
    GeneralCallData,
    /// Stop or repeated start while addressed.
    StopReceived,
    /// Own address received with the read bit; the next data byte must be loaded.
    AddressedForRead,
    /// Data byte transmitted. `ack` is what the master answered.
    ByteSent { ack: bool },
    /// Anything else, with the masked status code.
    Unrecognized(u8),
}

impl BusEvent {
    /// Decode a raw status byte.
    pub fn decode(status: u8) -> Self {
        match status & STATUS_MASK {
            SR_SLA_W_ACK | SR_ARB_LOST_SLA_W_ACK => BusEvent::AddressedForWrite,
            SR_GCALL_ACK | SR_ARB_LOST_GCALL_ACK => BusEvent::GeneralCall,
            SR_DATA_ACK => BusEvent::DataReceived { ack: true },
            SR_DATA_NACK => BusEvent::DataReceived { ack: false },
            SR_GCALL_DATA_ACK | SR_GCALL_DATA_NACK => BusEvent::GeneralCallData,
            SR_STOP => BusEvent::StopReceived,
            ST_SLA_R_ACK | ST_ARB_LOST_SLA_R_ACK => BusEvent::AddressedForRead,
            ST_DATA_ACK | ST_LAST_DATA_ACK => BusEvent::ByteSent { ack: true },
            ST_DATA_NACK => BusEvent::ByteSent { ack: false },
            other => BusEvent::Unrecognized(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescaler_bits_are_ignored() {
        assert_eq!(BusEvent::decode(0xA9), BusEvent::AddressedForRead);
        assert_eq!(BusEvent::decode(0x83), BusEvent::DataReceived { ack: true });
    }

    #[test]
    fn transmitter_codes() {
        assert_eq!(BusEvent::decode(ST_SLA_R_ACK), BusEvent::AddressedForRead);
        assert_eq!(BusEvent::decode(ST_DATA_ACK), BusEvent::ByteSent { ack: true });
        assert_eq!(BusEvent::decode(ST_LAST_DATA_ACK), BusEvent::ByteSent { ack: true });
        assert_eq!(BusEvent::decode(ST_DATA_NACK), BusEvent::ByteSent { ack: false });
    }

    #[test]
    fn receiver_codes() {
        assert_eq!(BusEvent::decode(SR_SLA_W_ACK), BusEvent::AddressedForWrite);
        assert_eq!(BusEvent::decode(SR_GCALL_ACK), BusEvent::GeneralCall);
        assert_eq!(BusEvent::decode(SR_DATA_NACK), BusEvent::DataReceived { ack: false });
        assert_eq!(BusEvent::decode(SR_GCALL_DATA_NACK), BusEvent::GeneralCallData);
        assert_eq!(BusEvent::decode(SR_STOP), BusEvent::StopReceived);
    }

    #[test]
    fn unknown_codes_keep_masked_value() {
        assert_eq!(BusEvent::decode(BUS_ERROR), BusEvent::Unrecognized(0x00));
        assert_eq!(BusEvent::decode(NO_INFO), BusEvent::Unrecognized(0xF8));
        assert_eq!(BusEvent::decode(0x08), BusEvent::Unrecognized(0x08));
    }
}
