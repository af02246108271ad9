// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hardware side of a bus slave, as seen from the state machines.

/// One bus slave peripheral. Each method is a direct register access and never blocks.
pub trait SlavePort {
    /// Raw status byte of the pending event.
    fn status(&mut self) -> u8;

    /// Last received data byte.
    fn read_data(&mut self) -> u8;

    /// Load the next byte to transmit.
    fn write_data(&mut self, byte: u8);

    /// Complete the pending event and keep acknowledging our address.
    fn acknowledge(&mut self);

    /// Drop the transaction and return the peripheral to the unaddressed state.
    fn reset(&mut self);
}

/// State of a slave after handling one event.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SlaveState {
    Idle = 0,
    AddressedForRead = 1,
    ByteSentAck = 2,
    ByteSentNack = 3,
    AddressedForWrite = 4,
    DataReceived = 5,
    StopReceived = 6,
    ErrorReset = 7,
}

impl SlaveState {
    pub(crate) fn from_u8(raw: u8) -> Self {
        match raw {
            1 => SlaveState::AddressedForRead,
            2 => SlaveState::ByteSentAck,
            3 => SlaveState::ByteSentNack,
            4 => SlaveState::AddressedForWrite,
            5 => SlaveState::DataReceived,
            6 => SlaveState::StopReceived,
            7 => SlaveState::ErrorReset,
            _ => SlaveState::Idle,
        }
    }
}
