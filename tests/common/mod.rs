// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host mocks for the peripherals behind the node seams.

#![allow(dead_code)]

use std::cell::Cell;

use rover_nodes::control::{Direction, MotorOutputs, Side};
use rover_nodes::critical::InterruptMask;
use rover_nodes::nodes::SensorNode;
use rover_nodes::protocol::SlavePort;
use rover_nodes::telemetry::AdcTrigger;

// --- Interrupt mask ---

pub struct MockMask {
    enabled: Cell<bool>,
    entered: Cell<u32>,
}

impl MockMask {
    pub fn new() -> Self {
        Self {
            enabled: Cell::new(true),
            entered: Cell::new(0),
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn entered(&self) -> u32 {
        self.entered.get()
    }
}

impl InterruptMask for MockMask {
    fn mask(&self) -> bool {
        self.entered.set(self.entered.get() + 1);
        self.enabled.replace(false)
    }

    fn unmask(&self) {
        self.enabled.set(true);
    }
}

// --- Bus slave port ---

/// Scripted slave peripheral. Set `status` (and `rx` for received data), then run the handler.
#[derive(Default)]
pub struct MockPort {
    pub status: u8,
    pub rx: u8,
    pub tx: Vec<u8>,
    pub acks: u32,
    pub resets: u32,
}

impl MockPort {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlavePort for MockPort {
    fn status(&mut self) -> u8 {
        self.status
    }

    fn read_data(&mut self) -> u8 {
        self.rx
    }

    fn write_data(&mut self, byte: u8) {
        self.tx.push(byte);
    }

    fn acknowledge(&mut self) {
        self.acks += 1;
    }

    fn reset(&mut self) {
        self.resets += 1;
    }
}

// --- ADC ---

/// ADC whose conversion finishes the moment it is started: the completion handler runs
/// synchronously, like an interrupt preempting the poll loop right after the trigger.
pub struct InstantAdc<'a> {
    node: &'a SensorNode,
    mask: &'a MockMask,
    /// Raw 12-bit reading per ADC input.
    pub readings: [u16; 16],
    pub started: Vec<u8>,
}

impl<'a> InstantAdc<'a> {
    pub fn new(node: &'a SensorNode, mask: &'a MockMask) -> Self {
        Self {
            node,
            mask,
            readings: [0; 16],
            started: Vec::new(),
        }
    }
}

impl AdcTrigger for InstantAdc<'_> {
    fn start(&mut self, input: u8) {
        self.started.push(input);
        let raw = self.readings[input as usize];
        self.node.on_conversion_complete(raw, self.mask);
    }
}

// --- Motor outputs ---

#[derive(Default)]
pub struct MockOutputs {
    pub duty: [Option<u8>; 2],
    pub direction: [Option<Direction>; 2],
    pub writes: u32,
}

impl MockOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty(&self, side: Side) -> Option<u8> {
        self.duty[side.index()]
    }

    pub fn direction(&self, side: Side) -> Option<Direction> {
        self.direction[side.index()]
    }
}

impl MotorOutputs for MockOutputs {
    fn set_duty(&mut self, side: Side, duty: u8) {
        self.duty[side.index()] = Some(duty);
        self.writes += 1;
    }

    fn set_direction(&mut self, side: Side, direction: Direction) {
        self.direction[side.index()] = Some(direction);
        self.writes += 1;
    }
}
