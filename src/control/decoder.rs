// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command decoder of the motor node.
//!
//! Holds the command register and the output state of both motor sides. Each received byte
//! overwrites the register and immediately reprograms the addressed side; the other side keeps
//! its previous output. There is no queue, so the newest command always wins.

use crate::control::command::{Command, Direction, Side};

/// Output stage driving the two motor sides. Open loop, no feedback.
pub trait MotorOutputs {
    /// Set the PWM duty of one side. Direct register write.
    fn set_duty(&mut self, side: Side, duty: u8);

    /// Set the direction output of one side, leaving the other untouched.
    fn set_direction(&mut self, side: Side, direction: Direction);
}

/// Last applied output of one motor side.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MotorOutput {
    pub direction: Direction,
    pub duty: u8,
}

impl MotorOutput {
    /// Stopped, direction forward.
    pub const NEUTRAL: Self = Self {
        direction: Direction::Forward,
        duty: 0,
    };
}

pub struct CommandDecoder {
    register: u8,
    outputs: [MotorOutput; 2],
}

impl CommandDecoder {
    pub const fn new() -> Self {
        Self {
            register: 0,
            outputs: [MotorOutput::NEUTRAL; 2],
        }
    }

    /// Drive both sides to the neutral output.
    pub fn init<O: MotorOutputs>(&mut self, out: &mut O) {
        for side in [Side::Left, Side::Right] {
            self.set_output(side, MotorOutput::NEUTRAL, out);
        }
    }

    /// Store `byte` as the command register, decode it and apply it.
    pub fn apply<O: MotorOutputs>(&mut self, byte: u8, out: &mut O) -> Command {
        self.register = byte;

        let cmd = Command::decode(byte);
        let output = MotorOutput {
            direction: cmd.direction,
            duty: cmd.duty(),
        };
        self.set_output(cmd.side, output, out);

        cmd
    }

    fn set_output<O: MotorOutputs>(&mut self, side: Side, output: MotorOutput, out: &mut O) {
        self.outputs[side.index()] = output;
        out.set_duty(side, output.duty);
        out.set_direction(side, output.direction);
    }

    /// Last received command byte.
    #[inline]
    pub fn register(&self) -> u8 {
        self.register
    }

    #[inline]
    pub fn output(&self, side: Side) -> MotorOutput {
        self.outputs[side.index()]
    }
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}
