// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Packed motor command byte.
//!
//! ```text
//!  7      6      5..0
//! [side] [dir]  [magnitude]
//! ```
//!
//! - side: 0 = left motor, 1 = right motor
//! - dir: 0 = backward, 1 = forward
//! - magnitude: 0..=63, scaled by 4 into an 8-bit duty value (0..=252)

const SIDE_BIT: u8 = 1 << 7;
const DIR_BIT: u8 = 1 << 6;
const MAGNITUDE_MASK: u8 = 0x3F;

/// Scale from 6-bit magnitude to 8-bit duty.
pub const DUTY_SCALE: u8 = 4;

/// Motor side addressed by a command.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Drive direction of one motor side.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Direction {
    Backward,
    Forward,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Command {
    pub side: Side,
    pub direction: Direction,
    /// 6-bit magnitude.
    pub magnitude: u8,
}

impl Command {
    /// Build a command. Magnitude bits above bit 5 are dropped.
    pub fn new(side: Side, direction: Direction, magnitude: u8) -> Self {
        Self {
            side,
            direction,
            magnitude: magnitude & MAGNITUDE_MASK,
        }
    }

    /// Unpack a received command byte. Every byte is a valid command.
    pub fn decode(byte: u8) -> Self {
        let side = if byte & SIDE_BIT == 0 {
            Side::Left
        } else {
            Side::Right
        };
        let direction = if byte & DIR_BIT == 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };

        Self {
            side,
            direction,
            magnitude: byte & MAGNITUDE_MASK,
        }
    }

    /// Pack into the wire byte.
    pub fn encode(&self) -> u8 {
        let mut byte = self.magnitude & MAGNITUDE_MASK;
        if self.side == Side::Right {
            byte |= SIDE_BIT;
        }
        if self.direction == Direction::Forward {
            byte |= DIR_BIT;
        }
        byte
    }

    /// PWM duty value for this command.
    #[inline]
    pub fn duty(&self) -> u8 {
        (self.magnitude & MAGNITUDE_MASK) * DUTY_SCALE
    }
}
