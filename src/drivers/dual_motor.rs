// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Driver for the rover's two drive motors.
//!
//! Each side is one PWM channel for speed plus one GPIO for direction, driven open loop:
//! - Right: TIM4_CH1 (PD12), direction PE2
//! - Left: TIM4_CH2 (PD13), direction PE0
//!
//! A direction pin driven high means forward.

use stm32f7xx_hal::{
    gpio::{gpioe, Output, PushPull},
    pac,
};

use crate::control::{Direction, MotorOutputs, Side};
use crate::hw::pins::{DirectionPins, PwmPins};
use crate::hw::{Channel, PwmTimer};

pub struct DualMotor {
    pwm: PwmTimer<pac::TIM4>,
    dir_left: gpioe::PE0<Output<PushPull>>,
    dir_right: gpioe::PE2<Output<PushPull>>,
}

impl DualMotor {
    /// Take over TIM4 and the motor pins. Both sides start stopped.
    pub fn new(tim4: pac::TIM4, _pwm_pins: PwmPins, direction: DirectionPins) -> Self {
        Self {
            pwm: PwmTimer::tim4(tim4),
            dir_left: direction.left,
            dir_right: direction.right,
        }
    }

    #[inline]
    fn channel(side: Side) -> Channel {
        match side {
            Side::Right => Channel::Ch1,
            Side::Left => Channel::Ch2,
        }
    }

    /// Compare value currently programmed for `side`.
    #[inline]
    pub fn duty(&self, side: Side) -> u8 {
        self.pwm.duty(Self::channel(side))
    }
}

impl MotorOutputs for DualMotor {
    #[inline]
    fn set_duty(&mut self, side: Side, duty: u8) {
        self.pwm.set_duty(Self::channel(side), duty);
    }

    fn set_direction(&mut self, side: Side, direction: Direction) {
        match (side, direction) {
            (Side::Left, Direction::Forward) => self.dir_left.set_high(),
            (Side::Left, Direction::Backward) => self.dir_left.set_low(),
            (Side::Right, Direction::Forward) => self.dir_right.set_high(),
            (Side::Right, Direction::Backward) => self.dir_right.set_low(),
        }
    }
}
