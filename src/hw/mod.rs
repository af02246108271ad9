// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Hardware Layer
//!
//! Register-level wrappers around the STM32F7 peripherals used by the nodes.
//!
//! ## Modules
//!
//! - [`adc`] - ADC1 single conversions with end-of-conversion interrupt.
//! - [`i2c_slave`] - I2C1 slave port for the bus protocol.
//! - [`pwm`] - TIM4 two-channel PWM.
//! - [`usart`] - Debug terminal, blocking and best-effort.
//! - [`mask`] - PRIMASK interrupt mask.
//! - [`pins`] - Board pin maps for both nodes.

pub mod adc;
pub mod i2c_slave;
pub mod mask;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use adc::Adc;
pub use i2c_slave::I2cSlave;
pub use mask::CortexMask;
pub use pins::{MotorPins, SensorPins};
pub use pwm::{Channel, PwmTimer};
pub use usart::{BestEffort, Usart};
