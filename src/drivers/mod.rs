// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! node logic.
//!
//! ## Existing drivers
//!
//! - [`dual_motor`] – Left/right drive motors on TIM4 PWM with direction GPIOs

pub mod dual_motor;

pub use dual_motor::DualMotor;
