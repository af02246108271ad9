// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Rover Node Firmware
//!
//! This crate contains the firmware for the two bus-slave nodes of the rover, written in Rust,
//! targeting STM32F777 MCUs:
//!
//! - the **sensor node** samples four analog sensors, counts odometer pulses and serves the
//!   results to the host one byte at a time over I2C;
//! - the **motor node** receives one packed command byte per I2C write and drives the two motor
//!   sides through PWM and direction outputs.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Fixed addresses, timing and channel constants |
//! | [`critical`] | Interrupt-masked critical sections |
//! | [`telemetry`] | Register map, analog sampler, odometer pulse counter |
//! | [`protocol`] | Bus status decoding and the slave state machines for both nodes |
//! | [`control`] | Command byte decoding and motor output state |
//! | [`nodes`] | Owned per-node state with interrupt entry points and the poll loop |
//! | `hw` | MCU-level wrappers around ADC, I2C, TIM4, USART, EXTI (feature `firmware`) |
//! | `drivers` | Dual motor PWM driver (feature `firmware`) |
//!
//! Everything outside `hw` and `drivers` is hardware independent and is tested on the host.
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash a node:
//!
//! ```bash
//! cargo run --release --features firmware --bin sensor-node
//! cargo run --release --features firmware --bin motor-node
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod critical;
pub mod nodes;
pub mod protocol;
pub mod telemetry;

#[cfg(feature = "firmware")]
pub mod drivers;
#[cfg(feature = "firmware")]
pub mod hw;
