// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Motor Control
//!
//! Open-loop control of the two motor sides from packed command bytes.
//!
//! ## Modules
//!
//! - [`command`] - The packed `[side][dir][magnitude]` command byte.
//! - [`decoder`] - Command register and per-side motor output state.

pub mod command;
pub mod decoder;

pub use command::{Command, Direction, Side};
pub use decoder::{CommandDecoder, MotorOutput, MotorOutputs};
