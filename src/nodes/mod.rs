// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Nodes
//!
//! One owned state struct per node, wiring the telemetry, protocol and control pieces to the
//! interrupt handlers and the main loop of each binary.
//!
//! ## Modules
//!
//! - [`sensor`] - [`SensorNode`]: ADC sampling, odometer, mode flags, telemetry slave.
//! - [`motor`] - [`MotorNode`]: command slave and motor outputs.

pub mod motor;
pub mod sensor;

pub use motor::MotorNode;
pub use sensor::SensorNode;
