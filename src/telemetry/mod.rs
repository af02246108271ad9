// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Sensor Node Telemetry
//!
//! State produced by the sensor node and served to the host.
//!
//! ## Modules
//!
//! - [`registers`] - The eight-byte telemetry register map and mode flags.
//! - [`sampler`] - Interrupt-driven round-robin ADC sampler.
//! - [`odometer`] - Debounced odometer pulse counter.

pub mod odometer;
pub mod registers;
pub mod sampler;

pub use odometer::PulseCounter;
pub use registers::{Field, ModeFlag, TelemetryMap};
pub use sampler::{AdcTrigger, AnalogChannel, Sampler};
