// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Bus Protocol
//!
//! Single-byte I2C slave protocol shared by both nodes.
//!
//! ## Modules
//!
//! - [`status`] - Slave status codes and the [`BusEvent`] they decode to.
//! - [`port`] - The [`SlavePort`] hardware seam and the [`SlaveState`] set.
//! - [`telemetry_slave`] - Sensor node slave: selector write, field read, reset on error.
//! - [`command_slave`] - Motor node slave: command write, errors only reported.

pub mod command_slave;
pub mod port;
pub mod status;
pub mod telemetry_slave;

pub use command_slave::{CommandSlave, Outcome};
pub use port::{SlavePort, SlaveState};
pub use status::BusEvent;
pub use telemetry_slave::TelemetrySlave;
