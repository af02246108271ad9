// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed configuration shared by both nodes.
//!
//! The host addresses both nodes with these constants, so changing any of them is a wire-contract
//! change.

/// 7-bit bus address of the sensor (telemetry) node.
pub const TELEMETRY_ADDRESS: u8 = 0x24;

/// 7-bit bus address of the motor node.
pub const MOTOR_ADDRESS: u8 = 0x7F;

/// Response byte for a selector that does not name a telemetry field.
pub const NO_DATA: u8 = 0xFF;

/// Selector value before the host has written one.
pub const SELECTOR_POWER_ON: u8 = NO_DATA;

/// Power-on value of the automatic-drive and start-drive mode flags.
pub const MODE_FLAG_POWER_ON: u8 = 1;

/// ADC conversion resolution. Only the top 8 bits are kept.
pub const ADC_RESOLUTION_BITS: u32 = 12;

/// ADC1 inputs wired to the analog sensors.
pub mod adc_input {
    pub const IR_LEFT: u8 = 0; // PA0
    pub const IR_RIGHT: u8 = 2; // PA2
    pub const GYRO: u8 = 4; // PA4
    pub const IR_FRONT: u8 = 6; // PA6
}

/// Debounce window for the odometer line, in milliseconds.
pub const DEBOUNCE_MS: u32 = 1;

/// Core clock after reset (HSI). Clocks are never reconfigured on either node.
pub const SYSCLK_HZ: u32 = 16_000_000;

/// Busy-wait length of the debounce window in core cycles.
pub const DEBOUNCE_CYCLES: u32 = SYSCLK_HZ / 1_000 * DEBOUNCE_MS;

/// TIM4 prescaler for the motor PWM. 16 MHz / (3 + 1) / 256 ≈ 15.6 kHz.
pub const PWM_PRESCALER: u16 = 3;

/// TIM4 auto-reload value; duty values are 8-bit.
pub const PWM_PERIOD: u16 = 255;

/// I2C TIMINGR for 100 kHz standard mode from a 16 MHz kernel clock.
pub const I2C_TIMINGR: u32 = 0x0030_3D5B;

/// Debug terminal baud rate.
pub const DEBUG_BAUD: u32 = 115_200;
