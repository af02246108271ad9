// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Cortex-M global interrupt mask.

use cortex_m::{interrupt, register::primask};

use crate::critical::InterruptMask;

/// PRIMASK-based [`InterruptMask`]. Zero-sized; pass `&CortexMask` wherever a mask is needed.
#[derive(Copy, Clone, Debug, Default)]
pub struct CortexMask;

impl InterruptMask for CortexMask {
    #[inline]
    fn mask(&self) -> bool {
        let was_enabled = primask::read().is_inactive();
        interrupt::disable();
        was_enabled
    }

    #[inline]
    fn unmask(&self) {
        unsafe { interrupt::enable() }
    }
}
