// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-masked critical sections.
//!
//! Every field touched by both an interrupt handler and the poll loop is updated inside a
//! [`MaskGuard`]. The guard masks interrupts on construction and restores the previous mask state
//! when dropped, so guards nest: a guard taken inside a handler that already runs masked leaves
//! interrupts masked on exit.
//!
//! Example:
//! ```
//! # use rover_nodes::critical::{InterruptMask, MaskGuard};
//! # struct NoMask;
//! # impl InterruptMask for NoMask {
//! #     fn mask(&self) -> bool { false }
//! #     fn unmask(&self) {}
//! # }
//! # let mask = NoMask;
//! {
//!     let _guard = MaskGuard::new(&mask);
//!     // read-modify-write shared state here
//! }
//! ```

/// Control over the global interrupt enable of a single-core MCU.
pub trait InterruptMask {
    /// Mask all interrupts. Returns `true` if interrupts were enabled before the call.
    fn mask(&self) -> bool;

    /// Unmask all interrupts.
    fn unmask(&self);
}

/// Scoped critical section. Interrupts stay masked until the guard is dropped.
#[must_use = "interrupts are unmasked again as soon as the guard is dropped"]
pub struct MaskGuard<'a, M: InterruptMask + ?Sized> {
    mask: &'a M,
    was_enabled: bool,
}

impl<'a, M: InterruptMask + ?Sized> MaskGuard<'a, M> {
    /// Mask interrupts until the returned guard goes out of scope.
    #[inline]
    pub fn new(mask: &'a M) -> Self {
        let was_enabled = mask.mask();
        Self { mask, was_enabled }
    }
}

impl<M: InterruptMask + ?Sized> Drop for MaskGuard<'_, M> {
    #[inline]
    fn drop(&mut self) {
        if self.was_enabled {
            self.mask.unmask();
        }
    }
}

/// Run `f` with interrupts masked.
#[inline]
pub fn masked<M: InterruptMask + ?Sized, R>(mask: &M, f: impl FnOnce() -> R) -> R {
    let _guard = MaskGuard::new(mask);
    f()
}
