// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Two-channel PWM on TIM4 using direct PAC register access.
//!
//! CH1 (PD12) and CH2 (PD13) run in PWM mode 1 with preloaded compare registers. Duty values are
//! 8-bit: the auto-reload is fixed at [`PWM_PERIOD`].

use stm32f7xx_hal::pac;

use crate::config::{PWM_PERIOD, PWM_PRESCALER};

/// PWM mode 1 with output-compare preload, for CH1 (low byte) and CH2 (high byte).
const CCMR1_PWM1_PRELOAD: u32 = 0x6868;

// CCER bits
const CC1E: u32 = 1 << 0;
const CC2E: u32 = 1 << 4;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Channel {
    Ch1,
    Ch2,
}

pub struct PwmTimer<TIM> {
    tim: TIM,
}

impl<TIM> PwmTimer<TIM> {
    #[inline]
    pub fn free(self) -> TIM {
        self.tim
    }
}

impl PwmTimer<pac::TIM4> {
    /// Configure TIM4 CH1/CH2 as PWM outputs, both starting at duty 0.
    pub fn tim4(tim4: pac::TIM4) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim4en().set_bit());

        let tim = tim4;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        tim.psc.write(|w| unsafe { w.bits(PWM_PRESCALER as u32) });
        tim.arr.write(|w| unsafe { w.bits(PWM_PERIOD as u32) });

        tim.ccr1.write(|w| unsafe { w.bits(0) });
        tim.ccr2.write(|w| unsafe { w.bits(0) });

        tim.ccmr1_output().write(|w| unsafe { w.bits(CCMR1_PWM1_PRELOAD) });
        tim.ccer.modify(|r, w| unsafe { w.bits(r.bits() | CC1E | CC2E) });

        // Load PSC/ARR/CCRx, then start with auto-reload preload
        tim.egr.write(|w| w.ug().set_bit());
        tim.cr1.modify(|_, w| w.arpe().set_bit().cen().set_bit());

        Self { tim }
    }

    /// Set the compare value of one channel. Takes effect at the next update event.
    #[inline]
    pub fn set_duty(&mut self, channel: Channel, duty: u8) {
        match channel {
            Channel::Ch1 => self.tim.ccr1.write(|w| unsafe { w.bits(duty as u32) }),
            Channel::Ch2 => self.tim.ccr2.write(|w| unsafe { w.bits(duty as u32) }),
        }
    }

    #[inline]
    pub fn duty(&self, channel: Channel) -> u8 {
        let raw = match channel {
            Channel::Ch1 => self.tim.ccr1.read().bits(),
            Channel::Ch2 => self.tim.ccr2.read().bits(),
        };
        raw as u8
    }
}
