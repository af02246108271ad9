// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven ADC1 using direct PAC register access.
//!
//! Each [`AdcTrigger::start`] selects one input and starts a single 12-bit conversion. The
//! result is not waited for here: end of conversion raises the `ADC` interrupt, whose handler
//! reads it back with [`Adc::result`].
//!
//! Example:
//! ```ignore
//! let mut adc = Adc::adc1(dp.ADC1);
//! adc.start(adc_input::GYRO);
//!
//! #[interrupt]
//! fn ADC() {
//!     let raw = Adc::<pac::ADC1>::result();
//! }
//! ```

use stm32f7xx_hal::pac;

use crate::telemetry::AdcTrigger;

/// Longest sample time, for the high-impedance IR sensor outputs.
const SAMPLE_TIME: u8 = 0b111;

pub struct Adc<ADC> {
    adc: ADC,
}

impl<ADC> Adc<ADC> {
    #[inline]
    pub fn free(self) -> ADC {
        self.adc
    }
}

impl Adc<pac::ADC1> {
    /// Enable and configure ADC1: 12-bit, right-aligned, software trigger, EOC interrupt.
    pub fn adc1(adc1: pac::ADC1) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        let common = unsafe { &*pac::ADC_COMMON::ptr() };
        // ADC prescaler: PCLK2 / 4
        common.ccr.modify(|_, w| w.adcpre().div4());

        let adc = adc1;

        // Power off to configure
        adc.cr2.modify(|_, w| w.adon().clear_bit());

        adc.cr1.modify(|_, w| w.res().bits(0b00).eocie().set_bit());
        adc.cr2.modify(|_, w| {
            w.cont().clear_bit();
            w.align().right();
            w.exten().disabled();
            w.eocs().set_bit();
            w
        });

        // Sequence length = 1 conversion
        adc.sqr1.modify(|_, w| w.l().bits(0));

        // Sample time for every sensor input
        adc.smpr2.modify(|_, w| {
            w.smp0().bits(SAMPLE_TIME);
            w.smp2().bits(SAMPLE_TIME);
            w.smp4().bits(SAMPLE_TIME);
            w.smp6().bits(SAMPLE_TIME);
            w
        });

        // Power on
        adc.cr2.modify(|_, w| w.adon().set_bit());

        Self { adc }
    }

    /// Result of the last conversion. Reading it clears EOC.
    ///
    /// Intended for the `ADC` interrupt handler, which does not own the peripheral.
    #[inline]
    pub fn result() -> u16 {
        let adc = unsafe { &*pac::ADC1::ptr() };
        adc.dr.read().data().bits()
    }
}

impl AdcTrigger for Adc<pac::ADC1> {
    fn start(&mut self, input: u8) {
        self.adc
            .sqr3
            .modify(|_, w| unsafe { w.sq1().bits(input & 0x1F) });
        self.adc.cr2.modify(|_, w| w.swstart().set_bit());
    }
}
