// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the two rover nodes.
//!
//! Both nodes share the debug USART and the I2C1 slave pins; the rest is node specific.

use stm32f7xx_hal::{
    gpio::{
        gpioa, gpiob, gpioc, gpiod, gpioe, Alternate, Analog, Floating, Input, OpenDrain, Output,
        PushPull,
    },
    pac,
    prelude::*,
};

/// Sensor node pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = SensorPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC);
/// ```
pub struct SensorPins {
    pub usart1: Usart1Pins,
    pub i2c1: I2c1Pins,
    pub analog: AnalogPins,
    pub lines: LinePins,
}

/// Motor node pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = MotorPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);
/// ```
pub struct MotorPins {
    pub usart1: Usart1Pins,
    pub i2c1: I2c1Pins,
    pub pwm: PwmPins,
    pub direction: DirectionPins,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// I2C1 bus to the host
pub struct I2c1Pins {
    pub scl: gpiob::PB8<Alternate<4, OpenDrain>>,
    pub sda: gpiob::PB9<Alternate<4, OpenDrain>>,
}

/// Analog sensor inputs
pub struct AnalogPins {
    pub ir_left: gpioa::PA0<Analog>,  // ADC1_IN0
    pub ir_right: gpioa::PA2<Analog>, // ADC1_IN2
    pub gyro: gpioa::PA4<Analog>,     // ADC1_IN4
    pub ir_front: gpioa::PA6<Analog>, // ADC1_IN6
}

/// Edge-triggered digital lines
pub struct LinePins {
    pub auto_toggle: gpioc::PC0<Input<Floating>>,  // EXTI0
    pub odometer: gpioc::PC1<Input<Floating>>,     // EXTI1
    pub start_toggle: gpioc::PC2<Input<Floating>>, // EXTI2
}

/// Motor PWM outputs
pub struct PwmPins {
    pub right: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub left: gpiod::PD13<Alternate<2>>,  // TIM4_CH2
}

/// Motor direction outputs, high = forward
pub struct DirectionPins {
    pub left: gpioe::PE0<Output<PushPull>>,
    pub right: gpioe::PE2<Output<PushPull>>,
}

impl SensorPins {
    pub fn new(gpioa: pac::GPIOA, gpiob: pac::GPIOB, gpioc: pac::GPIOC) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpioc = gpioc.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            i2c1: I2c1Pins {
                scl: gpiob.pb8.into_alternate_open_drain::<4>(),
                sda: gpiob.pb9.into_alternate_open_drain::<4>(),
            },

            analog: AnalogPins {
                ir_left: gpioa.pa0.into_analog(),
                ir_right: gpioa.pa2.into_analog(),
                gyro: gpioa.pa4.into_analog(),
                ir_front: gpioa.pa6.into_analog(),
            },

            lines: LinePins {
                auto_toggle: gpioc.pc0.into_floating_input(),
                odometer: gpioc.pc1.into_floating_input(),
                start_toggle: gpioc.pc2.into_floating_input(),
            },
        }
    }
}

impl MotorPins {
    pub fn new(
        gpioa: pac::GPIOA,
        gpiob: pac::GPIOB,
        gpiod: pac::GPIOD,
        gpioe: pac::GPIOE,
    ) -> Self {
        let gpioa = gpioa.split();
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            i2c1: I2c1Pins {
                scl: gpiob.pb8.into_alternate_open_drain::<4>(),
                sda: gpiob.pb9.into_alternate_open_drain::<4>(),
            },

            pwm: PwmPins {
                right: gpiod.pd12.into_alternate::<2>(),
                left: gpiod.pd13.into_alternate::<2>(),
            },

            direction: DirectionPins {
                left: gpioe.pe0.into_push_pull_output(),
                right: gpioe.pe2.into_push_pull_output(),
            },
        }
    }
}
